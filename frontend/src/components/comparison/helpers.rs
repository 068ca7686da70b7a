//! Utility functions for the comparison page.
//!
//! - **User Feedback**: a blocking alert for rejected picks and a temporary
//!   toast for failed lookups.
//! - **Controls**: forcing a slot's `<select>` to a given value.
//! - **Formatting**: prices, ratings and attribute lists as shown on the
//!   vendor cards.

use common::model::vendor::VendorOption;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlSelectElement};
use yew::NodeRef;

/// Placeholder shown for attributes a vendor does not provide.
pub const MISSING: &str = "—";

/// Displays a temporary notification message at the bottom of the screen.
///
/// The message is inserted as text, never as markup, because it may come
/// straight from the server. The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Shows a modal alert. Returns once the user has dismissed it.
pub fn alert_blocking(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

pub fn set_select_value(node_ref: &NodeRef, value: &str) {
    if let Some(select) = node_ref.cast::<HtmlSelectElement>() {
        if select.value() != value {
            select.set_value(value);
        }
    }
}

pub fn duplicate_message(options: &[VendorOption], slug: &str, occupied_by: usize) -> String {
    format!(
        "{} is already selected in slot {}. Choose a different vendor.",
        option_label(options, slug),
        occupied_by + 1
    )
}

/// Business name for `slug`, or the slug itself when it is not listed.
pub fn option_label<'a>(options: &'a [VendorOption], slug: &'a str) -> &'a str {
    options
        .iter()
        .find(|option| option.slug == slug)
        .map_or(slug, |option| option.business_name.as_str())
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!(
            "From ${}",
            (price.round() as u64).to_formatted_string(&Locale::en)
        ),
        None => MISSING.to_string(),
    }
}

pub fn format_rating(rating: Option<f32>) -> String {
    match rating {
        Some(rating) => format!("{:.1} / 5", rating),
        None => "Not rated yet".to_string(),
    }
}

pub fn join_or_missing(values: &[String]) -> String {
    if values.is_empty() {
        MISSING.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<VendorOption> {
        vec![VendorOption {
            slug: "rose-hall".into(),
            business_name: "Rose Hall Estate".into(),
        }]
    }

    #[test]
    fn price_uses_thousands_separator() {
        assert_eq!(format_price(Some(12500.0)), "From $12,500");
        assert_eq!(format_price(Some(949.6)), "From $950");
        assert_eq!(format_price(None), MISSING);
    }

    #[test]
    fn rating_has_one_decimal() {
        assert_eq!(format_rating(Some(4.75)), "4.8 / 5");
        assert_eq!(format_rating(None), "Not rated yet");
    }

    #[test]
    fn lists_fall_back_to_placeholder() {
        assert_eq!(join_or_missing(&[]), MISSING);
        assert_eq!(
            join_or_missing(&["Wedding".into(), "Birthday".into()]),
            "Wedding, Birthday"
        );
    }

    #[test]
    fn duplicate_message_names_vendor_and_slot() {
        assert_eq!(
            duplicate_message(&options(), "rose-hall", 0),
            "Rose Hall Estate is already selected in slot 1. Choose a different vendor."
        );
        assert_eq!(option_label(&options(), "unlisted"), "unlisted");
    }
}
