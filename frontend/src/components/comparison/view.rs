//! View rendering for the comparison page.
//!
//! Three columns, one per slot. Each column has its select control on top,
//! then either a placeholder, a loading indicator or the vendor card with its
//! gallery strip.

use common::comparison::{SlotState, SLOT_COUNT};
use common::model::gallery::GalleryItem;
use common::model::vendor::VendorSummary;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{format_price, format_rating, join_or_missing, MISSING};
use super::messages::Msg;
use super::state::ComparisonSelector;

pub fn view(component: &ComparisonSelector, ctx: &Context<ComparisonSelector>) -> Html {
    html! {
        <div class="compare-root">
            <h1>{"Compare vendors"}</h1>
            <div class="compare-grid">
                { for (0..SLOT_COUNT).map(|index| build_column(component, ctx, index)) }
            </div>
        </div>
    }
}

fn build_column(
    component: &ComparisonSelector,
    ctx: &Context<ComparisonSelector>,
    index: usize,
) -> Html {
    let Some(slot) = component.controller.store().slot(index) else {
        return html! {};
    };

    let body = match slot.state() {
        SlotState::Empty => html! {
            <p class="slot-placeholder">{"No vendor selected"}</p>
        },
        SlotState::Loading => html! {
            <p class="slot-placeholder">{"Loading vendor…"}</p>
        },
        SlotState::Error(message) => html! {
            <p class="slot-placeholder">{message.clone()}</p>
        },
        SlotState::Populated(vendor) => html! {
            <>
                { vendor_card(vendor) }
                {
                    gallery_strip(
                        component.galleries.gallery(index),
                        component.galleries.is_loading(index),
                    )
                }
            </>
        },
    };

    html! {
        <div class="slot-column">
            { build_select(component, ctx, index) }
            { body }
        </div>
    }
}

fn build_select(
    component: &ComparisonSelector,
    ctx: &Context<ComparisonSelector>,
    index: usize,
) -> Html {
    let current = component.controller.control_value(index);
    let link: &Scope<ComparisonSelector> = ctx.link();

    html! {
        <select
            ref={component.select_refs[index].clone()}
            onchange={link.callback(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::Select { index, value: select.value() }
            })}
        >
            <option value="" selected={current.is_empty()}>{"Select a vendor"}</option>
            {
                for ctx.props().options.iter().map(|option| html! {
                    <option value={option.slug.clone()} selected={option.slug == current}>
                        { option.business_name.clone() }
                    </option>
                })
            }
        </select>
    }
}

fn vendor_card(vendor: &VendorSummary) -> Html {
    let location = vendor
        .address
        .as_ref()
        .and_then(|address| address.display())
        .unwrap_or_else(|| MISSING.to_string());

    html! {
        <div class="vendor-card">
            {
                match &vendor.logo_url {
                    Some(url) => html! {
                        <img class="vendor-logo" src={url.clone()} alt={vendor.business_name.clone()} />
                    },
                    None => html! {},
                }
            }
            <h2>{ vendor.business_name.clone() }</h2>
            <div>
                if vendor.is_sponsored {
                    <span class="badge">{"Sponsored"}</span>
                }
                if vendor.is_recommended {
                    <span class="badge">{"Recommended"}</span>
                }
            </div>
            <dl class="vendor-facts">
                <dt>{"Rating"}</dt>
                <dd>{ format_rating(vendor.display_rating()) }</dd>
                <dt>{"Starting price"}</dt>
                <dd>{ format_price(vendor.display_price()) }</dd>
                <dt>{"Location"}</dt>
                <dd>{ location }</dd>
                <dt>{"Categories"}</dt>
                <dd>{ join_or_missing(&vendor.categories) }</dd>
                <dt>{"Specialities"}</dt>
                <dd>{ join_or_missing(&vendor.subcategories) }</dd>
                <dt>{"Occasions"}</dt>
                <dd>{ join_or_missing(&vendor.occasions) }</dd>
            </dl>
        </div>
    }
}

fn gallery_strip(items: &[GalleryItem], loading: bool) -> Html {
    if items.is_empty() {
        return if loading {
            html! { <p class="slot-placeholder">{"Loading gallery…"}</p> }
        } else {
            html! {}
        };
    }

    html! {
        <div class="gallery">
            {
                for items.iter().map(|item| html! {
                    <img
                        key={item.id.clone()}
                        src={item.url.clone()}
                        alt={item.title.clone().unwrap_or_default()}
                    />
                })
            }
        </div>
    }
}
