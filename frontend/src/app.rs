//! Application root.
//!
//! Resolves everything the comparison page needs before it mounts: the list
//! of vendors offered in the select controls and the vendors named in the
//! `?vendors=` parameter of a shared link. The selector is only rendered once
//! both are known, so its slots can be seeded at creation.

use crate::components::comparison::{fetch_vendor_options, show_toast, ComparisonSelector, HttpGateway};
use common::comparison::{parse_comparison_query, VendorGateway};
use common::model::vendor::{VendorOption, VendorSummary};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

const DEFAULT_PATH: &str = "/compare";

pub enum Msg {
    OptionsLoaded(Vec<VendorOption>),
    SeedLoaded(Vec<VendorSummary>),
}

pub struct App {
    base_path: String,
    options: Option<Vec<VendorOption>>,
    seed: Option<Vec<VendorSummary>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let location = web_sys::window().map(|window| window.location());
        let search = location
            .as_ref()
            .and_then(|location| location.search().ok())
            .unwrap_or_default();
        let base_path = location
            .and_then(|location| location.pathname().ok())
            .filter(|path| path != "/")
            .unwrap_or_else(|| DEFAULT_PATH.to_string());

        let link = ctx.link().clone();
        spawn_local(async move {
            let options = fetch_vendor_options().await.unwrap_or_else(|e| {
                error!(format!("Could not load vendor options: {}", e));
                Vec::new()
            });
            link.send_message(Msg::OptionsLoaded(options));
        });

        let slugs = parse_comparison_query(&search);
        if slugs.is_empty() {
            ctx.link().send_message(Msg::SeedLoaded(Vec::new()));
        } else {
            let link = ctx.link().clone();
            spawn_local(async move {
                let seed = match HttpGateway.fetch_vendors_by_slugs(&slugs).await {
                    Ok(response) if response.success => response.data.unwrap_or_default(),
                    Ok(response) => {
                        if let Some(message) = response.error {
                            show_toast(&message);
                        }
                        Vec::new()
                    }
                    Err(e) => {
                        error!(format!("Could not restore compared vendors {:?}: {}", slugs, e));
                        Vec::new()
                    }
                };
                link.send_message(Msg::SeedLoaded(seed));
            });
        }

        Self {
            base_path,
            options: None,
            seed: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OptionsLoaded(options) => self.options = Some(options),
            Msg::SeedLoaded(seed) => self.seed = Some(seed),
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match (&self.options, &self.seed) {
            (Some(options), Some(seed)) => html! {
                <ComparisonSelector
                    options={options.clone()}
                    initial_vendors={seed.clone()}
                    base_path={self.base_path.clone()}
                />
            },
            _ => html! {
                <div class="compare-root">
                    <p class="slot-placeholder">{"Loading vendors…"}</p>
                </div>
            },
        }
    }
}
