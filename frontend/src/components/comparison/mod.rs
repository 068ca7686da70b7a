//! Vendor comparison page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! gateways and helpers.
//!
//! Responsibilities
//! - Host the `common::comparison` state machine inside a component.
//! - Delegate to `update::update` and `view::view`.
//! - After every render, put each slot's select control back in line with
//!   the slot it drives (a rejected or failed pick must not stay visible).

use yew::prelude::*;

mod gateway;
mod helpers;
mod listeners;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use gateway::{fetch_vendor_options, HttpGateway};
pub use helpers::show_toast;
pub use messages::Msg;
pub use props::ComparisonProps;
pub use state::ComparisonSelector;

impl Component for ComparisonSelector {
    type Message = Msg;
    type Properties = ComparisonProps;

    fn create(ctx: &Context<Self>) -> Self {
        ComparisonSelector::new(ctx)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.sync_controls();
    }
}
