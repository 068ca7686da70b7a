//! Update function for the comparison page.
//!
//! Elm-style: receives the component, the `Context` and a `Msg`, applies it
//! to the selection controller and returns whether the view must re-render.
//!
//! Key behaviors
//! - A pick is validated by the controller. Duplicates are reported with a
//!   blocking alert and the control is reverted; otherwise the slot loads and
//!   the lookup runs in the background.
//! - Lookup results are applied through the controller, which drops results
//!   overtaken by a newer pick. Failures are reported with a toast.
//! - Any slot change refreshes the three galleries in one joined batch.

use common::comparison::{fetch_selection, load_galleries, Completion, Selection};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::gateway::HttpGateway;
use super::helpers::{alert_blocking, duplicate_message, show_toast};
use super::messages::Msg;
use super::state::ComparisonSelector;

pub fn update(
    component: &mut ComparisonSelector,
    ctx: &Context<ComparisonSelector>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Select { index, value } => {
            match component.controller.select(index, Some(value.as_str())) {
                Ok(Selection::Cleared { .. }) => true,
                Ok(Selection::Rejected {
                    index,
                    slug,
                    occupied_by,
                    control,
                }) => {
                    alert_blocking(&duplicate_message(
                        &ctx.props().options,
                        &slug,
                        occupied_by,
                    ));
                    component.set_control(index, &control);
                    false
                }
                Ok(Selection::Fetch(ticket)) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let outcome = fetch_selection(&HttpGateway, &ticket).await;
                        link.send_message(Msg::VendorFetched { ticket, outcome });
                    });
                    true
                }
                Err(err) => {
                    error!(err.to_string());
                    false
                }
            }
        }
        Msg::VendorFetched { ticket, outcome } => {
            match component.controller.complete(&ticket, outcome) {
                Ok(Completion::Populated { .. }) => true,
                // The emptied slot clears its control on the next render.
                Ok(Completion::Failed { message, .. }) => {
                    show_toast(&message);
                    true
                }
                Ok(Completion::Stale { .. }) => false,
                Err(err) => {
                    error!(err.to_string());
                    false
                }
            }
        }
        Msg::RefreshGalleries => {
            let request = component
                .galleries
                .begin(component.controller.store().slots());
            let link = ctx.link().clone();
            spawn_local(async move {
                let galleries = load_galleries(&HttpGateway, &request.targets).await;
                link.send_message(Msg::GalleriesLoaded {
                    generation: request.generation,
                    galleries,
                });
            });
            true
        }
        Msg::GalleriesLoaded {
            generation,
            galleries,
        } => component.galleries.finish(generation, galleries),
    }
}
