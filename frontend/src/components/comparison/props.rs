//! Defines the properties for the `ComparisonSelector`.

use common::model::vendor::{VendorOption, VendorSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ComparisonProps {
    /// Vendors offered in every slot's select control.
    #[prop_or_default]
    pub options: Vec<VendorOption>,

    /// Vendors to show at mount, in slot order. Only the first three valid
    /// entries are used; this is read once when the component is created.
    #[prop_or_default]
    pub initial_vendors: Vec<VendorSummary>,

    /// Path the shareable URL is built on, e.g. `/compare`.
    #[prop_or(AttrValue::from("/compare"))]
    pub base_path: AttrValue,
}
