use serde::{Deserialize, Serialize};

/// Highest rating a vendor can display.
pub const MAX_RATING: f32 = 5.0;

/// Location of a vendor. Both parts are optional in the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Renders `"City, Country"`, or whichever half is present.
    pub fn display(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Snapshot of a vendor's public attributes, pulled once for comparison.
///
/// It is not a live reference: a slot replaces it wholesale when the user
/// picks again, and drops it when the slot is cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSummary {
    pub id: String,
    pub slug: String,
    pub business_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub starting_price: Option<f64>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub is_sponsored: bool,
    #[serde(default)]
    pub is_recommended: bool,
}

impl VendorSummary {
    /// Rating clamped to `0..=5`; `None` when absent or not a number.
    pub fn display_rating(&self) -> Option<f32> {
        self.rating
            .filter(|rating| !rating.is_nan())
            .map(|rating| rating.clamp(0.0, MAX_RATING))
    }

    /// Starting price, ignoring negative or non-finite amounts.
    pub fn display_price(&self) -> Option<f64> {
        self.starting_price
            .filter(|price| price.is_finite() && *price >= 0.0)
    }

    pub fn option(&self) -> VendorOption {
        VendorOption {
            slug: self.slug.clone(),
            business_name: self.business_name.clone(),
        }
    }
}

/// Entry of the per-slot select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorOption {
    pub slug: String,
    pub business_name: String,
}
