//! Read-only vendor catalog backing the vendor and gallery endpoints.
//!
//! The catalog is a JSON document loaded once at start-up:
//!
//! ```json
//! {
//!   "vendors": [ { "id": "...", "slug": "...", "businessName": "..." } ],
//!   "galleries": { "<vendor id>": [ { "id": "...", "url": "..." } ] }
//! }
//! ```
//!
//! Nothing is ever written back; the server only answers lookups.

use common::model::gallery::GalleryItem;
use common::model::vendor::{VendorOption, VendorSummary};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct VendorCatalog {
    #[serde(default)]
    vendors: Vec<VendorSummary>,
    #[serde(default)]
    galleries: HashMap<String, Vec<GalleryItem>>,
}

impl VendorCatalog {
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// Vendors matching `slugs`, in request order. Unknown slugs are skipped.
    pub fn by_slugs(&self, slugs: &[String]) -> Vec<VendorSummary> {
        slugs
            .iter()
            .filter_map(|slug| self.vendors.iter().find(|vendor| &vendor.slug == slug))
            .cloned()
            .collect()
    }

    pub fn contains_id(&self, vendor_id: &str) -> bool {
        self.vendors.iter().any(|vendor| vendor.id == vendor_id)
    }

    /// Media of a vendor, empty when the catalog lists none.
    pub fn gallery(&self, vendor_id: &str) -> &[GalleryItem] {
        self.galleries
            .get(vendor_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Select-box entries sorted by business name.
    pub fn options(&self) -> Vec<VendorOption> {
        let mut options: Vec<VendorOption> =
            self.vendors.iter().map(VendorSummary::option).collect();
        options.sort_by(|a, b| {
            a.business_name
                .to_lowercase()
                .cmp(&b.business_name.to_lowercase())
        });
        options
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    pub(crate) const SAMPLE: &str = r#"{
        "vendors": [
            { "id": "v1", "slug": "rose-hall", "businessName": "Rose Hall" },
            { "id": "v2", "slug": "blue-lens", "businessName": "blue Lens Studio" }
        ],
        "galleries": {
            "v1": [ { "id": "g1", "url": "https://cdn.example.com/g1.jpg" } ]
        }
    }"#;

    pub(crate) fn sample() -> VendorCatalog {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[actix_web::test]
    async fn loads_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = VendorCatalog::load(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.gallery("v1").len(), 1);
    }

    #[actix_web::test]
    async fn reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = VendorCatalog::load(file.path()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[actix_web::test]
    async fn missing_file_is_an_io_error() {
        let err = VendorCatalog::load(Path::new("/nonexistent/vendors.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn by_slugs_keeps_request_order_and_skips_unknown() {
        let catalog = sample();
        let found = catalog.by_slugs(&["blue-lens".into(), "nope".into(), "rose-hall".into()]);
        let slugs: Vec<&str> = found.iter().map(|v| v.slug.as_str()).collect();
        assert_eq!(slugs, ["blue-lens", "rose-hall"]);
    }

    #[test]
    fn options_are_sorted_case_insensitively() {
        let names: Vec<String> = sample()
            .options()
            .into_iter()
            .map(|o| o.business_name)
            .collect();
        assert_eq!(names, ["blue Lens Studio", "Rose Hall"]);
    }
}
