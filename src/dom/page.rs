//! Page-level region lookup.

use std::collections::HashMap;

use super::region::Region;

/// Default id of the title region.
pub const TITLE_REGION_ID: &str = "content-title";
/// Default id of the content region.
pub const CONTENT_REGION_ID: &str = "content";

/// The set of display regions the viewer may write into, keyed by id.
///
/// The page is injected into the controller rather than looked up from a
/// global document, so tests can build one with only the regions they need.
#[derive(Debug, Clone, Default)]
pub struct Page {
    regions: HashMap<String, Region>,
}

impl Page {
    /// Create a page with no regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page with the standard title and content regions.
    pub fn standard() -> Self {
        let mut page = Self::new();
        page.insert(TITLE_REGION_ID, Region::new());
        page.insert(CONTENT_REGION_ID, Region::new());
        page
    }

    /// Add or replace a region. Returns the region handle for convenience.
    pub fn insert(&mut self, id: impl Into<String>, region: Region) -> Region {
        self.regions.insert(id.into(), region.clone());
        region
    }

    /// Look up a region by id.
    pub fn region(&self, id: &str) -> Option<Region> {
        self.regions.get(id).cloned()
    }

    /// Remove a region, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<Region> {
        self.regions.remove(id)
    }
}
