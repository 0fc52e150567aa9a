//! Searchable list of selectable locations.
//!
//! Entries are `"District, State"` strings, the format the location picker
//! shows. Selecting one turns it into a [`LocationPreference`].

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::records::LocationPreference;

const BUNDLED_LOCATIONS: &str = include_str!("../data/locations.json");

/// Split a `"District, State"` entry into a location.
///
/// Returns `None` unless the entry has exactly two non-empty parts.
#[must_use]
pub fn parse_location(entry: &str) -> Option<LocationPreference> {
    let mut parts = entry.split(", ");
    let subregion = parts.next()?.trim();
    let region = parts.next()?.trim();
    if parts.next().is_some() || subregion.is_empty() || region.is_empty() {
        return None;
    }
    Some(LocationPreference::new(region, subregion))
}

/// Locations sharing one region, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionGroup<'a> {
    pub region: String,
    pub entries: Vec<&'a str>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationCatalog {
    entries: Vec<String>,
}

impl LocationCatalog {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw` is not an array of strings.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self::new)
    }

    /// The location list shipped with the crate.
    #[must_use]
    pub fn bundled() -> Self {
        // Checked by `bundled_catalog_parses`.
        Self::from_json(BUNDLED_LOCATIONS).unwrap_or_default()
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries containing `query`, ignoring case. An empty query matches all.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .map(String::as_str)
            .filter(move |entry| entry.to_lowercase().contains(&needle))
    }

    /// Matches for `query` grouped by region, groups in first-seen order.
    #[must_use]
    pub fn grouped(&self, query: &str) -> Vec<RegionGroup<'_>> {
        let mut groups: Vec<RegionGroup<'_>> = Vec::new();
        for entry in self.search(query) {
            let Some(location) = parse_location(entry) else {
                continue;
            };
            match groups.iter_mut().find(|g| g.region == location.region) {
                Some(group) => group.entries.push(entry),
                None => groups.push(RegionGroup { region: location.region, entries: vec![entry] }),
            }
        }
        groups
    }
}
