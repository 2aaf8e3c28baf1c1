//! # Administrative Divisions
//!
//! Static Region > Province > Municipality > Barangay tree backing the address selectors.
//!
//! ## Layout
//! - Nested ordered maps, source order kept at every level (no sorting anywhere)
//! - Barangays are a plain ordered list under their municipality
//! - Loaded once at startup, never mutated afterwards, shared behind an `Arc`
//!
//! ## Wire Format
//! ```json
//! { "Region VI": { "Iloilo": { "Oton": ["Abilay Norte", "Abilay Sur"] } } }
//! ```
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type Municipalities = IndexMap<String, Vec<String>>;
pub type Provinces = IndexMap<String, Municipalities>;
pub type Regions = IndexMap<String, Provinces>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AdministrativeDivisionTree {
    regions: Regions,
}

impl AdministrativeDivisionTree {
    pub fn new(regions: Regions) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    pub fn provinces(&self, region: &str) -> Option<&Provinces> {
        self.regions.get(region)
    }

    pub fn municipalities(&self, region: &str, province: &str) -> Option<&Municipalities> {
        self.provinces(region)?.get(province)
    }

    pub fn barangays(&self, region: &str, province: &str, municipality: &str) -> Option<&[String]> {
        self.municipalities(region, province)?
            .get(municipality)
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn barangay_count(&self) -> usize {
        self.regions
            .values()
            .flat_map(IndexMap::values)
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }
}

impl From<Regions> for AdministrativeDivisionTree {
    fn from(regions: Regions) -> Self {
        Self::new(regions)
    }
}
