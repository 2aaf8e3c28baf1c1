use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;

pub const DEFAULT_COUNTRY: &str = "Philippines";

/// The four levels below country, top-down. Ordering follows the hierarchy.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AddressLevel {
    Region,
    ProvinceOrCity,
    Municipality,
    Barangay,
}

impl AddressLevel {
    pub const ALL: [AddressLevel; 4] = [
        AddressLevel::Region,
        AddressLevel::ProvinceOrCity,
        AddressLevel::Municipality,
        AddressLevel::Barangay,
    ];

    /// Levels strictly below this one.
    pub fn below(self) -> impl Iterator<Item = AddressLevel> {
        Self::ALL.into_iter().filter(move |level| *level > self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AddressLevel::Region => "region",
            AddressLevel::ProvinceOrCity => "provinceOrCity",
            AddressLevel::Municipality => "municipality",
            AddressLevel::Barangay => "barangay",
        }
    }
}

impl fmt::Display for AddressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressLevel {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| AtlasError::UnknownLevel(s.to_string()))
    }
}

/// In-progress address being edited.
///
/// Every hierarchy field is plain text: either a name picked from the tree or
/// whatever the user typed. Membership is only checked by value at lookup time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressSelection {
    pub country: String,
    pub region: String,
    pub province_or_city: String,
    pub municipality: String,
    pub barangay: String,
    pub zip_code: String,
    pub street_line: String,
}

impl Default for AddressSelection {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            region: String::new(),
            province_or_city: String::new(),
            municipality: String::new(),
            barangay: String::new(),
            zip_code: String::new(),
            street_line: String::new(),
        }
    }
}

impl AddressSelection {
    pub fn field(&self, level: AddressLevel) -> &str {
        match level {
            AddressLevel::Region => &self.region,
            AddressLevel::ProvinceOrCity => &self.province_or_city,
            AddressLevel::Municipality => &self.municipality,
            AddressLevel::Barangay => &self.barangay,
        }
    }

    pub fn set_field(&mut self, level: AddressLevel, value: impl Into<String>) {
        let slot = match level {
            AddressLevel::Region => &mut self.region,
            AddressLevel::ProvinceOrCity => &mut self.province_or_city,
            AddressLevel::Municipality => &mut self.municipality,
            AddressLevel::Barangay => &mut self.barangay,
        };

        *slot = value.into();
    }
}
