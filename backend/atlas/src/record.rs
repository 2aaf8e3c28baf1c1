use serde::{Deserialize, Deserializer, Serialize};

use crate::selection::{AddressSelection, DEFAULT_COUNTRY};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    Permanent,
    Present,
}

/// Flat save payload sent to the address record backend.
///
/// Older saved records may leave text fields out or send them as null, those read back as empty
/// (country as the default country) so an edit view can still be pre-populated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    #[serde(default = "default_country", deserialize_with = "country_or_default")]
    pub country: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub region: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub province_or_city: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub municipality: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub barangay: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub zip_code: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub street_line: String,
    pub address_type: AddressType,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn country_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_country))
}

/// Saved address as returned by the record backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub id: String,

    #[serde(flatten)]
    pub payload: AddressPayload,
}

impl AddressSelection {
    pub fn to_payload(&self, address_type: AddressType) -> AddressPayload {
        AddressPayload {
            country: self.country.clone(),
            region: self.region.clone(),
            province_or_city: self.province_or_city.clone(),
            municipality: self.municipality.clone(),
            barangay: self.barangay.clone(),
            zip_code: self.zip_code.clone(),
            street_line: self.street_line.clone(),
            address_type,
        }
    }
}

impl From<&AddressPayload> for AddressSelection {
    fn from(payload: &AddressPayload) -> Self {
        Self {
            country: payload.country.clone(),
            region: payload.region.clone(),
            province_or_city: payload.province_or_city.clone(),
            municipality: payload.municipality.clone(),
            barangay: payload.barangay.clone(),
            zip_code: payload.zip_code.clone(),
            street_line: payload.street_line.clone(),
        }
    }
}
