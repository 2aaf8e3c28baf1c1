//! Walk of a raw division export into the ordered tree.
//!
//! Raw exports are hand-maintained, so every node is checked: anything that is not the
//! expected shape is skipped and counted instead of failing the whole run.
use atlas::tree::{Municipalities, Provinces};
use indexmap::map::Entry;
use serde_json::{Map, Value};
use tracing::warn;

use crate::utils::sanitize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub regions: usize,
    pub provinces: usize,
    pub municipalities: usize,
    pub barangays: usize,
    pub skipped: usize,
}

pub fn as_object<'a>(value: &'a Value, path: &str, totals: &mut Totals) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            warn!("Skipping {path}: expected an object, found {}", kind(other));
            totals.skipped += 1;
            None
        }
    }
}

/// Merges one raw region into `provinces`, which may already hold a region with the same clean name.
pub fn merge_region(
    provinces: &mut Provinces,
    region: &str,
    raw: &Map<String, Value>,
    totals: &mut Totals,
) {
    for (raw_name, raw_municipalities) in raw {
        let Some(name) = clean(raw_name, region, totals) else {
            continue;
        };

        let path = format!("{region} > {name}");
        let Some(raw_municipalities) = as_object(raw_municipalities, &path, totals) else {
            continue;
        };

        let municipalities = match provinces.entry(name) {
            Entry::Vacant(entry) => {
                totals.provinces += 1;
                entry.insert(Municipalities::new())
            }
            Entry::Occupied(entry) => entry.into_mut(),
        };

        merge_municipalities(municipalities, &path, raw_municipalities, totals);
    }
}

fn merge_municipalities(
    municipalities: &mut Municipalities,
    province_path: &str,
    raw: &Map<String, Value>,
    totals: &mut Totals,
) {
    for (raw_name, raw_barangays) in raw {
        let Some(name) = clean(raw_name, province_path, totals) else {
            continue;
        };

        let path = format!("{province_path} > {name}");
        let Value::Array(raw_barangays) = raw_barangays else {
            warn!("Skipping {path}: expected a list, found {}", kind(raw_barangays));
            totals.skipped += 1;
            continue;
        };

        let barangays = match municipalities.entry(name) {
            Entry::Vacant(entry) => {
                totals.municipalities += 1;
                entry.insert(Vec::new())
            }
            Entry::Occupied(entry) => entry.into_mut(),
        };

        for raw_barangay in raw_barangays {
            let Value::String(raw_barangay) = raw_barangay else {
                warn!("Skipping barangay under {path}: found {}", kind(raw_barangay));
                totals.skipped += 1;
                continue;
            };

            let Some(barangay) = clean(raw_barangay, &path, totals) else {
                continue;
            };

            if !barangays.contains(&barangay) {
                barangays.push(barangay);
                totals.barangays += 1;
            }
        }
    }
}

pub fn clean(raw: &str, parent: &str, totals: &mut Totals) -> Option<String> {
    let name = sanitize(raw);

    if name.is_empty() {
        warn!("Skipping empty name under {parent}");
        totals.skipped += 1;
        return None;
    }

    Some(name)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
