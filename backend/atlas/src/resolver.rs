//! # Address Resolver
//!
//! Option lists for each address selector and the cascade applied when a selector changes.
//!
//! ## Lookups
//! - Each list is the children of the exact ancestor chain, in source order
//! - An unknown ancestor (not picked yet, or typed by hand) gives an empty list, never an error
//! - Free text stays possible at every level, an empty list only means nothing to suggest
//!
//! ## Cascade
//! - Changing a level clears every level below it, even if the old value would still be valid
//! - Country, zip code and street line are never touched
use serde::Serialize;
use tracing::debug;

use crate::{
    selection::{AddressLevel, AddressSelection},
    tree::AdministrativeDivisionTree,
};

/// All four option lists for one render of the address form.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressOptions<'a> {
    pub regions: Vec<&'a str>,
    pub provinces: Vec<&'a str>,
    pub municipalities: Vec<&'a str>,
    pub barangays: Vec<&'a str>,
}

pub fn list_regions(tree: &AdministrativeDivisionTree) -> Vec<&str> {
    tree.regions().keys().map(String::as_str).collect()
}

pub fn list_provinces<'a>(tree: &'a AdministrativeDivisionTree, region: &str) -> Vec<&'a str> {
    tree.provinces(region)
        .map(|provinces| provinces.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

pub fn list_municipalities<'a>(
    tree: &'a AdministrativeDivisionTree,
    region: &str,
    province: &str,
) -> Vec<&'a str> {
    tree.municipalities(region, province)
        .map(|municipalities| municipalities.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

pub fn list_barangays<'a>(
    tree: &'a AdministrativeDivisionTree,
    region: &str,
    province: &str,
    municipality: &str,
) -> Vec<&'a str> {
    tree.barangays(region, province, municipality)
        .map(|barangays| barangays.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

pub fn resolve_options<'a>(
    tree: &'a AdministrativeDivisionTree,
    selection: &AddressSelection,
) -> AddressOptions<'a> {
    let AddressSelection {
        region,
        province_or_city,
        municipality,
        ..
    } = selection;

    AddressOptions {
        regions: list_regions(tree),
        provinces: list_provinces(tree, region),
        municipalities: list_municipalities(tree, region, province_or_city),
        barangays: list_barangays(tree, region, province_or_city, municipality),
    }
}

pub fn apply_field_change(
    selection: &AddressSelection,
    level: AddressLevel,
    new_value: impl Into<String>,
) -> AddressSelection {
    let mut next = selection.clone();
    next.set_field(level, new_value);

    for lower in level.below() {
        #[cfg(feature = "verbose")]
        debug!("Clearing {lower} after {level} changed");

        next.set_field(lower, String::new());
    }

    debug!("Applied {level} change: {}", next.field(level));
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdministrativeDivisionTree {
        serde_json::from_str(
            r#"{
                "Region VI": {
                    "Iloilo": { "Oton": ["Abilay Norte", "Abilay Sur"], "Tigbauan": ["Bitas"] },
                    "Antique": { "San Jose": ["Atabay"] }
                },
                "Region VII": { "Cebu": { "Oton": ["Elsewhere"] } }
            }"#,
        )
        .unwrap()
    }

    fn full_selection() -> AddressSelection {
        AddressSelection {
            region: "Region VI".to_string(),
            province_or_city: "Iloilo".to_string(),
            municipality: "Oton".to_string(),
            barangay: "Abilay Sur".to_string(),
            zip_code: "5020".to_string(),
            street_line: "12 Rizal St".to_string(),
            ..AddressSelection::default()
        }
    }

    #[test]
    fn test_regions_in_source_order() {
        assert_eq!(list_regions(&sample()), ["Region VI", "Region VII"]);
        assert!(list_regions(&AdministrativeDivisionTree::default()).is_empty());
    }

    #[test]
    fn test_listing_is_repeatable() {
        let tree = sample();

        assert_eq!(list_provinces(&tree, "Region VI"), list_provinces(&tree, "Region VI"));
        assert_eq!(list_provinces(&tree, "Region VI"), ["Iloilo", "Antique"]);
    }

    #[test]
    fn test_unknown_region() {
        let tree = sample();

        assert!(list_provinces(&tree, "MyOwnRegion").is_empty());
        assert!(list_provinces(&tree, "").is_empty());
        assert!(list_provinces(&tree, "region vi").is_empty());
        assert!(list_municipalities(&tree, "MyOwnRegion", "Iloilo").is_empty());
        assert!(list_barangays(&tree, "MyOwnRegion", "Iloilo", "Oton").is_empty());
    }

    #[test]
    fn test_selected_province_has_municipalities() {
        let tree = sample();

        for region in list_regions(&tree) {
            for province in list_provinces(&tree, region) {
                assert!(tree.provinces(region).unwrap().contains_key(province));
                assert!(!list_municipalities(&tree, region, province).is_empty());
            }
        }
        assert_eq!(list_municipalities(&tree, "Region VI", "Iloilo"), ["Oton", "Tigbauan"]);
    }

    #[test]
    fn test_full_chain() {
        let tree = sample();
        let selection = full_selection();

        assert_eq!(
            list_barangays(
                &tree,
                &selection.region,
                &selection.province_or_city,
                &selection.municipality
            ),
            ["Abilay Norte", "Abilay Sur"]
        );
    }

    #[test]
    fn test_same_municipality_name_under_other_province() {
        let tree = sample();

        assert_eq!(list_barangays(&tree, "Region VII", "Cebu", "Oton"), ["Elsewhere"]);
        assert!(list_barangays(&tree, "Region VII", "Iloilo", "Oton").is_empty());
    }

    #[test]
    fn test_region_change_clears_descendants() {
        let selection = full_selection();
        let next = apply_field_change(&selection, AddressLevel::Region, "Region VII");

        assert_eq!(next.region, "Region VII");
        assert_eq!(next.province_or_city, "");
        assert_eq!(next.municipality, "");
        assert_eq!(next.barangay, "");
        assert_eq!(next.country, selection.country);
        assert_eq!(next.zip_code, selection.zip_code);
        assert_eq!(next.street_line, selection.street_line);
    }

    #[test]
    fn test_province_change_clears_below() {
        let selection = full_selection();
        let next = apply_field_change(&selection, AddressLevel::ProvinceOrCity, "Antique");

        assert_eq!(next.province_or_city, "Antique");
        assert_eq!(next.municipality, "");
        assert_eq!(next.barangay, "");
        assert_eq!(next.region, selection.region);
        assert_eq!(next.country, selection.country);
    }

    #[test]
    fn test_reset_even_when_still_valid() {
        let selection = full_selection();
        let next = apply_field_change(&selection, AddressLevel::ProvinceOrCity, "Iloilo");

        assert_eq!(next.province_or_city, "Iloilo");
        assert_eq!(next.municipality, "");
        assert_eq!(next.barangay, "");
    }

    #[test]
    fn test_barangay_change_touches_nothing_else() {
        let selection = full_selection();
        let next = apply_field_change(&selection, AddressLevel::Barangay, "X");

        assert_eq!(
            next,
            AddressSelection {
                barangay: "X".to_string(),
                ..selection
            }
        );
    }

    #[test]
    fn test_custom_region() {
        let tree = sample();
        let selection = apply_field_change(&AddressSelection::default(), AddressLevel::Region, "MyOwnRegion");
        let selection = apply_field_change(&selection, AddressLevel::ProvinceOrCity, "Typed Province");

        let options = resolve_options(&tree, &selection);
        assert_eq!(options.regions, ["Region VI", "Region VII"]);
        assert!(options.provinces.is_empty());
        assert!(options.municipalities.is_empty());
        assert!(options.barangays.is_empty());
        assert_eq!(selection.province_or_city, "Typed Province");
    }

    #[test]
    fn test_resolve_options_full_chain() {
        let tree = sample();
        let options = resolve_options(&tree, &full_selection());

        assert_eq!(options.provinces, ["Iloilo", "Antique"]);
        assert_eq!(options.municipalities, ["Oton", "Tigbauan"]);
        assert_eq!(options.barangays, ["Abilay Norte", "Abilay Sur"]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = AdministrativeDivisionTree::default();
        let options = resolve_options(&tree, &full_selection());

        assert!(options.regions.is_empty());
        assert!(options.provinces.is_empty());
        assert!(options.municipalities.is_empty());
        assert!(options.barangays.is_empty());
    }
}
