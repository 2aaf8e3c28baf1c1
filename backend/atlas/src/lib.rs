use std::{fs, path::Path};

use tracing::{info, warn};

pub mod error;
pub mod record;
pub mod remote;
pub mod resolver;
pub mod selection;
pub mod tree;

pub use error::AtlasError;
pub use record::{AddressPayload, AddressRecord, AddressType};
pub use remote::get_tree_remote;
pub use resolver::{
    AddressOptions, apply_field_change, list_barangays, list_municipalities, list_provinces,
    list_regions, resolve_options,
};
pub use selection::{AddressLevel, AddressSelection, DEFAULT_COUNTRY};
pub use tree::AdministrativeDivisionTree;

pub const DIVISIONS_PATH: &str = "../divisions.json";

pub fn get_tree(path: impl AsRef<Path>) -> Result<AdministrativeDivisionTree, AtlasError> {
    let data = fs::read(path.as_ref())?;

    let tree: AdministrativeDivisionTree = serde_json::from_slice(&data)?;
    info!(
        "Loaded {} regions, {} barangays from {}",
        tree.region_count(),
        tree.barangay_count(),
        path.as_ref().display()
    );

    Ok(tree)
}

pub fn write_tree(path: impl AsRef<Path>, tree: &AdministrativeDivisionTree) -> Result<(), AtlasError> {
    fs::write(path, serde_json::to_vec_pretty(tree)?)?;

    Ok(())
}

/// Falls back to an empty tree so address forms stay usable with free text.
pub fn load_or_empty(
    loaded: Result<AdministrativeDivisionTree, AtlasError>,
) -> AdministrativeDivisionTree {
    loaded.unwrap_or_else(|e| {
        warn!("Divisions unavailable, serving empty option lists: {e}");
        AdministrativeDivisionTree::default()
    })
}
