use reqwest::get;
use tracing::info;

use crate::{error::AtlasError, tree::AdministrativeDivisionTree};

pub async fn get_tree_remote(url: &str) -> Result<AdministrativeDivisionTree, AtlasError> {
    let response = get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    let tree: AdministrativeDivisionTree = serde_json::from_slice(&bytes)?;
    info!("Fetched {} regions from {url}", tree.region_count());

    Ok(tree)
}
