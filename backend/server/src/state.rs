use std::sync::Arc;

use anyhow::Result;
use atlas::{AdministrativeDivisionTree, get_tree, get_tree_remote, load_or_empty};
use tracing::info;

use super::{config::Config, records::RecordsClient};

pub struct State {
    pub tree: AdministrativeDivisionTree,
    pub config: Config,
    pub records: RecordsClient,
}

impl State {
    pub async fn new(config: Config) -> Result<Arc<Self>> {
        let loaded = match &config.divisions_url {
            Some(url) => {
                info!("Fetching divisions from {url}");
                get_tree_remote(url).await
            }
            None => get_tree(&config.divisions_path),
        };

        Self::with_tree(config, load_or_empty(loaded))
    }

    pub fn with_tree(config: Config, tree: AdministrativeDivisionTree) -> Result<Arc<Self>> {
        let records = RecordsClient::new(&config.records_url, config.records_key.clone())?;

        Ok(Arc::new(Self {
            tree,
            config,
            records,
        }))
    }
}
