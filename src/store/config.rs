//! Store configuration

use serde::{Deserialize, Serialize};

use super::book_store::{BookStore, UpdatePlacement};

/// How the book store is initialised at boot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Load the two seed records (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Where updated records land (default: append)
    #[serde(default)]
    pub update_placement: UpdatePlacement,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            update_placement: UpdatePlacement::default(),
        }
    }
}

impl StoreConfig {
    /// Build a store according to this configuration
    pub fn build(&self) -> BookStore {
        let store = if self.seed {
            BookStore::seeded()
        } else {
            BookStore::empty()
        };
        store.with_placement(self.update_placement)
    }
}
