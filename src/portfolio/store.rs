//! File-backed storage for the holdings list
//!
//! The whole portfolio lives in one JSON file under the data directory.
//! Writers replace the file as a unit; there is no versioning, migration
//! or cross-process coordination (last write wins).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::portfolio::types::{Holding, NewHolding};

/// Holding store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Storage manager for the persisted holdings list
pub struct HoldingStore {
    /// Holdings file path, injected so tests can point at a temp dir
    holdings_path: PathBuf,
}

impl HoldingStore {
    pub fn new<P: AsRef<Path>>(holdings_path: P) -> Self {
        Self {
            holdings_path: holdings_path.as_ref().to_path_buf(),
        }
    }

    /// Load the persisted holdings list
    ///
    /// Returns an empty list when the file is missing, unreadable or does
    /// not parse as valid holdings; corruption is logged and swallowed
    /// rather than surfaced.
    pub fn load(&self) -> Vec<Holding> {
        if !self.holdings_path.exists() {
            debug!("No holdings file found, starting with empty portfolio");
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.holdings_path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read holdings file {:?}: {}", self.holdings_path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Holding>>(&content) {
            Ok(holdings) => {
                debug!("Loaded {} holdings", holdings.len());
                holdings
            }
            Err(e) => {
                warn!("Failed to parse holdings file {:?}: {}", self.holdings_path, e);
                Vec::new()
            }
        }
    }

    /// Replace the persisted list with the given holdings
    ///
    /// Not additive: callers read-modify-write. The file is written to a
    /// temporary path and renamed so a crash never leaves a half-written
    /// portfolio behind.
    pub fn save(&self, holdings: &[Holding]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(holdings)?;

        let temp_path = self.holdings_path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.holdings_path)?;

        debug!("Saved {} holdings", holdings.len());
        Ok(())
    }

    /// Append a new holding, assigning a fresh id and purchase date
    ///
    /// Ids are epoch milliseconds; monotonicity across rapid calls is not
    /// guaranteed.
    pub fn add(&self, new_holding: NewHolding) -> Result<Holding, StoreError> {
        let holding = Holding {
            id: Utc::now().timestamp_millis().to_string(),
            ticker: new_holding.ticker.trim().to_uppercase(),
            quantity: new_holding.quantity,
            purchase_price: new_holding.purchase_price,
            purchase_date: Utc::now(),
        };

        let mut holdings = self.load();
        holdings.push(holding.clone());
        self.save(&holdings)?;

        Ok(holding)
    }

    /// Remove the holding with the given id
    ///
    /// Returns false (not an error) when no such id exists.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut holdings = self.load();
        let before = holdings.len();
        holdings.retain(|h| h.id != id);

        if holdings.len() == before {
            debug!("No holding with id {} to remove", id);
            return Ok(false);
        }

        self.save(&holdings)?;
        Ok(true)
    }

    /// Empty the persisted list
    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_store() -> (tempfile::TempDir, HoldingStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HoldingStore::new(dir.path().join("holdings.json"));
        (dir, store)
    }

    fn sample_holding(id: &str, ticker: &str) -> Holding {
        Holding {
            id: id.to_string(),
            ticker: ticker.to_string(),
            quantity: 10.0,
            purchase_price: 150.0,
            purchase_date: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let (_dir, store) = test_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let (_dir, store) = test_store();
        let holdings = vec![sample_holding("1", "AAPL"), sample_holding("2", "GOOGL")];

        store.save(&holdings).unwrap();
        assert_eq!(store.load(), holdings);

        // save(load()) is idempotent
        store.save(&store.load()).unwrap();
        assert_eq!(store.load(), holdings);
    }

    #[test]
    fn load_corrupt_file_returns_empty() {
        let (_dir, store) = test_store();
        fs::write(&store.holdings_path, "{not valid json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn add_assigns_id_and_uppercases_ticker() {
        let (_dir, store) = test_store();
        let created = store
            .add(NewHolding {
                ticker: "aapl".to_string(),
                quantity: 10.0,
                purchase_price: 150.0,
            })
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.ticker, "AAPL");

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], created);
    }

    #[test]
    fn remove_deletes_matching_holding() {
        let (_dir, store) = test_store();
        store
            .save(&[sample_holding("1", "AAPL"), sample_holding("2", "GOOGL")])
            .unwrap();

        assert!(store.remove("1").unwrap());

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "2");
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let (_dir, store) = test_store();
        let holdings = vec![sample_holding("1", "AAPL")];
        store.save(&holdings).unwrap();

        assert!(!store.remove("nope").unwrap());
        assert_eq!(store.load(), holdings);
    }

    #[test]
    fn clear_empties_the_list() {
        let (_dir, store) = test_store();
        store.save(&[sample_holding("1", "AAPL")]).unwrap();

        store.clear().unwrap();
        assert!(store.load().is_empty());
    }
}
