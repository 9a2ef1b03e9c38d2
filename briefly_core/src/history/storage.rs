use log::{error, warn};
use sled::{Db, Tree};

use super::dto::{HistoryLog, SummaryRecord};
use crate::error::ClientResult;

const HISTORY_TREE: &str = "briefly_history";
const CURRENT_TREE: &str = "current_summary";
const HISTORY_KEY: &str = "entries";
const CURRENT_KEY: &str = "current";

/// Durable store for the saved-summary log and the current-summary hand-off slot.
///
/// Unreadable stored data is treated as absent.
#[derive(Clone)]
pub struct HistoryStore {
    history: Tree,
    current: Tree,
}

impl HistoryStore {
    pub fn new(db: &Db) -> sled::Result<Self> {
        let history = db.open_tree(HISTORY_TREE)?;
        let current = db.open_tree(CURRENT_TREE)?;

        Ok(Self { history, current })
    }

    pub fn load(&self) -> HistoryLog {
        match self.history.get(HISTORY_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<serde_json::Value>>(&bytes) {
                Ok(entries) => entries
                    .into_iter()
                    .enumerate()
                    .filter_map(|(i, entry)| {
                        serde_json::from_value::<SummaryRecord>(entry)
                            .map_err(|e| warn!("Skipping malformed history entry {}: {}", i, e))
                            .ok()
                    })
                    .collect(),
                Err(e) => {
                    warn!("Stored history is malformed, treating as empty: {}", e);
                    HistoryLog::default()
                }
            },
            Ok(None) => HistoryLog::default(),
            Err(e) => {
                error!("Failed to read history: {}", e);
                HistoryLog::default()
            }
        }
    }

    /// Prepend `record`, keep the newest entries up to capacity, persist.
    pub fn save(&self, record: SummaryRecord) -> ClientResult<HistoryLog> {
        let mut log = self.load();
        log.push_front(record);
        self.persist(&log)?;

        Ok(log)
    }

    /// Remove the entry at `index` (0 = newest). Out-of-range indices change nothing.
    pub fn remove(&self, index: usize) -> ClientResult<Option<SummaryRecord>> {
        let mut log = self.load();

        match log.remove(index) {
            Some(removed) => {
                self.persist(&log)?;
                Ok(Some(removed))
            }
            None => {
                warn!("No history entry at index {} ({} stored)", index, log.len());
                Ok(None)
            }
        }
    }

    /// Copy the entry at `index` into the current-summary slot, leaving the log as is.
    pub fn view(&self, index: usize) -> ClientResult<Option<SummaryRecord>> {
        let log = self.load();

        match log.get(index) {
            Some(record) => {
                self.set_current(record)?;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    pub fn current(&self) -> Option<SummaryRecord> {
        match self.current.get(CURRENT_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<SummaryRecord>(&bytes) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Stored current summary is malformed, ignoring it: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!("Failed to read current summary: {}", e);
                None
            }
        }
    }

    pub fn set_current(&self, record: &SummaryRecord) -> ClientResult<()> {
        let bytes = serde_json::to_vec(record)?;
        self.current.insert(CURRENT_KEY, bytes)?;
        Ok(())
    }

    pub fn clear_current(&self) -> ClientResult<()> {
        self.current.remove(CURRENT_KEY)?;
        Ok(())
    }

    /// Save the current summary into the log, if there is one.
    pub fn save_current(&self) -> ClientResult<Option<SummaryRecord>> {
        match self.current() {
            Some(record) => {
                self.save(record.clone())?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    pub fn flush(&self) -> ClientResult<()> {
        self.history.flush()?;
        self.current.flush()?;
        Ok(())
    }

    fn persist(&self, log: &HistoryLog) -> ClientResult<()> {
        let bytes = serde_json::to_vec(log)?;
        self.history.insert(HISTORY_KEY, bytes)?;
        Ok(())
    }
}
