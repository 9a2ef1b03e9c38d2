use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most entries the history log keeps; older ones are dropped on save.
pub const HISTORY_CAPACITY: usize = 50;

/// A finished summary. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "summary")]
    summary_text: String,
    #[serde(rename = "url")]
    source_url: String,
    #[serde(rename = "timestamp")]
    created_at: DateTime<Utc>,
}

impl SummaryRecord {
    pub fn new(
        summary_text: impl Into<String>,
        source_url: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            summary_text: summary_text.into(),
            source_url: source_url.into(),
            created_at,
        }
    }

    pub fn summary_text(&self) -> &str {
        &self.summary_text
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn char_count(&self) -> usize {
        self.summary_text.chars().count()
    }
}

/// Saved summaries, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog(Vec<SummaryRecord>);

impl HistoryLog {
    pub fn push_front(&mut self, record: SummaryRecord) {
        self.0.insert(0, record);
        self.0.truncate(HISTORY_CAPACITY);
    }

    pub fn remove(&mut self, index: usize) -> Option<SummaryRecord> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&SummaryRecord> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SummaryRecord> {
        self.0.iter()
    }
}

impl FromIterator<SummaryRecord> for HistoryLog {
    fn from_iter<I: IntoIterator<Item = SummaryRecord>>(iter: I) -> Self {
        let mut entries: Vec<SummaryRecord> = iter.into_iter().collect();
        entries.truncate(HISTORY_CAPACITY);
        Self(entries)
    }
}
