//! Bounded scan history, newest first

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{KeyValueStore, StoreError};
use crate::{RiskLevel, TextScore, UrlScore};

/// Store key for the history list
pub const HISTORY_KEY: &str = "scanHistory";

/// Entries kept when no limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 30;

/// Characters of input kept in an entry's preview
pub const PREVIEW_CHARS: usize = 120;

/// What was scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    Text,
    Url,
    Mock,
}

impl ScanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanKind::Text => "text",
            ScanKind::Url => "url",
            ScanKind::Mock => "mock",
        }
    }
}

impl std::fmt::Display for ScanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub kind: ScanKind,
    /// Truncated copy of the scanned input
    pub input: String,
    pub score: u32,
    pub level: RiskLevel,
    /// Hits, reasons or signal chips, depending on `kind`
    #[serde(default)]
    pub signals: Vec<String>,
}

impl ScanEntry {
    pub fn new(
        kind: ScanKind,
        input: &str,
        score: u32,
        level: RiskLevel,
        signals: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            input: preview(input),
            score,
            level,
            signals,
        }
    }

    pub fn from_text(input: &str, result: &TextScore) -> Self {
        Self::new(
            ScanKind::Text,
            input,
            result.score,
            result.level,
            result.hits.clone(),
        )
    }

    pub fn from_url(input: &str, result: &UrlScore) -> Self {
        let reasons = result
            .reasons
            .iter()
            .map(|r| r.message_zh().to_string())
            .collect();
        Self::new(ScanKind::Url, input, result.score, result.level, reasons)
    }
}

/// First [`PREVIEW_CHARS`] characters of `input`, trimmed
fn preview(input: &str) -> String {
    let trimmed = input.trim();
    match trimmed.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

/// Prepend `entry` and keep at most `limit` entries
pub fn add_scan_history(
    store: &impl KeyValueStore,
    entry: ScanEntry,
    limit: usize,
) -> Result<(), StoreError> {
    store.update(HISTORY_KEY, Vec::<ScanEntry>::new(), |history| {
        history.insert(0, entry);
        history.truncate(limit);
    })
}

/// Stored history, or empty if missing or unreadable
pub fn get_scan_history(store: &impl KeyValueStore) -> Vec<ScanEntry> {
    store.get_or(HISTORY_KEY, Vec::new())
}

pub fn clear_scan_history(store: &impl KeyValueStore) -> Result<(), StoreError> {
    store.remove(HISTORY_KEY)
}

/// Entries at `level`; `None` keeps everything
pub fn filter_by_level(entries: &[ScanEntry], level: Option<RiskLevel>) -> Vec<&ScanEntry> {
    entries
        .iter()
        .filter(|e| level.is_none_or(|l| e.level == l))
        .collect()
}

/// Render a timestamp in local time
pub fn fmt_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
