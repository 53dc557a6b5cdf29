//! General runtime settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Directory holding the key/value store (defaults to ~/.safeguard/store)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,

    /// Number of scans kept in history, newest first
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Simulated latency of the mock scan, in milliseconds
    #[serde(default = "default_scan_delay_ms")]
    pub scan_delay_ms: u64,

    /// Longest pasted content forwarded in a family message, in characters
    #[serde(default = "default_family_message_max_chars")]
    pub family_message_max_chars: usize,
}

fn default_history_limit() -> usize {
    30
}

fn default_scan_delay_ms() -> u64 {
    900
}

fn default_family_message_max_chars() -> usize {
    900
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            store_dir: None,
            history_limit: default_history_limit(),
            scan_delay_ms: default_scan_delay_ms(),
            family_message_max_chars: default_family_message_max_chars(),
        }
    }
}
