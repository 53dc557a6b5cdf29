//! User settings persisted in the key/value store
//!
//! Stored as JSON under the `settings` key with camelCase field names:
//!
//! ```json
//! {
//!   "largeText": true,
//!   "escortMode": false,
//!   "emergencyContacts": [{ "name": "Family 1", "phone": "" }],
//!   "whitelist": ["bank", "usps", "amazon", "paypal"]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::scoring::{DEFAULT_WHITELIST, Whitelist};
use crate::store::{KeyValueStore, StoreError};

/// Store key for [`Settings`]
pub const SETTINGS_KEY: &str = "settings";

/// Someone to ask before acting on a suspicious message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Larger text for easier reading; the CLI frames verdicts on their
    /// own lines in capitals
    #[serde(default = "default_large_text")]
    pub large_text: bool,

    /// Escort mode: a family member walks through checks together
    #[serde(default)]
    pub escort_mode: bool,

    /// The first contact receives family messages
    #[serde(default = "default_emergency_contacts")]
    pub emergency_contacts: Vec<EmergencyContact>,

    /// Trusted substrings that lower URL risk
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<String>,
}

fn default_large_text() -> bool {
    true
}

fn default_emergency_contacts() -> Vec<EmergencyContact> {
    vec![EmergencyContact {
        name: "Family 1".to_string(),
        phone: String::new(),
    }]
}

fn default_whitelist() -> Vec<String> {
    DEFAULT_WHITELIST.iter().map(|s| s.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            large_text: default_large_text(),
            escort_mode: false,
            emergency_contacts: default_emergency_contacts(),
            whitelist: default_whitelist(),
        }
    }
}

impl Settings {
    /// Load from the store, falling back to defaults on any failure
    pub fn load(store: &impl KeyValueStore) -> Self {
        store.get_or(SETTINGS_KEY, Settings::default())
    }

    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), StoreError> {
        store.set(SETTINGS_KEY, self)
    }

    /// Load, modify and save as one locked step
    pub fn update(
        store: &impl KeyValueStore,
        f: impl FnOnce(&mut Settings),
    ) -> Result<(), StoreError> {
        store.update(SETTINGS_KEY, Settings::default(), f)
    }

    /// Whitelist used by URL checks
    pub fn whitelist(&self) -> Whitelist {
        Whitelist::new(&self.whitelist)
    }

    /// Add a whitelist entry (lowercased). Returns false for blanks and
    /// entries already present.
    pub fn add_whitelist_entry(&mut self, entry: &str) -> bool {
        let entry = entry.trim().to_lowercase();
        if entry.is_empty() || self.whitelist.iter().any(|e| e.to_lowercase() == entry) {
            return false;
        }
        self.whitelist.push(entry);
        true
    }

    /// Remove a whitelist entry (case-insensitive). Returns true if removed.
    pub fn remove_whitelist_entry(&mut self, entry: &str) -> bool {
        let entry = entry.trim().to_lowercase();
        let before = self.whitelist.len();
        self.whitelist.retain(|e| e.to_lowercase() != entry);
        self.whitelist.len() != before
    }

    pub fn reset_whitelist(&mut self) {
        self.whitelist = default_whitelist();
    }

    pub fn primary_contact(&self) -> Option<&EmergencyContact> {
        self.emergency_contacts.first()
    }

    /// Replace the first emergency contact (or add one if none exist)
    pub fn set_primary_contact(&mut self, name: &str, phone: &str) {
        let contact = EmergencyContact {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
        };
        match self.emergency_contacts.first_mut() {
            Some(first) => *first = contact,
            None => self.emergency_contacts.push(contact),
        }
    }
}
