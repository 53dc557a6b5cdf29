//! Configuration loading and management

mod general;
mod internal;
mod io;
mod rules;

pub use general::GeneralSettings;
pub use internal::{INTERNAL_RULES_TOML, load_internal_rules};
pub use rules::RulesConfig;

pub use io::CONFIG_HEADER;
pub(crate) use io::{lock_exclusive, write_atomic, write_locked_atomic};

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::scoring::{TextScorer, UrlScorer};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Scoring rule tables
    #[serde(default)]
    pub rules: RulesConfig,

    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,
}

impl Config {
    /// Create a config populated with the built-in rules
    pub fn with_defaults() -> Self {
        let mut config = Self::default();
        config.merge_internal_defaults();
        config
    }

    /// Merge built-in rules if they are newer. Returns true on change.
    pub fn merge_internal_defaults(&mut self) -> bool {
        self.rules.merge_internal()
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        if self.general.history_limit == 0 {
            anyhow::bail!("general.history_limit must be at least 1");
        }
        Ok(())
    }

    pub fn text_scorer(&self) -> TextScorer {
        self.rules.text_scorer()
    }

    pub fn url_scorer(&self) -> UrlScorer {
        self.rules.url_scorer()
    }

    /// Store directory: `override_dir`, then `general.store_dir`, then the
    /// global default
    pub fn store_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.general.store_dir.clone())
            .unwrap_or_else(Self::default_store_dir)
    }

    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.general.scan_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_has_internal_rules() {
        let config = Config::with_defaults();
        assert_eq!(config.rules, RulesConfig::internal());
        assert_eq!(config.general.history_limit, 30);
        assert_eq!(config.scan_delay(), Duration::from_millis(900));
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[general]
scan_delay_ms = 10
"#,
        )
        .unwrap();
        assert_eq!(config.general.scan_delay_ms, 10);
        assert_eq!(config.general.history_limit, 30);
        assert_eq!(config.rules.version, 0);
    }

    #[test]
    fn test_custom_rules_drive_scorers() {
        let config: Config = toml::from_str(
            r#"
[rules]
version = 999
red_flags = [{ keyword = "Lottery", weight = 80 }]
shorteners = ["s.id"]
"#,
        )
        .unwrap();

        let text = config.text_scorer().score("you won the lottery");
        assert_eq!(text.score, 80);
        assert_eq!(text.hits, vec!["Lottery"]);
        assert_eq!(config.url_scorer().shorteners(), &["s.id".to_string()]);
    }

    #[test]
    fn test_store_dir_precedence() {
        let mut config = Config::with_defaults();
        assert_eq!(config.store_dir(None), Config::default_store_dir());

        config.general.store_dir = Some(PathBuf::from("/var/lib/safeguard"));
        assert_eq!(config.store_dir(None), PathBuf::from("/var/lib/safeguard"));
        assert_eq!(
            config.store_dir(Some(Path::new("/tmp/override"))),
            PathBuf::from("/tmp/override")
        );
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        let mut config = Config::with_defaults();
        config.general.history_limit = 0;
        assert!(config.validate().is_err());
    }
}
