//! Rule tables consumed by the scorers

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::RedFlag;
use crate::scoring::{RedFlagTable, TextScorer, UrlScorer};

/// Versioned red-flag and shortener tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Version of the rule tables; older user copies are replaced by
    /// newer embedded ones on load
    #[serde(default)]
    pub version: u32,

    /// URL-shortening domains
    #[serde(default)]
    pub shorteners: Vec<String>,

    /// Weighted phrases for text scoring
    #[serde(default)]
    pub red_flags: Vec<RedFlag>,
}

impl RulesConfig {
    pub fn red_flag_table(&self) -> RedFlagTable {
        RedFlagTable::new(self.red_flags.iter().cloned())
    }

    pub fn text_scorer(&self) -> TextScorer {
        TextScorer::new(self.red_flag_table())
    }

    pub fn url_scorer(&self) -> UrlScorer {
        UrlScorer::new(&self.shorteners)
    }

    /// Reject blank keywords, weights outside 1..=100 and blank shorteners
    pub fn validate(&self) -> Result<()> {
        for (i, flag) in self.red_flags.iter().enumerate() {
            if flag.keyword.trim().is_empty() {
                bail!("red_flags[{}]: keyword must not be empty", i);
            }
            if !(1..=100).contains(&flag.weight) {
                bail!(
                    "red_flags[{}] ({}): weight {} is outside 1..=100",
                    i,
                    flag.keyword,
                    flag.weight
                );
            }
        }
        for (i, domain) in self.shorteners.iter().enumerate() {
            if domain.trim().is_empty() {
                bail!("shorteners[{}]: domain must not be empty", i);
            }
        }
        Ok(())
    }
}
