//! Scam-risk scoring for pasted text and links
//!
//! Both scorers are pure: the same input and tables always give the same
//! result. The free functions below use the built-in rule tables; build a
//! [`TextScorer`] or [`UrlScorer`] from a [`crate::config::Config`] to use
//! user-supplied tables instead.

mod presentation;
mod text;
mod url;

pub use presentation::{RiskMeta, recommended_actions, risk_meta};
pub use text::{RedFlagTable, TextScorer};
pub use url::{
    DEFAULT_WHITELIST, IP_HOST_WEIGHT, NOT_HTTP_WEIGHT, SHORTENER_WEIGHT, UNENCRYPTED_WEIGHT,
    UrlScorer, WHITELIST_DISCOUNT, Whitelist,
};

use once_cell::sync::Lazy;

use crate::config::RulesConfig;
use crate::{TextScore, UrlScore};

static DEFAULT_TEXT_SCORER: Lazy<TextScorer> =
    Lazy::new(|| TextScorer::new(RulesConfig::internal().red_flag_table()));

static DEFAULT_URL_SCORER: Lazy<UrlScorer> = Lazy::new(|| RulesConfig::internal().url_scorer());

/// Score text with the built-in red-flag table
pub fn score_text<'a>(text: impl Into<Option<&'a str>>) -> TextScore {
    DEFAULT_TEXT_SCORER.score(text)
}

/// Check a URL with the built-in shortener list
pub fn check_url<'a>(url: impl Into<Option<&'a str>>, whitelist: &Whitelist) -> UrlScore {
    DEFAULT_URL_SCORER.check(url, whitelist)
}
