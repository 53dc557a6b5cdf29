//! SafeGuard - scam risk checks for suspicious messages and links
//!
//! SafeGuard scores pasted text and links with a small set of transparent
//! rules so that the result can be explained to the person reading it:
//!
//! - **Text**: weighted red-flag phrases (Chinese and English) are summed
//!   and capped at 100.
//! - **Links**: scheme, IP-address host and URL-shortener heuristics are
//!   added up, minus a discount for trusted (whitelisted) keywords.
//!
//! Both scores map to the same three risk levels, each with badge labels
//! and recommended next steps. Settings and scan history are kept in a
//! local JSON key/value store.

pub mod config;
pub mod domain;
pub mod family;
pub mod history;
pub mod mock_scan;
pub mod scoring;
pub mod settings;
pub mod store;

pub use domain::*;
pub use scoring::{check_url, recommended_actions, risk_meta, score_text};
