//! Core domain types for SafeGuard

mod risk;
mod score;

pub use risk::{HIGH_RISK_THRESHOLD, MAX_SCORE, MEDIUM_RISK_THRESHOLD, RiskLevel, clamp_score};
pub use score::{RedFlag, TextScore, UrlReason, UrlScore};
