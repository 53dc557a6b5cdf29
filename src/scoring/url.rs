//! Heuristic URL risk checks

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{RiskLevel, UrlReason, UrlScore, clamp_score};

/// Points for a link without an http(s) scheme
pub const NOT_HTTP_WEIGHT: u32 = 20;
/// Points for plain `http://`
pub const UNENCRYPTED_WEIGHT: u32 = 15;
/// Points for a dotted IPv4 host
pub const IP_HOST_WEIGHT: u32 = 30;
/// Points for a known shortener
pub const SHORTENER_WEIGHT: u32 = 25;
/// Points removed when a whitelist entry matches
pub const WHITELIST_DISCOUNT: u32 = 20;

/// Built-in trusted keywords used when settings carry none
pub const DEFAULT_WHITELIST: [&str; 4] = ["bank", "usps", "amazon", "paypal"];

static IP_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(\d{1,3}\.){3}\d{1,3}").expect("IPv4 host pattern is valid")
});

/// Trusted substrings that lower a URL's score when present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    entries: Vec<String>,
}

impl Whitelist {
    /// Build from raw entries. Entries are lowercased but otherwise kept
    /// as written; blank or whitespace-only entries are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().to_lowercase())
            .filter(|e| !e.trim().is_empty())
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// True if any entry occurs in the (already lowercased) URL
    pub fn matches(&self, normalized_url: &str) -> bool {
        self.entries.iter().any(|e| normalized_url.contains(e.as_str()))
    }
}

impl Default for Whitelist {
    fn default() -> Self {
        Self::new(DEFAULT_WHITELIST)
    }
}

/// Checks URLs against scheme, host and shortener heuristics
#[derive(Debug, Clone)]
pub struct UrlScorer {
    shorteners: Vec<String>,
}

impl UrlScorer {
    pub fn new<I, S>(shorteners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let shorteners = shorteners
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { shorteners }
    }

    pub fn shorteners(&self) -> &[String] {
        &self.shorteners
    }

    /// Check `url`; `None` and blank input return the medium-risk sentinel.
    ///
    /// Heuristics add up in a fixed order, then a whitelist hit removes
    /// [`WHITELIST_DISCOUNT`] points (never below zero).
    pub fn check<'a>(&self, url: impl Into<Option<&'a str>>, whitelist: &Whitelist) -> UrlScore {
        let normalized = url.into().unwrap_or_default().trim().to_lowercase();
        if normalized.is_empty() {
            return UrlScore::empty_input();
        }

        let mut score: u32 = 0;
        let mut reasons = Vec::new();

        let is_http = normalized.starts_with("http://") || normalized.starts_with("https://");
        if !is_http {
            score += NOT_HTTP_WEIGHT;
            reasons.push(UrlReason::NotHttp);
        }
        if normalized.starts_with("http://") {
            score += UNENCRYPTED_WEIGHT;
            reasons.push(UrlReason::Unencrypted);
        }
        if IP_HOST.is_match(&normalized) {
            score += IP_HOST_WEIGHT;
            reasons.push(UrlReason::IpHost);
        }
        if self
            .shorteners
            .iter()
            .any(|s| normalized.contains(s.as_str()))
        {
            score += SHORTENER_WEIGHT;
            reasons.push(UrlReason::Shortener);
        }

        if whitelist.matches(&normalized) {
            score = score.saturating_sub(WHITELIST_DISCOUNT);
            reasons.push(UrlReason::Whitelisted);
        }

        let score = clamp_score(score);
        tracing::debug!(score, reasons = reasons.len(), "checked url");

        UrlScore {
            score,
            level: RiskLevel::from_score(score),
            reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;

    fn scorer() -> UrlScorer {
        RulesConfig::internal().url_scorer()
    }

    #[test]
    fn test_empty_input_sentinel() {
        let wl = Whitelist::default();
        for input in ["", "   ", "\t\n"] {
            let result = scorer().check(input, &wl);
            assert_eq!(result.score, 35);
            assert_eq!(result.level, RiskLevel::Medium);
            assert_eq!(result.reason_messages(), vec!["请输入链接"]);
        }
        assert_eq!(scorer().check(None, &wl), UrlScore::empty_input());
    }

    #[test]
    fn test_http_ip_host() {
        let result = scorer().check("http://1.2.3.4/login", &Whitelist::default());
        assert_eq!(result.reasons, vec![UrlReason::Unencrypted, UrlReason::IpHost]);
        assert_eq!(result.score, 45);
        assert_eq!(result.level, RiskLevel::Medium);
    }

    #[test]
    fn test_shortener_only() {
        let result = scorer().check("https://bit.ly/abc", &Whitelist::default());
        assert_eq!(result.reasons, vec![UrlReason::Shortener]);
        assert_eq!(result.score, 25);
        assert_eq!(result.level, RiskLevel::Low);
    }

    #[test]
    fn test_whitelist_discount_floors_at_zero() {
        let result = scorer().check("https://www.amazon.com/help", &Whitelist::default());
        assert_eq!(result.reasons, vec![UrlReason::Whitelisted]);
        assert_eq!(result.score, 0);
        assert_eq!(result.level, RiskLevel::Low);
    }

    #[test]
    fn test_whitelist_discount_after_heuristics() {
        let result = scorer().check("http://paypal-login.example", &Whitelist::default());
        assert_eq!(
            result.reasons,
            vec![UrlReason::Unencrypted, UrlReason::Whitelisted]
        );
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_no_scheme() {
        let result = scorer().check("  WWW.Example.COM  ", &Whitelist::default());
        assert_eq!(result.reasons, vec![UrlReason::NotHttp]);
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_everything_triggered_in_order() {
        let result = scorer().check("http://10.0.0.1/r?to=tinyurl.com/x", &Whitelist::new(["10.0"]));
        assert_eq!(
            result.reasons,
            vec![
                UrlReason::Unencrypted,
                UrlReason::IpHost,
                UrlReason::Shortener,
                UrlReason::Whitelisted
            ]
        );
        // 15 + 30 + 25 - 20
        assert_eq!(result.score, 50);
        assert_eq!(result.level, RiskLevel::Medium);
    }

    #[test]
    fn test_high_risk_url() {
        let result = scorer().check("http://192.168.1.1/bit.ly", &Whitelist::new(Vec::<String>::new()));
        assert_eq!(result.score, 70);
        assert_eq!(result.level, RiskLevel::High);
    }

    #[test]
    fn test_whitelist_entries_lowercased_and_blank_dropped() {
        let wl = Whitelist::new(["MyBank", "", "   "]);
        assert_eq!(wl.entries(), &["mybank".to_string()]);
        assert!(wl.matches("https://mybank.com"));
        assert!(!wl.matches("https://other.com"));
    }

    #[test]
    fn test_whitelist_entries_keep_surrounding_spaces() {
        let wl = Whitelist::new([" Bank"]);
        assert_eq!(wl.entries(), &[" bank".to_string()]);
        assert!(!wl.matches("https://bank.example"));
        assert!(wl.matches("http://my bank.example"));
    }

    #[test]
    fn test_custom_shorteners() {
        let scorer = UrlScorer::new(["s.id"]);
        let result = scorer.check("https://s.id/abc", &Whitelist::default());
        assert_eq!(result.reasons, vec![UrlReason::Shortener]);
        let result = scorer.check("https://bit.ly/abc", &Whitelist::default());
        assert!(result.reasons.is_empty());
    }
}
