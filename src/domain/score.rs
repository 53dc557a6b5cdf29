//! Score results produced by the scorers

use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// A weighted red-flag phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    /// Phrase matched case-insensitively against the text
    pub keyword: String,
    /// Points added when the phrase is present (1-100)
    pub weight: u32,
}

impl RedFlag {
    pub fn new(keyword: impl Into<String>, weight: u32) -> Self {
        Self {
            keyword: keyword.into(),
            weight,
        }
    }
}

/// Result of scoring free-form text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextScore {
    pub score: u32,
    pub level: RiskLevel,
    /// Matched keywords in table order, as written in the table
    pub hits: Vec<String>,
}

impl TextScore {
    pub fn empty() -> Self {
        Self {
            score: 0,
            level: RiskLevel::Low,
            hits: Vec::new(),
        }
    }
}

/// Why a URL check added or removed points.
///
/// Serialized as the Chinese reason message; deserializes from that
/// message, the English one or the snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum UrlReason {
    /// Nothing to check
    EmptyInput,
    /// Missing an `http://` or `https://` prefix
    NotHttp,
    /// Plain `http://`
    Unencrypted,
    /// Dotted IPv4 host right after the scheme
    IpHost,
    /// Known URL shortener
    Shortener,
    /// A whitelist entry matched
    Whitelisted,
}

impl UrlReason {
    pub const ALL: [UrlReason; 6] = [
        UrlReason::EmptyInput,
        UrlReason::NotHttp,
        UrlReason::Unencrypted,
        UrlReason::IpHost,
        UrlReason::Shortener,
        UrlReason::Whitelisted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrlReason::EmptyInput => "empty_input",
            UrlReason::NotHttp => "not_http",
            UrlReason::Unencrypted => "unencrypted",
            UrlReason::IpHost => "ip_host",
            UrlReason::Shortener => "shortener",
            UrlReason::Whitelisted => "whitelisted",
        }
    }

    /// Match a reason by its name or either message
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| s == r.as_str() || s == r.message_zh() || s == r.message_en())
    }

    /// Message shown to the user (Chinese)
    pub fn message_zh(&self) -> &'static str {
        match self {
            UrlReason::EmptyInput => "请输入链接",
            UrlReason::NotHttp => "不是标准 http/https 链接",
            UrlReason::Unencrypted => "使用 http（非加密）",
            UrlReason::IpHost => "链接使用 IP 地址（常见风险信号）",
            UrlReason::Shortener => "短链接（需要展开核实）",
            UrlReason::Whitelisted => "命中白名单关键词（风险降低）",
        }
    }

    /// English message
    pub fn message_en(&self) -> &'static str {
        match self {
            UrlReason::EmptyInput => "empty input",
            UrlReason::NotHttp => "not a standard http/https link",
            UrlReason::Unencrypted => "uses unencrypted http",
            UrlReason::IpHost => "uses an IP-address host",
            UrlReason::Shortener => "shortened link, needs expansion to verify",
            UrlReason::Whitelisted => "matched a trusted keyword, risk reduced",
        }
    }
}

impl From<UrlReason> for &'static str {
    fn from(reason: UrlReason) -> Self {
        reason.message_zh()
    }
}

impl TryFrom<String> for UrlReason {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UrlReason::from_str(&value).ok_or_else(|| format!("unknown URL reason: {:?}", value))
    }
}

impl std::fmt::Display for UrlReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message_zh())
    }
}

/// Result of checking a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlScore {
    pub score: u32,
    pub level: RiskLevel,
    /// Triggered heuristics in evaluation order
    pub reasons: Vec<UrlReason>,
}

impl UrlScore {
    /// Returned for blank input: unknown is treated as moderately risky
    pub fn empty_input() -> Self {
        Self {
            score: 35,
            level: RiskLevel::Medium,
            reasons: vec![UrlReason::EmptyInput],
        }
    }

    /// Reason messages in Chinese, in order
    pub fn reason_messages(&self) -> Vec<&'static str> {
        self.reasons.iter().map(|r| r.message_zh()).collect()
    }
}
