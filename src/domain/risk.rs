use serde::{Deserialize, Serialize};

/// Scores at or above this are high risk
pub const HIGH_RISK_THRESHOLD: u32 = 70;

/// Scores at or above this (and below [`HIGH_RISK_THRESHOLD`]) are medium risk
pub const MEDIUM_RISK_THRESHOLD: u32 = 35;

/// Upper bound of every risk score
pub const MAX_SCORE: u32 = 100;

/// Three-level risk classification shared by the text and URL scorers.
///
/// Variants are declared in ascending order so `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All levels, lowest first
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Classify a score: `>= 70` high, `>= 35` medium, otherwise low
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Parse a level (supports short aliases)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Some(RiskLevel::Low),
            "medium" | "med" | "m" => Some(RiskLevel::Medium),
            "high" | "h" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clamp a raw sum into `0..=MAX_SCORE`
pub fn clamp_score(raw: u32) -> u32 {
    raw.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_have_no_gaps() {
        for score in 0..=MAX_SCORE {
            let level = RiskLevel::from_score(score);
            let expected = if score >= 70 {
                RiskLevel::High
            } else if score >= 35 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            assert_eq!(level, expected, "score {}", score);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(RiskLevel::from_score(34), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(35), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
    }

    #[test]
    fn test_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(RiskLevel::from_str("HIGH"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_str("med"), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::from_str(" low "), Some(RiskLevel::Low));
        assert_eq!(RiskLevel::from_str("critical"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let level: RiskLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(level, RiskLevel::High);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(0), 0);
        assert_eq!(clamp_score(100), 100);
        assert_eq!(clamp_score(245), 100);
    }
}
