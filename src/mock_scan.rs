//! Simulated screenshot scan
//!
//! Waits a fixed delay and then returns one of three canned results. The
//! choice goes through a [`ResultPicker`] so callers can make it
//! deterministic.

use std::time::Duration;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::RiskLevel;

/// A canned scan outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockScanResult {
    pub verdict: RiskLevel,
    pub label: &'static str,
    pub badge_class: &'static str,
    pub confidence: &'static str,
    pub explanation: &'static str,
    pub signals: &'static [&'static str],
}

impl MockScanResult {
    /// CSS-style class for each signal chip
    pub fn chip_class(&self) -> &'static str {
        match self.verdict {
            RiskLevel::High => "chip--danger",
            RiskLevel::Medium => "chip--warn",
            RiskLevel::Low => "",
        }
    }
}

pub static CANNED_RESULTS: [MockScanResult; 3] = [
    MockScanResult {
        verdict: RiskLevel::High,
        label: "High Risk",
        badge_class: "badge badge--danger",
        confidence: "Confidence: High",
        explanation: "This content pressures you to act quickly and may impersonate a trusted institution. Pause and verify using official contact details.",
        signals: &["Urgency", "Fear/Threat", "Impersonation", "Payment pressure"],
    },
    MockScanResult {
        verdict: RiskLevel::Medium,
        label: "Medium Risk",
        badge_class: "badge badge--warn",
        confidence: "Confidence: Medium",
        explanation: "This content includes suspicious link behavior and unclear sender identity. Verify before clicking or paying.",
        signals: &["Unclear sender", "Link risk", "Time pressure"],
    },
    MockScanResult {
        verdict: RiskLevel::Low,
        label: "Low Risk",
        badge_class: "badge badge--success",
        confidence: "Confidence: Medium",
        explanation: "No strong scam signals detected. Still avoid sharing codes or personal data and verify if you feel pressured.",
        signals: &["No strong signals", "General caution"],
    },
];

/// Shown while the scan is "running"
pub const SCANNING_MESSAGE: &str =
    "Analyzing screenshot for scam patterns (urgency, impersonation, payment pressure)…";

/// Chooses an index in `0..len`
pub trait ResultPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Always returns the same index (clamped to the range)
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl ResultPicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Repeatable picks from a seeded [`StdRng`]
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ResultPicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Picks using the OS random number generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPicker;

impl ResultPicker for OsPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        OsRng.gen_range(0..len)
    }
}

/// Select a canned result without waiting
pub fn pick_result(picker: &mut impl ResultPicker) -> &'static MockScanResult {
    let idx = picker.pick(CANNED_RESULTS.len());
    &CANNED_RESULTS[idx.min(CANNED_RESULTS.len() - 1)]
}

/// Wait `delay`, then return a canned result
pub async fn run_mock_scan(
    picker: &mut impl ResultPicker,
    delay: Duration,
) -> &'static MockScanResult {
    tracing::debug!(delay_ms = delay.as_millis() as u64, "mock scan started");
    tokio::time::sleep(delay).await;
    let result = pick_result(picker);
    tracing::debug!(verdict = %result.verdict, "mock scan finished");
    result
}
