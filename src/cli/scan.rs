//! Mock scan command

use std::io::Write;

use anyhow::Result;

use safeguard::history::{ScanEntry, ScanKind, add_scan_history};
use safeguard::mock_scan::{OsPicker, SCANNING_MESSAGE, SeededPicker, run_mock_scan};
use safeguard::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, RiskLevel};

use super::{AppContext, print_actions};

pub async fn scan_command(ctx: &AppContext, seed: Option<u64>, record: bool) -> Result<()> {
    println!("Scanning… {}", SCANNING_MESSAGE);
    std::io::stdout().flush()?;

    let delay = ctx.config.scan_delay();
    let result = match seed {
        Some(seed) => run_mock_scan(&mut SeededPicker::new(seed), delay).await,
        None => run_mock_scan(&mut OsPicker, delay).await,
    };

    println!("\n{} ({})", result.label, result.confidence);
    println!("{}", result.explanation);
    let chips: Vec<String> = result
        .signals
        .iter()
        .map(|s| match result.chip_class() {
            "" => format!("[{}]", s),
            class => format!("[{}: {}]", class, s),
        })
        .collect();
    println!("Signals: {}", chips.join(" "));
    print_actions(result.verdict);

    if record {
        let entry = ScanEntry::new(
            ScanKind::Mock,
            "screenshot",
            score_for(result.verdict),
            result.verdict,
            result.signals.iter().map(|s| s.to_string()).collect(),
        );
        add_scan_history(&ctx.store, entry, ctx.config.general.history_limit)?;
    }

    Ok(())
}

/// Mock results carry no score; record the lower bound of their level
fn score_for(level: RiskLevel) -> u32 {
    match level {
        RiskLevel::High => HIGH_RISK_THRESHOLD,
        RiskLevel::Medium => MEDIUM_RISK_THRESHOLD,
        RiskLevel::Low => 0,
    }
}
