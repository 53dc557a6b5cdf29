//! History command implementation

use anyhow::{Result, bail};

use safeguard::RiskLevel;
use safeguard::history::{clear_scan_history, filter_by_level, fmt_time, get_scan_history};

use super::AppContext;

/// Show recorded scans, newest first
pub fn history_command(ctx: &AppContext, level: Option<&str>, limit: Option<usize>) -> Result<()> {
    let level = match level {
        None => None,
        Some(s) if s.eq_ignore_ascii_case("all") => None,
        Some(s) => match RiskLevel::from_str(s) {
            Some(level) => Some(level),
            None => bail!("Unknown level: {} (expected low, medium, high or all)", s),
        },
    };

    let history = get_scan_history(&ctx.store);
    let mut entries = filter_by_level(&history, level);
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if entries.is_empty() {
        println!("No scans found.");
        return Ok(());
    }

    println!("Scans ({}):\n", entries.len());

    for entry in entries {
        println!(
            "  {} [{}] {} {:>3} {}",
            fmt_time(&entry.timestamp),
            entry.kind,
            entry.level,
            entry.score,
            entry.input
        );
        if !entry.signals.is_empty() {
            println!("    {}", entry.signals.join(", "));
        }
    }

    Ok(())
}

pub fn clear_command(ctx: &AppContext) -> Result<()> {
    clear_scan_history(&ctx.store)?;
    println!("History cleared.");
    Ok(())
}
