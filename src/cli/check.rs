//! Text and link check commands

use anyhow::Result;

use safeguard::history::{ScanEntry, add_scan_history};
use safeguard::settings::Settings;

use super::{AppContext, print_actions, print_verdict};

/// Score a message and print the verdict
pub fn text_command(ctx: &AppContext, text: &str, json: bool, record: bool) -> Result<()> {
    let settings = Settings::load(&ctx.store);
    let result = ctx.config.text_scorer().score(text);

    if record {
        add_scan_history(
            &ctx.store,
            ScanEntry::from_text(text, &result),
            ctx.config.general.history_limit,
        )?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_verdict(result.score, result.level, settings.large_text);
    if result.hits.is_empty() {
        println!("No red flags found.");
    } else {
        println!("Red flags: {}", result.hits.join(", "));
    }
    print_actions(result.level);

    Ok(())
}

/// Check a link against the configured whitelist and print the verdict
pub fn url_command(ctx: &AppContext, url: &str, json: bool, record: bool) -> Result<()> {
    let settings = Settings::load(&ctx.store);
    let result = ctx.config.url_scorer().check(url, &settings.whitelist());

    if record {
        add_scan_history(
            &ctx.store,
            ScanEntry::from_url(url, &result),
            ctx.config.general.history_limit,
        )?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_verdict(result.score, result.level, settings.large_text);
    for reason in &result.reasons {
        println!("  - {} ({})", reason.message_zh(), reason.message_en());
    }
    print_actions(result.level);

    Ok(())
}
