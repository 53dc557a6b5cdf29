//! CLI command implementations

pub mod check;
pub mod family;
pub mod history;
pub mod init;
pub mod scan;
pub mod settings;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use safeguard::config::Config;
use safeguard::store::FileStore;
use safeguard::{RiskLevel, recommended_actions, risk_meta};

/// Loaded configuration and the store it points at
pub struct AppContext {
    pub config: Config,
    pub store: FileStore,
}

impl AppContext {
    pub fn load(config_path: Option<&Path>, store_dir: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;
        let store = FileStore::new(config.store_dir(store_dir));
        tracing::debug!("Using store at {}", store.root().display());
        Ok(Self { config, store })
    }
}

/// Use the argument if given, otherwise read all of stdin
pub fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Badge line, e.g. `[bad] High Risk / 高度疑似诈骗 (score 75/100)`.
///
/// With `large` (the large-text setting) the verdict is framed on its own
/// lines in capitals so it stands out in a terminal.
pub fn render_verdict(score: u32, level: RiskLevel, large: bool) -> String {
    let meta = risk_meta(level);
    if !large {
        return format!(
            "[{}] {} / {} (score {}/100)",
            meta.style, meta.label_en, meta.label_zh, score
        );
    }

    let rule = "=".repeat(40);
    format!(
        "{rule}\n  {} / {}\n  SCORE {}/100\n{rule}",
        meta.label_en.to_uppercase(),
        meta.label_zh,
        score
    )
}

pub fn print_verdict(score: u32, level: RiskLevel, large: bool) {
    println!("{}", render_verdict(score, level, large));
}

pub fn print_actions(level: RiskLevel) {
    println!("\nRecommended:");
    for (i, action) in recommended_actions(level).iter().enumerate() {
        println!("  {}. {}", i + 1, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_verdict_compact() {
        assert_eq!(
            render_verdict(75, RiskLevel::High, false),
            "[bad] High Risk / 高度疑似诈骗 (score 75/100)"
        );
    }

    #[test]
    fn test_render_verdict_large_text() {
        let out = render_verdict(40, RiskLevel::Medium, true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "=".repeat(40));
        assert_eq!(lines[1], "  SUSPICIOUS / 存在诈骗特征");
        assert_eq!(lines[2], "  SCORE 40/100");
    }
}
