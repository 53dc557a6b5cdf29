use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "safeguard")]
#[command(about = "SafeGuard - check suspicious messages and links for scam risk")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.safeguard/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory of the local data store (defaults to ~/.safeguard/store)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a message for scam red flags (reads stdin when TEXT is omitted)
    Text {
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Do not record the result in scan history
        #[arg(long)]
        no_history: bool,
    },

    /// Check a link for risky patterns
    Url {
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Do not record the result in scan history
        #[arg(long)]
        no_history: bool,
    },

    /// Run a simulated screenshot scan
    Scan {
        /// Seed for a repeatable result
        #[arg(long)]
        seed: Option<u64>,

        /// Do not record the result in scan history
        #[arg(long)]
        no_history: bool,
    },

    /// Show or clear recent scans
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,

        /// Only show this level: low, medium, high or all
        #[arg(long)]
        level: Option<String>,

        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Compose a message asking your emergency contact to take a look
    Family {
        /// Content to forward (reads stdin when omitted)
        text: Option<String>,
    },

    /// View or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Write a default config file to ~/.safeguard/config.toml (or --config)
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Delete all recorded scans
    Clear,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print current settings
    Show,

    /// Manage trusted keywords for link checks
    Whitelist {
        #[command(subcommand)]
        action: WhitelistAction,
    },

    /// Set the emergency contact that receives family messages
    Contact { name: String, phone: String },

    /// Turn large text on or off
    LargeText { state: Toggle },

    /// Turn escort mode on or off
    Escort { state: Toggle },
}

#[derive(Subcommand)]
enum WhitelistAction {
    /// Add a trusted keyword
    Add { entry: String },
    /// Remove a trusted keyword
    Remove { entry: String },
    /// Restore the built-in list
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn enabled(self) -> bool {
        matches!(self, Toggle::On)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Init must work even when the existing config is broken
    if let Commands::Init { force } = cli.command {
        return cli::init::init_command(cli.config.as_deref(), force);
    }

    let ctx = cli::AppContext::load(cli.config.as_deref(), cli.store.as_deref())?;

    match cli.command {
        Commands::Text {
            text,
            json,
            no_history,
        } => {
            let text = cli::read_input(text)?;
            cli::check::text_command(&ctx, &text, json, !no_history)?;
        }
        Commands::Url {
            url,
            json,
            no_history,
        } => {
            cli::check::url_command(&ctx, &url, json, !no_history)?;
        }
        Commands::Scan { seed, no_history } => {
            cli::scan::scan_command(&ctx, seed, !no_history).await?;
        }
        Commands::History {
            action: Some(HistoryAction::Clear),
            ..
        } => {
            cli::history::clear_command(&ctx)?;
        }
        Commands::History {
            action: None,
            level,
            limit,
        } => {
            cli::history::history_command(&ctx, level.as_deref(), limit)?;
        }
        Commands::Family { text } => {
            let text = cli::read_input(text)?;
            cli::family::family_command(&ctx, &text)?;
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => cli::settings::show_command(&ctx)?,
            SettingsAction::Whitelist { action } => match action {
                WhitelistAction::Add { entry } => cli::settings::whitelist_add(&ctx, &entry)?,
                WhitelistAction::Remove { entry } => {
                    cli::settings::whitelist_remove(&ctx, &entry)?
                }
                WhitelistAction::Reset => cli::settings::whitelist_reset(&ctx)?,
            },
            SettingsAction::Contact { name, phone } => {
                cli::settings::contact_command(&ctx, &name, &phone)?
            }
            SettingsAction::LargeText { state } => {
                cli::settings::large_text_command(&ctx, state.enabled())?
            }
            SettingsAction::Escort { state } => {
                cli::settings::escort_command(&ctx, state.enabled())?
            }
        },
        Commands::Init { .. } => {}
    }

    Ok(())
}
