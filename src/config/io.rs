//! Configuration file I/O operations

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Comment block written at the top of a fresh config file
pub const CONFIG_HEADER: &str = r#"# SafeGuard configuration
# =======================
#
# [general]
#   store_dir                - Where settings and scan history are kept
#                              (default: ~/.safeguard/store)
#   history_limit            - Number of scans kept, newest first (default: 30)
#   scan_delay_ms            - Simulated latency of `safeguard scan` (default: 900)
#   family_message_max_chars - Longest content forwarded to family (default: 900)
#
# [rules]
#   version    - Bump above the built-in version to keep your own tables;
#                lower versions are replaced by newer built-in rules
#   shorteners - URL-shortening domains treated as risky
#   red_flags  - Phrases matched case-insensitively, weight 1-100 each

"#;

/// Take the exclusive lock guarding `path`.
///
/// The lock lives next to the target as `<name>.lock` and is held until the
/// returned file is dropped.
pub(crate) fn lock_exclusive(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let lock_path = sibling_with_suffix(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)?;
    lock_file.lock_exclusive()?;
    Ok(lock_file)
}

/// Replace `path` with `content` via a temp file and rename so readers
/// never see a partial write. The caller must hold [`lock_exclusive`].
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let temp_path = sibling_with_suffix(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content)?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)
}

/// Write `content` to `path` under an exclusive lock file
pub(crate) fn write_locked_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let _lock = lock_exclusive(path)?;
    write_atomic(path, content)
}

/// `config.toml` -> `config.toml.lock`
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

impl Config {
    /// Get the global config directory path (~/.safeguard/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".safeguard")
    }

    /// Get the global config file path (~/.safeguard/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Default store directory (~/.safeguard/store)
    pub fn default_store_dir() -> PathBuf {
        Self::global_config_dir().join("store")
    }

    /// Load configuration from a file without merging internal defaults.
    pub(super) fn from_file_raw(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// Built-in rules replace the file's rules when they carry a newer
    /// version. The merged config is validated but not saved.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::from_file_raw(path)?;
        config.merge_internal_defaults();
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Config file contents: [`CONFIG_HEADER`] followed by this config as TOML
    pub fn render(&self) -> Result<String> {
        let body = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        Ok(format!("{}{}", CONFIG_HEADER, body))
    }

    /// Default config file contents: the built-in settings and rules
    pub fn render_default() -> Result<String> {
        Self::with_defaults().render()
    }

    /// Save configuration to a file with atomic write and file locking.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = self.render()?;

        write_locked_atomic(path, content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, ~/.safeguard/config.toml is
    /// used when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            Self::from_file(&global_path)
        } else {
            tracing::debug!(
                "No config at {}, using built-in defaults",
                global_path.display()
            );
            Ok(Self::with_defaults())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::with_defaults();
        config.general.history_limit = 5;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.general.history_limit, 5);
        assert_eq!(loaded.rules, config.rules);
        assert!(!dir.path().join("nested").join("config.toml.tmp").exists());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(CONFIG_HEADER));
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file_rejects_invalid_rules() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[rules]
version = 999
red_flags = [{ keyword = "prize", weight = 500 }]
"#,
        )
        .unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("outside 1..=100"));
    }

    #[test]
    fn test_render_default_parses_back() {
        let rendered = Config::render_default().unwrap();
        assert!(rendered.starts_with("# SafeGuard configuration"));
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, Config::with_defaults());
    }

    #[test]
    fn test_sibling_with_suffix() {
        let p = Path::new("/tmp/store/settings.json");
        assert_eq!(
            sibling_with_suffix(p, "lock"),
            PathBuf::from("/tmp/store/settings.json.lock")
        );
    }
}
