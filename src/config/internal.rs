//! Built-in rule tables embedded at compile-time
//!
//! The red-flag and shortener tables live in `assets/rules/defaults.toml`
//! and are merged into user configurations by version.

use once_cell::sync::Lazy;

use super::RulesConfig;

/// Embedded rules TOML content (compile-time)
pub const INTERNAL_RULES_TOML: &str = include_str!("../../assets/rules/defaults.toml");

static INTERNAL_RULES: Lazy<RulesConfig> = Lazy::new(|| match load_internal_rules() {
    Ok(rules) => rules,
    Err(e) => {
        tracing::error!("Failed to parse embedded rules: {}", e);
        RulesConfig::default()
    }
});

/// Parse the embedded rules TOML
pub fn load_internal_rules() -> Result<RulesConfig, toml::de::Error> {
    toml::from_str(INTERNAL_RULES_TOML)
}

impl RulesConfig {
    /// The built-in rule tables
    pub fn internal() -> Self {
        INTERNAL_RULES.clone()
    }

    /// Replace these rules with the built-in ones if the built-in version
    /// is newer. Returns true if anything changed.
    pub fn merge_internal(&mut self) -> bool {
        let internal = &*INTERNAL_RULES;
        if self.version >= internal.version {
            return false;
        }
        tracing::debug!(
            from = self.version,
            to = internal.version,
            "upgrading rule tables"
        );
        *self = internal.clone();
        true
    }
}
