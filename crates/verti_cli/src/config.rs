//! Environment configuration for the smoke CLI.
//!
//! - `VERTI_LOG_LEVEL`: `trace|debug|info|warn|error`; defaults to the core's
//!   build-mode default.
//! - `VERTI_LOG_DIR`: absolute log directory; file logging is off when unset.

use verti_core::default_log_level;

const ENV_LOG_LEVEL: &str = "VERTI_LOG_LEVEL";
const ENV_LOG_DIR: &str = "VERTI_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = lookup(ENV_LOG_LEVEL)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = lookup(ENV_LOG_DIR).filter(|value| !value.trim().is_empty());
        Self { log_level, log_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::CliConfig;

    #[test]
    fn defaults_apply_when_variables_are_missing_or_blank() {
        let config = CliConfig::from_lookup(|key| match key {
            "VERTI_LOG_DIR" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, verti_core::default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn variables_override_defaults() {
        let config = CliConfig::from_lookup(|key| match key {
            "VERTI_LOG_LEVEL" => Some("warn".to_string()),
            "VERTI_LOG_DIR" => Some("/tmp/verti".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/verti"));
    }
}
