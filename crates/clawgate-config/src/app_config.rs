//! Application configuration
//!
//! Configuration loaded from .clawgate.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .clawgate.toml
///
/// Every text here is a fallback: a message passed to a `show_*` call always
/// wins over the configured default.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Overlay text when `show_loading` is called without a message
    #[serde(default = "default_loading_message")]
    pub loading_message: String,

    /// Popup text when `show_success` is called without a message
    #[serde(default = "default_success_message")]
    pub success_message: String,

    /// Popup text when `show_abort_confirm` is called without a message
    #[serde(default = "default_abort_message")]
    pub abort_message: String,

    /// Confirm button label unless the request overrides it
    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,

    /// Cancel button label
    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,

    /// Label of the dismiss hint on the success popup
    #[serde(default = "default_dismiss_label")]
    pub dismiss_label: String,

    /// Duration of the simulated work in the demo app, in milliseconds
    #[serde(default = "default_demo_work_millis")]
    pub demo_work_millis: u64,
}

fn default_loading_message() -> String {
    "Loading...".to_string()
}

fn default_success_message() -> String {
    "Operation completed successfully.".to_string()
}

fn default_abort_message() -> String {
    "Are you sure you want to abort this operation?".to_string()
}

fn default_confirm_label() -> String {
    "Abort".to_string()
}

fn default_cancel_label() -> String {
    "Cancel".to_string()
}

fn default_dismiss_label() -> String {
    "Close".to_string()
}

fn default_demo_work_millis() -> u64 {
    1500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            loading_message: default_loading_message(),
            success_message: default_success_message(),
            abort_message: default_abort_message(),
            confirm_label: default_confirm_label(),
            cancel_label: default_cancel_label(),
            dismiss_label: default_dismiss_label(),
            demo_work_millis: default_demo_work_millis(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML content, filling missing keys with defaults
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.loading_message, "Loading...");
        assert_eq!(config.confirm_label, "Abort");
        assert_eq!(config.cancel_label, "Cancel");
        assert!(!config.success_message.is_empty());
        assert!(!config.abort_message.is_empty());
        assert_eq!(config.demo_work_millis, 1500);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            loading_message = "Working..."
            confirm_label = "Delete"
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.loading_message, "Working...");
        assert_eq!(config.confirm_label, "Delete");
        // cancel_label should use default
        assert_eq!(config.cancel_label, "Cancel");
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_rejects_wrong_type() {
        let toml = r#"demo_work_millis = "soon""#;
        assert!(AppConfig::from_toml(toml).is_err());
    }
}
