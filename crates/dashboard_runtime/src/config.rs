//! Application configuration baked in at build time.

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::LayoutSize;

/// App name used when no configuration is provided.
pub const DEFAULT_APP_NAME: &str = "Moo";

#[derive(Debug, Error)]
/// Failures while loading [`DashboardConfig`].
pub enum ConfigError {
    /// The embedded document is not valid JSON for the config shape.
    #[error("dashboard config could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    /// `app_name` is empty or whitespace.
    #[error("dashboard config `app_name` must not be blank")]
    BlankAppName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Optional chrome features.
pub struct FeatureFlags {
    /// Show the theme selector in the header.
    pub theme_switcher: bool,
    /// Render the secondary nav strip.
    pub secondary_nav: bool,
    /// Register the messages demo route.
    pub messages_demo: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            theme_switcher: true,
            secondary_nav: true,
            messages_demo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Dashboard configuration shared through context.
pub struct DashboardConfig {
    /// Application name appended to every tab title.
    pub app_name: String,
    /// Display density handed to the layout provider.
    pub default_size: LayoutSize,
    /// Optional chrome features.
    pub features: FeatureFlags,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            default_size: LayoutSize::Default,
            features: FeatureFlags::default(),
        }
    }
}

impl DashboardConfig {
    /// Parses and validates a JSON config document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed or `app_name` is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.app_name.trim().is_empty() {
            return Err(ConfigError::BlankAppName);
        }
        Ok(config)
    }
}

/// Makes `config` available to [`use_dashboard_config`] below the current owner.
pub fn provide_dashboard_config(config: DashboardConfig) {
    provide_context(config);
}

/// Returns the provided [`DashboardConfig`], or the defaults when none was provided.
pub fn use_dashboard_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = DashboardConfig::from_json(r#"{"app_name":"Herd"}"#).expect("parse");
        assert_eq!(
            config,
            DashboardConfig {
                app_name: "Herd".to_string(),
                ..DashboardConfig::default()
            }
        );
    }

    #[test]
    fn parses_size_and_feature_flags() {
        let config = DashboardConfig::from_json(
            r#"{"app_name":"Moo","default_size":"small","features":{"messages_demo":false}}"#,
        )
        .expect("parse");

        assert_eq!(config.default_size, LayoutSize::Small);
        assert!(!config.features.messages_demo);
        assert!(config.features.theme_switcher);
    }

    #[test]
    fn rejects_blank_app_name_and_bad_json() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{"app_name":"  "}"#),
            Err(ConfigError::BlankAppName)
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{"default_size":"huge"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn context_falls_back_to_defaults() {
        let _ = leptos::create_runtime();
        assert_eq!(use_dashboard_config().app_name, DEFAULT_APP_NAME);
    }
}
