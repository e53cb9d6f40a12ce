//! Dashboard configuration embedded by the build script.

use dashboard_runtime::DashboardConfig;
use leptos::logging;

include!(concat!(env!("OUT_DIR"), "/dashboard_config_generated.rs"));

/// Parses the embedded config, falling back to defaults when it does not validate.
pub fn load_config() -> DashboardConfig {
    DashboardConfig::from_json(DASHBOARD_CONFIG_JSON).unwrap_or_else(|err| {
        logging::warn!("{err}; using default dashboard config");
        DashboardConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let config = DashboardConfig::from_json(DASHBOARD_CONFIG_JSON).expect("embedded config");
        assert!(!config.app_name.trim().is_empty());
    }
}
