use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const APP_NAME_ENV: &str = "DASHBOARD_APP_NAME";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Features {
    #[serde(default = "enabled")]
    theme_switcher: bool,
    #[serde(default = "enabled")]
    secondary_nav: bool,
    #[serde(default = "enabled")]
    messages_demo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DashboardManifest {
    app_name: String,
    #[serde(default = "default_size")]
    default_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<Features>,
}

fn enabled() -> bool {
    true
}

fn default_size() -> String {
    "default".to_string()
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("dashboard.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed={APP_NAME_ENV}");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let mut manifest: DashboardManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if let Ok(app_name) = std::env::var(APP_NAME_ENV) {
        manifest.app_name = app_name;
    }
    if manifest.app_name.trim().is_empty() {
        panic!("app_name in {} must not be blank", path.display());
    }
    if !matches!(manifest.default_size.as_str(), "small" | "default") {
        panic!(
            "default_size in {}: expected \"small\" or \"default\" found {:?}",
            path.display(),
            manifest.default_size
        );
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize dashboard config");
    let generated = format!(
        "/// Build-time generated dashboard config JSON.\n\
pub const DASHBOARD_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("dashboard_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
