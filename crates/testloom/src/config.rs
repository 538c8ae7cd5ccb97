//! Configuration file loading for testloom.
//!
//! Reads `testloom.config.json` from the current working directory. CLI
//! flags always win over configuration values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use testloom_analysis::Framework;
use testloom_scaffold::Suffix;

/// Top-level testloom configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestloomConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Test file suffix (`test` or `spec`).
    #[serde(default)]
    pub suffix: Option<Suffix>,

    /// Directory to write test files into instead of next to the source.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Force the target framework instead of inferring it from imports.
    #[serde(default)]
    pub framework: Option<Framework>,
}

/// Load `testloom.config.json` from the given directory (or CWD if None).
pub fn load_config(dir: Option<&Path>) -> TestloomConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join("testloom.config.json");

    if !config_path.exists() {
        return TestloomConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "\x1b[33mWarning:\x1b[0m Failed to parse {}: {}",
                    config_path.display(),
                    e
                );
                TestloomConfig::default()
            }
        },
        Err(e) => {
            eprintln!(
                "\x1b[33mWarning:\x1b[0m Failed to read {}: {}",
                config_path.display(),
                e
            );
            TestloomConfig::default()
        }
    }
}
