use std::path::PathBuf;

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log")]
    pub log: String,
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Where `batch` writes its `.json` files. Defaults to beside each input.
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
}

fn default_log() -> String {
    "info".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log: default_log(),
            pretty: default_pretty(),
            out_dir: None,
        }
    }
}

impl Settings {
    /// `legacy_import.toml` (optional) overlaid by `LEGACY_IMPORT_*` env vars.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("legacy_import").required(false))
            .add_source(Environment::with_prefix("LEGACY_IMPORT"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let settings: Settings = Config::builder()
            .set_override("pretty", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert!(!settings.pretty);
        assert_eq!(settings.log, "info");
        assert_eq!(settings.out_dir, None);
    }

    #[test]
    fn default_impl_matches_serde_defaults() {
        let settings = Settings::default();
        assert!(settings.pretty);
        assert_eq!(settings.log, "info");
    }
}
