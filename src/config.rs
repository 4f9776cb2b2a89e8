//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::str::FromStr;

use crate::constants::driver::{DEFAULT_REFERENCE, OUTPUT_VAR, REFERENCE_VAR};
use crate::error::{Error, Result};

/// How the driver prints a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `--- NAME ---` blocks, one verse per line.
    #[default]
    Text,
    /// Pretty-printed JSON object keyed by translation.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::config(
                format!("unknown output format {other:?} in {OUTPUT_VAR}"),
                "Use \"text\" or \"json\"",
            )),
        }
    }
}

/// Configuration for the driver.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Reference string to compare across translations
    pub reference: String,
    /// Output format for the report
    pub output: OutputFormat,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            reference: DEFAULT_REFERENCE.to_string(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(reference) = var(REFERENCE_VAR) {
            if reference.trim().is_empty() {
                return Err(Error::config(
                    format!("{REFERENCE_VAR} is set but empty"),
                    "Unset it to use the default, or give a reference like \"John 3:16\"",
                ));
            }
            config.reference = reference;
        }

        if let Some(output) = var(OUTPUT_VAR) {
            config.output = output.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.reference, DEFAULT_REFERENCE);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.app_name(), env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn reads_reference_and_output() {
        let config =
            config_from(&[(REFERENCE_VAR, "Ruth 1:16-17"), (OUTPUT_VAR, "JSON")]).unwrap();
        assert_eq!(config.reference, "Ruth 1:16-17");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_output() {
        let err = config_from(&[(OUTPUT_VAR, "xml")]).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn rejects_blank_reference() {
        assert!(config_from(&[(REFERENCE_VAR, "  ")]).is_err());
    }
}
