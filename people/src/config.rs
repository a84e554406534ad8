//! Configuration management for the people table.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the people array (`PEOPLE_FILE`)
    pub people_file: PathBuf,
    /// Initial query string (`PEOPLE_QUERY`)
    pub query: String,
    /// Slug of the person to highlight (`PEOPLE_SELECTED`)
    pub selected: Option<String>,
    /// Tracing filter directives (`RUST_LOG`)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            people_file: PathBuf::from("people.json"),
            query: String::new(),
            selected: None,
            log_filter: "people_table=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to [`Config::default`]. An empty
    /// `PEOPLE_SELECTED` counts as missing.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            people_file: lookup("PEOPLE_FILE").map_or(defaults.people_file, PathBuf::from),
            query: lookup("PEOPLE_QUERY").unwrap_or(defaults.query),
            selected: lookup("PEOPLE_SELECTED").filter(|slug| !slug.is_empty()),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }

    /// Check the loaded values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PEOPLE_FILE` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.people_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                key: "PEOPLE_FILE",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.people_file, PathBuf::from("people.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            ("PEOPLE_FILE", "/data/family.json"),
            ("PEOPLE_QUERY", "sort=born&order=desc"),
            ("PEOPLE_SELECTED", "emma-de-milliano-1876"),
            ("RUST_LOG", "debug"),
        ]));

        assert_eq!(config.people_file, PathBuf::from("/data/family.json"));
        assert_eq!(config.query, "sort=born&order=desc");
        assert_eq!(config.selected.as_deref(), Some("emma-de-milliano-1876"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn empty_selection_is_none() {
        let config = Config::from_lookup(lookup(&[("PEOPLE_SELECTED", "")]));
        assert_eq!(config.selected, None);
    }

    #[test]
    fn empty_people_file_is_rejected() {
        let config = Config::from_lookup(lookup(&[("PEOPLE_FILE", "")]));
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("PEOPLE_FILE"));
    }
}
