//! Configuration handling for the TUI

use crate::state::{EmailRule, FormOptions};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the enquiry form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Options of the category selector
    pub categories: Option<Vec<String>>,
    /// Radios of the preferred contact method group
    pub contact_methods: Option<Vec<String>>,
    /// Regex an email address must match
    pub email_pattern: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "enquiry", "enquiry-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::info!("loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Build the form options, falling back to defaults for anything unset or unusable
    pub fn form_options(&self) -> FormOptions {
        let mut options = FormOptions::default();

        if let Some(categories) = non_empty(&self.categories) {
            options.categories = categories;
        }
        if let Some(methods) = non_empty(&self.contact_methods) {
            options.contact_methods = methods;
        }
        if let Some(pattern) = &self.email_pattern {
            match EmailRule::from_pattern(pattern) {
                Ok(rule) => options.email = rule,
                Err(err) => {
                    tracing::warn!(
                        "ignoring invalid email_pattern {pattern:?}, using {:?}: {err}",
                        options.email.as_str()
                    );
                }
            }
        }

        options
    }
}

/// Drop blank entries; `None` when nothing usable is left
fn non_empty(list: &Option<Vec<String>>) -> Option<Vec<String>> {
    let cleaned: Vec<String> = list
        .iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}
