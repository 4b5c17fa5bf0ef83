//! Local configuration for terminal sessions.
//!
//! The mini-app itself has nothing to configure: the API origin is fixed and
//! the user name comes from the host session. A terminal run has no host, so
//! the config file stands in for it (display name) and for the page shell
//! (the department list shown on the first screen).
//!
//! The file is `config.json` in the platform data directory, pretty-printed.
//! A missing file means [`Config::default`].
//!
//! ```rust,no_run
//! use deptask::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.first_name = Some("Olga".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Departments offered when nothing is configured.
pub const DEFAULT_DEPARTMENTS: [&str; 4] = ["Sales", "Marketing", "Development", "Support"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_departments")]
    pub departments: Vec<String>,

    /// Display name reported to the backend as author/completer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

fn default_departments() -> Vec<String> {
    DEFAULT_DEPARTMENTS.iter().map(|d| d.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            departments: default_departments(),
            first_name: None,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, if any.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Splits a comma separated department list, dropping blanks and repeats.
    pub fn parse_departments(input: &str) -> Vec<String> {
        let mut departments: Vec<String> = Vec::new();
        for name in input.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if !departments.iter().any(|d| d == name) {
                departments.push(name.to_string());
            }
        }
        departments
    }

    /// Interactive setup, starting from the current values.
    pub fn init() -> Result<Self> {
        let config = Config::read()?;

        let departments: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDepartments.to_string())
            .default(config.departments.join(", "))
            .interact_text()?;
        let departments = Self::parse_departments(&departments);
        if departments.is_empty() {
            msg_bail_anyhow!(Message::DepartmentsRequired);
        }

        let first_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFirstName.to_string())
            .default(config.first_name.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let first_name = Some(first_name.trim().to_string()).filter(|n| !n.is_empty());

        Ok(Config { departments, first_name })
    }
}
