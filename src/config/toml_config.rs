use crate::config::RunConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_unit_label, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: RunSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    pub unit: String,
    pub verbose: Option<bool>,
    pub monitor: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Filter directives for the logger, when the file sets a level.
    pub fn log_directives(&self) -> Option<String> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .map(|level| format!("modwire={level}"))
    }
}

impl RunConfig for TomlConfig {
    fn unit(&self) -> &str {
        &self.run.unit
    }

    fn verbose(&self) -> bool {
        self.run.verbose.unwrap_or(false)
    }

    fn monitor(&self) -> bool {
        self.run.monitor.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_unit_label("run.unit", &self.run.unit)?;

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_one_of("logging.level", level, LOG_LEVELS)?;
        }

        Ok(())
    }
}
