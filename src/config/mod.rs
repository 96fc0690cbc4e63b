pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use crate::utils::validation::validate_unit_label;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// What a run needs to know, regardless of where the settings came from.
pub trait RunConfig: Validate {
    fn unit(&self) -> &str;
    fn verbose(&self) -> bool;
    fn monitor(&self) -> bool;
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "modwire")]
#[command(about = "Print the wiring trace of a compiled-in unit tree")]
pub struct CliConfig {
    /// Label of the unit to run
    #[arg(long, default_value = "AAA")]
    pub unit: String,

    /// Read run settings from a TOML file instead of the flags below
    #[arg(long)]
    pub config: Option<String>,

    /// List the units compiled into this build and exit
    #[arg(long)]
    pub list: bool,

    /// Dump the build configuration as JSON and exit
    #[arg(long)]
    pub build_info: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Report process stats after the run")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl RunConfig for CliConfig {
    fn unit(&self) -> &str {
        &self.unit
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn monitor(&self) -> bool {
        self.monitor
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_unit_label("unit", &self.unit)?;
        if let Some(path) = &self.config {
            crate::utils::validation::validate_path("config", path)?;
        }
        Ok(())
    }
}
