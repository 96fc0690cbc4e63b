pub mod a;
#[cfg(feature = "use-b-ba")]
pub mod b;
pub mod build_info;
pub mod config;
pub mod registry;
pub mod runner;
pub mod unit;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use build_info::BuildInfo;
pub use config::toml_config::TomlConfig;
pub use registry::{find_unit, UnitEntry, UNITS};
pub use runner::Runner;
pub use unit::Unit;
pub use utils::error::{Result, WireError};
