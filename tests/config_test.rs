use modwire::config::RunConfig;
use modwire::utils::validation::Validate;
use modwire::{find_unit, TomlConfig};
use std::io::Write as _;

#[test]
fn toml_config_drives_a_full_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[run]\nunit = \"ABA\"\nverbose = true").unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let entry = find_unit(config.unit()).unwrap();
    let mut out = Vec::new();
    (entry.print)(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "ABA\n");
}

#[test]
fn toml_config_rejects_a_unit_path() {
    let config = TomlConfig::from_toml_str("[run]\nunit = \"A/AA/AAA\"\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn run_config_defaults_are_off() {
    let config = TomlConfig::from_toml_str("[run]\nunit = \"AAA\"\n").unwrap();
    assert!(!config.verbose());
    assert!(!config.monitor());
}

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use clap::Parser;
    use modwire::CliConfig;

    #[test]
    fn cli_and_toml_agree_through_the_run_config_seam() {
        let cli = CliConfig::try_parse_from(["modwire", "--unit", "AAB", "--monitor"]).unwrap();
        let toml = TomlConfig::from_toml_str("[run]\nunit = \"AAB\"\nmonitor = true\n").unwrap();

        let configs: [&dyn RunConfig; 2] = [&cli, &toml];
        for config in configs {
            assert_eq!(config.unit(), "AAB");
            assert!(config.monitor());
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn cli_accepts_a_config_path() {
        let cli = CliConfig::try_parse_from(["modwire", "--config", "run.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("run.toml"));
        assert!(cli.validate().is_ok());
    }
}
