use clap::Parser;
use modwire::config::RunConfig;
use modwire::utils::{logger, validation::Validate};
use modwire::{BuildInfo, CliConfig, Runner, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    let file_config = match cli.config.as_deref() {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config {}: {}", path, e);
                std::process::exit(e.exit_code());
            }
        },
        None => None,
    };

    // A log level from the config file wins over --verbose.
    match file_config.as_ref().and_then(|config| config.log_directives()) {
        Some(directives) => logger::init_with_directives(&directives),
        None => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("Starting modwire");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if cli.build_info {
        let info = BuildInfo::current();
        match serde_json::to_string_pretty(&info) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Failed to encode build info: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.list {
        for entry in modwire::registry::UNITS {
            println!("{}", entry.label);
        }
        return;
    }

    let config: &dyn RunConfig = match file_config.as_ref() {
        Some(config) => config,
        None => &cli,
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let entry = match modwire::find_unit(config.unit()) {
        Ok(entry) => entry,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Use --list to see the units compiled into this build");
            std::process::exit(e.exit_code());
        }
    };

    let mut runner = Runner::new(config.monitor());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = runner.run(entry, &mut out) {
        tracing::error!("Run failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Run completed");
}
