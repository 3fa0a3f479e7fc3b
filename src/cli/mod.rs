//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("connect-docs")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Validate Kafka Connect style plugin examples and generate their documentation")
            .subcommand_negates_reqs(true)
            .subcommand(commands::init::command())
            .subcommand(commands::generate::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::plugins::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("generate", sub_matches)) => commands::generate::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            Some(("plugins", sub_matches)) => commands::plugins::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            _ => {
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use clap::Arg;
    use std::path::PathBuf;

    /// The `-c/--config` argument shared by most commands
    pub fn config_arg() -> Arg {
        Arg::new("config")
            .short('c')
            .long("config")
            .help("Configuration file path")
            .value_name("FILE")
    }

    /// Get configuration file path from arguments or look for a default one
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Ok(PathBuf::from(config_path));
        }

        let mut default_paths = vec![
            PathBuf::from("connect-docs.yaml"),
            PathBuf::from(".connect-docs.yaml"),
        ];
        if let Ok(config_dir) = crate::utils::get_config_dir() {
            default_paths.push(config_dir.join("config.yaml"));
        }

        default_paths
            .into_iter()
            .find(|path| path.exists())
            .ok_or_else(|| anyhow!("No configuration file found. Use --config to specify a file or create one with 'connect-docs init'"))
    }

    /// Load configuration from file
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        let config_path = get_config_path(matches)?;
        crate::Config::from_file(&config_path)
    }

    /// Create the documentation harness
    pub fn create_app(config: crate::Config) -> crate::DocsHarness {
        crate::DocsHarness::new(config)
    }
}
