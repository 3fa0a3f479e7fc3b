//! Init command implementation

use crate::Config;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value("connect-docs.yaml"),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Output path is required"))?;

    if output_path.exists() && !matches.get_flag("force") {
        return Err(anyhow!(
            "{} already exists, use --force to overwrite it",
            output_path.display()
        ));
    }

    info!("Initializing configuration file: {:?}", output_path);
    Config::default().save_to_file(&output_path)?;

    println!("Configuration file created: {}", output_path.display());
    println!("It documents the built-in sample plugins; edit scan_roots to document your own.");

    Ok(())
}
