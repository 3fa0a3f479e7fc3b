//! Validate command implementation

use crate::cli::utils;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate every example without writing documentation")
        .arg(utils::config_arg())
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating examples");

    let config = utils::load_config(matches)?;
    let app = utils::create_app(config);

    let result = app.validate().await?;
    println!(
        "Validated {} examples across {} classes",
        result.statistics.examples_rendered, result.statistics.classes_documented
    );

    for path in app.unreferenced_examples()? {
        println!("  Warning: example not referenced by any plugin: {}", path.display());
    }

    if !result.is_success() {
        for failure in &result.failures {
            eprintln!("  Error: {failure}");
        }
        return Err(anyhow!("{} example(s) failed validation", result.failures.len()));
    }

    println!("All examples are valid!");
    Ok(())
}
