//! Generate command implementation

use crate::cli::utils;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use connect_docs_generator::{FsSink, GenerationResult, MemorySink};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("generate")
        .about("Validate every example and write the documentation")
        .arg(utils::config_arg())
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory")
                .value_name("DIR"),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Don't write files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("fail-fast")
                .long("fail-fast")
                .help("Stop on the first failing example")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Starting documentation generation");

    let mut config = utils::load_config(matches)?;

    if let Some(output_path) = matches.get_one::<String>("output") {
        config.output.base_path = PathBuf::from(output_path);
    }

    if matches.get_flag("fail-fast") {
        config.generation.fail_fast = true;
    }

    let app = utils::create_app(config);

    let result = if matches.get_flag("dry-run") {
        println!("Dry run mode - no files will be written");
        let sink = MemorySink::new();
        let result = app.generate(&sink).await?;
        for path in sink.paths().await {
            println!("  would write {}", path.display());
        }
        result
    } else {
        app.generate(&FsSink).await?
    };

    report(&result);

    if !result.is_success() {
        return Err(anyhow!("{} example(s) failed", result.failures.len()));
    }
    Ok(())
}

fn report(result: &GenerationResult) {
    let stats = &result.statistics;
    println!("Classes documented: {}", stats.classes_documented);
    println!("Examples rendered: {}", stats.examples_rendered);
    println!("Schemas documented: {}", stats.schemas_documented);
    println!("Files generated: {}", stats.files_generated);
    println!("Processing time: {}ms", stats.total_processing_time_ms);

    for failure in &result.failures {
        eprintln!("  Error: {failure}");
    }
}
