//! Plugins command implementation

use crate::cli::utils;
use crate::plugin::ScanRoot;
use anyhow::Result;
use clap::{ArgMatches, Command};
use connect_docs_plugin::PluginKind;

pub fn command() -> Command {
    Command::new("plugins")
        .about("List the plugin classes discovered under each scan root")
        .arg(utils::config_arg())
        .arg(
            clap::Arg::new("scan-root")
                .long("scan-root")
                .help("Scan this namespace instead of the configured ones")
                .value_name("ROOT")
                .action(clap::ArgAction::Append),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let roots: Vec<ScanRoot> = match matches.get_many::<String>("scan-root") {
        Some(roots) => roots.map(|r| ScanRoot::from(r.as_str())).collect(),
        None => utils::load_config(matches)?.scan_roots(),
    };

    let app = utils::create_app(crate::Config::default());
    for root in &roots {
        let plugin = app.load_plugin(root)?;
        println!("{} ({} classes)", root, plugin.len());

        for kind in PluginKind::ALL {
            let classes = plugin.classes(kind);
            if classes.is_empty() {
                continue;
            }
            println!("  {}:", kind.title());
            for class in classes {
                println!(
                    "    {} [{} example(s)]",
                    class.qualified_name,
                    class.examples.len()
                );
            }
        }
    }

    Ok(())
}
