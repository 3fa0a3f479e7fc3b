//! Info command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};
use connect_docs_plugin::PluginKind;

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    println!("connect-docs - Connect plugin documentation generator");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));

    if matches.get_flag("detailed") {
        println!("\nDocumented plugin kinds:");
        for kind in PluginKind::ALL {
            println!("  - {} ({}/)", kind.title(), kind.directory());
        }
        println!("\nBuilt-in sample plugins: {}", crate::builtin::NAMESPACE);
        println!("Registered classes: {}", crate::plugin::Registry::global().len());
    }

    Ok(())
}
