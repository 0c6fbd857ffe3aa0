use clap::Parser;

use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "logmigrate")]
#[clap(about = "Batch rewriter for console-to-structured-logger migrations", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
