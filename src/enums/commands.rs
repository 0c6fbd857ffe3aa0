use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample rule configuration file
    Init {
        #[clap(short, long)]
        path: Option<String>,
    },
    /// Apply the configured rewrite rules to one file
    Migrate {
        file: String,
        #[clap(short, long)]
        config: Option<String>,
    },
    /// Repair over-indented lines left behind by earlier rewrites
    Repair {
        file: String,
        #[clap(short, long)]
        config: Option<String>,
    },
    /// Reflow collapsed metadata blocks onto canonical lines
    Reflow {
        file: String,
        #[clap(short, long)]
        config: Option<String>,
    },
    /// Count residual console-style calls in the given files
    Verify {
        files: Vec<String>,
        #[clap(short, long)]
        pattern: Option<String>,
        #[clap(long)]
        json: bool,
    },
    /// Show the rule table a configuration file defines
    List {
        #[clap(short, long)]
        config: Option<String>,
    },
}
