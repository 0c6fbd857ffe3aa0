use clap::Parser;
use logmigrate_cli::errors::ErrorHandler;
use logmigrate_cli::structs::cli::Cli;
use logmigrate_cli::workers::command_runner::CommandRunner;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = CommandRunner::new().run_command(cli.command) {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
