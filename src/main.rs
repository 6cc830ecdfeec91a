use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spoofscan::application::dto::AuditOptions;
use spoofscan::domain::services::Classifier;
use spoofscan::infrastructure::file_reader::LocalHeaderReader;
use spoofscan::presentation::cli::{Cli, Commands, Shell, log_directive};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    let shell = Shell::new(Classifier::<LocalHeaderReader>::default());

    match &cli.command {
        Some(Commands::Analyze { path }) => shell.analyze_file(path),
        Some(command @ Commands::Audit { directory, .. }) => {
            let options = command.audit_options().unwrap_or_default();
            shell.audit_folder(directory, &options)?;
        }
        Some(Commands::ListSignatures) => shell.list_signatures(),
        None => shell.run_menu(&AuditOptions::default())?,
    }

    Ok(())
}

fn init_tracing(verbose: bool, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose, debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
