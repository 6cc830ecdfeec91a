//! CLI commands using clap

use crate::application::dto::{AuditOptions, ReportFormat};
use crate::infrastructure::persistence::DEFAULT_REPORT_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spoofscan - extension spoofing audit tool
///
/// Compares each file's extension with the type implied by its leading
/// bytes and flags the ones that disagree.
#[derive(Parser, Debug)]
#[command(name = "spoofscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Detect files whose extension does not match their signature", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single file
    Analyze {
        /// File to inspect
        path: PathBuf,
    },

    /// Audit every regular file in a folder and write a report
    Audit {
        /// Folder to audit
        directory: PathBuf,

        /// Report destination (overwritten)
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        report: PathBuf,

        /// Report layout
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Descend into subdirectories
        #[arg(short = 'R', long)]
        recursive: bool,

        /// Classify files one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// List supported file signatures
    ListSignatures,
}

impl Commands {
    /// Builds audit options from the `audit` arguments
    pub fn audit_options(&self) -> Option<AuditOptions> {
        match self {
            Commands::Audit {
                report,
                format,
                recursive,
                sequential,
                ..
            } => {
                let mut options = AuditOptions::default()
                    .with_report_path(report)
                    .with_format(*format);
                if *recursive {
                    options = options.recursive();
                }
                if *sequential {
                    options = options.sequential();
                }
                Some(options)
            }
            _ => None,
        }
    }
}

/// Maps the verbosity flags to a default tracing filter directive
pub fn log_directive(verbose: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "spoofscan", "audit", "/srv/share", "--format", "json", "-R", "--sequential",
        ])
        .unwrap();
        let options = cli.command.as_ref().and_then(Commands::audit_options).unwrap();
        assert_eq!(options.format, ReportFormat::Json);
        assert!(options.recursive);
        assert!(!options.parallel);
        assert_eq!(options.report_path, PathBuf::from(DEFAULT_REPORT_PATH));
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["spoofscan", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(log_directive(cli.verbose, cli.debug), "info");
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
