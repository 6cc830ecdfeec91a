//! Terminal front end
//!
//! Drives the use cases for the `analyze`, `audit` and `list-signatures`
//! commands and for the interactive numbered menu.

use crate::application::dto::AuditOptions;
use crate::application::{AnalyzeFileUseCase, AuditDirectoryUseCase};
use crate::domain::entities::AuditReport;
use crate::domain::repositories::HeaderReader;
use crate::domain::services::Classifier;
use crate::presentation::cli::ProgressReporter;
use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Menu entry analyzing one file
pub const MENU_ANALYZE: &str = "1";
/// Menu entry auditing a folder
pub const MENU_AUDIT: &str = "2";
/// Menu entry leaving the loop
pub const MENU_EXIT: &str = "3";

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AnalyzeFile,
    AuditFolder,
    Exit,
}

impl MenuChoice {
    /// Parses the user's answer; anything unrecognised yields `None`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            MENU_ANALYZE => Some(MenuChoice::AnalyzeFile),
            MENU_AUDIT => Some(MenuChoice::AuditFolder),
            MENU_EXIT => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Terminal session over a shared classifier
pub struct Shell<R: HeaderReader> {
    classifier: Arc<Classifier<R>>,
    analyze: AnalyzeFileUseCase<R>,
    audit: AuditDirectoryUseCase<R>,
}

impl<R: HeaderReader> Shell<R> {
    pub fn new(classifier: Classifier<R>) -> Self {
        let classifier = Arc::new(classifier);
        Self {
            analyze: AnalyzeFileUseCase::new(Arc::clone(&classifier)),
            audit: AuditDirectoryUseCase::new(Arc::clone(&classifier)),
            classifier,
        }
    }

    /// Prints the verdict for one file
    pub fn analyze_file(&self, path: &Path) {
        println!("\n{}", style("[*] Inspecting file header...").cyan());
        let verdict = self.analyze.execute(path);
        if verdict.is_spoofed() {
            println!("{}", style(verdict.summary()).red().bold());
        } else {
            println!("{}", verdict.summary());
        }
    }

    /// Audits a folder, prints the results block and writes the report
    pub fn audit_folder(&self, directory: &Path, options: &AuditOptions) -> Result<AuditReport> {
        println!(
            "\n{} {}",
            style("[*] Auditing directory:").cyan(),
            directory.display()
        );

        let progress = ProgressReporter::for_audit(0);

        let report = self
            .audit
            .execute(directory, options, Some(progress.audit_callback()))
            .with_context(|| format!("Failed to audit {}", directory.display()))?;
        progress.finish("done");

        print_results(&report);

        let saved = self
            .audit
            .save_report(&report, options)
            .context("Failed to write audit report")?;
        println!("\n[+] Report saved to '{}'", saved.display());

        Ok(report)
    }

    /// Prints the signature table
    pub fn list_signatures(&self) {
        println!("{}", style("Supported signatures:").green().bold());
        for signature in self.classifier.registry().signatures() {
            println!("  {signature}");
        }
    }

    /// Runs the numbered menu until the user exits
    pub fn run_menu(&self, options: &AuditOptions) -> Result<()> {
        let theme = ColorfulTheme::default();

        loop {
            print_banner();

            let answer: String = Input::with_theme(&theme)
                .with_prompt("Select action")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read menu selection")?;

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::AnalyzeFile) => {
                    if let Some(path) = prompt_path(&theme, "File to analyze")? {
                        self.analyze_file(&path);
                    }
                }
                Some(MenuChoice::AuditFolder) => {
                    if let Some(directory) = prompt_path(&theme, "Folder to audit")? {
                        // A bad folder sends the user back to the menu
                        if let Err(e) = self.audit_folder(&directory, options) {
                            println!("\n[!] {}", style(format!("{e:#}")).yellow());
                        }
                    }
                }
                Some(MenuChoice::Exit) => {
                    println!("System offline. Stay secure.");
                    return Ok(());
                }
                None => {}
            }
        }
    }
}

fn prompt_path(theme: &ColorfulTheme, prompt: &str) -> Result<Option<PathBuf>> {
    let answer: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read path")?;
    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}

fn print_results(report: &AuditReport) {
    println!("\n\n--- AUDIT RESULTS ---");
    if report.is_clean() {
        println!(
            "{}",
            style("No spoofed files detected in this directory.").green()
        );
        return;
    }

    println!(
        "{}",
        style(format!(
            "WARNING: {} spoofed files identified!",
            report.spoofed_count()
        ))
        .red()
        .bold()
    );
    for verdict in report.spoofed() {
        println!("{}", verdict.summary());
    }
}

fn print_banner() {
    let rule = "=".repeat(60);
    println!();
    println!("{rule}");
    println!("{}", style("      SPOOFSCAN AUDIT TOOL").cyan().bold());
    println!("{rule}");
    println!(" 1. Analyze Single File      2. Audit Folder      3. Exit");
    println!("{rule}");
}
