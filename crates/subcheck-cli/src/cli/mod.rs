//! CLI for subcheck.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;
use subcheck_core::config;
use subcheck_core::export::ExportFormat;
use subcheck_core::history::RecentHistory;
use subcheck_core::rules::AssignmentType;

use commands::{
    run_check, run_clear_history, run_export, run_recent, run_rules, run_show, CheckArgs,
};

/// Top-level CLI for the submission link checker.
#[derive(Debug, Parser)]
#[command(name = "subcheck")]
#[command(about = "subcheck: check a submission link and score it", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/subcheck/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a submission link (GitHub repo, GitHub Pages site or Google Drive file).
    Check {
        /// Submission link.
        link: String,

        /// Assignment category: web-development, data-analysis, generative-ai,
        /// cybersecurity or graphics-design.
        #[arg(short, long, value_name = "TYPE")]
        assignment: AssignmentType,

        /// Also export the result (csv or json).
        #[arg(long, value_name = "FORMAT")]
        export: Option<ExportFormat>,

        /// Export destination; `-` for stdout. Defaults to result.csv / result.json.
        #[arg(short, long, value_name = "PATH", requires = "export")]
        output: Option<PathBuf>,

        /// Do not add the result to the recent history.
        #[arg(long)]
        no_save: bool,
    },

    /// List recent results, newest first.
    Recent,

    /// Show the result card of a recent result.
    Show {
        /// Position in the recent list (1 = newest).
        n: usize,
    },

    /// Export a recent result (the newest unless --index is given).
    Export {
        /// csv or json.
        format: ExportFormat,

        /// Position in the recent list (1 = newest).
        #[arg(long, value_name = "N")]
        index: Option<usize>,

        /// Destination; `-` for stdout. Defaults to result.csv / result.json.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the required-file rules per assignment category.
    Rules {
        /// Only this category.
        #[arg(short, long, value_name = "TYPE")]
        assignment: Option<AssignmentType>,
    },

    /// Forget all recent results.
    ClearHistory,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut std::io::stdout());
            return Ok(());
        }

        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        if let CliCommand::Rules { assignment } = cli.command {
            return run_rules(&cfg, assignment);
        }

        let history_path = RecentHistory::default_path()?;
        let load_history = || RecentHistory::load(&history_path, cfg.recent_limit);

        match cli.command {
            CliCommand::Check {
                link,
                assignment,
                export,
                output,
                no_save,
            } => {
                let args = CheckArgs {
                    link,
                    assignment,
                    export,
                    output,
                };
                // --no-save never touches the history file.
                let mut history = if no_save { None } else { Some(load_history()?) };
                run_check(&cfg, history.as_mut(), args)?
            }
            CliCommand::Recent => run_recent(&load_history()?)?,
            CliCommand::Show { n } => run_show(&load_history()?, n)?,
            CliCommand::Export {
                format,
                index,
                output,
            } => run_export(&load_history()?, format, index, output.as_deref())?,
            CliCommand::ClearHistory => {
                run_clear_history(RecentHistory::empty(&history_path, cfg.recent_limit))?
            }
            CliCommand::Rules { .. } | CliCommand::Completions { .. } => {
                unreachable!("handled before the history is loaded")
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
