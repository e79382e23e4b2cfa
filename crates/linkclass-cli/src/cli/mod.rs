//! CLI for the linkclass URL classifier.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use linkclass_core::config::{self, LinkclassConfig, OutputFormat};
use std::io;
use std::path::PathBuf;

use commands::{run_classify, run_completions, run_demo, run_hosts, run_interactive};

/// Top-level CLI for linkclass.
#[derive(Debug, Parser)]
#[command(name = "linkclass")]
#[command(about = "linkclass: tell icafe and iku links apart", long_about = None)]
pub struct Cli {
    /// Print bare labels instead of JSON records.
    #[arg(long, global = true, conflicts_with = "json")]
    pub plain: bool,

    /// Print `{"result": ...}` JSON records (the default).
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also log to the XDG state dir instead of only stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    /// With no subcommand, runs `demo` followed by `interactive`.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify one or more URLs.
    Classify {
        /// URLs to classify. Quote empty or unusual values.
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,
    },

    /// Classify the configured demo URLs.
    Demo,

    /// Read URLs from stdin until `quit` or end of input.
    Interactive,

    /// List the recognized hosts and their link types.
    Hosts,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Output format after applying `--plain` / `--json` over the config.
    pub fn output_format(&self, cfg: &LinkclassConfig) -> OutputFormat {
        if self.plain {
            OutputFormat::Plain
        } else if self.json {
            OutputFormat::Json
        } else {
            cfg.output
        }
    }

    fn load_config(&self) -> Result<LinkclassConfig> {
        match &self.config {
            Some(path) => config::load_from(path),
            None => config::load_or_default(),
        }
    }

    pub fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let format = self.output_format(&cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Some(CliCommand::Classify { urls }) => run_classify(&mut out, &urls, format)?,
            Some(CliCommand::Demo) => run_demo(&mut out, &cfg.demo_urls, format)?,
            Some(CliCommand::Interactive) => {
                run_interactive(io::stdin().lock(), &mut out, &cfg.prompt, format)?;
            }
            Some(CliCommand::Hosts) => run_hosts(&mut out)?,
            Some(CliCommand::Completions { shell }) => run_completions(&mut out, shell),
            None => {
                run_demo(&mut out, &cfg.demo_urls, format)?;
                run_interactive(io::stdin().lock(), &mut out, &cfg.prompt, format)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
