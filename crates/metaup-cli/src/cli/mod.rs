//! CLI for the metaup injector.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use metaup_core::config;

use commands::{run_check, run_inject, run_scan, run_userscript};

/// Top-level CLI for the metaup injector.
#[derive(Debug, Parser)]
#[command(name = "metaup")]
#[command(
    about = "metaup: append upgrade-insecure-requests CSP meta tags to HTML pages",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite an HTML document for the given page URL.
    Inject {
        /// Page URL the document was served from; checked against the
        /// configured match patterns.
        url: String,

        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        path: String,

        /// Write the result back to the input file (requires a file path).
        #[arg(long, conflicts_with = "output")]
        in_place: bool,

        /// Write the result to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Inject even when no match pattern applies.
        #[arg(long)]
        force: bool,
    },

    /// Check whether a URL matches the configured patterns (exit 1 on no match).
    Check {
        /// Page URL to test.
        url: String,
    },

    /// Count upgrade-insecure-requests CSP meta tags already in a document.
    Scan {
        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        path: String,
    },

    /// Render the configured manifest as a Tampermonkey userscript.
    Userscript,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Inject {
                url,
                path,
                in_place,
                output,
                force,
            } => run_inject(&cfg, &url, &path, in_place, output.as_deref(), force)?,
            CliCommand::Check { url } => run_check(&cfg, &url)?,
            CliCommand::Scan { path } => run_scan(&path)?,
            CliCommand::Userscript => run_userscript(&cfg)?,
            CliCommand::Completions { shell } => {
                let mut cmd = Cli::command();
                clap_complete::generate(shell, &mut cmd, "metaup", &mut std::io::stdout());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
