//! `sample-kit`: run the stack, HTML, arithmetic, and reservation helpers from
//! the command line.
//!
//! Reports go to stdout (plain or JSON), diagnostics to stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use sample_kit::commands::{self, CandidateRole, OwnerRole, Report};
use sample_kit::exit_codes;
use sample_kit::io::config::{
    DEFAULT_CONFIG_PATH, KitConfig, OutputFormat, load_config, write_config,
};
use sample_kit::logging;

#[derive(Parser)]
#[command(
    name = "sample-kit",
    version,
    about = "Stack, HTML, arithmetic, and reservation helpers"
)]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print reports as JSON regardless of config.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Push values in order, then pop `--pop` times.
    Stack {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        #[arg(long, default_value_t = 0)]
        pop: usize,
    },
    /// Wrap text in `<b>` tags.
    Bold { text: String },
    /// Wrap text in `<i>` tags.
    Italic { text: String },
    /// Render items as a `<ul>` list.
    List { items: Vec<String> },
    /// Add two integers.
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Divide two integers, printing a fractional quotient.
    Divide {
        #[arg(allow_negative_numbers = true)]
        numerator: i32,
        #[arg(allow_negative_numbers = true)]
        denominator: i32,
    },
    /// Print odd numbers from 1 up to the limit.
    Odds {
        #[arg(allow_negative_numbers = true)]
        limit: i32,
    },
    /// Check whether a candidate may cancel a reservation.
    Cancel {
        #[arg(long, value_enum)]
        owner: OwnerRole,
        #[arg(long, value_enum)]
        candidate: CandidateRole,
    },
    /// Write the default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    // `init-config` must work even when the existing file is invalid.
    let cfg = match cli.command {
        Command::InitConfig { .. } => KitConfig::default(),
        _ => load_config(&cli.config)?,
    };
    logging::init(&cfg.log_filter);
    debug!(config = %cli.config.display(), "config loaded");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        cfg.output
    };
    let report = dispatch(cli.command, &cli.config, &cfg)?;
    println!("{}", report.render(format)?);
    Ok(report.exit_code())
}

fn dispatch(command: Command, config_path: &Path, cfg: &KitConfig) -> Result<Report> {
    let report = match command {
        Command::Stack { values, pop } => commands::stack(&values, pop)?,
        Command::Bold { text } => commands::bold_text(&text),
        Command::Italic { text } => commands::italic_text(&text),
        Command::List { items } => commands::list(&items),
        Command::Add { a, b } => commands::sum(a, b),
        Command::Divide {
            numerator,
            denominator,
        } => commands::quotient(numerator, denominator)?,
        Command::Odds { limit } => commands::odds(limit, cfg)?,
        Command::Cancel { owner, candidate } => commands::cancel(owner, candidate),
        Command::InitConfig { force } => init_config(config_path, force)?,
    };
    Ok(report)
}

fn init_config(path: &Path, force: bool) -> Result<Report> {
    let written = force || !path.exists();
    if written {
        write_config(path, &KitConfig::default())
            .with_context(|| format!("initialize {}", path.display()))?;
    }
    Ok(Report::Config {
        path: path.display().to_string(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stack_with_negative_values() {
        let cli = Cli::parse_from(["sample-kit", "stack", "1", "-2", "--pop", "1"]);
        match cli.command {
            Command::Stack { values, pop } => {
                assert_eq!(values, vec![1, -2]);
                assert_eq!(pop, 1);
            }
            _ => panic!("expected stack command"),
        }
    }

    #[test]
    fn parse_odds_negative_limit() {
        let cli = Cli::parse_from(["sample-kit", "odds", "-1"]);
        assert!(matches!(cli.command, Command::Odds { limit: -1 }));
    }

    #[test]
    fn parse_cancel_roles() {
        let cli = Cli::parse_from([
            "sample-kit",
            "cancel",
            "--owner",
            "none",
            "--candidate",
            "admin",
        ]);
        assert!(matches!(
            cli.command,
            Command::Cancel {
                owner: OwnerRole::None,
                candidate: CandidateRole::Admin,
            }
        ));
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() {
        let cli = Cli::parse_from(["sample-kit", "add", "2", "3", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }
}
