use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use refalign_core::io::ReportFormat;
use refalign_core::ScorerKind;
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::Config;
use error::{print_error_and_exit, CliError};

#[derive(Parser)]
#[command(name = "refalign")]
#[command(about = "refalign - best-offset alignment of short queries against a reference")]
#[command(version)]
#[command(long_about = "
refalign slides every query along a reference sequence and reports the offset
with the highest score. Sequences use the alphabet A, C, G, T plus the '-' and
'X' placeholders; input is case-insensitive.

Examples:
  refalign align --ref reference.txt --qry queries.txt
  refalign align --ref-seq ACGTACGTACGT --query ACGT --query TGCA --format json
  refalign align --ref reference.txt.gz --qry queries.txt --out alignments.txt
  refalign score ACGT A-GT
  refalign validate --ref reference.txt --qry queries.txt
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align a batch of queries against a reference
    Align {
        /// Reference sequence file (one sequence, possibly line-wrapped)
        #[arg(long, conflicts_with = "ref_seq")]
        r#ref: Option<PathBuf>,

        /// Reference sequence given inline
        #[arg(long)]
        ref_seq: Option<String>,

        /// Query file (one sequence per line)
        #[arg(long, conflicts_with = "query")]
        qry: Option<PathBuf>,

        /// Query sequence given inline (repeatable, order is kept)
        #[arg(long)]
        query: Vec<String>,

        /// Scoring strategy: match-mismatch or overlap
        #[arg(long)]
        scorer: Option<ScorerKind>,

        /// Output file for the report
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Report format
        #[arg(long)]
        format: Option<FormatArg>,

        /// Do not print the report
        #[arg(long)]
        no_report: bool,
    },

    /// Score two equal-length sequences against each other
    Score {
        /// Reference-side sequence
        reference: String,

        /// Query-side sequence
        query: String,

        /// Scoring strategy: match-mismatch or overlap
        #[arg(long)]
        scorer: Option<ScorerKind>,
    },

    /// Check that sequence files only use the supported alphabet
    Validate {
        /// Reference sequence file
        #[arg(long)]
        r#ref: Option<PathBuf>,

        /// Query file
        #[arg(long)]
        qry: Option<PathBuf>,
    },

    /// Print an example configuration file
    Config {
        /// Write the example to this path instead of stdout
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Align {
            r#ref,
            ref_seq,
            qry,
            query,
            scorer,
            out,
            format,
            no_report,
        } => {
            commands::align::execute(
                &config,
                r#ref,
                ref_seq,
                qry,
                query,
                scorer,
                out,
                format.map(Into::into),
                no_report,
            )?;
        }

        Commands::Score { reference, query, scorer } => {
            commands::score::execute(&config, reference, query, scorer)?;
        }

        Commands::Validate { r#ref, qry } => {
            commands::validate::execute(r#ref, qry)?;
        }

        Commands::Config { write } => {
            commands::config::execute(write)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => print_error_and_exit(cli_err),
            None => {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}
