//! CLI argument definitions for the AHRI matcher.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ahri-match",
    version,
    about = "AHRI certification matcher - reconcile an HVAC catalog against the AHRI directory",
    long_about = "Reconcile a vendor HVAC equipment catalog against the AHRI certification\n\
                  database: generate system combinations per brand and topology, apply\n\
                  orientation/tonnage/cabinet compatibility filters, and label certified\n\
                  combinations with their certificate numbers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match a vendor equipment catalog against the AHRI directory.
    Run(RunArgs),

    /// List the supported system topologies.
    Topologies,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the vendor equipment catalog CSV.
    #[arg(value_name = "EQUIPMENT_CSV")]
    pub equipment_file: PathBuf,

    /// Path to the AHRI certification export CSV.
    #[arg(value_name = "CERTIFICATIONS_CSV")]
    pub certifications_file: PathBuf,

    /// Output CSV path.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "certified_matches.csv"
    )]
    pub output: PathBuf,

    /// Topology to generate, by request name (repeatable; defaults to all).
    ///
    /// Example: --topology "central ac & furnace" --topology furnace
    #[arg(long = "topology", value_name = "NAME")]
    pub topologies: Vec<String>,

    /// Certification requirement for central-ac-only systems.
    ///
    /// Surrounding practice is inconsistent on whether a condenser/coil
    /// pair needs an AHRI certificate; pick explicitly.
    #[arg(
        long = "central-ac-policy",
        value_enum,
        default_value = "tonnage-only"
    )]
    pub central_ac_policy: CentralAcPolicyArg,

    /// Match and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CentralAcPolicyArg {
    /// Accept central-ac pairs on tonnage compatibility alone.
    TonnageOnly,
    /// Require an AHRI certificate for central-ac pairs.
    RequireCertificate,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
