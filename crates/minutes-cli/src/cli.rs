//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Minutes CLI - Pull action items out of meeting transcripts.
#[derive(Debug, Parser)]
#[command(name = "minutes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MINUTES_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract action items from a transcript
    Extract(ExtractArgs),

    /// Print the LLM extraction prompt for a transcript
    Prompt(TranscriptArgs),

    /// Convert a saved LLM response into action items
    Import(TranscriptArgs),
}

/// Input file and reference date shared by every command.
#[derive(Debug, Clone, Parser)]
pub struct TranscriptArgs {
    /// Input file; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Day relative dates resolve against (YYYY-MM-DD)
    #[arg(short, long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the extract command.
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: TranscriptArgs,

    /// Include extraction metadata alongside the items
    #[arg(long)]
    pub metadata: bool,
}
