use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kira-oncoview",
    version,
    about = "Survival statistics and copy-number annotation merging"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Survival(SurvivalArgs),
    Annotate(AnnotateArgs),
    Messages(MessagesArgs),
}

#[derive(Debug, Args)]
pub struct SurvivalArgs {
    #[arg(long, help = "Survival TSV (optionally gzipped)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, help = "Chart title used in the reports")]
    pub title: Option<String>,
}

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    #[arg(long, help = "Annotation bundle JSON (optionally gzipped)")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct MessagesArgs {
    #[arg(long, help = "Message list JSON")]
    pub input: PathBuf,

    #[arg(long, help = "Current path and query string")]
    pub location: String,

    #[arg(long, help = "Current time in epoch milliseconds (default: now)")]
    pub now: Option<i64>,

    #[arg(long, help = "Message id already dismissed (repeatable)")]
    pub dismissed: Vec<String>,

    #[arg(long, help = "Message id postponed for this session (repeatable)")]
    pub reminded: Vec<String>,
}
