use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ro", about = concat!("[ ] rollover v", env!("CARGO_PKG_VERSION"), " - unfinished todos follow you"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different notes directory (default: current directory)
    #[arg(short = 'C', long = "notes-dir", global = true)]
    pub notes_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default rollover.toml into the notes directory
    Init(InitArgs),
    /// Carry incomplete todos from prior notes into today's note
    Run(RunArgs),
    /// Show what would be carried, without writing anything
    Preview(DateArgs),
    /// Show the todos parsed from one day's note
    List(DateArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing rollover.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct RunArgs {
    /// Treat DATE (in the configured note format) as today
    #[arg(long)]
    pub date: Option<String>,
    /// Print the would-be note text instead of writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct DateArgs {
    /// Date of the note, in the configured note format (default: today)
    #[arg(long)]
    pub date: Option<String>,
}
