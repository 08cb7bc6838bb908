use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "belfast", about = "Belfast Group RDF data cleaning", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite groupsheet references to content-derived identifiers
    ///
    /// Finds every manuscript mentioned by a document about the Belfast
    /// Group, computes a stable identifier from its author and titles,
    /// and rewrites each file in place. Files without groupsheets are
    /// left untouched.
    Smush {
        /// Turtle files to process (rewritten in place)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Topic IRI that marks a document as relevant
        #[arg(long)]
        topic: Option<String>,

        /// Namespace for the generated identifiers
        #[arg(long)]
        namespace: Option<String>,
    },
}
