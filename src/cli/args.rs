//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Hierarchical menu ids over a flat record store
#[derive(Parser, Debug)]
#[command(name = "menuid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Start id, overrides all config layers
    #[arg(long, global = true)]
    pub start_id: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a script and print the visible menu tree
    Tree {
        /// Operation script
        #[arg(value_hint = ValueHint::FilePath)]
        script: PathBuf,
        /// Print JSON instead of a tree diagram
        #[arg(long)]
        json: bool,
    },

    /// Replay a script and print every stored menu, removed ones included
    List {
        /// Operation script
        #[arg(value_hint = ValueHint::FilePath)]
        script: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
