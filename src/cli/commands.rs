//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "questions")]
#[command(about = "Question bank HTTP service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Content root holding questions.toml and Data/questoes.json
    /// (default: $QUESTIONS_ROOT, then the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new question bank
    Init {
        /// Directory to initialize (default: --root, $QUESTIONS_ROOT, then
        /// the current directory)
        path: Option<PathBuf>,
    },

    /// Run the HTTP server
    Serve {
        /// Listen address, overriding the config file (e.g., 0.0.0.0:8080)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List questions, optionally filtered
    List {
        /// Area contains this text (case-insensitive)
        #[arg(long)]
        area: Option<String>,

        /// Some subject contains this text
        #[arg(long)]
        subject: Option<String>,

        /// Some related course contains this text
        #[arg(long)]
        course: Option<String>,

        /// Some tag contains this text
        #[arg(long)]
        tag: Option<String>,
    },

    /// List the distinct areas in the bank
    Areas,
}
