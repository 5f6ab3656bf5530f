//! Command-line interface definitions for wiretext

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the validate command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One diagnostic per line
    #[default]
    Text,
    /// JSON array of diagnostics
    Json,
}

/// Export destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    /// Prompt with the DSL legend, for any language model
    Llm,
    /// Prompt asking for a Penpot design file
    Penpot,
}

impl From<TargetArg> for wiretext::ExportTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Llm => wiretext::ExportTarget::Llm,
            TargetArg::Penpot => wiretext::ExportTarget::Penpot,
        }
    }
}

/// CLI structure for the wiretext application
#[derive(Parser)]
#[command(name = "wiretext")]
#[command(version)]
#[command(about = "Accessibility-aware text wireframes", long_about = None)]
pub struct Cli {
    /// Verbose output (repeat for debug logging)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for wiretext
#[derive(Subcommand)]
pub enum Commands {
    /// Render wireframes to SVG
    Render {
        /// Wireframe file, or directory of .txt wireframes
        input: PathBuf,

        /// Output SVG file (single input only; defaults to input with .svg)
        output: Option<PathBuf>,

        /// Render settings TOML file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory for rendered files (defaults to alongside each input)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Check a wireframe for accessibility issues
    Validate {
        /// Wireframe file
        input: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Exit with an error when any issue is found
        #[arg(long)]
        strict: bool,
    },

    /// Show the syntax category of each line
    Highlight {
        /// Wireframe file
        input: PathBuf,

        /// Print highlight markup instead of a table
        #[arg(long)]
        html: bool,
    },

    /// Wrap a wireframe in a prompt for a language model
    Export {
        /// Wireframe file
        input: PathBuf,

        /// Prompt template to use
        #[arg(short, long, value_enum)]
        target: TargetArg,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Save a copy of a wireframe under a name derived from its title
    Save {
        /// Wireframe file
        input: PathBuf,

        /// Destination directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Manage a directory of stored wireframes
    Store {
        /// Store directory
        #[arg(short, long, default_value = ".wiretext")]
        root: PathBuf,

        #[command(subcommand)]
        action: StoreAction,
    },

    /// List pattern snippets or show one
    Patterns {
        /// Pattern library file (.json or .toml); built-in library if omitted
        #[arg(short, long)]
        library: Option<PathBuf>,

        /// Print the syntax of a single pattern
        #[arg(long, value_name = "ID")]
        show: Option<String>,
    },
}

/// Store operations
#[derive(Subcommand)]
pub enum StoreAction {
    /// Import a wireframe file
    Save {
        /// Wireframe file
        input: PathBuf,

        /// Document id (derived from the title or file name if omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Print a stored wireframe
    Load {
        /// Document id
        id: String,
    },

    /// List stored document ids
    List,
}
