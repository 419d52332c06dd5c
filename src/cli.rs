//! Command-line interface implementation for Plugsmith.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for Plugsmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "Plugsmith: scaffold a new Obsidian plugin project", long_about = None)]
pub struct Args {
    /// Directory in which the plugin project will be created
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not prompt for parameters; use the defaults (or config file values)
    #[arg(long)]
    pub no_input: bool,

    /// Re-use the answers from the previous run instead of prompting
    #[arg(long)]
    pub replay: bool,

    /// Proceed when the project directory already exists.
    /// Existing files are overwritten with freshly generated ones.
    #[arg(short = 'f', long)]
    pub overwrite_if_exists: bool,

    /// Leave files that already exist in the project directory untouched
    #[arg(short = 's', long)]
    pub skip_if_file_exists: bool,

    /// Path to a YAML file whose default_context overrides the defaults
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
