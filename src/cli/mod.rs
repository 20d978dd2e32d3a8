//! CLI argument parsing for hoproute
//!
//! The data file may be given positionally or with `-d/--data_file_path`;
//! the flag wins when both are present.

pub mod parse;

use std::path::{Path, PathBuf};

use clap::Parser;

use hoproute_core::format::OutputFormat;
use parse::parse_output_format;

/// Hoproute - first-hop routing table builder
#[derive(Parser, Debug)]
#[command(name = "hoproute")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Edge-list data file
    #[arg(value_name = "DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Specify the data inputs path
    #[arg(short = 'd', long = "data_file_path", value_name = "PATH")]
    pub data_file_path: Option<PathBuf>,

    /// Source vertex (prompted for on stdin when omitted)
    #[arg(long, short)]
    pub source: Option<usize>,

    /// Output format: human or json (overrides the config file)
    #[arg(long, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Config file path
    #[arg(long, env = "HOPROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only print the routing table
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, hoproute_core=trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// The data file to load, preferring `-d` over the positional path
    pub fn data_path(&self) -> Option<&Path> {
        self.data_file_path
            .as_deref()
            .or(self.data_file.as_deref())
    }
}
