use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod demo;
mod dump;
mod info;
mod validate;

/// lxbread - Luminex LXB event reader
#[derive(Parser)]
#[command(name = "lxbread")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode LXB files and print one line per event
    Dump {
        /// Input LXB files, decoded in order
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Load output settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Do not print the header line
        #[arg(long)]
        no_header: bool,

        /// Text printed before the header line
        #[arg(long, value_name = "TEXT")]
        header_prefix: Option<String>,
    },

    /// Display offsets, parameters and keywords of an LXB file
    Info {
        /// Input LXB file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check LXB files against the supported format
    Validate {
        /// Input LXB files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Write a synthetic LXB file for testing
    Demo {
        /// Output LXB file path
        #[arg(value_name = "OUTPUT", default_value = "demo.lxb")]
        output: PathBuf,

        /// Number of events to generate
        #[arg(short = 'n', long, default_value = "1000")]
        events: usize,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Dump {
            files,
            config,
            no_header,
            header_prefix,
        } => dump::run(files, config, no_header, header_prefix),
        Commands::Info { file, json } => info::run(file, json),
        Commands::Validate { files } => validate::run(files),
        Commands::Demo { output, events } => demo::run(output, events),
    }
}
