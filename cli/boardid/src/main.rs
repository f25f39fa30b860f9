//! boardid CLI — resolve connected hardware against installed board
//! definitions.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boardid", version, about = "Hardware board identification")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve identification properties against the installed catalog
    Identify {
        /// An identification property, as key=value (repeatable)
        #[arg(short = 'p', long = "prop", value_name = "KEY=VALUE")]
        props: Vec<String>,
        /// Read identification properties from a dotted-key file
        #[arg(long, value_name = "FILE")]
        props_file: Option<PathBuf>,
        /// Hardware definitions directory (repeatable)
        #[arg(long, value_name = "DIR")]
        hardware: Vec<PathBuf>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List installed boards
    List {
        /// Restrict to one platform (PACKAGER:ARCH or PACKAGER:ARCH@VERSION)
        reference: Option<String>,
        /// Hardware definitions directory (repeatable)
        #[arg(long, value_name = "DIR")]
        hardware: Vec<PathBuf>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Identify {
            props,
            props_file,
            hardware,
            json,
        } => {
            let dirs = config::resolve_hardware_dirs(&hardware, &cwd)?;
            commands::identify::run(&dirs, &props, props_file.as_deref(), json)
        }

        Commands::List {
            reference,
            hardware,
            json,
        } => {
            let dirs = config::resolve_hardware_dirs(&hardware, &cwd)?;
            commands::list::run(&dirs, reference.as_deref(), json)
        }
    }
}
