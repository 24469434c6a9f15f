//! SRLE CLI
//!
//! File-to-file encode/decode frontend for the srle codec. All file handling
//! lives here; the library only ever sees `Read`/`Write` streams.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use srle::Srle;
use tracing_subscriber::{fmt, EnvFilter};

/// SRLE codec
#[derive(Parser, Debug)]
#[command(name = "srle")]
#[command(about = "Separated run-length encoding codec")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a file into SRLE
    Encode {
        /// Separator character
        #[arg(long, value_name = "CHAR", default_value_t = '|')]
        separator: char,

        /// Input file
        #[arg(value_name = "INPUT-FILE")]
        input_file: PathBuf,

        /// Output file
        #[arg(value_name = "OUTPUT-FILE")]
        output_file: PathBuf,
    },

    /// Decode an SRLE file
    Decode {
        /// Separator character, guessed from the input if not provided
        #[arg(long, value_name = "CHAR")]
        separator: Option<char>,

        /// Input file
        #[arg(value_name = "INPUT-FILE")]
        input_file: PathBuf,

        /// Output file
        #[arg(value_name = "OUTPUT-FILE")]
        output_file: PathBuf,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        tracing::error!("{e}");
        eprintln!("srle: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(command: Command) -> srle::Result<()> {
    match command {
        Command::Encode {
            separator,
            input_file,
            output_file,
        } => {
            let codec = Srle::new(Some(separator))?;
            tracing::debug!(path = %input_file.display(), "encoding");
            let input = File::open(&input_file)?;
            let output = File::create(&output_file)?;
            codec.encode(input, output)
        }
        Command::Decode {
            separator,
            input_file,
            output_file,
        } => {
            let codec = Srle::new(separator)?;
            tracing::debug!(path = %input_file.display(), "decoding");
            let input = File::open(&input_file)?;
            let output = File::create(&output_file)?;
            codec.decode(input, output)
        }
    }
}
