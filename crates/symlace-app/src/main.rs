//! Symlace console application.
//!
//! This is the interactive front end: it loads or generates puzzles, renders
//! the board, and feeds validated player input to the puzzle engine.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::error;

mod prompt;
mod render;
mod session;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle definition file for the first round; a random puzzle is
    /// generated if omitted.
    #[arg(value_name = "FILE")]
    puzzle: Option<PathBuf>,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match session::run(args.puzzle.as_deref()) {
        Ok(code) => code,
        Err(err) => {
            error!("session aborted: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
