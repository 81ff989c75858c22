//! The interactive game session.

use std::{fs, io, path::Path, process::ExitCode};

use log::{error, info};
use symlace_core::Position;
use symlace_game::{DefinitionError, PlaceOutcome, Puzzle};
use symlace_generator::PuzzleGenerator;

use crate::{prompt, render};

/// Runs rounds of puzzles until the player declines another.
///
/// `first` is the definition file for the first round, if one was given on
/// the command line; later rounds prompt for a file name. A failed load of
/// the command-line file aborts with a failure exit code; a failed load of
/// an interactively chosen file just skips that round.
pub fn run(first: Option<&Path>) -> io::Result<ExitCode> {
    let mut source = first.map(Path::to_path_buf);
    let mut first_round = true;

    loop {
        let puzzle = match &source {
            Some(path) => match load_puzzle(path) {
                Ok(puzzle) => Some(puzzle),
                Err(err) => {
                    error!("failed to load {}: {err}", path.display());
                    eprintln!("Puzzle not loaded: {err}");
                    if first_round {
                        return Ok(ExitCode::FAILURE);
                    }
                    None
                }
            },
            None => {
                let generated = PuzzleGenerator::default().generate();
                info!("generated puzzle with seed {}", generated.seed);
                Some(generated.puzzle)
            }
        };
        first_round = false;

        if let Some(mut puzzle) = puzzle {
            let score = play(&mut puzzle)?;
            println!("Puzzle finished. Your score was: {score}");
        }

        if !prompt::read_yes_no("Do another puzzle? ")? {
            return Ok(ExitCode::SUCCESS);
        }
        let name = prompt::read_line("Press Enter for a random puzzle or type a file name: ")?;
        source = (!name.is_empty()).then(|| name.into());
    }
}

/// Plays one puzzle to completion and returns the final score.
fn play(puzzle: &mut Puzzle) -> io::Result<u32> {
    while !puzzle.is_finished() {
        println!();
        print!("{}", render::draw(puzzle.grid()));
        println!("Current score: {}", puzzle.score());

        let row = prompt::read_i32("Enter row number: ")?;
        let column = prompt::read_i32("Enter column number: ")?;
        let symbol = prompt::read_symbol("Enter symbol: ", puzzle.allowed_symbols())?;

        match puzzle.place_symbol(Position::new(row, column), symbol) {
            PlaceOutcome::Matched { points } => println!("Pattern completed! +{points} points"),
            PlaceOutcome::Placed => {}
            PlaceOutcome::Rejected => println!("That cell does not accept {symbol}"),
            PlaceOutcome::OutOfBounds => println!("({row}, {column}) is outside the grid"),
        }
    }

    println!();
    print!("{}", render::draw(puzzle.grid()));
    println!();
    Ok(puzzle.score())
}

fn load_puzzle(path: &Path) -> Result<Puzzle, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(text.parse()?)
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum LoadError {
    #[display("{_0}")]
    Io(io::Error),
    #[display("{_0}")]
    Definition(DefinitionError),
}
