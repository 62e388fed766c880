//! Sudotty terminal game.
//!
//! Generates a seeded puzzle and runs a line-based interactive loop on
//! stdin/stdout: WASD moves the selection, digits fill the selected
//! cell, `SOLVE` checks the board against the solution. Re-running with
//! `--seed` replays the exact same board.

use std::{
    io::{self, BufRead, Write},
    process,
    time::Instant,
};

use clap::Parser;
use sudotty_game::{Direction, Game, GameError};
use sudotty_generator::PuzzleGenerator;

use crate::{commands::CommandSet, render::render_board};

mod commands;
mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to replay a previous game; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of clue draws.
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleGenerator::DEFAULT_REVEAL_COUNT)]
    reveals: usize,

    /// Board size; must be a perfect square.
    #[arg(long, value_name = "N", default_value_t = 9)]
    size: u8,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let generator = PuzzleGenerator::new()
        .with_board_size(args.size)
        .with_reveal_count(args.reveals);
    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    let puzzle = match result {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };
    log::info!("starting game with seed {}", puzzle.seed);

    let game = Game::new(puzzle);
    let stdin = io::stdin();
    run(
        game,
        &CommandSet::default(),
        &mut stdin.lock(),
        &mut io::stdout(),
    )
}

/// Runs the interactive loop until the game is solved, quit, or stdin
/// closes.
fn run(
    mut game: Game,
    commands: &CommandSet,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let started = Instant::now();

    loop {
        writeln!(output, "{}", render_board(&game))?;
        writeln!(output, "seed = {}", game.seed())?;
        writeln!(output, "(F) locked cell, (<) selected cell")?;
        writeln!(
            output,
            "insert '{}' for a list of all commands, press Enter to confirm",
            commands.help
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };
        let line = line.trim().to_uppercase();

        if line == commands.up {
            game.move_cursor(Direction::Up);
        } else if line == commands.down {
            game.move_cursor(Direction::Down);
        } else if line == commands.left {
            game.move_cursor(Direction::Left);
        } else if line == commands.right {
            game.move_cursor(Direction::Right);
        } else if line == commands.solve {
            if game.is_complete() {
                writeln!(
                    output,
                    "\nSolved in {} seconds. Seed was {}.",
                    started.elapsed().as_secs(),
                    game.seed()
                )?;
                break;
            }
            writeln!(output, "The board does not match the solution yet.")?;
        } else if line == commands.help {
            print_help(commands, output)?;
        } else if line == commands.quit {
            break;
        } else if line == commands.auto_solve {
            let enabled = !game.auto_lock();
            game.set_auto_lock(enabled);
            writeln!(
                output,
                "auto-lock {}",
                if enabled { "enabled" } else { "disabled" }
            )?;
        } else if line == commands.goto {
            goto(&mut game, input, output)?;
        } else if let Ok(digit) = line.parse::<u8>() {
            if !(1..=game.size()).contains(&digit) {
                writeln!(output, "digits must be between 1 and {}", game.size())?;
            } else {
                match game.set_value(digit) {
                    Ok(()) => {}
                    Err(GameError::NotEditable) => {
                        writeln!(output, "that cell is locked")?;
                    }
                }
            }
        } else if !line.is_empty() {
            log::debug!("unrecognized input: {line:?}");
            writeln!(output, "unknown command, insert '{}' for help", commands.help)?;
        }
    }

    Ok(())
}

/// Reads the goto coordinates and moves the selection.
fn goto(game: &mut Game, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let Some(x) = read_coordinate(input, output, "insert X value:")? else {
        return Ok(());
    };
    let Some(y) = read_coordinate(input, output, "insert Y value:")? else {
        return Ok(());
    };
    if !game.select(x, y) {
        writeln!(output, "that cell is locked")?;
    }
    Ok(())
}

/// Prompts for and parses one coordinate; `None` on EOF or bad input.
fn read_coordinate(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<i16>> {
    writeln!(output, "{prompt}")?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(output, "not a number")?;
            Ok(None)
        }
    }
}

/// Reads one line; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}

fn print_help(commands: &CommandSet, output: &mut impl Write) -> io::Result<()> {
    writeln!(
        output,
        "({},{},{},{}) move the selection up, left, down or right",
        commands.up, commands.left, commands.down, commands.right
    )?;
    writeln!(output, "({}) jump to a cell by x and y value", commands.goto)?;
    writeln!(output, "(1-9) insert the digit into the selected cell")?;
    writeln!(
        output,
        "({}) toggle locking of correct guesses",
        commands.auto_solve
    )?;
    writeln!(
        output,
        "({}) check the board against the solution",
        commands.solve
    )?;
    writeln!(output, "({}) leave the game", commands.quit)?;
    Ok(())
}
