//! Terminal front end for the connect-five engine
//!
//! Plays a human against the minimax engine. Moves are entered as
//! zero-based `row col` pairs; `undo` retracts the engine's reply and the
//! human's last move together.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use connect_five::{BoardState, Engine, Outcome, Player, Pos, DEFAULT_BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Black,
    White,
}

impl From<ColorArg> for Player {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Black => Player::Black,
            ColorArg::White => Player::White,
        }
    }
}

/// Play connect-five against a minimax engine
#[derive(Parser)]
#[command(name = "connect-five", version, about, long_about = None)]
struct Cli {
    /// Engine search depth (odd values recommended)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=5))]
    depth: u32,

    /// Color the human plays; Black moves first
    #[arg(long, value_enum, default_value = "black")]
    color: ColorArg,

    /// Board size
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = clap::value_parser!(u64).range(5..=25).map(|v| v as usize))]
    size: usize,
}

enum Command {
    Move(usize, usize),
    Undo,
    New,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let human: Player = cli.color.into();
    let mut engine = Engine::with_depth(cli.depth);
    let mut state = BoardState::with_size(cli.size);

    println!(
        "connect-five: {0}x{0} board, engine depth {1}, you play {2}",
        cli.size, cli.depth, human
    );
    println!("enter moves as 'row col'; commands: undo, new, quit\n");

    loop {
        if state.outcome() == Outcome::InProgress {
            if state.turn() == human {
                print_board(&state);
                match read_command(&state)? {
                    Command::Quit => break,
                    Command::New => {
                        state = BoardState::with_size(cli.size);
                        continue;
                    }
                    Command::Undo => {
                        undo_full_turn(&mut state, human);
                        continue;
                    }
                    Command::Move(row, col) => {
                        if !state.apply_move(row, col) {
                            println!("illegal move, try again");
                            continue;
                        }
                    }
                }
            } else {
                let result = engine.get_move_with_stats(&state);
                let Some(pos) = result.best_move else {
                    println!("engine has no move");
                    break;
                };
                state.apply_move(pos.row, pos.col);
                println!(
                    "engine plays ({}, {})  [score {} | {} nodes | {} ms]",
                    pos.row, pos.col, result.score, result.nodes, result.time_ms
                );
            }
        }

        match state.outcome() {
            Outcome::InProgress => {}
            Outcome::Win(winner) => {
                print_board(&state);
                if winner == human {
                    println!("{winner} wins - congratulations!");
                } else {
                    println!("{winner} wins.");
                }
                if !play_again()? {
                    break;
                }
                state = BoardState::with_size(cli.size);
            }
            Outcome::Draw => {
                print_board(&state);
                println!("draw - the board is full.");
                if !play_again()? {
                    break;
                }
                state = BoardState::with_size(cli.size);
            }
        }
    }

    Ok(())
}

/// Retract the engine's reply and the human's move together, so it is
/// the human's turn again afterwards.
fn undo_full_turn(state: &mut BoardState, human: Player) {
    match state.undo_last() {
        None => println!("nothing to undo"),
        Some(_) => {
            if state.turn() != human {
                state.undo_last();
            }
        }
    }
}

fn read_command(state: &BoardState) -> Result<Command> {
    loop {
        print!("{} to move> ", state.turn());
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("failed to read stdin")?;
        if bytes == 0 {
            return Ok(Command::Quit);
        }

        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "q" => return Ok(Command::Quit),
            "new" => return Ok(Command::New),
            "undo" => return Ok(Command::Undo),
            _ => {
                let mut parts = line.split_whitespace();
                if let (Some(row), Some(col)) = (parts.next(), parts.next()) {
                    if let (Ok(row), Ok(col)) = (row.parse(), col.parse()) {
                        return Ok(Command::Move(row, col));
                    }
                }
                println!("expected 'row col' (0-based), or one of: undo, new, quit");
            }
        }
    }
}

fn play_again() -> Result<bool> {
    print!("play again? (y/n)> ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    Ok(bytes > 0 && line.trim().eq_ignore_ascii_case("y"))
}

fn print_board(state: &BoardState) {
    print!("   ");
    for c in 0..state.size() {
        print!("{c:3}");
    }
    println!();

    for r in 0..state.size() {
        print!("{r:3}");
        for c in 0..state.size() {
            let cell = match state.get(Pos::new(r, c)) {
                Some(Player::Black) => "  X",
                Some(Player::White) => "  O",
                None => "  .",
            };
            print!("{cell}");
        }
        println!();
    }
    println!();
}
