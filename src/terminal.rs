use std::io::{self, Write};

use log::info;
use shakmaty::{CastlingMode, Chess, Color, File, Position as _, Rank, Square, fen::Fen};

use crate::board::Board;
use crate::game::Match;
use crate::position::Position;

/// Time budget each side starts with in the terminal playground.
pub const DEFAULT_TIME_UNITS: i64 = 150;

/// Time charged for every move played from the terminal.
const MOVE_COST: i64 = 1;

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal playground on the starting position.
///
/// Moves are validated by the rules engine; rejected moves are reported and
/// leave the board unchanged.
pub fn run_interactive_terminal() {
    let mut game = Match::new(Board::starting(), DEFAULT_TIME_UNITS);
    info!("terminal playground started");

    redraw(&game);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "m" => {
                if parts.len() < 3 {
                    println!("Usage: m <from> <to>");
                    continue;
                }
                match (parts[1].parse::<Position>(), parts[2].parse::<Position>()) {
                    (Ok(from), Ok(to)) => match game.play(from, to, MOVE_COST) {
                        Ok(captured) => {
                            redraw(&game);
                            if captured.is_some() {
                                println!("\n⚔️  Captured on {to}");
                            }
                        }
                        Err(e) => println!("❌ {e}"),
                    },
                    (Err(e), _) | (_, Err(e)) => println!("Invalid square: {e}"),
                }
            }
            "load" => {
                if parts.len() < 2 {
                    println!("Usage: load <fen> | load startpos");
                    continue;
                }
                let board = if parts[1] == "startpos" {
                    Some(Board::starting())
                } else {
                    // Rejoin the rest of the parts as FEN might contain spaces
                    load_fen(&parts[1..].join(" "))
                };
                if let Some(board) = board {
                    game = Match::new(board, DEFAULT_TIME_UNITS);
                    redraw(&game);
                    println!("\n✅ Position loaded");
                }
            }
            "r" => {
                game = Match::new(Board::starting(), DEFAULT_TIME_UNITS);
                redraw(&game);
                println!("\n🔄 Reset to initial state");
            }
            "p" => redraw(&game),
            "q" => break,
            _ => println!("Unknown command"),
        }
    }

    info!("terminal playground stopped");
}

/// Parse a FEN into a board, reporting problems to the user.
fn load_fen(fen: &str) -> Option<Board> {
    match fen.parse::<Fen>() {
        Ok(fen) => match fen.into_position::<Chess>(CastlingMode::Standard) {
            Ok(chess) => Some(Board::from(chess.board())),
            Err(_) => {
                println!("❌ Invalid FEN setup");
                None
            }
        },
        Err(e) => {
            println!("❌ Invalid FEN: {}", e);
            None
        }
    }
}

/// Draws the complete interface: help text, board and clocks.
fn redraw(game: &Match) {
    clear_screen();
    println!("♟️  Chess Rules Playground");
    println!();
    println!("Commands: m <from> <to> | load <fen> | r (reset) | p (refresh) | q (quit)");
    println!();

    if let Err(e) = render_board(&mut io::stdout(), game.board()) {
        eprintln!("{e}");
    }
    println!(
        "Time:  white {:>4} | black {:>4}",
        game.time_left(Color::White),
        game.time_left(Color::Black)
    );
}

/// Render the live figures of a board to any writer.
///
/// White figures are uppercase, black lowercase, empty squares `·`.
pub fn render_board(w: &mut impl Write, board: &Board) -> Result<(), DisplayError> {
    for rank in Rank::ALL.iter().rev() {
        write!(w, " {} ", rank.char())?;
        for file in File::ALL {
            let square = Square::from_coords(file, *rank);
            match board.find_live_at(square.into()) {
                Some((_, figure)) => write!(w, " {} ", figure.piece().char())?,
                None => write!(w, " · ")?,
            }
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}
