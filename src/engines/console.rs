//! Interactive game loop over line-based I/O.
//!
//! Each input line is a long algebraic move (`e2e4`, `e7e8q`) for the side
//! to move; `quit` ends the session. Rejected input is reported and the same
//! side is asked again. When a searcher is attached for one color, it answers
//! on that color's turns.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{game_status, is_check, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::alpha_beta::Searcher;
use crate::search::evaluator::{Evaluator, StateEncoder};
use crate::utils::long_algebraic::long_algebraic_to_move;

/// The searcher and the color it plays.
pub struct EngineSide<E, S> {
    pub color: Color,
    pub searcher: Searcher<E, S>,
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Runs until the game ends, `quit` is read or the input is exhausted, and
/// returns the status of the final position.
pub fn run_console<R, W, E, S>(
    input: R,
    out: &mut W,
    start: GameState,
    mut engine: Option<EngineSide<E, S>>,
) -> io::Result<GameStatus>
where
    R: BufRead,
    W: Write,
    E: Evaluator,
    S: StateEncoder,
{
    let mut game_state = start;
    let mut lines = input.lines();

    writeln!(out, "{}", game_state.to_fen())?;
    let mut status = game_status(&mut game_state);
    if announce(out, &game_state, status)? {
        return Ok(status);
    }

    loop {
        let side = game_state.side_to_move;

        let mv = match engine.as_mut().filter(|engine| engine.color == side) {
            Some(engine) => {
                let result = engine.searcher.search(&mut game_state);
                // A depth-0 searcher scores without choosing; any legal move will do.
                let mv = match result.best_move {
                    Some(mv) => mv,
                    None => match all_legal_moves(&mut game_state, side).first() {
                        Some(&mv) => mv,
                        None => return Ok(status),
                    },
                };
                debug!("engine plays {mv} (score {:.4})", result.score);
                writeln!(out, "{} plays {mv}", color_name(side))?;
                mv
            }
            None => {
                write!(out, "{} to move: ", color_name(side))?;
                out.flush()?;

                let Some(line) = lines.next() else {
                    return Ok(status);
                };
                let line = line?;
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                if text == "quit" {
                    return Ok(status);
                }

                match long_algebraic_to_move(text, &game_state) {
                    Ok(mv) => mv,
                    Err(err) => {
                        writeln!(out, "invalid move: {err}")?;
                        continue;
                    }
                }
            }
        };

        game_state = match apply_move(&game_state, mv) {
            Ok(next) => next,
            Err(err) => {
                writeln!(out, "invalid move: {err}")?;
                continue;
            }
        };

        writeln!(out, "{}", game_state.to_fen())?;
        status = game_status(&mut game_state);
        if announce(out, &game_state, status)? {
            return Ok(status);
        }
    }
}

/// Prints the status line for the side to move. Returns `true` once the game
/// is over.
fn announce<W: Write>(out: &mut W, game_state: &GameState, status: GameStatus) -> io::Result<bool> {
    match status {
        GameStatus::Checkmate { winner } => {
            writeln!(out, "CHECKMATE! {} LOSES!", color_name(winner.opposite()).to_uppercase())?;
        }
        GameStatus::Stalemate => writeln!(out, "DRAW BY STALEMATE!")?,
        GameStatus::FiftyMoveDraw => writeln!(out, "DRAW BY FIFTY MOVE RULE!")?,
        GameStatus::Ongoing => {
            if is_check(game_state, game_state.side_to_move) {
                writeln!(out, "CHECK!")?;
            }
        }
    }
    Ok(status.is_over())
}
