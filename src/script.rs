use std::collections::VecDeque;

use thiserror::Error;

use crate::position::Position;

/// Error when parsing a move script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square notation: '{0}'")]
    InvalidSquare(String),
    #[error("move from {0} has no destination")]
    MissingDestination(Position),
    #[error("unexpected square {0} after a complete move")]
    UnexpectedSquare(Position),
}

/// A queue of moves parsed from a text script.
///
/// New script can be appended at any time for interactive use.
#[derive(Debug, Clone, Default)]
pub struct MoveScript {
    pending: VecDeque<(Position, Position)>,
}

impl MoveScript {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete script.
    pub fn parse(script: &str) -> Result<Self, ParseError> {
        let mut parsed = Self::new();
        parsed.push_script(script)?;
        Ok(parsed)
    }

    /// Parse and queue additional moves.
    ///
    /// Format:
    /// - Squares are 2 characters (e.g., "e2", "a1")
    /// - Spaces separate squares within a move
    /// - Periods (". ") end a move, which must hold exactly two squares,
    ///   origin first; the last move may omit its period
    ///
    /// Examples:
    /// - `"e2e4."` - e2 to e4
    /// - `"a1a3. h8 h6."` - a1 to a3, then h8 to h6
    /// - `"e2. e4."` - error, e2 has no destination
    ///
    /// On error nothing is queued.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let moves = parse_script(script)?;
        self.pending.extend(moves);
        Ok(())
    }

    /// Number of moves not yet taken.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take the next pending move.
    pub fn next_move(&mut self) -> Option<(Position, Position)> {
        self.pending.pop_front()
    }

    /// Take all pending moves, calling the provided callback for each.
    pub fn drain<F>(&mut self, mut on_move: F)
    where
        F: FnMut(Position, Position),
    {
        while let Some((from, to)) = self.next_move() {
            on_move(from, to);
        }
    }
}

/// Parse a script string into (from, to) pairs.
fn parse_script(script: &str) -> Result<Vec<(Position, Position)>, ParseError> {
    let mut moves = Vec::new();
    let mut current = Vec::new();
    let mut token = String::new();

    for ch in script.chars() {
        match ch {
            '.' => {
                flush_token(&mut token, &mut current)?;
                moves.extend(finish_move(&current)?);
                current.clear();
            }
            c if c.is_whitespace() => {
                flush_token(&mut token, &mut current)?;
            }
            _ => {
                token.push(ch);

                // Squares are exactly 2 characters
                if token.len() == 2 {
                    flush_token(&mut token, &mut current)?;
                }
            }
        }
    }

    flush_token(&mut token, &mut current)?;
    moves.extend(finish_move(&current)?);
    Ok(moves)
}

/// Turn the squares collected for one move into a (from, to) pair.
///
/// An empty move (e.g. a doubled period) yields nothing.
fn finish_move(squares: &[Position]) -> Result<Option<(Position, Position)>, ParseError> {
    match *squares {
        [] => Ok(None),
        [from] => Err(ParseError::MissingDestination(from)),
        [from, to] => Ok(Some((from, to))),
        [_, _, extra, ..] => Err(ParseError::UnexpectedSquare(extra)),
    }
}

/// Parse the current token as a square and clear it.
fn flush_token(token: &mut String, squares: &mut Vec<Position>) -> Result<(), ParseError> {
    if !token.is_empty() {
        let square = token
            .parse()
            .map_err(|_| ParseError::InvalidSquare(token.clone()))?;
        squares.push(square);
        token.clear();
    }
    Ok(())
}
