use std::fmt;
use std::str::FromStr;

use shakmaty::Square;

use crate::error::Error;

/// Number of files and ranks on the board.
pub const BOARD_LEN: i32 = 8;

/// Error when parsing a position from algebraic notation.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct ParsePositionError(String);

/// A square on the board, addressed by file (`x`) and rank (`y`).
///
/// `(0, 0)` is a1 and `(7, 7)` is h8. Positions are validated on
/// construction and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position, failing with [`Error::OutOfBounds`] if either
    /// coordinate is off the board.
    pub fn new(x: i32, y: i32) -> Result<Self, Error> {
        if !(0..BOARD_LEN).contains(&x) || !(0..BOARD_LEN).contains(&y) {
            return Err(Error::OutOfBounds { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Creates a position from coordinates already known to be on the board.
    pub(crate) const fn on_board(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_LEN as u8 && y < BOARD_LEN as u8);
        Self { x, y }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.x as i32
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.y as i32
    }

    /// Signed displacement `(dx, dy)` from `self` to `to`.
    #[inline]
    pub const fn offset(self, to: Position) -> (i32, i32) {
        (to.x() - self.x(), to.y() - self.y())
    }

    /// Squares strictly between `self` and `to`, walking from `self`.
    ///
    /// Only yields squares when both positions share a file, a rank or a
    /// diagonal. Both endpoints are excluded.
    pub fn between(self, to: Position) -> impl Iterator<Item = Position> {
        let (dx, dy) = self.offset(to);
        let aligned = dx == 0 || dy == 0 || dx.abs() == dy.abs();
        let steps = if aligned { dx.abs().max(dy.abs()) } else { 0 };
        let (sx, sy) = (dx.signum(), dy.signum());

        (1..steps).map(move |i| Self {
            x: (self.x() + sx * i) as u8,
            y: (self.y() + sy * i) as u8,
        })
    }
}

impl From<Position> for Square {
    #[inline]
    fn from(pos: Position) -> Self {
        Square::new(u32::from(pos.y) * BOARD_LEN as u32 + u32::from(pos.x))
    }
}

impl From<Square> for Position {
    #[inline]
    fn from(square: Square) -> Self {
        let index = u32::from(square);
        Self {
            x: (index % BOARD_LEN as u32) as u8,
            y: (index / BOARD_LEN as u32) as u8,
        }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Square>()
            .map(Self::from)
            .map_err(|_| ParsePositionError(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Square::from(*self))
    }
}
