use shakmaty::{Color, Piece};

use crate::abilities::Archetype;
use crate::position::Position;

/// A piece standing on a board.
///
/// Captured figures are never removed from their board. They are marked
/// dead and stop taking part in lookups and path checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFigure {
    archetype: Archetype,
    position: Position,
    color: Color,
    alive: bool,
}

impl BoardFigure {
    /// Creates a live figure.
    pub const fn new(archetype: Archetype, position: Position, color: Color) -> Self {
        Self {
            archetype,
            position,
            color,
            alive: true,
        }
    }

    #[inline]
    pub const fn archetype(&self) -> Archetype {
        self.archetype
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub const fn is_dead(&self) -> bool {
        !self.alive
    }

    /// The figure as a `shakmaty` piece, for rendering and interop.
    #[inline]
    pub fn piece(&self) -> Piece {
        Piece {
            role: self.archetype.into(),
            color: self.color,
        }
    }

    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}
