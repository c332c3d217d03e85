use crate::abilities::{Archetype, MoveRule};
use crate::board::FigureId;
use crate::position::Position;

/// Errors raised by the rules engine.
///
/// Every failure is terminal for the attempted operation and leaves the
/// board untouched.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Coordinates fall outside the board.
    #[error("coordinates ({x}, {y}) are outside the 8x8 board")]
    OutOfBounds { x: i32, y: i32 },

    /// Two figures were placed on the same square at board setup.
    #[error("more than one figure placed on {0}")]
    DuplicatePosition(Position),

    /// The archetype is not allowed to use the given movement rule.
    #[error("{archetype:?} cannot move with the {rule:?} rule")]
    WrongAbility { archetype: Archetype, rule: MoveRule },

    /// The movement rule rejected the destination.
    #[error("illegal {rule:?} move from {from} to {to}")]
    IllegalMove {
        rule: MoveRule,
        from: Position,
        to: Position,
    },

    /// The figure id does not belong to this board.
    #[error("no figure with id {0} on this board")]
    UnknownFigure(FigureId),

    /// No live figure stands on the origin square.
    #[error("no live figure on {0}")]
    EmptySquare(Position),
}
