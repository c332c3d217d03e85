use log::{debug, info};
use shakmaty::{ByColor, Color};

use crate::abilities::MoveRule;
use crate::board::{Board, FigureId};
use crate::error::Error;
use crate::position::Position;

/// A game in progress: the board plus each side's remaining time budget.
///
/// Turn order is not enforced. Time is only debited after the board
/// accepts a move, and budgets may run below zero; deciding what that
/// means is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    board: Board,
    clocks: ByColor<i64>,
}

impl Match {
    /// Start a match where both sides get `time_units`.
    pub fn new(board: Board, time_units: i64) -> Self {
        info!(
            "new match with {} figures, {time_units} time units per side",
            board.len()
        );
        Self {
            board,
            clocks: ByColor {
                white: time_units,
                black: time_units,
            },
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Remaining time budget for a side.
    #[inline]
    pub fn time_left(&self, color: Color) -> i64 {
        *self.clocks.get(color)
    }

    /// Apply an action and charge its cost to the mover's side.
    ///
    /// Returns the captured figure, if any.
    pub fn perform_move(
        &mut self,
        id: FigureId,
        rule: MoveRule,
        to: Position,
        time_units: i64,
    ) -> Result<Option<FigureId>, Error> {
        let captured = self.board.apply_action(id, rule, to)?;

        let color = self.board.figure(id)?.color();
        *self.clocks.get_mut(color) -= time_units;
        debug!(
            "{color:?} spent {time_units} time units, {} left",
            self.time_left(color)
        );

        Ok(captured)
    }

    /// Move whatever live figure stands on `from` to `to`.
    ///
    /// Tries each rule the figure's archetype permits and plays the first
    /// legal one, falling back to [`Archetype::default_ability`] to report
    /// an illegal move. Fails with [`Error::EmptySquare`] if `from` is empty.
    ///
    /// [`Archetype::default_ability`]: crate::abilities::Archetype::default_ability
    pub fn play(
        &mut self,
        from: Position,
        to: Position,
        time_units: i64,
    ) -> Result<Option<FigureId>, Error> {
        let (id, figure) = self
            .board
            .find_live_at(from)
            .ok_or(Error::EmptySquare(from))?;
        let archetype = figure.archetype();

        // If no permitted rule accepts the move, the default one reports it.
        let rule = archetype
            .abilities()
            .iter()
            .copied()
            .find(|rule| rule.is_legal(&self.board, from, to))
            .unwrap_or(archetype.default_ability());

        self.perform_move(id, rule, to, time_units)
    }
}
