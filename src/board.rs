use std::fmt;

use shakmaty::Color;

use crate::abilities::{Archetype, MoveRule};
use crate::error::Error;
use crate::figure::BoardFigure;
use crate::position::Position;

/// Stable handle to a figure on a [`Board`].
///
/// Ids stay valid for the whole life of the board, captured figures
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(usize);

impl FigureId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Back rank layout from the a-file to the h-file.
const BACK_RANK: [Archetype; 8] = [
    Archetype::Rook,
    Archetype::Knight,
    Archetype::Bishop,
    Archetype::Queen,
    Archetype::King,
    Archetype::Bishop,
    Archetype::Knight,
    Archetype::Rook,
];

/// The set of figures in play.
///
/// Figures live in a single arena and are addressed by [`FigureId`].
/// No two live figures ever share a square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    figures: Vec<BoardFigure>,
}

impl Board {
    /// Creates a board from an initial set of figures.
    ///
    /// Fails with [`Error::DuplicatePosition`] if two figures share a square.
    pub fn new(figures: impl IntoIterator<Item = BoardFigure>) -> Result<Self, Error> {
        let figures: Vec<_> = figures.into_iter().collect();

        for (i, a) in figures.iter().enumerate() {
            if let Some(b) = figures[i + 1..]
                .iter()
                .find(|b| b.position() == a.position())
            {
                return Err(Error::DuplicatePosition(b.position()));
            }
        }

        Ok(Self { figures })
    }

    /// The standard 32 figure starting layout, white on ranks 1 and 2.
    pub fn starting() -> Self {
        let mut figures = Vec::with_capacity(32);
        for (color, back, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
            for (x, archetype) in (0..).zip(BACK_RANK) {
                figures.push(BoardFigure::new(archetype, Position::on_board(x, back), color));
            }
            for x in 0..8 {
                figures.push(BoardFigure::new(
                    Archetype::Pawn,
                    Position::on_board(x, pawns),
                    color,
                ));
            }
        }
        Self { figures }
    }

    /// Number of figures, dead ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Get a figure by id, dead or alive.
    pub fn figure(&self, id: FigureId) -> Result<&BoardFigure, Error> {
        self.figures.get(id.0).ok_or(Error::UnknownFigure(id))
    }

    /// All figures with their ids, dead ones included.
    pub fn iter(&self) -> impl Iterator<Item = (FigureId, &BoardFigure)> {
        self.figures
            .iter()
            .enumerate()
            .map(|(i, figure)| (FigureId(i), figure))
    }

    /// Figures still in play.
    pub fn live(&self) -> impl Iterator<Item = (FigureId, &BoardFigure)> {
        self.iter().filter(|(_, figure)| figure.is_alive())
    }

    /// Get the live figure on a square, if any.
    pub fn find_live_at(&self, pos: Position) -> Option<(FigureId, &BoardFigure)> {
        self.live().find(|(_, figure)| figure.position() == pos)
    }

    /// Whether any live figure stands on the square.
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.find_live_at(pos).is_some()
    }

    /// Move a figure with the given rule, capturing whatever stands on `to`.
    ///
    /// Returns the id of the captured figure, if any. On error the board is
    /// left untouched.
    pub fn apply_action(
        &mut self,
        id: FigureId,
        rule: MoveRule,
        to: Position,
    ) -> Result<Option<FigureId>, Error> {
        rule.perform(self, id, to)
    }

    pub(crate) fn figure_mut(&mut self, id: FigureId) -> Result<&mut BoardFigure, Error> {
        self.figures.get_mut(id.0).ok_or(Error::UnknownFigure(id))
    }
}

impl From<&shakmaty::Board> for Board {
    fn from(board: &shakmaty::Board) -> Self {
        let figures = board
            .occupied()
            .into_iter()
            .filter_map(|square| {
                board.piece_at(square).map(|piece| {
                    BoardFigure::new(piece.role.into(), square.into(), piece.color)
                })
            })
            .collect();
        Self { figures }
    }
}
