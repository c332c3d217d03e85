//! Move validation and board state for chess pieces.
//!
//! A [`Board`] holds figures in an arena. Each figure's [`Archetype`]
//! decides which [`MoveRule`]s it may use, and [`Board::apply_action`]
//! checks the rule, moves the figure and resolves captures in one step.

pub mod abilities;
pub mod board;
pub mod error;
pub mod figure;
pub mod game;
pub mod position;
pub mod script;
pub mod terminal;

pub use abilities::{Archetype, MoveRule};
pub use board::{Board, FigureId};
pub use error::Error;
pub use figure::BoardFigure;
pub use game::Match;
pub use position::{BOARD_LEN, ParsePositionError, Position};
pub use shakmaty::Color;
