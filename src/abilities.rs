use log::{debug, trace};
use shakmaty::Role;

use crate::board::{Board, FigureId};
use crate::error::Error;
use crate::position::Position;

/// A piece kind, defining which movement rules it may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Rook,
    Bishop,
    Knight,
    Queen,
    King,
    Pawn,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Rook,
        Archetype::Bishop,
        Archetype::Knight,
        Archetype::Queen,
        Archetype::King,
        Archetype::Pawn,
    ];

    /// Movement rules this archetype is permitted to invoke.
    pub const fn abilities(self) -> &'static [MoveRule] {
        match self {
            Archetype::Rook => &[MoveRule::Rook],
            Archetype::Bishop => &[MoveRule::Bishop],
            Archetype::Knight => &[MoveRule::Knight],
            Archetype::Queen => &[MoveRule::Queen],
            Archetype::King => &[MoveRule::King],
            Archetype::Pawn => &[MoveRule::Pawn],
        }
    }

    /// The archetype's own movement pattern, always among its abilities.
    pub const fn default_ability(self) -> MoveRule {
        match self {
            Archetype::Rook => MoveRule::Rook,
            Archetype::Bishop => MoveRule::Bishop,
            Archetype::Knight => MoveRule::Knight,
            Archetype::Queen => MoveRule::Queen,
            Archetype::King => MoveRule::King,
            Archetype::Pawn => MoveRule::Pawn,
        }
    }

    #[inline]
    pub fn permits(self, rule: MoveRule) -> bool {
        self.abilities().contains(&rule)
    }
}

impl From<Archetype> for Role {
    fn from(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Rook => Role::Rook,
            Archetype::Bishop => Role::Bishop,
            Archetype::Knight => Role::Knight,
            Archetype::Queen => Role::Queen,
            Archetype::King => Role::King,
            Archetype::Pawn => Role::Pawn,
        }
    }
}

impl From<Role> for Archetype {
    fn from(role: Role) -> Self {
        match role {
            Role::Rook => Archetype::Rook,
            Role::Bishop => Archetype::Bishop,
            Role::Knight => Archetype::Knight,
            Role::Queen => Archetype::Queen,
            Role::King => Archetype::King,
            Role::Pawn => Archetype::Pawn,
        }
    }
}

/// A movement pattern.
///
/// Queen, King and Pawn are placeholders: they accept any destination not
/// held by a friendly figure, with no direction, distance or blocking
/// constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRule {
    Rook,
    Bishop,
    Knight,
    Queen,
    King,
    Pawn,
}

impl MoveRule {
    pub const ALL: [MoveRule; 6] = [
        MoveRule::Rook,
        MoveRule::Bishop,
        MoveRule::Knight,
        MoveRule::Queen,
        MoveRule::King,
        MoveRule::Pawn,
    ];

    /// Whether the live figure on `from` may move to `to` under this rule.
    ///
    /// Returns false if `from` is empty or `to` holds a live figure of the
    /// mover's color.
    pub fn is_legal(self, board: &Board, from: Position, to: Position) -> bool {
        let Some((_, mover)) = board.find_live_at(from) else {
            return false;
        };

        if board
            .find_live_at(to)
            .is_some_and(|(_, target)| target.color() == mover.color())
        {
            return false;
        }

        let (dx, dy) = from.offset(to);
        match self {
            MoveRule::Rook => (dx == 0) != (dy == 0) && path_is_clear(board, from, to),
            MoveRule::Bishop => dx != 0 && dx.abs() == dy.abs() && path_is_clear(board, from, to),
            MoveRule::Knight => matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1)),
            // TODO: real queen, king and pawn geometry
            MoveRule::Queen | MoveRule::King | MoveRule::Pawn => true,
        }
    }

    /// Move figure `id` to `to`, capturing the live occupant if any.
    ///
    /// Checks in order: the figure exists, its archetype permits this rule,
    /// it is alive, and the destination is legal. Nothing changes unless
    /// every check passes.
    pub fn perform(
        self,
        board: &mut Board,
        id: FigureId,
        to: Position,
    ) -> Result<Option<FigureId>, Error> {
        let mover = board.figure(id)?;
        let archetype = mover.archetype();
        let from = mover.position();

        if !archetype.permits(self) {
            return Err(Error::WrongAbility {
                archetype,
                rule: self,
            });
        }

        if mover.is_dead() || !self.is_legal(board, from, to) {
            trace!("rejected {self:?} move {id} {from} -> {to}");
            return Err(Error::IllegalMove {
                rule: self,
                from,
                to,
            });
        }

        let captured = board.find_live_at(to).map(|(captured, _)| captured);

        board.figure_mut(id)?.relocate(to);
        if let Some(captured) = captured {
            board.figure_mut(captured)?.kill();
            debug!("{archetype:?} {id} {from} -> {to} captures {captured}");
        } else {
            debug!("{archetype:?} {id} {from} -> {to}");
        }

        Ok(captured)
    }
}

/// No live figure stands strictly between `from` and `to`.
fn path_is_clear(board: &Board, from: Position, to: Position) -> bool {
    from.between(to).all(|square| !board.is_occupied(square))
}
