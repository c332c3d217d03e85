use chess_rules::script::MoveScript;
use chess_rules::{Archetype, Board, BoardFigure, Color, Error, FigureId, Match, MoveRule, Position};
use test_case::test_case;

/// Helper: position from coordinates.
fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y).expect("position on the board")
}

/// Helper: board from (archetype, x, y, color) tuples, returning the ids in order.
fn setup(figures: &[(Archetype, i32, i32, Color)]) -> (Board, Vec<FigureId>) {
    let board = Board::new(
        figures
            .iter()
            .map(|&(archetype, x, y, color)| BoardFigure::new(archetype, pos(x, y), color)),
    )
    .expect("no overlapping figures");
    let ids = board.iter().map(|(id, _)| id).collect();
    (board, ids)
}

/// Helper: snapshot of every figure's position and liveness.
fn snapshot(board: &Board) -> Vec<(Position, bool)> {
    board
        .iter()
        .map(|(_, figure)| (figure.position(), figure.is_alive()))
        .collect()
}

// ---------------------------------------------------------------
// Rook
// ---------------------------------------------------------------

#[test]
fn rook_moves_on_empty_board() {
    let (mut board, ids) = setup(&[(Archetype::Rook, 0, 0, Color::White)]);

    let captured = board.apply_action(ids[0], MoveRule::Rook, pos(0, 1));

    assert_eq!(captured, Ok(None));
    assert_eq!(board.figure(ids[0]).unwrap().position(), pos(0, 1));
}

#[test]
fn rook_cannot_take_own_color() {
    let (mut board, ids) = setup(&[
        (Archetype::Rook, 0, 0, Color::White),
        (Archetype::Rook, 0, 1, Color::White),
    ]);
    let before = snapshot(&board);

    let result = board.apply_action(ids[0], MoveRule::Rook, pos(0, 1));

    assert_eq!(
        result,
        Err(Error::IllegalMove {
            rule: MoveRule::Rook,
            from: pos(0, 0),
            to: pos(0, 1)
        })
    );
    assert_eq!(snapshot(&board), before);
}

#[test]
fn rook_captures_other_color() {
    let (mut board, ids) = setup(&[
        (Archetype::Rook, 0, 0, Color::White),
        (Archetype::Rook, 0, 1, Color::Black),
    ]);

    let captured = board.apply_action(ids[0], MoveRule::Rook, pos(0, 1));

    assert_eq!(captured, Ok(Some(ids[1])));
    assert_eq!(board.figure(ids[0]).unwrap().position(), pos(0, 1));
    assert!(board.figure(ids[1]).unwrap().is_dead());
    // The captured rook keeps its identity but is invisible to lookups.
    assert_eq!(board.len(), 2);
    let (found, _) = board.find_live_at(pos(0, 1)).unwrap();
    assert_eq!(found, ids[0]);
}

#[test_case(Color::White; "own blocker")]
#[test_case(Color::Black; "enemy blocker")]
fn rook_cannot_pass_through(blocker: Color) {
    let (mut board, ids) = setup(&[
        (Archetype::Rook, 0, 0, Color::White),
        (Archetype::Rook, 0, 1, blocker),
    ]);

    let result = board.apply_action(ids[0], MoveRule::Rook, pos(0, 2));

    assert!(matches!(result, Err(Error::IllegalMove { .. })));
    assert_eq!(board.figure(ids[0]).unwrap().position(), pos(0, 0));
}

#[test]
fn rook_cannot_leave_its_lines() {
    let (mut board, ids) = setup(&[(Archetype::Rook, 0, 0, Color::White)]);

    let result = board.apply_action(ids[0], MoveRule::Rook, pos(1, 1));

    assert!(matches!(result, Err(Error::IllegalMove { .. })));
}

#[test]
fn wrong_ability_is_rejected() {
    let (mut board, ids) = setup(&[(Archetype::Rook, 0, 0, Color::White)]);

    let result = board.apply_action(ids[0], MoveRule::Bishop, pos(0, 1));

    assert_eq!(
        result,
        Err(Error::WrongAbility {
            archetype: Archetype::Rook,
            rule: MoveRule::Bishop
        })
    );
}

// ---------------------------------------------------------------
// Bishop
// ---------------------------------------------------------------

#[test]
fn bishop_moves_diagonally() {
    let (mut board, ids) = setup(&[(Archetype::Bishop, 0, 0, Color::White)]);

    board
        .apply_action(ids[0], MoveRule::Bishop, pos(1, 1))
        .expect("legal bishop move");

    assert_eq!(board.figure(ids[0]).unwrap().position(), pos(1, 1));
}

#[test]
fn bishop_captures_rook() {
    let (mut board, ids) = setup(&[
        (Archetype::Rook, 0, 0, Color::White),
        (Archetype::Bishop, 1, 1, Color::Black),
    ]);

    let captured = board.apply_action(ids[1], MoveRule::Bishop, pos(0, 0));

    assert_eq!(captured, Ok(Some(ids[0])));
    assert_eq!(board.figure(ids[1]).unwrap().position(), pos(0, 0));
    assert!(board.figure(ids[0]).unwrap().is_dead());
}

#[test]
fn bishop_cannot_take_own_color() {
    let (mut board, ids) = setup(&[
        (Archetype::Rook, 0, 0, Color::White),
        (Archetype::Bishop, 1, 1, Color::White),
    ]);

    let result = board.apply_action(ids[1], MoveRule::Bishop, pos(0, 0));

    assert!(matches!(result, Err(Error::IllegalMove { .. })));
    assert!(board.figure(ids[0]).unwrap().is_alive());
}

#[test]
fn bishop_rejects_unequal_deltas() {
    let (mut board, ids) = setup(&[(Archetype::Bishop, 0, 0, Color::White)]);

    let result = board.apply_action(ids[0], MoveRule::Bishop, pos(1, 2));

    assert!(matches!(result, Err(Error::IllegalMove { .. })));
}

#[test]
fn bishop_cannot_jump() {
    let (mut board, ids) = setup(&[
        (Archetype::Rook, 1, 1, Color::White),
        (Archetype::Bishop, 0, 0, Color::White),
    ]);

    let result = board.apply_action(ids[1], MoveRule::Bishop, pos(2, 2));

    assert!(matches!(result, Err(Error::IllegalMove { .. })));
}

#[test]
fn bishop_blocked_moving_backwards() {
    let (mut board, ids) = setup(&[
        (Archetype::Bishop, 5, 5, Color::White),
        (Archetype::Pawn, 3, 3, Color::Black),
    ]);

    let result = board.apply_action(ids[0], MoveRule::Bishop, pos(1, 1));

    assert!(matches!(result, Err(Error::IllegalMove { .. })));
    assert_eq!(
        board.apply_action(ids[0], MoveRule::Bishop, pos(3, 3)),
        Ok(Some(ids[1]))
    );
}

// ---------------------------------------------------------------
// Knight
// ---------------------------------------------------------------

#[test]
fn knight_legal_move() {
    let (mut board, ids) = setup(&[(Archetype::Knight, 0, 0, Color::White)]);

    board
        .apply_action(ids[0], MoveRule::Knight, pos(1, 2))
        .expect("legal knight move");

    assert_eq!(board.figure(ids[0]).unwrap().position(), pos(1, 2));
}

#[test]
fn knight_captures_rook() {
    let (mut board, ids) = setup(&[
        (Archetype::Rook, 0, 0, Color::White),
        (Archetype::Knight, 1, 2, Color::Black),
    ]);

    let captured = board.apply_action(ids[1], MoveRule::Knight, pos(0, 0));

    assert_eq!(captured, Ok(Some(ids[0])));
    assert!(board.figure(ids[0]).unwrap().is_dead());
}

#[test_case(1, 2, Color::White; "own color")]
#[test_case(1, 3, Color::Black; "wrong shape")]
fn knight_illegal_capture_leaves_board(x: i32, y: i32, knight: Color) {
    let (mut board, ids) = setup(&[
        (Archetype::Rook, 0, 0, Color::White),
        (Archetype::Knight, x, y, knight),
    ]);

    let result = board.apply_action(ids[1], MoveRule::Knight, pos(0, 0));

    assert!(matches!(result, Err(Error::IllegalMove { .. })));
    assert_eq!(board.figure(ids[1]).unwrap().position(), pos(x, y));
    assert!(board.figure(ids[0]).unwrap().is_alive());
}

// ---------------------------------------------------------------
// Queen, King, Pawn
// ---------------------------------------------------------------

#[test]
fn queen_moves_anywhere() {
    let (mut board, ids) = setup(&[(Archetype::Queen, 0, 0, Color::White)]);

    board
        .apply_action(ids[0], MoveRule::Queen, pos(4, 0))
        .expect("queen accepts any destination");

    assert_eq!(board.figure(ids[0]).unwrap().position(), pos(4, 0));
}

#[test_case(Archetype::King, MoveRule::King)]
#[test_case(Archetype::Pawn, MoveRule::Pawn)]
fn placeholder_rules_capture_at_range(archetype: Archetype, rule: MoveRule) {
    let (mut board, ids) = setup(&[
        (archetype, 0, 0, Color::White),
        (Archetype::Knight, 6, 3, Color::Black),
    ]);

    assert_eq!(board.apply_action(ids[0], rule, pos(6, 3)), Ok(Some(ids[1])));
}

#[test]
fn dead_figure_is_never_found() {
    let (mut board, ids) = setup(&[
        (Archetype::Queen, 0, 0, Color::White),
        (Archetype::Queen, 7, 7, Color::Black),
    ]);

    board.apply_action(ids[0], MoveRule::Queen, pos(7, 7)).unwrap();
    // Moving away uncovers the square, but the dead queen stays hidden.
    board.apply_action(ids[0], MoveRule::Queen, pos(3, 3)).unwrap();

    assert!(board.find_live_at(pos(7, 7)).is_none());
    assert_eq!(board.figure(ids[1]).unwrap().position(), pos(7, 7));
    assert!(board.figure(ids[1]).unwrap().is_dead());
}

// ---------------------------------------------------------------
// Match driven by scripts
// ---------------------------------------------------------------

#[test]
fn scripted_match_debits_both_sides() {
    let mut game = Match::new(Board::starting(), 150);
    let mut script = MoveScript::parse("b1c3. g8f6. c3d5. f6d5.").expect("valid script");

    let mut captures = Vec::new();
    while let Some((from, to)) = script.next_move() {
        let captured = game.play(from, to, 10).expect("legal scripted move");
        captures.extend(captured);
    }

    assert_eq!(game.time_left(Color::White), 130);
    assert_eq!(game.time_left(Color::Black), 130);
    assert_eq!(captures.len(), 1);
    let (_, knight) = game.board().find_live_at("d5".parse().unwrap()).unwrap();
    assert_eq!(knight.archetype(), Archetype::Knight);
    assert_eq!(knight.color(), Color::Black);
    assert_eq!(game.board().live().count(), 31);
}

#[test]
fn scripted_match_stops_on_blocked_rook() {
    let mut game = Match::new(Board::starting(), 150);
    let mut script = MoveScript::parse("a1a3.").expect("valid script");
    let (from, to) = script.next_move().unwrap();

    let result = game.play(from, to, 10);

    assert!(matches!(result, Err(Error::IllegalMove { .. })));
    assert_eq!(game.time_left(Color::White), 150);
    assert_eq!(game.board(), &Board::starting());
}
