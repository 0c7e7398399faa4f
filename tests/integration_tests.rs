//! End-to-end scenarios - full games driven through the command entry point

use blockfall::core::{ScriptedPieces, Session};
use blockfall::types::{Command, Outcome, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn scripted(kinds: &[PieceKind]) -> Session {
    Session::with_source(Box::new(ScriptedPieces::new(kinds.to_vec())))
}

/// Tick until the current piece locks, returning the final outcome.
fn tick_to_lock(session: &mut Session) -> Outcome {
    loop {
        match session.apply(Command::Tick) {
            Outcome::Applied => continue,
            other => return other,
        }
    }
}

#[test]
fn test_bottom_row_clear_pays_score_and_credit() {
    // Two flat I pieces cover columns 0-7 of the bottom row; the O finishes
    // columns 8-9 and leaves its top half behind after the sweep
    let mut session = scripted(&[
        PieceKind::I,
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
    ]);

    // First I: columns 0-3
    for _ in 0..3 {
        assert_eq!(session.apply(Command::MoveLeft), Outcome::Applied);
    }
    assert_eq!(tick_to_lock(&mut session), Outcome::Locked { lines_cleared: 0 });

    // Second I: columns 4-7
    assert_eq!(session.apply(Command::MoveRight), Outcome::Applied);
    assert_eq!(tick_to_lock(&mut session), Outcome::Locked { lines_cleared: 0 });

    // Nothing has been cleared yet
    assert_eq!(session.score(), 0);
    assert_eq!(session.credits(), 0);

    // O: columns 8-9, completing the bottom row on lock
    for _ in 0..4 {
        assert_eq!(session.apply(Command::MoveRight), Outcome::Applied);
    }
    assert_eq!(tick_to_lock(&mut session), Outcome::Locked { lines_cleared: 1 });

    assert_eq!(session.score(), 100);
    assert_eq!(session.credits(), 1);

    // The O's upper half dropped into the swept row; the I cells are gone
    let board = session.board();
    assert!(board.is_occupied(8, 19));
    assert!(board.is_occupied(9, 19));
    for x in 0..8 {
        assert!(board.is_empty(x, 19));
    }
    assert_eq!(
        board.cells().len(),
        BOARD_WIDTH as usize * BOARD_HEIGHT as usize
    );

    // The lookahead chain advanced in order
    assert_eq!(session.active().kind, PieceKind::T);
    assert_eq!(session.next(), PieceKind::S);
}

#[test]
fn test_double_clear_pays_per_row() {
    // Five O pieces tile the bottom two rows; the last lock completes both
    let mut session = scripted(&[PieceKind::O]);

    let placements: [i8; 5] = [-4, -2, 0, 2, 4];
    for (i, shift) in placements.iter().enumerate() {
        for _ in 0..shift.unsigned_abs() {
            let step = if *shift < 0 {
                Command::MoveLeft
            } else {
                Command::MoveRight
            };
            assert_eq!(session.apply(step), Outcome::Applied);
        }

        let expected = if i == placements.len() - 1 {
            Outcome::Locked { lines_cleared: 2 }
        } else {
            Outcome::Locked { lines_cleared: 0 }
        };
        assert_eq!(tick_to_lock(&mut session), expected);
    }

    assert_eq!(session.score(), 200);
    assert_eq!(session.credits(), 2);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(session.board().is_empty(x, y));
        }
    }
}

#[test]
fn test_raise_with_credit_but_blocked_keeps_credit() {
    // Earn one credit from a line clear, then try to raise the fresh piece
    // straight out of the top of the grid
    let mut session = scripted(&[
        PieceKind::I,
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
    ]);

    for _ in 0..3 {
        session.apply(Command::MoveLeft);
    }
    tick_to_lock(&mut session);
    session.apply(Command::MoveRight);
    tick_to_lock(&mut session);
    for _ in 0..4 {
        session.apply(Command::MoveRight);
    }
    assert_eq!(tick_to_lock(&mut session), Outcome::Locked { lines_cleared: 1 });
    assert_eq!(session.credits(), 1);

    // The new T sits at spawn row 0; raising would leave the grid
    let before = session.active();
    assert_eq!(session.apply(Command::Raise), Outcome::Rejected);
    assert_eq!(session.active(), before);
    assert_eq!(session.credits(), 1, "a failed raise costs nothing");

    // Once the piece has descended, the same credit pays for a real raise
    session.apply(Command::Tick);
    assert_eq!(session.apply(Command::Raise), Outcome::Applied);
    assert_eq!(session.credits(), 0);
    assert_eq!(session.active().y, 0);
}

#[test]
fn test_blocked_spawn_reports_game_over_and_restarts() {
    // An endless column of O pieces stacks two rows at a time in columns
    // 4-5; the tenth lock leaves the spawn cells occupied
    let mut session = scripted(&[PieceKind::O]);

    // Leave fingerprints on every counter so the reset is visible
    session.apply(Command::Pause(50));
    session.apply(Command::TypedDrop);
    assert_eq!(session.credits(), 1);
    assert_eq!(session.score(), 1);

    let mut locks = 0;
    let outcome = loop {
        match session.apply(Command::SoftDrop) {
            Outcome::Applied => continue,
            Outcome::Locked { .. } => locks += 1,
            other => break other,
        }
    };

    assert_eq!(outcome, Outcome::GameOver);
    assert_eq!(locks, 9, "nine pieces lock cleanly before the overflow");

    // The session restarted in the same call: empty board, zeroed counters,
    // a fresh piece at spawn
    assert_eq!(session.score(), 0);
    assert_eq!(session.credits(), 0);
    assert_eq!(session.pause_ticks(), 0);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(session.board().is_empty(x, y));
        }
    }
    assert_eq!(session.active().kind, PieceKind::O);
    assert_eq!(session.active().rotation, Rotation::North);
    assert_eq!((session.active().x, session.active().y), (3, 0));
    assert_eq!(session.next(), PieceKind::O);
}

#[test]
fn test_every_kind_spawns_at_the_same_origin() {
    let mut session = scripted(&[
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ]);

    for expected in [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ] {
        let active = session.active();
        assert_eq!(active.kind, expected);
        assert_eq!((active.x, active.y), (3, 0));
        assert_eq!(active.rotation, Rotation::North);

        if expected == PieceKind::L {
            break;
        }
        assert!(matches!(
            tick_to_lock(&mut session),
            Outcome::Locked { .. }
        ));
    }
}
