use bingo_core::*;

fn pool() -> PromptPool {
    PromptPool::new(
        "FREE SPACE",
        (1..=40).map(|i| format!("Find someone who knows fact #{i}")),
    )
}

#[test]
fn marking_a_known_line_ends_in_bingo() {
    let mut session = GameSession::restore(MemoryStore::new(), pool(), 2024);
    assert_eq!(session.start_game(), Ok(Transition::Changed));

    let line = Line::column(2);
    let to_mark: Vec<SquareId> = line
        .square_ids
        .iter()
        .copied()
        .filter(|&id| id != FREE_SPACE_ID)
        .collect();
    let (last, rest) = to_mark.split_last().unwrap();

    for &id in rest {
        assert_eq!(session.mark_square(id), Transition::Changed);
        assert_eq!(session.state(), GameState::Playing);
    }
    assert_eq!(session.mark_square(*last), Transition::Bingo);

    assert_eq!(session.state(), GameState::Bingo);
    assert_eq!(session.winning_line(), Some(line));
    assert_eq!(
        session.winning_square_ids(),
        winning_square_ids(&line)
    );
}

#[test]
fn saved_game_survives_reload_and_reset() {
    let mut session = GameSession::restore(MemoryStore::new(), pool(), 1);
    session.start_game().unwrap();
    for id in [20, 16, 8, 4] {
        session.mark_square(id);
    }
    assert_eq!(session.winning_line(), Some(Line::diagonal(1)));

    let mut reloaded = GameSession::restore(session.store().clone(), pool(), 2);
    assert_eq!(reloaded.state(), GameState::Bingo);
    assert_eq!(reloaded.board(), session.board());
    assert_eq!(reloaded.winning_line(), session.winning_line());

    reloaded.reset_game();
    let fresh = GameSession::restore(reloaded.store().clone(), pool(), 3);
    assert_eq!(fresh.state(), GameState::Start);
    assert!(fresh.board().is_none());
}

#[test]
fn stored_board_from_another_version_is_ignored() {
    let mut store = MemoryStore::new();
    store
        .set(
            PersistedSnapshot::KEY,
            r#"{"version":0,"gameState":"playing","board":null,"winningLine":null}"#,
        )
        .unwrap();

    let session = GameSession::restore(store, pool(), 0);
    assert_eq!(session.state(), GameState::Start);
    assert!(session.board().is_none());
}
