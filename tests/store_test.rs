//! Tests for the game store: moves, time travel, restart and the save that
//! follows each of them.

use tictactoe_timeline::{
    Board, GameState, GameStatus, GameStore, IgnoredMove, MemorySlotStore, MoveOutcome,
    Persistence, Player, Position, STATE_KEY, SlotStore, StateError, StoreError, game::rules,
};

fn new_store() -> (GameStore<MemorySlotStore>, MemorySlotStore) {
    let slots = MemorySlotStore::new();
    let store = GameStore::load(Persistence::new(slots.clone()));
    (store, slots)
}

fn play_all(store: &mut GameStore<MemorySlotStore>, indices: &[usize]) {
    for &idx in indices {
        let pos = Position::from_index(idx).expect("Valid index");
        assert_eq!(store.apply_move(pos).expect("Move"), MoveOutcome::Applied);
    }
}

fn current(store: &GameStore<MemorySlotStore>) -> Board {
    *store.state().current().expect("Valid step")
}

#[test]
fn test_top_row_win_scenario() {
    let (mut store, _) = new_store();
    play_all(&mut store, &[0, 4, 1, 3]);
    assert_eq!(rules::winner(&current(&store)), None);

    play_all(&mut store, &[2]);
    assert_eq!(rules::winner(&current(&store)), Some(Player::X));
    assert_eq!(rules::status(&current(&store)).to_string(), "Winner: X");

    let before = store.state().clone();
    for pos in Position::valid_moves(&current(&store)) {
        assert_eq!(
            store.apply_move(pos).unwrap(),
            MoveOutcome::Ignored(IgnoredMove::GameOver(Player::X))
        );
    }
    assert_eq!(store.state(), &before);
}

#[test]
fn test_draw_scenario() {
    let (mut store, _) = new_store();
    // X:0,1,5,6,8  O:2,3,4,7 interleaved X first.
    play_all(&mut store, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(rules::status(&current(&store)), GameStatus::Draw);
    assert_eq!(store.state().history().len(), 10);
}

#[test]
fn test_occupied_square_is_ignored() {
    let (mut store, slots) = new_store();
    play_all(&mut store, &[4]);
    let saved = slots.get(STATE_KEY).unwrap();
    let before = store.state().clone();

    let outcome = store.apply_move(Position::Center).unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Ignored(IgnoredMove::SquareOccupied(Position::Center))
    );
    assert_eq!(store.state(), &before);
    assert_eq!(slots.get(STATE_KEY).unwrap(), saved);
}

#[test]
fn test_move_from_earlier_step_truncates() {
    let (mut store, _) = new_store();
    play_all(&mut store, &[0, 4, 8]);
    let after_one = store.state().history()[1];

    store.jump_to(1).unwrap();
    assert_eq!(store.state().current_step(), 1);
    assert_eq!(current(&store), after_one);
    assert_eq!(store.state().history().len(), 4);

    store.apply_move(Position::TopRight).unwrap();

    let state = store.state();
    assert_eq!(state.history().len(), 1 + 2);
    assert_eq!(state.current_step(), 2);
    assert_eq!(state.history()[1], after_one);
    // Move 2 on the new branch is O at top-right; the old O center and X corner are gone.
    assert!(current(&store).is_empty(Position::Center));
    assert!(current(&store).is_empty(Position::BottomRight));
    assert_eq!(rules::next_player(&current(&store)), Player::X);
}

#[test]
fn test_jump_never_mutates_history() {
    let (mut store, _) = new_store();
    play_all(&mut store, &[0, 4, 8]);
    let history = store.state().history().to_vec();

    for step in [0, 3, 2, 1, 3] {
        store.jump_to(step).unwrap();
        assert_eq!(store.state().current_step(), step);
        assert_eq!(store.state().history(), history.as_slice());
    }
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let (mut store, _) = new_store();
    play_all(&mut store, &[0]);
    let before = store.state().clone();

    let err = store.jump_to(2).unwrap_err();

    assert!(matches!(
        err,
        StoreError::State(StateError::StepOutOfRange { step: 2, len: 2 })
    ));
    assert_eq!(store.state(), &before);
}

#[test]
fn test_won_board_stays_navigable() {
    let (mut store, _) = new_store();
    play_all(&mut store, &[0, 4, 1, 3, 2]);

    store.jump_to(4).unwrap();
    assert_eq!(
        store.apply_move(Position::BottomRight).unwrap(),
        MoveOutcome::Applied
    );
    assert_eq!(store.state().history().len(), 6);
    assert_eq!(rules::winner(&current(&store)), None);
}

#[test]
fn test_every_change_is_saved() {
    let (mut store, slots) = new_store();
    let persistence = Persistence::new(slots.clone());

    play_all(&mut store, &[4, 0]);
    assert_eq!(&persistence.load(), store.state());

    store.jump_to(1).unwrap();
    assert_eq!(persistence.load().current_step(), 1);
}

#[test]
fn test_restart_clears_slot() {
    let (mut store, slots) = new_store();
    play_all(&mut store, &[4, 0, 8]);
    assert!(slots.get(STATE_KEY).unwrap().is_some());

    store.restart().unwrap();

    assert_eq!(store.state(), &GameState::new());
    assert_eq!(store.state().history(), &[Board::new()]);
    assert_eq!(store.state().current_step(), 0);
    assert_eq!(slots.get(STATE_KEY).unwrap(), None);
}

#[test]
fn test_store_resumes_saved_game() {
    let (mut store, slots) = new_store();
    play_all(&mut store, &[4, 0]);
    store.jump_to(1).unwrap();

    let resumed = GameStore::load(Persistence::new(slots));

    assert_eq!(resumed.state(), store.state());
}
