//! Tests for the one-shot commands: show, move, jump and reset against a
//! saved game.

use tictactoe_timeline::{
    CommandError, CommandRequest, GameState, MemorySlotStore, Persistence, Player, Position,
    STATE_KEY, SlotStore, Square, StateError, StoreError, commands,
};

const FRESH: &str = "Next player: X\n\n1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\n> Go to game start\n";

fn run(slots: &MemorySlotStore, request: CommandRequest) -> Result<String, CommandError> {
    commands::execute(Persistence::new(slots.clone()), &request)
}

fn saved(slots: &MemorySlotStore) -> GameState {
    Persistence::new(slots.clone()).load()
}

fn move_to(square: &str) -> CommandRequest {
    CommandRequest::Move(square.to_string())
}

#[test]
fn test_show_prints_fresh_game_without_writing() {
    let slots = MemorySlotStore::new();
    assert_eq!(run(&slots, CommandRequest::Show).unwrap(), FRESH);
    assert_eq!(slots.get(STATE_KEY).unwrap(), None);
}

#[test]
fn test_move_by_label_and_index() {
    let slots = MemorySlotStore::new();

    let out = run(&slots, move_to("top-left")).unwrap();
    assert!(out.starts_with("Next player: O\n\nX|2|3"), "{out}");

    let out = run(&slots, move_to("4")).unwrap();
    assert!(out.contains("> Go to move #2"), "{out}");

    let state = saved(&slots);
    let board = state.current().unwrap();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(state.current_step(), 2);
}

#[test]
fn test_ignored_move_reports_reason() {
    let slots = MemorySlotStore::new();
    run(&slots, move_to("0")).unwrap();
    let before = slots.get(STATE_KEY).unwrap();

    let out = run(&slots, move_to("Top-Left")).unwrap();
    assert!(out.starts_with("Move ignored: Top-left is already occupied"), "{out}");
    assert_eq!(slots.get(STATE_KEY).unwrap(), before);
}

#[test]
fn test_unknown_square_is_rejected() {
    let slots = MemorySlotStore::new();
    let err = run(&slots, move_to("nowhere")).unwrap_err();
    assert!(matches!(err, CommandError::UnknownSquare(ref s) if s == "nowhere"));
    assert_eq!(slots.get(STATE_KEY).unwrap(), None);
}

#[test]
fn test_jump_moves_current_step() {
    let slots = MemorySlotStore::new();
    for square in ["0", "4", "8"] {
        run(&slots, move_to(square)).unwrap();
    }

    let out = run(&slots, CommandRequest::Jump(1)).unwrap();
    assert!(out.starts_with("Next player: O"), "{out}");
    assert!(out.contains("> Go to move #1"), "{out}");

    let state = saved(&slots);
    assert_eq!(state.current_step(), 1);
    assert_eq!(state.history().len(), 4);
}

#[test]
fn test_out_of_range_jump_fails_without_writing() {
    let slots = MemorySlotStore::new();
    run(&slots, move_to("0")).unwrap();
    let before = slots.get(STATE_KEY).unwrap();

    let err = run(&slots, CommandRequest::Jump(5)).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Store(StoreError::State(StateError::StepOutOfRange { step: 5, len: 2 }))
    ));
    assert_eq!(slots.get(STATE_KEY).unwrap(), before);
}

#[test]
fn test_reset_clears_slot() {
    let slots = MemorySlotStore::new();
    run(&slots, move_to("center")).unwrap();

    assert_eq!(run(&slots, CommandRequest::Reset).unwrap(), FRESH);
    assert_eq!(slots.get(STATE_KEY).unwrap(), None);
}

#[test]
fn test_inconsistent_save_is_refused_untouched() {
    // O moved first.
    let document = r#"{"history":[[null,null,null,null,null,null,null,null,null],["O",null,null,null,null,null,null,null,null]],"currentStep":1}"#;
    let slots = MemorySlotStore::new();
    slots.set(STATE_KEY, document).unwrap();

    for request in [move_to("4"), CommandRequest::Jump(0), CommandRequest::Show] {
        let err = run(&slots, request).unwrap_err();
        assert!(matches!(err, CommandError::Inconsistent(_)), "{err}");
        assert!(err.to_string().contains("run `reset`"), "{err}");
        assert_eq!(slots.get(STATE_KEY).unwrap().as_deref(), Some(document));
    }

    assert_eq!(run(&slots, CommandRequest::Reset).unwrap(), FRESH);
    assert_eq!(slots.get(STATE_KEY).unwrap(), None);
}
