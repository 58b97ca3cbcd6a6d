//! Property-based tests for the game state invariants.
//!
//! These drive arbitrary operation sequences against `GameState` and check
//! the structural invariants after every single step: capacity, name
//! uniqueness, and prize conservation.

use std::collections::BTreeSet;

use prize_draw::{GameState, MAX_PARTICIPANTS, TOTAL_PRIZES};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Connect(u64),
    Disconnect(u64),
    Add(String),
    Draw(u64),
    Reset(u64),
    Remove(u64, String),
}

// Small pools for connection ids and names so collisions (duplicate adds,
// non-host requesters, repeated draws) actually happen.
fn conn_strategy() -> impl Strategy<Value = u64> {
    0u64..4
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-E]"]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        conn_strategy().prop_map(Op::Connect),
        conn_strategy().prop_map(Op::Disconnect),
        name_strategy().prop_map(Op::Add),
        conn_strategy().prop_map(Op::Draw),
        conn_strategy().prop_map(Op::Reset),
        (conn_strategy(), name_strategy()).prop_map(|(conn, name)| Op::Remove(conn, name)),
    ]
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert!(state.participants().len() <= MAX_PARTICIPANTS);

    let unique_participants: BTreeSet<_> = state.participants().iter().collect();
    prop_assert_eq!(unique_participants.len(), state.participants().len());

    let unique_winners: BTreeSet<_> = state.winners().iter().collect();
    prop_assert_eq!(unique_winners.len(), state.winners().len());

    prop_assert_eq!(
        state.remaining_prizes() + state.winners().len() as u32,
        TOTAL_PRIZES
    );

    Ok(())
}

proptest! {
    #[test]
    fn test_invariants_hold_for_any_operation_sequence(
        ops in prop::collection::vec(op_strategy(), 0..64)
    ) {
        let mut state = GameState::new(MAX_PARTICIPANTS, TOTAL_PRIZES);

        for op in ops {
            match op {
                Op::Connect(conn) => {
                    state.connect(conn);
                }
                Op::Disconnect(conn) => {
                    state.disconnect(conn, None);
                }
                Op::Add(name) => {
                    state.add_participant(&name);
                }
                Op::Draw(conn) => {
                    if let Some(eligible) = state.begin_draw(conn) {
                        let winner = state.finish_draw(&eligible).expect("eligible is non-empty");
                        prop_assert!(eligible.contains(&winner));
                    }
                }
                Op::Reset(conn) => {
                    state.reset(conn);
                }
                Op::Remove(conn, name) => {
                    state.remove_participant(conn, &name);
                }
            }

            check_invariants(&state)?;
        }
    }

    #[test]
    fn test_adds_alone_never_exceed_capacity_or_duplicate(
        names in prop::collection::vec(name_strategy(), 0..48)
    ) {
        let mut state = GameState::new(MAX_PARTICIPANTS, TOTAL_PRIZES);
        for name in names {
            state.add_participant(&name);
            check_invariants(&state)?;
        }
    }

    #[test]
    fn test_draws_stop_exactly_when_prizes_run_out(count in 1u32..8) {
        let mut state = GameState::new(MAX_PARTICIPANTS, count);
        state.connect(0);
        for i in 0..MAX_PARTICIPANTS {
            state.add_participant(&format!("Player {i}"));
        }

        let mut draws = 0;
        while let Some(eligible) = state.begin_draw(0) {
            state.finish_draw(&eligible);
            draws += 1;
            prop_assert!(draws <= count);
        }

        prop_assert_eq!(draws, count);
        prop_assert_eq!(state.remaining_prizes(), 0);
        prop_assert_eq!(state.winners().len() as u32, count);
    }
}
