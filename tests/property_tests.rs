//! Property-based tests for wizard navigation.
//!
//! These tests use proptest to drive the engine with random sequences of
//! answers, backs and restarts over the built-in trees.

use csdm_wizard::catalog;
use csdm_wizard::engine::{WizardEngine, WizardError};
use csdm_wizard::WizardState;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    /// Pick the n-th choice (modulo the number offered)
    Advance(usize),
    Back,
    Restart,
}

prop_compose! {
    fn arbitrary_op()(variant in 0..10u8, pick in 0..3usize) -> Op {
        match variant {
            0..=6 => Op::Advance(pick),
            7 | 8 => Op::Back,
            _ => Op::Restart,
        }
    }
}

fn engines() -> Vec<WizardEngine> {
    vec![
        WizardEngine::new(catalog::csdm_v4()),
        WizardEngine::new(catalog::csdm_v4_express()),
    ]
}

/// Advance along the given picks until a result is reached or picks run out.
fn walk(engine: &WizardEngine, picks: &[usize]) -> WizardState {
    let mut state = engine.start();
    for pick in picks {
        let choices = engine.choices(state.current());
        if choices.is_empty() {
            break;
        }
        let choice = choices[pick % choices.len()].choice.clone();
        state = engine.advance(&state, choice).unwrap();
    }
    state
}

proptest! {
    #[test]
    fn history_length_tracks_advances_minus_backs(
        ops in prop::collection::vec(arbitrary_op(), 0..40),
        which in 0..2usize,
    ) {
        let engines = engines();
        let engine = &engines[which];
        let mut state = engine.start();
        let mut expected_depth = 0usize;

        for op in ops {
            match op {
                Op::Advance(pick) => {
                    let choices = engine.choices(state.current());
                    if choices.is_empty() {
                        prop_assert!(engine.is_terminal(state.current()));
                        continue;
                    }
                    let choice = choices[pick % choices.len()].choice.clone();
                    state = engine.advance(&state, choice).unwrap();
                    expected_depth += 1;
                }
                Op::Back => {
                    let had_history = state.can_go_back();
                    state = engine.go_back(&state);
                    if had_history {
                        expected_depth -= 1;
                    }
                }
                Op::Restart => {
                    state = engine.restart(&state);
                    expected_depth = 0;
                }
            }

            prop_assert_eq!(state.depth(), expected_depth);
            prop_assert!(engine.tree().contains(state.current()));
        }
    }

    #[test]
    fn go_back_is_left_inverse_of_advance(
        picks in prop::collection::vec(0..3usize, 0..6),
        next in 0..3usize,
    ) {
        for engine in engines() {
            let state = walk(&engine, &picks);
            let choices = engine.choices(state.current());
            if choices.is_empty() {
                continue;
            }
            let choice = choices[next % choices.len()].choice.clone();

            let advanced = engine.advance(&state, choice).unwrap();
            prop_assert_eq!(advanced.depth(), state.depth() + 1);
            prop_assert_eq!(engine.go_back(&advanced), state);
        }
    }

    #[test]
    fn n_backs_undo_n_advances(picks in prop::collection::vec(0..3usize, 0..8)) {
        for engine in engines() {
            let mut state = walk(&engine, &picks);
            for _ in 0..state.depth() {
                state = engine.go_back(&state);
            }

            prop_assert_eq!(&state, &engine.start());
            // One more is a no-op
            prop_assert_eq!(engine.go_back(&state), engine.start());
        }
    }

    #[test]
    fn restart_always_yields_start(picks in prop::collection::vec(0..3usize, 0..8)) {
        for engine in engines() {
            let state = walk(&engine, &picks);
            let restarted = engine.restart(&state);

            prop_assert_eq!(restarted.current(), engine.tree().start());
            prop_assert!(restarted.history().is_empty());
        }
    }

    #[test]
    fn undefined_choice_is_rejected_without_change(
        picks in prop::collection::vec(0..3usize, 0..8),
        bogus in "[a-z]{1,12}",
    ) {
        for engine in engines() {
            let state = walk(&engine, &picks);
            let offered = engine
                .choices(state.current())
                .iter()
                .any(|edge| edge.choice.as_str() == bogus);
            if offered {
                continue;
            }

            let result = engine.advance(&state, bogus.as_str());
            let is_invalid_transition = matches!(result, Err(WizardError::InvalidTransition { .. }));
            prop_assert!(is_invalid_transition);
        }
    }

    #[test]
    fn every_walk_ends_at_a_result_with_data(picks in prop::collection::vec(0..3usize, 8..10)) {
        for engine in engines() {
            let state = walk(&engine, &picks);

            prop_assert!(engine.is_terminal(state.current()));
            prop_assert!(engine.lookup_result(state.current()).is_ok());
        }
    }
}

#[test]
fn questions_and_results_are_disjoint_and_edges_resolve() {
    for engine in engines() {
        let tree = engine.tree();

        for step in tree.table().steps() {
            assert!(!tree.is_terminal(step), "{step} is both question and result");
        }
        for (source, edge) in tree.table().iter() {
            assert!(
                tree.contains(&edge.next),
                "{source} --{}--> {} dangles",
                edge.choice,
                edge.next
            );
        }
    }
}
