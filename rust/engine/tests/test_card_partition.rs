//! Randomized whole-session runs checking the invariants that must hold in
//! every reachable state.

use proptest::prelude::*;

use tongits_engine::cards::{full_deck, Card};
use tongits_engine::engine::Engine;
use tongits_engine::game::GameState;
use tongits_engine::player::{DrawSource, PlayerAction};
use tongits_engine::rules::is_valid_meld;

fn assert_partition(state: &GameState) {
    let mut seen: Vec<Card> = state.all_cards();
    seen.sort();
    let mut universe = full_deck();
    universe.sort();
    assert_eq!(seen, universe, "every card exactly once");
}

fn first_meld(hand: &[Card]) -> Option<Vec<usize>> {
    for i in 0..hand.len() {
        for j in (i + 1)..hand.len() {
            for k in (j + 1)..hand.len() {
                if is_valid_meld(&[hand[i], hand[j], hand[k]]) {
                    return Some(vec![i, j, k]);
                }
            }
        }
    }
    None
}

/// Picks a (possibly illegal) action from a random byte.
fn choose_action(state: &GameState, choice: u8) -> PlayerAction {
    let hand = &state.current().hand;
    match choice % 6 {
        0 => PlayerAction::Draw(DrawSource::Deck),
        1 => PlayerAction::Draw(DrawSource::DiscardTop),
        2 => match first_meld(hand) {
            Some(indices) => PlayerAction::Meld(indices),
            None => PlayerAction::Meld(vec![0, 1, 2]),
        },
        3 => PlayerAction::Extend {
            target_player: (choice as usize / 6) % 3,
            target_meld: 0,
            indices: vec![choice as usize % hand.len().max(1)],
        },
        4 => PlayerAction::CallDraw,
        _ => PlayerAction::Discard(choice as usize % hand.len().max(1)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_sessions_preserve_invariants(seed in any::<u64>(), choices in prop::collection::vec(any::<u8>(), 1..400)) {
        let mut eng = Engine::new(Some(seed));
        assert_partition(eng.state());

        for choice in choices {
            let before = eng.state().clone();
            let log_before = eng.actions().to_vec();
            let log_len = log_before.len();
            let action = choose_action(&before, choice);
            let accepted = eng.try_apply(&action).is_ok();
            let state = eng.state();

            assert_partition(state);
            prop_assert_eq!(state.game_ended, state.winner.is_some());
            if accepted {
                prop_assert!(eng.actions().len() > log_len);
                prop_assert_eq!(&eng.actions()[..log_len], &log_before[..]);
            } else {
                prop_assert_eq!(state, &before);
                prop_assert_eq!(eng.actions().len(), log_len);
            }
            if let PlayerAction::Discard(_) = action {
                if accepted {
                    prop_assert_eq!(state.current_player, (before.current_player + 1) % 3);
                    prop_assert!(!state.has_drawn_this_turn);
                }
            }
            if before.game_ended {
                prop_assert!(!accepted);
                prop_assert_eq!(state.winner, before.winner);
            }
        }
    }
}
