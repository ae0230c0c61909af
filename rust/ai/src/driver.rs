//! Plays computer turns by replaying a [`TurnPlanner`]'s plan through the engine.

use tracing::debug;

use crate::baseline::BaselineAI;
use crate::TurnPlanner;
use tongits_engine::engine::Engine;
use tongits_engine::errors::GameError;
use tongits_engine::game::{GameState, HUMAN_SEAT};
use tongits_engine::player::PlayerAction;

/// Plays the active seat's turn if it belongs to a computer.
///
/// A call for the human seat, or for a finished session, changes nothing.
pub fn play_bot_turn<'a>(engine: &'a mut Engine, planner: &dyn TurnPlanner) -> &'a GameState {
    let seat = engine.state().current_player;
    if engine.is_over() {
        return engine.state();
    }
    if seat == HUMAN_SEAT {
        let e = GameError::NotBotSeat { seat };
        debug!(error = %e, "bot turn refused");
        return engine.state();
    }
    autoplay_turn(engine, planner)
}

/// Plans and plays one full turn for whichever seat is active.
///
/// Each step is applied through [`Engine::try_apply`]; refused steps are
/// skipped. If the plan leaves the turn open, the highest-point card in hand
/// is discarded so the session always moves on.
pub fn autoplay_turn<'a>(engine: &'a mut Engine, planner: &dyn TurnPlanner) -> &'a GameState {
    let seat = engine.state().current_player;
    let plan = planner.plan_turn(engine.state());
    debug!(seat, planner = planner.name(), steps = plan.len(), "bot plan");

    for step in &plan {
        if engine.is_over() || engine.state().current_player != seat {
            return engine.state();
        }
        let Some(action) = step.resolve(&engine.state().current().hand) else {
            debug!(seat, ?step, "planned card no longer in hand");
            continue;
        };
        if let Err(e) = engine.try_apply(&action) {
            debug!(seat, ?step, error = %e, "planned step refused");
        }
    }

    if engine.is_over() || engine.state().current_player != seat {
        return engine.state();
    }
    if let Some(index) = BaselineAI::choose_discard(&engine.state().current().hand) {
        debug!(seat, index, "fallback discard");
        engine.apply(&PlayerAction::Discard(index));
    }
    engine.state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BotAction, create_ai};
    use tongits_engine::logger::ActionKind;
    use tongits_engine::player::DrawSource;

    struct DrawOnly;

    impl TurnPlanner for DrawOnly {
        fn plan_turn(&self, _state: &GameState) -> Vec<BotAction> {
            vec![BotAction::Draw(DrawSource::Deck)]
        }

        fn name(&self) -> &str {
            "DrawOnly"
        }
    }

    struct DrawThenCall;

    impl TurnPlanner for DrawThenCall {
        fn plan_turn(&self, _state: &GameState) -> Vec<BotAction> {
            vec![BotAction::Draw(DrawSource::Deck), BotAction::CallDraw]
        }

        fn name(&self) -> &str {
            "DrawThenCall"
        }
    }

    #[test]
    fn call_after_drawing_falls_back_to_discard() {
        let mut state = GameState::new(Some(5), &tongits_engine::game::default_names());
        state.players[0].turns_played = 3;
        let mut engine = Engine::from_state(state);
        autoplay_turn(&mut engine, &DrawThenCall);

        let state = engine.state();
        assert!(!state.game_ended);
        assert_eq!(state.current_player, 1);
        assert_eq!(state.players[0].hand.len(), 12);
        let kinds: Vec<ActionKind> = engine.actions().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ActionKind::Draw, ActionKind::Discard]);
    }

    #[test]
    fn human_seat_is_left_alone() {
        let ai = create_ai("baseline").unwrap();
        let mut engine = Engine::new(Some(3));
        let before = engine.state().clone();
        play_bot_turn(&mut engine, ai.as_ref());
        assert_eq!(engine.state(), &before);
        assert!(engine.actions().is_empty());
    }

    #[test]
    fn open_turn_is_closed_with_a_discard() {
        let mut engine = Engine::new(Some(3));
        engine.draw(DrawSource::Deck);
        engine.discard(0);
        play_bot_turn(&mut engine, &DrawOnly);
        assert_eq!(engine.state().current_player, 2);
        assert_eq!(engine.state().discard_pile.len(), 2);
    }
}
