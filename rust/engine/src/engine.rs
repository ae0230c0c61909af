use tracing::{debug, info};

use crate::errors::GameError;
use crate::game::{default_names, GameState, HUMAN_SEAT};
use crate::logger::{GameAction, GameRecord};
use crate::player::{DrawSource, PlayerAction};
use crate::rules::PLAYER_COUNT;

/// Owns the authoritative [`GameState`] of one session and its action log.
///
/// Every command validates against the current state and either commits a
/// complete new state or leaves it untouched. Rejections are not reported to
/// the caller; an unchanged state is the only signal.
///
/// # Examples
///
/// ```
/// use tongits_engine::engine::Engine;
/// use tongits_engine::player::DrawSource;
///
/// let mut engine = Engine::new(Some(12345));
/// assert_eq!(engine.state().deck.len(), 16);
///
/// engine.draw(DrawSource::Deck);
/// assert!(engine.state().has_drawn_this_turn);
///
/// // a second draw in the same turn is ignored
/// let before = engine.state().clone();
/// engine.draw(DrawSource::Deck);
/// assert_eq!(engine.state(), &before);
///
/// engine.discard(0);
/// assert_eq!(engine.state().current_player, 1);
/// assert_eq!(engine.actions().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    /// Append-only record of committed transitions
    log: Vec<GameAction>,
}

impl Engine {
    /// Starts a session with the default seat names ("You", "Bot 1", "Bot 2").
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_state(GameState::new(seed, &default_names()))
    }

    /// Starts a session with custom seat names, one per seat.
    pub fn with_names(seed: Option<u64>, names: &[String]) -> Result<Self, GameError> {
        if names.len() != PLAYER_COUNT {
            return Err(GameError::SeatNames { expected: PLAYER_COUNT, got: names.len() });
        }
        Ok(Self::from_state(GameState::new(seed, names)))
    }

    /// Wraps an existing state, e.g. a prepared position.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn actions(&self) -> &[GameAction] {
        &self.log
    }

    pub fn is_over(&self) -> bool {
        self.state.game_ended
    }

    /// True when the active seat is computer-controlled and the session is live.
    pub fn is_bot_turn(&self) -> bool {
        !self.state.game_ended && self.state.current_player != HUMAN_SEAT
    }

    pub fn can_draw_from_discard(&self) -> bool {
        self.state.can_draw_from_discard()
    }

    pub fn can_call_draw(&self) -> bool {
        self.state.check_call_draw().is_ok()
    }

    pub fn draw(&mut self, source: DrawSource) -> &GameState {
        self.apply(&PlayerAction::Draw(source))
    }

    pub fn meld(&mut self, indices: &[usize]) -> &GameState {
        self.apply(&PlayerAction::Meld(indices.to_vec()))
    }

    pub fn extend_meld(
        &mut self,
        target_player: usize,
        target_meld: usize,
        indices: &[usize],
    ) -> &GameState {
        self.apply(&PlayerAction::Extend {
            target_player,
            target_meld,
            indices: indices.to_vec(),
        })
    }

    pub fn discard(&mut self, index: usize) -> &GameState {
        self.apply(&PlayerAction::Discard(index))
    }

    pub fn call_draw(&mut self) -> &GameState {
        self.apply(&PlayerAction::CallDraw)
    }

    /// Ends the session if the active seat holds no cards.
    pub fn check_hand_emptied(&mut self) -> &GameState {
        let seat = self.state.current_player;
        self.settle_hand_emptied(seat);
        &self.state
    }

    /// Applies `action` for the active seat, ignoring it if illegal.
    pub fn apply(&mut self, action: &PlayerAction) -> &GameState {
        if let Err(e) = self.try_apply(action) {
            debug!(seat = self.state.current_player, ?action, error = %e, "action rejected");
        }
        &self.state
    }

    /// Like [`Engine::apply`] but reports why a rejected action was refused.
    /// The state is unchanged whenever this returns `Err`.
    pub fn try_apply(&mut self, action: &PlayerAction) -> Result<(), GameError> {
        if self.state.game_ended {
            return Err(GameError::GameEnded);
        }
        let actor = self.state.current_player;
        let mut next = self.state.clone();
        let entry = match action {
            PlayerAction::Draw(source) => next.draw(*source)?,
            PlayerAction::Meld(indices) => next.meld(indices)?,
            PlayerAction::Extend {
                target_player,
                target_meld,
                indices,
            } => next.extend_meld(*target_player, *target_meld, indices)?,
            PlayerAction::Discard(index) => next.discard(*index)?,
            PlayerAction::CallDraw => next.call_draw()?,
        };
        debug!(seat = actor, kind = ?entry.kind, details = %entry.details, "action committed");
        self.state = next;
        self.record_entry(entry);
        self.settle_hand_emptied(actor);
        // the seat that drew the last card still finishes its turn
        if matches!(action, PlayerAction::Discard(_)) {
            self.settle_deck_exhausted();
        }
        Ok(())
    }

    /// Snapshot of a finished (or abandoned) session for history files.
    pub fn record(&self, game_id: String) -> GameRecord {
        GameRecord {
            game_id,
            seed: self.state.seed,
            winner: self.state.winner,
            end_reason: self.state.end_reason,
            scores: self.state.players.iter().map(|p| p.score).collect(),
            actions: self.log.clone(),
            ts: None,
        }
    }

    fn record_entry(&mut self, entry: GameAction) {
        self.log.push(entry);
    }

    fn settle_hand_emptied(&mut self, seat: usize) {
        if self.state.game_ended || !self.state.players[seat].hand.is_empty() {
            return;
        }
        let entry = self.state.resolve_tongits(seat);
        info!(winner = seat, "hand emptied");
        self.record_entry(entry);
    }

    fn settle_deck_exhausted(&mut self) {
        if self.state.game_ended || !self.state.deck.is_empty() {
            return;
        }
        let entry = self.state.resolve_deck_exhausted();
        info!(winner = ?self.state.winner, "deck exhausted");
        self.record_entry(entry);
    }
}
