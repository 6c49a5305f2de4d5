//! Cumulative game state and the state updater.

use crate::types::{FinalOutcome, Move, RoundResult, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of rounds in a game.
pub const ROUND_LIMIT: u32 = 3;

/// Complete state of one best-of-three game.
///
/// Created fresh at game start and owned by whoever runs the game loop.
/// `round` is 1-based and only ever grows; once it passes [`ROUND_LIMIT`]
/// the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) round: u32,
    pub(crate) user_score: u32,
    pub(crate) bot_score: u32,
    pub(crate) user_bomb_used: bool,
    pub(crate) bot_bomb_used: bool,
    pub(crate) game_over: bool,
}

impl GameState {
    /// Creates the state for a new game.
    pub fn new() -> Self {
        Self {
            round: 1,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            game_over: false,
        }
    }

    /// The round about to be played (1-based).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Rounds the user has won.
    pub fn user_score(&self) -> u32 {
        self.user_score
    }

    /// Rounds the bot has won.
    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    /// Whether the user has spent their bomb.
    pub fn user_bomb_used(&self) -> bool {
        self.user_bomb_used
    }

    /// Whether the bot has spent its bomb.
    pub fn bot_bomb_used(&self) -> bool {
        self.bot_bomb_used
    }

    /// Whether the round limit has been passed.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether `side` has spent its bomb.
    pub fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Bot => self.bot_bomb_used,
        }
    }

    /// Score for `side`.
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::User => self.user_score,
            Side::Bot => self.bot_score,
        }
    }

    /// Final outcome, once the game is over.
    pub fn outcome(&self) -> Option<FinalOutcome> {
        self.game_over
            .then(|| FinalOutcome::from_scores(self.user_score, self.bot_score))
    }

    /// Applies a resolved round: scores, bomb flags, then the round counter.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn record_round(&mut self, result: RoundResult, user_move: Move, bot_move: Move) {
        match result.winner() {
            Some(Side::User) => self.user_score += 1,
            Some(Side::Bot) => self.bot_score += 1,
            None => {}
        }

        if user_move.is_bomb() {
            self.user_bomb_used = true;
        }
        if bot_move.is_bomb() {
            self.bot_bomb_used = true;
        }

        debug!(
            user_score = self.user_score,
            bot_score = self.bot_score,
            "Scores updated"
        );
        self.advance_round();
    }

    /// Spends a round without touching scores or bomb flags.
    ///
    /// Used when a submission is rejected.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn waste_round(&mut self) {
        self.advance_round();
    }

    fn advance_round(&mut self) {
        self.round += 1;
        if self.round > ROUND_LIMIT {
            self.game_over = true;
            info!(
                user_score = self.user_score,
                bot_score = self.bot_score,
                "Round limit reached"
            );
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `state` with a resolved round applied.
pub fn update_game_state(
    mut state: GameState,
    result: RoundResult,
    user_move: Move,
    bot_move: Move,
) -> GameState {
    state.record_round(result, user_move, bot_move);
    state
}
