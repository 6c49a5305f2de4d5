//! The referee: runs one round at a time and keeps the record.
//!
//! Each call to [`Referee::play_round`] validates the user's submission,
//! consults the opponent, resolves and explains the round, and applies the
//! result. A rejected submission wastes the round: the counter advances, the
//! opponent is never asked, and nothing else changes.

use crate::invariants::{InvariantSet, RefereeInvariants};
use crate::rules::{explain_outcome, resolve_round};
use crate::state::GameState;
use crate::types::{FinalOutcome, Move, RoundResult, Side};
use crate::validation::{InvalidMoveError, Validation, validate_move};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Source of the bot's moves.
///
/// The referee passes the moves the bot may legally play; implementations
/// pick one of them.
pub trait Opponent {
    /// Picks one of `candidates`, or `None` if no move can be produced.
    fn choose(&mut self, candidates: &[Move]) -> Option<Move>;

    /// Display name for logs.
    fn name(&self) -> &str;
}

/// A round that was actually played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct PlayedRound {
    /// Round number (1-based).
    round: u32,
    /// The user's normalized move.
    user_move: Move,
    /// The bot's move.
    bot_move: Move,
    /// Who took the round.
    result: RoundResult,
    /// Why.
    explanation: String,
}

/// A round lost to a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct WastedRound {
    /// Round number (1-based).
    round: u32,
    /// Why the submission was rejected.
    error: InvalidMoveError,
}

impl WastedRound {
    /// Human-readable rejection reason.
    pub fn reason(&self) -> String {
        self.error.to_string()
    }
}

/// Record of one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundReport {
    /// Both sides moved and the round was resolved.
    Played(PlayedRound),
    /// The user's submission was rejected.
    Wasted(WastedRound),
}

impl RoundReport {
    /// Round number this report covers.
    pub fn round(&self) -> u32 {
        match self {
            RoundReport::Played(played) => *played.round(),
            RoundReport::Wasted(wasted) => *wasted.round(),
        }
    }

    /// The move `side` played, if the round was played.
    pub fn move_of(&self, side: Side) -> Option<Move> {
        match self {
            RoundReport::Played(played) => Some(match side {
                Side::User => *played.user_move(),
                Side::Bot => *played.bot_move(),
            }),
            RoundReport::Wasted(_) => None,
        }
    }

    /// Who took the round, if it was played.
    pub fn result(&self) -> Option<RoundResult> {
        match self {
            RoundReport::Played(played) => Some(*played.result()),
            RoundReport::Wasted(_) => None,
        }
    }
}

/// Errors the referee cannot recover from locally.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RefereeError {
    /// A round was requested after the round limit.
    #[display("Game is already over")]
    GameOver,

    /// The opponent produced no move.
    #[display("Opponent produced no move")]
    OpponentUnavailable,

    /// The opponent picked a move it was not offered.
    #[display("Opponent played illegal move: {}", _0)]
    IllegalOpponentMove(Move),

    /// State and history disagree after a round.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RefereeError {}

/// End-of-game summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSummary {
    /// Final user score.
    user_score: u32,
    /// Final bot score.
    bot_score: u32,
    /// Final outcome; `None` if the game was not finished.
    outcome: Option<FinalOutcome>,
    /// Every round in order.
    rounds: Vec<RoundReport>,
}

/// Owns the game state and round history for one game.
#[derive(Debug, Clone, Default)]
pub struct Referee {
    pub(crate) state: GameState,
    pub(crate) history: Vec<RoundReport>,
}

impl Referee {
    /// Creates a referee for a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            history: Vec::new(),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rounds played so far, in order.
    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    /// Whether the round limit has been passed.
    pub fn is_over(&self) -> bool {
        self.state.game_over()
    }

    /// Moves the bot may play this round.
    pub fn bot_candidates(&self) -> Vec<Move> {
        let mut candidates = Move::STANDARD.to_vec();
        if !self.state.bot_bomb_used() {
            candidates.push(Move::Bomb);
        }
        candidates
    }

    /// Plays one round with the user's raw submission.
    ///
    /// # Errors
    ///
    /// Returns [`RefereeError::GameOver`] after the last round, and the
    /// opponent or invariant variants if a collaborator misbehaves. A rejected
    /// user submission is not an error: it yields [`RoundReport::Wasted`].
    /// On any error the referee is left exactly as it was before the call.
    #[instrument(
        skip(self, opponent),
        fields(round = self.state.round(), opponent = opponent.name())
    )]
    pub fn play_round<O>(
        &mut self,
        raw: &str,
        opponent: &mut O,
    ) -> Result<RoundReport, RefereeError>
    where
        O: Opponent + ?Sized,
    {
        if self.state.game_over() {
            warn!("Round requested after game over");
            return Err(RefereeError::GameOver);
        }

        // The round is applied to a copy and committed once the invariants hold.
        let mut next = self.clone();
        let round = next.state.round();
        let report = match validate_move(raw, next.state.user_bomb_used()) {
            Validation::Invalid { error } => {
                warn!(reason = %error, "Submission rejected, round wasted");
                next.state.waste_round();
                RoundReport::Wasted(WastedRound::new(round, error))
            }
            Validation::Valid { mv: user_move } => {
                let candidates = next.bot_candidates();
                let bot_move = opponent
                    .choose(&candidates)
                    .ok_or(RefereeError::OpponentUnavailable)?;
                if !candidates.contains(&bot_move) {
                    warn!(%bot_move, "Opponent picked a move it was not offered");
                    return Err(RefereeError::IllegalOpponentMove(bot_move));
                }

                let result = resolve_round(user_move, bot_move);
                let explanation = explain_outcome(user_move, bot_move, result);
                debug!(%user_move, %bot_move, %result, "Round resolved");

                next.state.record_round(result, user_move, bot_move);
                RoundReport::Played(PlayedRound::new(
                    round,
                    user_move,
                    bot_move,
                    result,
                    explanation,
                ))
            }
        };

        next.history.push(report.clone());
        next.check_invariants()?;
        *self = next;

        info!(
            user_score = self.state.user_score(),
            bot_score = self.state.bot_score(),
            game_over = self.state.game_over(),
            "Round complete"
        );
        Ok(report)
    }

    /// Summary of the game so far.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            user_score: self.state.user_score(),
            bot_score: self.state.bot_score(),
            outcome: self.state.outcome(),
            rounds: self.history.clone(),
        }
    }

    fn check_invariants(&self) -> Result<(), RefereeError> {
        RefereeInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Referee invariants violated");
            RefereeError::InvariantViolation(descriptions)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Script(VecDeque<Move>, usize);

    impl Script {
        fn new(moves: &[Move]) -> Self {
            Self(moves.iter().copied().collect(), 0)
        }
    }

    impl Opponent for Script {
        fn choose(&mut self, _candidates: &[Move]) -> Option<Move> {
            self.1 += 1;
            self.0.pop_front()
        }

        fn name(&self) -> &str {
            "script"
        }
    }

    #[test]
    fn test_bot_candidates_drop_spent_bomb() {
        let mut referee = Referee::new();
        assert_eq!(referee.bot_candidates(), Move::ALL.to_vec());

        referee.play_round("rock", &mut Script::new(&[Move::Bomb])).unwrap();
        assert_eq!(referee.bot_candidates(), Move::STANDARD.to_vec());
    }

    #[test]
    fn test_wasted_round_skips_opponent() {
        let mut referee = Referee::new();
        let mut opponent = Script::new(&[Move::Rock]);

        let report = referee.play_round("lizard", &mut opponent).unwrap();

        assert!(matches!(report, RoundReport::Wasted(_)));
        assert_eq!(opponent.1, 0);
        assert_eq!(referee.state().round(), 2);
    }

    #[test]
    fn test_play_after_game_over_is_error() {
        let mut referee = Referee::new();
        let mut opponent = Script::new(&[]);
        for _ in 0..3 {
            referee.play_round("?", &mut opponent).unwrap();
        }
        assert_eq!(
            referee.play_round("rock", &mut opponent),
            Err(RefereeError::GameOver)
        );
    }

    #[test]
    fn test_opponent_without_move() {
        let mut referee = Referee::new();
        assert_eq!(
            referee.play_round("rock", &mut Script::new(&[])),
            Err(RefereeError::OpponentUnavailable)
        );
    }

    #[test]
    fn test_opponent_reusing_bomb_is_rejected() {
        let mut referee = Referee::new();
        let mut opponent = Script::new(&[Move::Bomb, Move::Bomb]);
        referee.play_round("paper", &mut opponent).unwrap();

        assert_eq!(
            referee.play_round("paper", &mut opponent),
            Err(RefereeError::IllegalOpponentMove(Move::Bomb))
        );
    }

    #[test]
    fn test_invariant_violation_leaves_referee_untouched() {
        let mut referee = Referee::new();
        referee.state.user_score = 5;
        let before = referee.clone();

        let result = referee.play_round("rock", &mut Script::new(&[Move::Scissors]));

        assert!(matches!(result, Err(RefereeError::InvariantViolation(_))));
        assert_eq!(referee.state(), before.state());
        assert!(referee.history().is_empty());
    }

    #[test]
    fn test_rejected_opponent_move_leaves_referee_untouched() {
        let mut referee = Referee::new();
        referee.play_round("paper", &mut Script::new(&[Move::Bomb])).unwrap();
        let before = referee.clone();

        let result = referee.play_round("paper", &mut Script::new(&[Move::Bomb]));

        assert_eq!(result, Err(RefereeError::IllegalOpponentMove(Move::Bomb)));
        assert_eq!(referee.state(), before.state());
        assert_eq!(referee.history(), before.history());
    }

    #[test]
    fn test_summary_outcome_only_when_over() {
        let mut referee = Referee::new();
        let mut opponent = Script::new(&[Move::Scissors, Move::Scissors, Move::Scissors]);
        referee.play_round("rock", &mut opponent).unwrap();
        assert_eq!(*referee.summary().outcome(), None);

        referee.play_round("rock", &mut opponent).unwrap();
        referee.play_round("paper", &mut opponent).unwrap();
        let summary = referee.summary();
        assert_eq!(*summary.outcome(), Some(FinalOutcome::UserWins));
        assert_eq!(*summary.user_score(), 2);
        assert_eq!(*summary.bot_score(), 1);
        assert_eq!(summary.rounds().len(), 3);
    }

    #[test]
    fn test_report_serializes_with_status_tag() {
        let mut referee = Referee::new();
        let report = referee.play_round("BOMB", &mut Script::new(&[Move::Rock])).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "played");
        assert_eq!(json["user_move"], "bomb");
        assert_eq!(json["result"], "user");
        assert_eq!(json["explanation"], "Bomb beats all other moves.");
    }
}
