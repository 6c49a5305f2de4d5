//! Pure rock-paper-scissors-bomb referee logic.
//!
//! A game is three rounds between a user and a bot. Each side may play the
//! bomb, which beats every other move, once per game. A rejected submission
//! wastes the round.
//!
//! # Architecture
//!
//! - **Validation**: normalizes raw submissions and enforces the bomb rule
//! - **Rules**: resolves a round and explains the resolution
//! - **State**: cumulative scores, bomb flags and the round counter
//! - **Referee**: composes the above into one round at a time
//! - **Invariants**: cross-checks state against the round history
//!
//! # Example
//!
//! ```
//! use strictly_rps::{Move, Opponent, Referee, RoundReport, RoundResult};
//!
//! struct AlwaysScissors;
//!
//! impl Opponent for AlwaysScissors {
//!     fn choose(&mut self, _candidates: &[Move]) -> Option<Move> {
//!         Some(Move::Scissors)
//!     }
//!
//!     fn name(&self) -> &str {
//!         "scissors"
//!     }
//! }
//!
//! let mut referee = Referee::new();
//! let report = referee.play_round(" Rock ", &mut AlwaysScissors).unwrap();
//! assert_eq!(report.result(), Some(RoundResult::User));
//! assert_eq!(referee.state().round(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod invariants;
pub mod rules;

mod referee;
mod state;
mod types;
mod validation;

pub use invariants::{Invariant, InvariantSet, InvariantViolation, RefereeInvariants};
pub use referee::{
    GameSummary, Opponent, PlayedRound, Referee, RefereeError, RoundReport, WastedRound,
};
pub use rules::{explain_outcome, resolve_round};
pub use state::{GameState, ROUND_LIMIT, update_game_state};
pub use types::{FinalOutcome, Move, RoundResult, Side};
pub use validation::{InvalidMoveError, Validation, validate_move};
