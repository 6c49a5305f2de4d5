//! Strictly Referee - interactive rock-paper-scissors-bomb.
//!
//! Terminal front end for the [`strictly_rps`] rules crate: a human types
//! moves, a bot picks uniformly among its legal moves, and the referee keeps
//! score over three rounds.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_referee::{FinalOutcome, GameSession, Move, ScriptedOpponent};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = Cursor::new("rock\npaper\nscissors\n");
//! let bot = ScriptedOpponent::new([Move::Scissors, Move::Rock, Move::Bomb]);
//! let mut transcript = Vec::new();
//!
//! let summary = GameSession::new(input, &mut transcript, bot).run()?;
//! assert_eq!(*summary.outcome(), Some(FinalOutcome::UserWins));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod players;
mod session;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Players
pub use players::{HumanPlayer, RandomOpponent, ScriptedOpponent};

// Crate-level exports - Session
pub use session::{GameSession, PROMPT, RULES};

// Crate-level exports - Game types
pub use strictly_rps::{
    FinalOutcome, GameState, GameSummary, InvalidMoveError, Move, Opponent, PlayedRound,
    ROUND_LIMIT, Referee, RefereeError, RoundReport, RoundResult, Side, Validation, WastedRound,
    explain_outcome, resolve_round, update_game_state, validate_move,
};
