//! Human-readable justification for a resolved round.

use crate::types::{Move, RoundResult};
use tracing::instrument;

/// Explains a resolution.
///
/// The winner comes from `result`; this function only formats. Draws name the
/// shared move, a winning bomb gets its own sentence, and everything else reads
/// "Winner beats loser."
#[instrument]
pub fn explain_outcome(user_move: Move, bot_move: Move, result: RoundResult) -> String {
    let (winning, losing) = match result {
        RoundResult::Draw => return format!("Both chose {user_move}. It's a draw."),
        RoundResult::User => (user_move, bot_move),
        RoundResult::Bot => (bot_move, user_move),
    };

    if winning.is_bomb() {
        "Bomb beats all other moves.".to_string()
    } else {
        format!("{} beats {}.", winning.label(), losing)
    }
}
