//! Round resolution.

use crate::types::{Move, RoundResult};
use tracing::instrument;

/// Decides who takes a round.
///
/// Equal moves are a draw, checked first, so two bombs in the same round
/// cancel out. Otherwise the side whose move beats the other's wins.
#[instrument]
pub fn resolve_round(user_move: Move, bot_move: Move) -> RoundResult {
    if user_move == bot_move {
        RoundResult::Draw
    } else if user_move.beats(bot_move) {
        RoundResult::User
    } else {
        RoundResult::Bot
    }
}
