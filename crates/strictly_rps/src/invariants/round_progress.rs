//! Round progress invariant: the counter tracks the history and the limit.

use super::Invariant;
use crate::Referee;
use crate::state::ROUND_LIMIT;

/// Invariant: the round counter is in range, matches the number of recorded
/// rounds, and the game is over exactly when the limit has been passed.
pub struct RoundProgressInvariant;

impl Invariant<Referee> for RoundProgressInvariant {
    fn holds(referee: &Referee) -> bool {
        let state = referee.state();
        let round = state.round();

        (1..=ROUND_LIMIT + 1).contains(&round)
            && state.game_over() == (round > ROUND_LIMIT)
            && referee.history().len() as u32 == round - 1
    }

    fn description() -> &'static str {
        "Round counter matches history and round limit"
    }
}
