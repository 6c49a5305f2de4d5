//! Bomb ledger invariant: bomb flags agree with the bombs actually played.

use super::Invariant;
use crate::{Referee, Side};

/// Invariant: a side's bomb flag is set iff it played bomb in a recorded
/// round, and no side played bomb more than once.
pub struct BombLedgerInvariant;

impl Invariant<Referee> for BombLedgerInvariant {
    fn holds(referee: &Referee) -> bool {
        [Side::User, Side::Bot].into_iter().all(|side| {
            let bombs = referee
                .history()
                .iter()
                .filter(|report| report.move_of(side).is_some_and(|mv| mv.is_bomb()))
                .count();
            bombs <= 1 && referee.state().bomb_used(side) == (bombs == 1)
        })
    }

    fn description() -> &'static str {
        "Bomb flags match bombs played, at most one per side"
    }
}
