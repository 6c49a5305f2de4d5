//! Score tally invariant: scores are recomputable from the history.

use super::Invariant;
use crate::{Referee, RoundResult};

/// Invariant: each side's score equals the played rounds it won.
pub struct ScoreTallyInvariant;

impl Invariant<Referee> for ScoreTallyInvariant {
    fn holds(referee: &Referee) -> bool {
        let wins = |wanted: RoundResult| {
            referee
                .history()
                .iter()
                .filter(|report| report.result() == Some(wanted))
                .count() as u32
        };

        referee.state().user_score() == wins(RoundResult::User)
            && referee.state().bot_score() == wins(RoundResult::Bot)
    }

    fn description() -> &'static str {
        "Scores equal the rounds each side won"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_fresh_referee_holds() {
        assert!(ScoreTallyInvariant::holds(&Referee::new()));
    }

    #[test]
    fn test_unrecorded_point_violates() {
        let mut referee = Referee::new();
        referee.state.record_round(RoundResult::User, Move::Rock, Move::Scissors);
        assert!(!ScoreTallyInvariant::holds(&referee));
    }
}
