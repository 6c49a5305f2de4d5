//! Bot that replays a fixed sequence of moves.

use std::collections::VecDeque;
use strictly_rps::{Move, Opponent};
use tracing::debug;

/// Bot playing a predetermined script, one move per played round.
///
/// Returns `None` once the script runs out. Candidates are ignored, so a
/// script can deliberately try an illegal move.
pub struct ScriptedOpponent {
    name: String,
    moves: VecDeque<Move>,
}

impl ScriptedOpponent {
    /// Creates a bot that plays `moves` in order.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: "Scripted bot".to_string(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self, candidates: &[Move]) -> Option<Move> {
        let choice = self.moves.pop_front();
        debug!(bot = %self.name, ?choice, ?candidates, "Scripted move");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
