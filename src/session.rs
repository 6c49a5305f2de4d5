//! Interactive game session between a human and a bot.
//!
//! The session owns the referee for one game and does all terminal I/O:
//! rules banner, per-round prompt and report, and the final result.

use crate::players::HumanPlayer;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_rps::{GameSummary, Opponent, ROUND_LIMIT, Referee, RoundReport};
use tracing::{info, instrument};

/// Rules printed at startup.
pub const RULES: &str = "Rules:\n\
• Best of 3 rounds\n\
• Moves: rock, paper, scissors, bomb\n\
• Bomb beats all, once per player\n\
• Invalid input wastes the round\n";

/// Prompt shown before reading each move.
pub const PROMPT: &str = "Your move: ";

/// One game from rules banner to final result.
pub struct GameSession<R, W, O> {
    referee: Referee,
    human: HumanPlayer<R>,
    opponent: O,
    output: W,
}

impl<R, W, O> GameSession<R, W, O>
where
    R: BufRead,
    W: Write,
    O: Opponent,
{
    /// Creates a session reading moves from `input` and writing to `output`.
    pub fn new(input: R, output: W, opponent: O) -> Self {
        Self {
            referee: Referee::new(),
            human: HumanPlayer::new("You", input),
            opponent,
            output,
        }
    }

    /// Plays the game to completion and returns its summary.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, closed input, or a misbehaving opponent.
    #[instrument(skip(self), fields(human = self.human.name(), opponent = self.opponent.name()))]
    pub fn run(mut self) -> Result<GameSummary> {
        info!("Starting game");
        writeln!(self.output, "{RULES}")?;

        while !self.referee.is_over() {
            writeln!(self.output, "\nRound {}/{}", self.referee.state().round(), ROUND_LIMIT)?;
            write!(self.output, "{PROMPT}")?;
            self.output.flush().context("Failed to flush prompt")?;

            let raw = self.human.read_move()?;
            let report = self.referee.play_round(&raw, &mut self.opponent)?;
            self.print_report(&report)?;
        }

        let summary = self.referee.summary();
        self.print_final(&summary)?;
        info!(outcome = ?summary.outcome(), "Game finished");
        Ok(summary)
    }

    fn print_report(&mut self, report: &RoundReport) -> Result<()> {
        match report {
            RoundReport::Wasted(wasted) => {
                writeln!(self.output, "Invalid move: {}", wasted.reason())?;
            }
            RoundReport::Played(played) => {
                writeln!(self.output, "You played: {}", played.user_move())?;
                writeln!(self.output, "Bot played: {}", played.bot_move())?;
                writeln!(self.output, "Round winner: {}", played.result())?;
                writeln!(self.output, "Reason: {}", played.explanation())?;
            }
        }
        Ok(())
    }

    fn print_final(&mut self, summary: &GameSummary) -> Result<()> {
        writeln!(self.output, "\nFinal Result")?;
        writeln!(self.output, "User score: {}", summary.user_score())?;
        writeln!(self.output, "Bot score: {}", summary.bot_score())?;
        if let Some(outcome) = summary.outcome() {
            writeln!(self.output, "{outcome}")?;
        }
        self.output.flush().context("Failed to flush final result")?;
        Ok(())
    }
}
