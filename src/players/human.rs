//! Human player that types moves on a line-oriented input.

use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::{debug, instrument};

/// Human player reading one move per line.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    /// Reads the next submission, without the trailing newline.
    ///
    /// The text is returned as typed; validation belongs to the referee.
    /// Bytes that are not UTF-8 are replaced, so such a line is rejected as
    /// an unrecognized move rather than ending the game.
    ///
    /// # Errors
    ///
    /// Fails if reading fails or the input is closed.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn read_move(&mut self) -> Result<String> {
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read move")?;
        if read == 0 {
            anyhow::bail!("Input closed before the game finished");
        }

        let submission = String::from_utf8_lossy(&line)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        debug!(%submission, "Read submission");
        Ok(submission)
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
