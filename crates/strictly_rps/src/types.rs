//! Core domain types for rock-paper-scissors-bomb.

use serde::{Deserialize, Serialize};

/// A move a side can submit in a round.
///
/// The textual form is lowercase (`"rock"`, `"paper"`, `"scissors"`, `"bomb"`),
/// both for display and parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Move {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
    /// Beats every other move. Each side may play it once per game.
    Bomb,
}

impl Move {
    /// The three moves that are always available.
    pub const STANDARD: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Every legal move, bomb included.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// Returns true if this move defeats `other`.
    ///
    /// This is the single winning relation of the game: bomb defeats every
    /// other move, and the rest follow the rock/scissors/paper cycle. A move
    /// never defeats itself.
    pub fn beats(self, other: Move) -> bool {
        match (self, other) {
            (Move::Bomb, other) => other != Move::Bomb,
            (_, Move::Bomb) => false,
            (Move::Rock, Move::Scissors)
            | (Move::Scissors, Move::Paper)
            | (Move::Paper, Move::Rock) => true,
            _ => false,
        }
    }

    /// Capitalized name, used at the start of sentences.
    pub fn label(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Bomb => "Bomb",
        }
    }

    /// Returns true for the single-use bomb.
    pub fn is_bomb(self) -> bool {
        self == Move::Bomb
    }
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The human at the terminal.
    User,
    /// The randomized opponent.
    Bot,
}

/// Who took a round.
///
/// Displays uppercased (`USER`, `BOT`, `DRAW`) for the round banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RoundResult {
    /// The user won the round.
    User,
    /// The bot won the round.
    Bot,
    /// Neither side won.
    Draw,
}

impl RoundResult {
    /// Returns the winning side, or `None` on a draw.
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundResult::User => Some(Side::User),
            RoundResult::Bot => Some(Side::Bot),
            RoundResult::Draw => None,
        }
    }
}

/// Result of a finished game, decided by final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum FinalOutcome {
    /// The user finished with more points.
    #[display("WINNER: USER")]
    UserWins,
    /// The bot finished with more points.
    #[display("WINNER: BOT")]
    BotWins,
    /// Scores are level.
    #[display("RESULT: DRAW")]
    Draw,
}

impl FinalOutcome {
    /// Decides the outcome from the two final scores.
    pub fn from_scores(user_score: u32, bot_score: u32) -> Self {
        match user_score.cmp(&bot_score) {
            std::cmp::Ordering::Greater => FinalOutcome::UserWins,
            std::cmp::Ordering::Less => FinalOutcome::BotWins,
            std::cmp::Ordering::Equal => FinalOutcome::Draw,
        }
    }
}
