//! Participants: the human at the terminal and the bot opponents.

mod human;
mod random;
mod scripted;

pub use human::HumanPlayer;
pub use random::RandomOpponent;
pub use scripted::ScriptedOpponent;
