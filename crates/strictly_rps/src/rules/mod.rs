//! Round rules for rock-paper-scissors-bomb.
//!
//! Pure functions over two validated moves. Resolution and explanation share
//! the winning relation defined by [`Move::beats`](crate::Move::beats).

pub mod explain;
pub mod resolve;

pub use explain::explain_outcome;
pub use resolve::resolve_round;
