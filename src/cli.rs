//! Command-line interface for strictly_referee.

use clap::Parser;

/// Strictly Referee - best of three rock-paper-scissors-bomb against a random bot
#[derive(Parser, Debug)]
#[command(name = "strictly_referee")]
#[command(about = "Play rock-paper-scissors-bomb against a random bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed the bot for a reproducible game (defaults to OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the game summary as JSON after the final result
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["strictly_referee"]).unwrap();
        assert_eq!(cli.seed, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_seed_and_json() {
        let cli = Cli::try_parse_from(["strictly_referee", "--seed", "7", "--json"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert!(cli.json);
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["strictly_referee", "--seed", "many"]).is_err());
    }
}
