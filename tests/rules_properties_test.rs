//! Property-based tests for validation, resolution and state updates.

use proptest::prelude::*;
use strictly_referee::{
    GameState, Move, ROUND_LIMIT, RoundResult, Validation, explain_outcome, resolve_round,
    update_game_state, validate_move,
};

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

fn standard_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::STANDARD.to_vec())
}

/// Randomly re-cases a word and pads it with whitespace.
fn disguised(word: String) -> impl Strategy<Value = String> {
    (
        prop::collection::vec(any::<bool>(), word.len()),
        "[ \t]{0,3}",
        "[ \t\r\n]{0,3}",
    )
        .prop_map(move |(upper, lead, trail)| {
            let body: String = word
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            format!("{lead}{body}{trail}")
        })
}

/// A standard move together with a disguised spelling of it.
fn spelled_move() -> impl Strategy<Value = (Move, String)> {
    standard_move().prop_flat_map(|mv| (Just(mv), disguised(mv.to_string())))
}

proptest! {
    /// Property: Swapping the sides swaps the winner; equal moves always draw.
    #[test]
    fn prop_resolution_is_antisymmetric(user in any_move(), bot in any_move()) {
        let forward = resolve_round(user, bot);
        let backward = resolve_round(bot, user);

        if user == bot {
            prop_assert_eq!(forward, RoundResult::Draw);
        } else {
            prop_assert_ne!(forward, RoundResult::Draw);
            let swapped = match forward {
                RoundResult::User => RoundResult::Bot,
                RoundResult::Bot => RoundResult::User,
                RoundResult::Draw => RoundResult::Draw,
            };
            prop_assert_eq!(backward, swapped);
        }
    }

    /// Property: Bomb beats every non-bomb move from either side.
    #[test]
    fn prop_bomb_beats_standard(mv in standard_move()) {
        prop_assert_eq!(resolve_round(Move::Bomb, mv), RoundResult::User);
        prop_assert_eq!(resolve_round(mv, Move::Bomb), RoundResult::Bot);
    }

    /// Property: Legal words are accepted regardless of case and padding.
    #[test]
    fn prop_validator_ignores_case_and_padding(
        (mv, raw) in spelled_move(),
        bomb_used in any::<bool>(),
    ) {
        prop_assert_eq!(validate_move(&raw, bomb_used), Validation::Valid { mv });
    }

    /// Property: Bomb is rejected iff the side already used it.
    #[test]
    fn prop_bomb_rejected_iff_used(
        raw in disguised("bomb".to_string()),
        bomb_used in any::<bool>(),
    ) {
        let validation = validate_move(&raw, bomb_used);
        if bomb_used {
            let reason = validation.reason();
            prop_assert_eq!(reason.as_deref(), Some("Bomb already used"));
        } else {
            prop_assert_eq!(validation, Validation::Valid { mv: Move::Bomb });
        }
    }

    /// Property: Any token outside the move set is rejected as an invalid move.
    #[test]
    fn prop_unknown_tokens_rejected(raw in "\\PC{0,12}", bomb_used in any::<bool>()) {
        let normalized = raw.trim().to_lowercase();
        prop_assume!(!["rock", "paper", "scissors", "bomb"].contains(&normalized.as_str()));

        let reason = validate_move(&raw, bomb_used).reason();
        prop_assert_eq!(reason.as_deref(), Some("Invalid move"));
    }

    /// Property: Each update advances the round by one and scores at most one point.
    #[test]
    fn prop_update_advances_round(
        plays in prop::collection::vec((standard_move(), standard_move()), 1..=3),
    ) {
        let mut state = GameState::new();
        for (user, bot) in plays {
            let before = state.clone();
            let result = resolve_round(user, bot);
            state = update_game_state(state, result, user, bot);

            prop_assert_eq!(state.round(), before.round() + 1);
            prop_assert_eq!(state.game_over(), state.round() > ROUND_LIMIT);

            let gained = (
                state.user_score() - before.user_score(),
                state.bot_score() - before.bot_score(),
            );
            let expected = match result {
                RoundResult::User => (1, 0),
                RoundResult::Bot => (0, 1),
                RoundResult::Draw => (0, 0),
            };
            prop_assert_eq!(gained, expected);
        }
    }

    /// Property: The explanation depends only on its inputs.
    #[test]
    fn prop_explanation_idempotent(user in any_move(), bot in any_move()) {
        let result = resolve_round(user, bot);
        prop_assert_eq!(explain_outcome(user, bot, result), explain_outcome(user, bot, result));
    }
}
