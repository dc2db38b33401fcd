//! # Battle Service
//!
//! Applies the damage rule of a quiz battle to one turn. A correct answer hits
//! the boss, a wrong one hits the player, and both health values are floored at
//! [`MIN_HEALTH`] afterwards.

use tracing::{debug, instrument};

use crate::models::{Target, TurnRequest, TurnResult};
use crate::utils::constant::*;

/// Resolves a single turn.
///
/// The damage is subtracted before clamping, so a health value that was already
/// negative in the request still comes back as [`MIN_HEALTH`].
#[instrument(level = "debug")]
pub fn resolve_turn(request: TurnRequest) -> TurnResult {
    let TurnRequest {
        was_answer_correct,
        mut player_health,
        mut boss_health,
    } = request;

    let (target, message) = if was_answer_correct {
        boss_health = boss_health.saturating_sub(DAMAGE_PER_TURN);
        (Target::Boss, CORRECT_ANSWER_MESSAGE)
    } else {
        player_health = player_health.saturating_sub(DAMAGE_PER_TURN);
        (Target::Player, INCORRECT_ANSWER_MESSAGE)
    };

    let result = TurnResult {
        new_player_health: player_health.max(MIN_HEALTH),
        new_boss_health: boss_health.max(MIN_HEALTH),
        target,
        damage_dealt: DAMAGE_PER_TURN,
        message: message.to_string(),
    };

    debug!(
        damaged = %target,
        new_player_health = result.new_player_health,
        new_boss_health = result.new_boss_health,
        "Applied turn damage"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(was_answer_correct: bool, player_health: i64, boss_health: i64) -> TurnResult {
        resolve_turn(TurnRequest {
            was_answer_correct,
            player_health,
            boss_health,
        })
    }

    #[test_log::test]
    fn correct_answer_damages_boss() {
        let result = turn(true, 5, 3);

        assert_eq!(result.new_player_health, 5);
        assert_eq!(result.new_boss_health, 2);
        assert_eq!(result.target, Target::Boss);
        assert_eq!(result.damage_dealt, 1);
        assert_eq!(result.message, "Correct! The opponent takes 1 point of damage.");
    }

    #[test_log::test]
    fn incorrect_answer_damages_player() {
        let result = turn(false, 1, 4);

        assert_eq!(result.new_player_health, 0);
        assert_eq!(result.new_boss_health, 4);
        assert_eq!(result.target, Target::Player);
        assert_eq!(result.damage_dealt, 1);
        assert_eq!(result.message, "Incorrect! You take 1 point of damage.");
    }

    #[test]
    fn defeated_boss_stays_at_zero() {
        let result = turn(true, 2, 0);

        assert_eq!(result.new_player_health, 2);
        assert_eq!(result.new_boss_health, 0);
        assert_eq!(result.target, Target::Boss);
    }

    #[test]
    fn negative_inputs_are_clamped_on_both_sides() {
        let hit_boss = turn(true, -4, -9);
        assert_eq!((hit_boss.new_player_health, hit_boss.new_boss_health), (0, 0));

        let hit_player = turn(false, -4, -9);
        assert_eq!(
            (hit_player.new_player_health, hit_player.new_boss_health),
            (0, 0)
        );
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let result = turn(false, i64::MIN, i64::MAX);

        assert_eq!(result.new_player_health, 0);
        assert_eq!(result.new_boss_health, i64::MAX);
    }

    #[test]
    fn health_never_negative_across_inputs() {
        for was_answer_correct in [true, false] {
            for player_health in -3..=3 {
                for boss_health in -3..=3 {
                    let result = turn(was_answer_correct, player_health, boss_health);
                    assert!(result.new_player_health >= 0);
                    assert!(result.new_boss_health >= 0);

                    let (expected_player, expected_boss) = if was_answer_correct {
                        (player_health.max(0), (boss_health - 1).max(0))
                    } else {
                        ((player_health - 1).max(0), boss_health.max(0))
                    };
                    assert_eq!(result.new_player_health, expected_player);
                    assert_eq!(result.new_boss_health, expected_boss);
                }
            }
        }
    }
}
