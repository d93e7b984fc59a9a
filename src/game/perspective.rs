use super::Side;

/// Re-express an engine's terminal value for the side that moved first.
///
/// `engine_reward` favours `reference` when positive. The result is +1 when
/// `first_mover` won, -1 when it lost and 0 for a draw; only the sign of
/// `engine_reward` is used.
pub fn session_reward(engine_reward: f32, reference: Side, first_mover: Side) -> f32 {
    let sign = if engine_reward > 0.0 {
        1.0
    } else if engine_reward < 0.0 {
        -1.0
    } else {
        return 0.0;
    };

    if reference == first_mover {
        sign
    } else {
        -sign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_reward_side_combinations() {
        // (engine_reward, reference, first_mover) -> expected
        let table = [
            (1.0, Side::A, Side::A, 1.0),
            (0.0, Side::A, Side::A, 0.0),
            (-1.0, Side::A, Side::A, -1.0),
            (1.0, Side::A, Side::B, -1.0),
            (0.0, Side::A, Side::B, 0.0),
            (-1.0, Side::A, Side::B, 1.0),
            (1.0, Side::B, Side::A, -1.0),
            (0.0, Side::B, Side::A, 0.0),
            (-1.0, Side::B, Side::A, 1.0),
            (1.0, Side::B, Side::B, 1.0),
            (0.0, Side::B, Side::B, 0.0),
            (-1.0, Side::B, Side::B, -1.0),
        ];

        for (engine_reward, reference, first_mover, expected) in table {
            let got = session_reward(engine_reward, reference, first_mover);
            assert_eq!(
                got, expected,
                "reward {engine_reward} ref {reference:?} first {first_mover:?}"
            );
        }
    }

    #[test]
    fn test_only_sign_is_used() {
        assert_eq!(session_reward(0.25, Side::A, Side::A), 1.0);
        assert_eq!(session_reward(-7.0, Side::A, Side::B), 1.0);
    }

    #[test]
    fn test_draw_is_never_negative_zero() {
        let r = session_reward(0.0, Side::A, Side::B);
        assert!(r.is_sign_positive());
    }
}
