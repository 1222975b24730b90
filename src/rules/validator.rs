//! Round input validation and point computation.
//!
//! All functions here are pure. Raw per-seat numbers are first clamped into
//! the subtype's range, then checked against its constraint, then turned
//! into point deltas.

use crate::core::{Game, Seats};
use crate::error::ValidationError;

use super::subtype::{Scoring, Subtype, TRIX_PLACE_POINTS};

/// A validated round: clamped input and the points it earns each seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scored {
    pub input: Seats<i64>,
    pub points: Seats<i64>,
}

/// Check that `subtype` is a round type of `game`.
pub fn check_game(game: Game, subtype: Subtype) -> Result<(), ValidationError> {
    if subtype.game() == game {
        Ok(())
    } else {
        Err(ValidationError::SubtypeMismatch { game, subtype })
    }
}

/// Clamp raw input into the subtype's range. Manual input is left as is.
#[must_use]
pub fn clamp_input(subtype: Subtype, raw: &Seats<i64>) -> Seats<i64> {
    match subtype.rules().scoring {
        Scoring::Identity => *raw,
        Scoring::Count { min, max, .. } | Scoring::Places { min, max } => {
            raw.map(|v| (*v).clamp(min, max))
        }
    }
}

/// Check already-clamped input against the subtype's constraint.
pub fn validate(subtype: Subtype, input: &Seats<i64>) -> Result<(), ValidationError> {
    let rules = subtype.rules();
    match rules.scoring {
        Scoring::Identity => Ok(()),
        Scoring::Count { required_sum, .. } => {
            // Clamped to a small range, so this cannot overflow.
            let sum: i64 = input.values().sum();
            if sum == required_sum {
                Ok(())
            } else if subtype == Subtype::King {
                Err(ValidationError::KingNotSingle { sum })
            } else {
                Err(ValidationError::WrongTotal {
                    label: rules.label,
                    expected: required_sum,
                    actual: sum,
                })
            }
        }
        Scoring::Places { min, max } => {
            let mut places = *input.as_array();
            places.sort_unstable();
            let expected = min..=max;
            if places.iter().copied().eq(expected) {
                Ok(())
            } else {
                Err(ValidationError::NotAPermutation {
                    places: *input.as_array(),
                })
            }
        }
    }
}

/// Points each seat earns for already-validated input.
#[must_use]
pub fn points_for(subtype: Subtype, input: &Seats<i64>) -> Seats<i64> {
    match subtype.rules().scoring {
        Scoring::Identity => *input,
        Scoring::Count { points_per, .. } => input.map(|count| count * points_per),
        Scoring::Places { min, .. } => input.map(|place| {
            usize::try_from(place - min)
                .ok()
                .and_then(|i| TRIX_PLACE_POINTS.get(i))
                .copied()
                .unwrap_or(0)
        }),
    }
}

/// Clamp, validate and score raw round input.
///
/// ```
/// use trix_scorekeeper::core::Seats;
/// use trix_scorekeeper::rules::{score, Subtype};
///
/// let scored = score(Subtype::Queens, &Seats::from([1, 1, 2, 0])).unwrap();
/// assert_eq!(scored.points, Seats::from([-25, -25, -50, 0]));
/// ```
pub fn score(subtype: Subtype, raw: &Seats<i64>) -> Result<Scored, ValidationError> {
    let input = clamp_input(subtype, raw);
    validate(subtype, &input)?;
    Ok(Scored {
        input,
        points: points_for(subtype, &input),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(values: [i64; 4]) -> Seats<i64> {
        Seats::from(values)
    }

    #[test]
    fn test_king_single_taker() {
        let scored = score(Subtype::King, &seats([0, 0, 1, 0])).unwrap();
        assert_eq!(scored.points, seats([0, 0, -75, 0]));
    }

    #[test]
    fn test_king_rejects_two_takers() {
        let err = score(Subtype::King, &seats([1, 1, 0, 0])).unwrap_err();
        assert_eq!(err, ValidationError::KingNotSingle { sum: 2 });
    }

    #[test]
    fn test_king_rejects_nobody() {
        let err = score(Subtype::King, &seats([0, 0, 0, 0])).unwrap_err();
        assert_eq!(err, ValidationError::KingNotSingle { sum: 0 });
    }

    #[test]
    fn test_king_clamps_before_checking() {
        // 5 clamps to 1, -3 clamps to 0.
        let scored = score(Subtype::King, &seats([5, -3, 0, 0])).unwrap();
        assert_eq!(scored.input, seats([1, 0, 0, 0]));
        assert_eq!(scored.points, seats([-75, 0, 0, 0]));
    }

    #[test]
    fn test_queens() {
        let scored = score(Subtype::Queens, &seats([1, 1, 2, 0])).unwrap();
        assert_eq!(scored.points, seats([-25, -25, -50, 0]));

        let err = score(Subtype::Queens, &seats([1, 1, 1, 0])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongTotal { label: "Queens", expected: 4, actual: 3 }
        );
    }

    #[test]
    fn test_queens_clamp_to_four() {
        // 9 clamps to 4, which alone makes the total.
        let scored = score(Subtype::Queens, &seats([9, 0, 0, 0])).unwrap();
        assert_eq!(scored.input, seats([4, 0, 0, 0]));
        assert_eq!(scored.points, seats([-100, 0, 0, 0]));
    }

    #[test]
    fn test_diamonds_and_luto() {
        let scored = score(Subtype::Diamonds, &seats([3, 4, 5, 1])).unwrap();
        assert_eq!(scored.points, seats([-30, -40, -50, -10]));

        let scored = score(Subtype::Luto, &seats([13, 0, 0, 0])).unwrap();
        assert_eq!(scored.points, seats([-195, 0, 0, 0]));

        assert!(score(Subtype::Luto, &seats([13, 1, 0, 0])).is_err());
        assert!(score(Subtype::Diamonds, &seats([0, 0, 0, 12])).is_err());
    }

    #[test]
    fn test_trix_places() {
        let scored = score(Subtype::Trix, &seats([1, 2, 3, 4])).unwrap();
        assert_eq!(scored.points, seats([200, 150, 100, 50]));

        let scored = score(Subtype::Trix, &seats([4, 1, 3, 2])).unwrap();
        assert_eq!(scored.points, seats([50, 200, 100, 150]));
    }

    #[test]
    fn test_trix_rejects_repeated_place() {
        let err = score(Subtype::Trix, &seats([1, 1, 3, 4])).unwrap_err();
        assert_eq!(err, ValidationError::NotAPermutation { places: [1, 1, 3, 4] });
    }

    #[test]
    fn test_trix_clamps_places() {
        // 0 clamps to 1 and 9 to 4: [1, 2, 3, 4].
        let scored = score(Subtype::Trix, &seats([0, 2, 3, 9])).unwrap();
        assert_eq!(scored.input, seats([1, 2, 3, 4]));

        // 0 and 1 both become place 1.
        assert!(score(Subtype::Trix, &seats([0, 1, 3, 4])).is_err());
    }

    #[test]
    fn test_manual_is_identity() {
        let raw = seats([120, -40, 0, 1_000]);
        let scored = score(Subtype::Manual, &raw).unwrap();
        assert_eq!(scored.input, raw);
        assert_eq!(scored.points, raw);
    }

    #[test]
    fn test_check_game() {
        assert!(check_game(Game::Trix, Subtype::Queens).is_ok());
        assert!(check_game(Game::FourHundred, Subtype::Manual).is_ok());
        assert_eq!(
            check_game(Game::FourHundred, Subtype::King),
            Err(ValidationError::SubtypeMismatch {
                game: Game::FourHundred,
                subtype: Subtype::King
            })
        );
        assert!(check_game(Game::Trix, Subtype::Manual).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = score(Subtype::Diamonds, &seats([0, 0, 0, 0])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Diamonds: there are 13 in total (sum must be 13, got 0)"
        );
    }
}
