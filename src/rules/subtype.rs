//! Round subtypes and their scoring rules.
//!
//! Trix is played as a cycle of contracts (king of hearts, queens, diamonds,
//! luto, trix). 400 rounds are entered by hand and have a single `Manual`
//! subtype. Each subtype carries a fixed rule set; see [`Subtype::rules`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::Game;

/// Points for finishing places 1 to 4 in the trix contract.
pub const TRIX_PLACE_POINTS: [i64; 4] = [200, 150, 100, 50];

/// Kind of round being scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subtype {
    /// 400: per-player points entered directly.
    Manual,
    /// Trix: whoever takes the king of hearts.
    King,
    /// Trix: queens taken.
    Queens,
    /// Trix: diamond cards taken.
    Diamonds,
    /// Trix: tricks taken.
    Luto,
    /// Trix: finishing places.
    Trix,
}

/// How per-seat input is constrained and turned into points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scoring {
    /// Input is used as points verbatim. No clamping, no constraint.
    Identity,
    /// Input counts items taken; points are `count * points_per`.
    Count {
        min: i64,
        max: i64,
        required_sum: i64,
        points_per: i64,
    },
    /// Input is a finishing place; each place is used exactly once.
    Places { min: i64, max: i64 },
}

/// Display metadata and scoring rule for a subtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubtypeRules {
    pub label: &'static str,
    /// What the per-seat number means.
    pub unit: &'static str,
    pub scoring: Scoring,
}

impl Subtype {
    /// All subtypes, 400 first, then the Trix contracts in playing order.
    pub const ALL: [Subtype; 6] = [
        Subtype::Manual,
        Subtype::King,
        Subtype::Queens,
        Subtype::Diamonds,
        Subtype::Luto,
        Subtype::Trix,
    ];

    /// The Trix contracts.
    pub const TRIX_CONTRACTS: [Subtype; 5] = [
        Subtype::King,
        Subtype::Queens,
        Subtype::Diamonds,
        Subtype::Luto,
        Subtype::Trix,
    ];

    /// Rules for this subtype.
    #[must_use]
    pub const fn rules(self) -> SubtypeRules {
        match self {
            Subtype::Manual => SubtypeRules {
                label: "Manual",
                unit: "points",
                scoring: Scoring::Identity,
            },
            Subtype::King => SubtypeRules {
                label: "King of Hearts",
                unit: "king taken (0/1)",
                scoring: Scoring::Count {
                    min: 0,
                    max: 1,
                    required_sum: 1,
                    points_per: -75,
                },
            },
            Subtype::Queens => SubtypeRules {
                label: "Queens",
                unit: "queens taken (0..4)",
                scoring: Scoring::Count {
                    min: 0,
                    max: 4,
                    required_sum: 4,
                    points_per: -25,
                },
            },
            Subtype::Diamonds => SubtypeRules {
                label: "Diamonds",
                unit: "♦ cards taken (0..13)",
                scoring: Scoring::Count {
                    min: 0,
                    max: 13,
                    required_sum: 13,
                    points_per: -10,
                },
            },
            Subtype::Luto => SubtypeRules {
                label: "Luto",
                unit: "tricks taken (0..13)",
                scoring: Scoring::Count {
                    min: 0,
                    max: 13,
                    required_sum: 13,
                    points_per: -15,
                },
            },
            Subtype::Trix => SubtypeRules {
                label: "Trix",
                unit: "place (1..4)",
                scoring: Scoring::Places { min: 1, max: 4 },
            },
        }
    }

    /// The game this subtype belongs to.
    #[must_use]
    pub const fn game(self) -> Game {
        match self {
            Subtype::Manual => Game::FourHundred,
            _ => Game::Trix,
        }
    }

    /// Name used on the command line and in serialized rounds.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Subtype::Manual => "manual",
            Subtype::King => "king",
            Subtype::Queens => "queens",
            Subtype::Diamonds => "diamonds",
            Subtype::Luto => "luto",
            Subtype::Trix => "trix",
        }
    }

    /// Label used in the history table.
    #[must_use]
    pub const fn row_label(self) -> &'static str {
        match self {
            Subtype::Manual => "400 manual",
            Subtype::King => "King♥ (−75)",
            Subtype::Queens => "Queens (−25 each)",
            Subtype::Diamonds => "Diamonds (−10 each ♦)",
            Subtype::Luto => "Luto (−15 per trick)",
            Subtype::Trix => "Trix (+200/+150/+100/+50)",
        }
    }

    /// Instructions for entering a round of this subtype.
    #[must_use]
    pub fn help_text(self) -> String {
        let rules = self.rules();
        match rules.scoring {
            Scoring::Identity => Game::FourHundred.hint().to_string(),
            Scoring::Count { points_per, .. } => format!(
                "{}: enter {} per player; points = count × ({}).",
                rules.label, rules.unit, points_per
            ),
            Scoring::Places { .. } => {
                "Trix: enter place 1..4 per player (each place exactly once).".to_string()
            }
        }
    }
}

impl std::fmt::Display for Subtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised subtype name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown round type '{0}' (expected manual, king, queens, diamonds, luto or trix)")]
pub struct UnknownSubtype(pub String);

impl FromStr for Subtype {
    type Err = UnknownSubtype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Subtype::ALL
            .into_iter()
            .find(|subtype| subtype.name() == wanted)
            .ok_or(UnknownSubtype(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtype_games() {
        assert_eq!(Subtype::Manual.game(), Game::FourHundred);
        for subtype in Subtype::TRIX_CONTRACTS {
            assert_eq!(subtype.game(), Game::Trix);
        }
    }

    #[test]
    fn test_count_rules_table() {
        let expect = [
            (Subtype::King, 0, 1, 1, -75),
            (Subtype::Queens, 0, 4, 4, -25),
            (Subtype::Diamonds, 0, 13, 13, -10),
            (Subtype::Luto, 0, 13, 13, -15),
        ];
        for (subtype, min, max, required_sum, points_per) in expect {
            assert_eq!(
                subtype.rules().scoring,
                Scoring::Count { min, max, required_sum, points_per },
                "{subtype}"
            );
        }
        assert_eq!(Subtype::Trix.rules().scoring, Scoring::Places { min: 1, max: 4 });
        assert_eq!(Subtype::Manual.rules().scoring, Scoring::Identity);
    }

    #[test]
    fn test_subtype_parse() {
        for subtype in Subtype::ALL {
            assert_eq!(subtype.name().parse::<Subtype>(), Ok(subtype));
        }
        assert_eq!("Queens".parse::<Subtype>(), Ok(Subtype::Queens));
        assert!("spades".parse::<Subtype>().is_err());
    }

    #[test]
    fn test_help_text() {
        assert_eq!(
            Subtype::Queens.help_text(),
            "Queens: enter queens taken (0..4) per player; points = count × (-25)."
        );
        assert!(Subtype::Trix.help_text().contains("each place exactly once"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Subtype::Luto).unwrap(), "\"luto\"");
        let parsed: Subtype = serde_json::from_str("\"king\"").unwrap();
        assert_eq!(parsed, Subtype::King);
    }
}
