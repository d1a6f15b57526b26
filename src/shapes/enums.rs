use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{
    errors::{AppError, IOError},
    localization::Labels,
};

pub trait FriendlyName {
    fn friendly_name(&self, labels: &Labels) -> &'static str;
}

/// Identifies one of the two sides playing the match.
///
/// - **A**:
///   The side shown on the left of the board (blue).
///
/// - **B**:
///   The side shown on the right of the board (red).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSideEnum {
    A,
    B,
}

impl TeamSideEnum {
    pub fn opponent(&self) -> TeamSideEnum {
        match self {
            TeamSideEnum::A => TeamSideEnum::B,
            TeamSideEnum::B => TeamSideEnum::A,
        }
    }
}

impl fmt::Display for TeamSideEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TeamSideEnum::A => "a",
            TeamSideEnum::B => "b",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for TeamSideEnum {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" => Ok(TeamSideEnum::A),
            "b" => Ok(TeamSideEnum::B),
            _ => Err(AppError::IO(IOError::EncodingError(format!(
                "invalid team side: {}",
                s
            )))),
        }
    }
}

impl FriendlyName for TeamSideEnum {
    fn friendly_name(&self, labels: &Labels) -> &'static str {
        match self {
            TeamSideEnum::A => labels.team_a,
            TeamSideEnum::B => labels.team_b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageEnum {
    En,
    Ko,
}

impl fmt::Display for LanguageEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LanguageEnum::En => "en",
            LanguageEnum::Ko => "ko",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for LanguageEnum {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(LanguageEnum::En),
            "ko" => Ok(LanguageEnum::Ko),
            _ => Err(AppError::IO(IOError::EncodingError(format!(
                "invalid language: {}",
                s
            )))),
        }
    }
}

/// Actions a screen can bind to a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenActionEnum {
    ScorePointA,
    ScorePointB,
    Reset,
    Up,
    Down,
    Help,
    Back,
    Quit,
}

impl ScreenActionEnum {
    pub const ALL: [ScreenActionEnum; 8] = [
        ScreenActionEnum::ScorePointA,
        ScreenActionEnum::ScorePointB,
        ScreenActionEnum::Reset,
        ScreenActionEnum::Up,
        ScreenActionEnum::Down,
        ScreenActionEnum::Help,
        ScreenActionEnum::Back,
        ScreenActionEnum::Quit,
    ];
}

impl fmt::Display for ScreenActionEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScreenActionEnum::ScorePointA => "score_point_a",
            ScreenActionEnum::ScorePointB => "score_point_b",
            ScreenActionEnum::Reset => "reset",
            ScreenActionEnum::Up => "up",
            ScreenActionEnum::Down => "down",
            ScreenActionEnum::Help => "help",
            ScreenActionEnum::Back => "back",
            ScreenActionEnum::Quit => "quit",
        };
        write!(f, "{}", label)
    }
}

impl FriendlyName for ScreenActionEnum {
    fn friendly_name(&self, labels: &Labels) -> &'static str {
        match self {
            ScreenActionEnum::ScorePointA => labels.score_point_a,
            ScreenActionEnum::ScorePointB => labels.score_point_b,
            ScreenActionEnum::Reset => labels.reset,
            ScreenActionEnum::Up => labels.previous_set,
            ScreenActionEnum::Down => labels.next_set,
            ScreenActionEnum::Help => labels.help,
            ScreenActionEnum::Back => labels.back,
            ScreenActionEnum::Quit => labels.quit,
        }
    }
}

/// How two consecutive points of a set are joined on the timeline.
///
/// - **Same**:
///   Both points went to the same side; drawn in that side's colour.
///
/// - **Cross**:
///   The point changed hands; drawn in a neutral colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorEnum {
    Same(TeamSideEnum),
    Cross,
}

#[test]
fn test_team_side_from_str_rejects_unknown_sides() {
    assert_eq!(TeamSideEnum::from_str("A").ok(), Some(TeamSideEnum::A));
    assert_eq!(TeamSideEnum::from_str("b").ok(), Some(TeamSideEnum::B));
    assert!(TeamSideEnum::from_str("c").is_err());
    assert!(TeamSideEnum::from_str("").is_err());
}
