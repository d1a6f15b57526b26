use crate::shapes::enums::TeamSideEnum;
use chrono::{DateTime, Local, Utc};
use std::fmt::{self, Display, Formatter};

/// A single rally won by `team`, recorded with the score it reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointEntry {
    pub team: TeamSideEnum,
    pub score_after: u32,
    pub timestamp: DateTime<Utc>,
}

impl PointEntry {
    /// Wall-clock time of the point, in the local time zone.
    pub fn time_of_day(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

impl Display for PointEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "team={} score={} at={}",
            self.team,
            self.score_after,
            self.timestamp.to_rfc3339()
        )
    }
}
