use crate::{
    constants::{SERVE_ROTATION_POINTS, SET_TARGET_SCORE, SET_WIN_MARGIN},
    shapes::{enums::TeamSideEnum, point::PointEntry, timeline::Timeline},
};
use chrono::{DateTime, Utc};

/// Live state of the match shown on the board.
///
/// The only way to mutate it is [`score_point`](MatchState::score_point) and
/// [`reset_match`](MatchState::reset_match); everything displayed is derived
/// from these fields on demand.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub score_a: u32,
    pub score_b: u32,
    pub sets_won_a: u32,
    pub sets_won_b: u32,
    pub server: TeamSideEnum,
    pub total_points_this_set: u32,
    pub timeline: Timeline,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        MatchState {
            score_a: 0,
            score_b: 0,
            sets_won_a: 0,
            sets_won_b: 0,
            server: TeamSideEnum::A,
            total_points_this_set: 0,
            timeline: Timeline::new(),
        }
    }

    pub fn score(&self, team: TeamSideEnum) -> u32 {
        match team {
            TeamSideEnum::A => self.score_a,
            TeamSideEnum::B => self.score_b,
        }
    }

    pub fn sets_won(&self, team: TeamSideEnum) -> u32 {
        match team {
            TeamSideEnum::A => self.sets_won_a,
            TeamSideEnum::B => self.sets_won_b,
        }
    }

    /// Returns the side that has taken the current set, if any.
    pub fn get_set_winner(&self) -> Option<TeamSideEnum> {
        let a = self.score_a;
        let b = self.score_b;
        if a >= SET_TARGET_SCORE && a >= b + SET_WIN_MARGIN {
            Some(TeamSideEnum::A)
        } else if b >= SET_TARGET_SCORE && b >= a + SET_WIN_MARGIN {
            Some(TeamSideEnum::B)
        } else {
            None
        }
    }

    /// Awards a point to `team`.
    ///
    /// The steps always run in this order:
    /// 1. the score and the set timeline are updated;
    /// 2. the serve rotates if the points played in the set are now even;
    /// 3. if the set is decided, the winner's set count goes up, the set
    ///    timeline is archived and the scores start over.
    ///
    /// The rotation in step 2 is evaluated on the count before the reset in
    /// step 3, and the reset never touches the server. Returns the winner
    /// when this point closed the set.
    pub fn score_point(
        &mut self,
        team: TeamSideEnum,
        timestamp: DateTime<Utc>,
    ) -> Option<TeamSideEnum> {
        let score_after = match team {
            TeamSideEnum::A => {
                self.score_a += 1;
                self.score_a
            }
            TeamSideEnum::B => {
                self.score_b += 1;
                self.score_b
            }
        };
        self.timeline.record(PointEntry {
            team,
            score_after,
            timestamp,
        });
        self.total_points_this_set += 1;
        self.rotate_server();
        self.close_set()
    }

    /// Back to the state of a brand new match.
    pub fn reset_match(&mut self) {
        *self = MatchState::new();
    }

    /// Visible sets, current first. See [`Timeline::visible_timelines`].
    pub fn visible_timelines(&self) -> Vec<Vec<&PointEntry>> {
        self.timeline.visible_timelines()
    }

    fn rotate_server(&mut self) {
        if self.total_points_this_set.is_multiple_of(SERVE_ROTATION_POINTS) {
            self.server = self.server.opponent();
        }
    }

    fn close_set(&mut self) -> Option<TeamSideEnum> {
        let winner = self.get_set_winner()?;
        match winner {
            TeamSideEnum::A => self.sets_won_a += 1,
            TeamSideEnum::B => self.sets_won_b += 1,
        }
        self.timeline.archive_current_set();
        self.score_a = 0;
        self.score_b = 0;
        self.total_points_this_set = 0;
        Some(winner)
    }
}
