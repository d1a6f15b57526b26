use crate::shapes::{enums::ConnectorEnum, point::PointEntry};
use std::collections::VecDeque;

/// Point history of a match: the set being played plus every finished set.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    current: Vec<PointEntry>,
    // most recent set first
    completed: VecDeque<Vec<PointEntry>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, point: PointEntry) {
        self.current.push(point);
    }

    /// Freezes the running set into the history and starts an empty one.
    pub fn archive_current_set(&mut self) {
        let mut finished = std::mem::take(&mut self.current);
        finished.sort_by_key(|p| p.timestamp);
        self.completed.push_front(finished);
    }

    #[cfg(test)]
    pub fn current_set(&self) -> &[PointEntry] {
        &self.current
    }

    pub fn completed_sets(&self) -> impl Iterator<Item = &[PointEntry]> {
        self.completed.iter().map(|s| s.as_slice())
    }

    pub fn completed_set_count(&self) -> usize {
        self.completed.len()
    }

    /// Returns the sets to display: the running one first (even if empty),
    /// then the finished ones from the most recent. Points within each set
    /// are ordered by timestamp, since insertion order can disagree with the
    /// clock.
    pub fn visible_timelines(&self) -> Vec<Vec<&PointEntry>> {
        std::iter::once(self.current.as_slice())
            .chain(self.completed_sets())
            .map(sorted_points)
            .collect()
    }
}

fn sorted_points(points: &[PointEntry]) -> Vec<&PointEntry> {
    let mut sorted: Vec<&PointEntry> = points.iter().collect();
    // stable: equal timestamps keep insertion order
    sorted.sort_by_key(|p| p.timestamp);
    sorted
}

/// Classifies the link between each pair of consecutive points.
pub fn connectors(points: &[&PointEntry]) -> Vec<ConnectorEnum> {
    points
        .windows(2)
        .map(|pair| {
            if pair[0].team == pair[1].team {
                ConnectorEnum::Same(pair[1].team)
            } else {
                ConnectorEnum::Cross
            }
        })
        .collect()
}
