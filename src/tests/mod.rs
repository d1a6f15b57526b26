mod match_state_tests;
mod scoreboard_screen_tests;

use crate::providers::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

/// Clock that moves one second forward every time it is read.
pub struct StepClock {
    next: Cell<DateTime<Utc>>,
}

impl StepClock {
    pub fn new() -> Self {
        Self {
            next: Cell::new(at(0)),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + Duration::seconds(1));
        now
    }
}

/// A fixed instant, `seconds` after the reference one.
pub fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_750_000_000 + seconds, 0).expect("expected a valid timestamp")
}
