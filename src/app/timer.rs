use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::game::TickSchedule;

/// Real-time driver for a `TickSchedule`.
///
/// The interval is rebuilt whenever the schedule is restarted or changes
/// cadence; the first tick after a rebuild comes one full cadence later.
pub struct GameplayTimer {
    current: Option<(u64, Duration)>,
    interval: Option<Interval>,
}

impl GameplayTimer {
    pub fn new() -> Self {
        Self {
            current: None,
            interval: None,
        }
    }

    /// Bring the timer in line with the schedule
    pub fn sync(&mut self, schedule: &TickSchedule) {
        let wanted = schedule.cadence().map(|cadence| (schedule.epoch(), cadence));
        if wanted == self.current {
            return;
        }

        self.current = wanted;
        self.interval = wanted.map(|(_, cadence)| {
            let mut timer = interval_at(Instant::now() + cadence, cadence);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer
        });
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick; never completes while stopped
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for GameplayTimer {
    fn default() -> Self {
        Self::new()
    }
}
