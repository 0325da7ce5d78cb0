use std::time::Duration;

/// Gameplay tick schedule.
///
/// Holds what the driver should be doing, not a timer: the cadence ticks
/// should fire at, or nothing while stopped. Each `start` opens a new epoch,
/// so a driver can tell a restart apart from a cadence change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSchedule {
    cadence: Option<Duration>,
    epoch: u64,
}

impl TickSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start ticking at `cadence`
    pub fn start(&mut self, cadence: Duration) {
        self.cadence = Some(cadence);
        self.epoch += 1;
    }

    pub fn stop(&mut self) {
        self.cadence = None;
    }

    /// Change the cadence of a running schedule. Ignored while stopped.
    pub fn set_cadence(&mut self, cadence: Duration) {
        if self.cadence.is_some() {
            self.cadence = Some(cadence);
        }
    }

    pub fn cadence(&self) -> Option<Duration> {
        self.cadence
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_running(&self) -> bool {
        self.cadence.is_some()
    }
}
