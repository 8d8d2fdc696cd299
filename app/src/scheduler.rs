use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Decides when the shell should advance the engine. The engine itself has
/// no notion of time.
#[derive(Debug)]
pub struct Scheduler {
    state: RunState,
    interval: Duration,
    last_tick: Option<Instant>,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: RunState::Idle,
            interval,
            last_tick: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn run(&mut self) {
        if self.state == RunState::Idle {
            log::info!("running every {:?}", self.interval);
            self.state = RunState::Running;
            self.last_tick = None;
        }
    }

    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            log::info!("stopped");
            self.state = RunState::Idle;
        }
    }

    /// Whether a tick is owed at `now`. Returns `true` at most once per
    /// interval, and never while idle.
    pub fn due(&mut self, now: Instant) -> bool {
        if self.state == RunState::Idle {
            return false;
        }
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }

    /// How long until the next tick, or `None` while idle.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        if self.state == RunState::Idle {
            return None;
        }
        let elapsed = self
            .last_tick
            .map_or(self.interval, |last| now.saturating_duration_since(last));
        Some(self.interval.saturating_sub(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn test_idle_never_ticks() {
        let mut s = Scheduler::new(TICK);
        let now = Instant::now();
        assert_eq!(s.state(), RunState::Idle);
        assert!(!s.due(now));
        assert!(!s.due(now + TICK * 10));
        assert_eq!(s.until_next(now), None);
    }

    #[test]
    fn test_ticks_once_per_interval() {
        let mut s = Scheduler::new(TICK);
        let t0 = Instant::now();
        s.run();
        assert!(s.due(t0));
        assert!(!s.due(t0 + TICK / 2));
        assert_eq!(s.until_next(t0 + TICK / 2), Some(TICK / 2));
        assert!(s.due(t0 + TICK));
        assert!(!s.due(t0 + TICK));
    }

    #[test]
    fn test_stop_and_resume() {
        let mut s = Scheduler::new(TICK);
        let t0 = Instant::now();
        s.run();
        assert!(s.due(t0));
        s.stop();
        assert!(!s.is_running());
        assert!(!s.due(t0 + TICK * 3));
        // Resuming ticks straight away.
        s.run();
        assert!(s.due(t0 + TICK * 3 + TICK / 10));
    }
}
