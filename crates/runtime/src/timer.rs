//! Frame-counted round timer.

/// Simulation rate the frame counts assume.
pub const FRAMES_PER_SECOND: u64 = 60;

/// Expires the round once a fixed number of frames has been simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimer {
    limit: u64,
}

impl RoundTimer {
    pub const DEFAULT_SECONDS: u64 = 60;

    /// Timer lasting `frames` frames. A limit of zero is raised to one so
    /// that every round simulates at least one frame.
    pub fn new(frames: u64) -> Self {
        Self {
            limit: frames.max(1),
        }
    }

    pub fn from_seconds(seconds: u64) -> Self {
        Self::new(seconds.saturating_mul(FRAMES_PER_SECOND))
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// True when `frame` is the last frame of the round (or later).
    pub fn expired_at(&self, frame: u64) -> bool {
        frame >= self.limit
    }

    pub fn remaining(&self, frame: u64) -> u64 {
        self.limit.saturating_sub(frame)
    }

    /// Whole seconds left, rounded up, as a HUD clock shows them.
    pub fn seconds_remaining(&self, frame: u64) -> u64 {
        self.remaining(frame).div_ceil(FRAMES_PER_SECOND)
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::from_seconds(Self::DEFAULT_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_on_last_frame() {
        let timer = RoundTimer::new(3);
        assert!(!timer.expired_at(2));
        assert!(timer.expired_at(3));
        assert_eq!(timer.remaining(1), 2);
        assert_eq!(RoundTimer::new(0).limit(), 1);
    }

    #[test]
    fn default_round_is_one_minute() {
        let timer = RoundTimer::default();
        assert_eq!(timer.limit(), 3600);
        assert_eq!(timer.seconds_remaining(0), 60);
        assert_eq!(timer.seconds_remaining(1), 60);
        assert_eq!(timer.seconds_remaining(60), 59);
        assert_eq!(timer.seconds_remaining(3600), 0);
    }
}
