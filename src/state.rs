use embassy_time::{Duration, Instant};

use crate::effect::EffectId;
use crate::params::{DEFAULT_SPEED, speed_to_interval};

/// Default interval between two frames
pub const DEFAULT_INTERVAL: Duration = speed_to_interval(DEFAULT_SPEED);

/// Animation progress of the current effect
#[derive(Debug, Clone)]
pub struct AnimationState {
    effect: EffectId,
    step: u16,
    last_update: Instant,
    interval: Duration,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    pub const fn new() -> Self {
        Self {
            effect: EffectId::None,
            step: 0,
            last_update: Instant::from_millis(0),
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Effect rendered on the next frame
    pub const fn effect(&self) -> EffectId {
        self.effect
    }

    /// Frame counter of the current effect
    pub const fn step(&self) -> u16 {
        self.step
    }

    /// Time of the last rendered frame
    pub const fn last_update(&self) -> Instant {
        self.last_update
    }

    /// Minimum time between two frames
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Check if a frame is due at `now`
    ///
    /// A clock that reads earlier than the last update is never due.
    pub fn is_due(&self, now: Instant) -> bool {
        now.checked_duration_since(self.last_update)
            .is_some_and(|elapsed| elapsed >= self.interval)
    }

    /// Time at which the next frame becomes due
    pub fn next_deadline(&self) -> Instant {
        self.last_update + self.interval
    }

    /// Switch to a new effect, restarting its step counter
    pub(crate) fn select(&mut self, effect: EffectId) {
        self.effect = effect;
        self.step = 0;
    }

    /// Continue with another effect without restarting the step counter
    pub(crate) fn transition_to(&mut self, effect: EffectId) {
        self.effect = effect;
    }

    pub(crate) fn advance(&mut self) {
        self.step = self.step.wrapping_add(1);
    }

    pub(crate) fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub(crate) fn mark(&mut self, now: Instant) {
        self.last_update = now;
    }
}
