mod animatable;
mod spring;
mod timing;

pub use animatable::Animatable;
pub use spring::{SpringConfig, SpringState};
pub use timing::TimingFunction;

use std::time::Duration;

/// Immutable timing configuration for one transition animator.
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    /// Total animation duration.
    pub duration: Duration,
    /// Delay before the animation starts.
    pub delay: Duration,
    /// Curve applied to timed progress.
    pub timing: TimingFunction,
}

impl AnimationConfig {
    /// Slide transitions move between on- and off-screen frames in a quarter
    /// second.
    pub const SLIDE_DURATION: Duration = Duration::from_millis(250);
    /// Fade-style pop-up reveals take half a second over identical frames.
    pub const FADE_DURATION: Duration = Duration::from_millis(500);

    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            timing,
        }
    }

    /// Default configuration for slide transitions.
    pub fn slide() -> Self {
        Self::new(Self::SLIDE_DURATION, TimingFunction::EaseInOut)
    }

    /// Default configuration for fade-style pop-up reveals.
    pub fn fade() -> Self {
        Self::new(Self::FADE_DURATION, TimingFunction::EaseInOut)
    }

    /// Spring-driven configuration. The duration acts as an upper bound; the
    /// spring completes when it settles.
    pub fn spring(config: SpringConfig) -> Self {
        Self::new(Duration::from_secs(1), TimingFunction::Spring(config))
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::slide()
    }
}
