/// Configuration for a physics-based spring transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass attached to the spring.
    pub mass: f32,
    /// Spring stiffness.
    pub stiffness: f32,
    /// Damping coefficient.
    pub damping: f32,
    /// Velocity at animation start, in normalized progress per second.
    /// Gesture-driven transitions seed this with the release velocity.
    pub initial_velocity: f32,
}

impl SpringConfig {
    /// Pleasant default with slight overshoot.
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 180.0,
        damping: 11.0,
        initial_velocity: 0.0,
    };

    /// Quick response with minimal overshoot.
    pub const SNAPPY: Self = Self {
        mass: 1.0,
        stiffness: 250.0,
        damping: 14.0,
        initial_velocity: 0.0,
    };

    /// Subtle, fully damped motion.
    pub const GENTLE: Self = Self {
        mass: 1.0,
        stiffness: 120.0,
        damping: 15.0,
        initial_velocity: 0.0,
    };

    /// Derive the damping coefficient from a damping ratio (1.0 = critically
    /// damped, below 1.0 overshoots).
    pub fn with_damping_ratio(mut self, ratio: f32) -> Self {
        self.damping = ratio * 2.0 * (self.mass * self.stiffness).sqrt();
        self
    }

    pub fn with_initial_velocity(mut self, velocity: f32) -> Self {
        self.initial_velocity = velocity;
        self
    }
}

/// Running state of a spring simulation from 0.0 toward 1.0.
#[derive(Clone, Debug)]
pub struct SpringState {
    position: f32,
    velocity: f32,
    last_t: f32,
}

impl SpringState {
    pub fn new(config: &SpringConfig) -> Self {
        Self {
            position: 0.0,
            velocity: config.initial_velocity,
            last_t: 0.0,
        }
    }

    /// Advance the simulation to `elapsed_secs` since animation start and
    /// return the current position. The position may overshoot 1.0; the
    /// spring runs until it settles rather than for a fixed duration.
    pub fn step(&mut self, elapsed_secs: f32, config: &SpringConfig) -> f32 {
        let dt = (elapsed_secs - self.last_t).max(0.0);
        self.last_t = elapsed_secs;
        if dt < 1e-6 {
            return self.position;
        }

        // Cap the timestep for numerical stability.
        let dt = dt.min(0.033);

        let displacement = self.position - 1.0;
        let force = -config.stiffness * displacement - config.damping * self.velocity;
        let acceleration = force / config.mass;

        // Semi-implicit Euler.
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.position
    }

    /// Whether the spring has come to rest at the target.
    pub fn is_settled(&self, threshold: f32) -> bool {
        (self.position - 1.0).abs() < threshold && self.velocity.abs() < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: SpringConfig, seconds: f32) -> SpringState {
        let mut state = SpringState::new(&config);
        let frames = (seconds * 60.0) as usize;
        for i in 0..=frames {
            state.step(i as f32 / 60.0, &config);
        }
        state
    }

    #[test]
    fn test_spring_settles_at_target() {
        let state = run(SpringConfig::DEFAULT, 3.0);
        assert!(
            state.is_settled(0.05),
            "spring did not settle: {:?}",
            state
        );
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let config = SpringConfig::DEFAULT.with_damping_ratio(0.4);
        let mut state = SpringState::new(&config);
        let mut max: f32 = 0.0;
        for i in 0..180 {
            max = max.max(state.step(i as f32 / 60.0, &config));
        }
        assert!(max > 1.0, "underdamped spring should overshoot, max {max}");
    }

    #[test]
    fn test_initial_velocity_carries_through() {
        let fast = SpringConfig::GENTLE.with_initial_velocity(5.0);
        let slow = SpringConfig::GENTLE;
        let mut fast_state = SpringState::new(&fast);
        let mut slow_state = SpringState::new(&slow);
        let fast_pos = fast_state.step(0.1, &fast);
        let slow_pos = slow_state.step(0.1, &slow);
        assert!(fast_pos > slow_pos);
    }
}
