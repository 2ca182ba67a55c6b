// Spring Animation
// Damped spring used to drive the tab indicator toward the active tab
//
// Usage:
//   let mut animator = TabIndicatorAnimator::new(SpringConfig::default(), 0.0);
//   animator.retarget(2.0);
//   // Every frame...
//   let progress = animator.step(frame_delta);

use std::time::Duration;

use crate::core::TabViewError;

/// Largest integration step; longer frames are split into substeps
const MAX_SUBSTEP_SECS: f32 = 1.0 / 240.0;

/// Upper bound for a single frame delta (a stalled frame must not teleport the indicator)
const MAX_FRAME_SECS: f32 = 0.25;

/// Spring parameters
///
/// `damping` is the absolute damping coefficient, `stiffness` the spring
/// constant and `mass` the attached mass. The defaults (20 / 90 / 1) sit just
/// above critical damping, so a transition decelerates smoothly into place
/// without overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
    /// Distance from target (in tab units) below which the spring may rest
    pub rest_displacement: f32,
    /// Speed (tab units per second) below which the spring may rest
    pub rest_speed: f32,
}

impl SpringConfig {
    pub const DEFAULT_DAMPING: f32 = 20.0;
    pub const DEFAULT_STIFFNESS: f32 = 90.0;
    pub const DEFAULT_MASS: f32 = 1.0;

    pub fn new(damping: f32, stiffness: f32, mass: f32) -> Self {
        Self {
            damping,
            stiffness,
            mass,
            ..Self::default()
        }
    }

    /// Reject parameters the integrator can't work with
    pub fn validate(&self) -> Result<(), TabViewError> {
        let checks = [
            ("damping", self.damping, self.damping >= 0.0),
            ("stiffness", self.stiffness, self.stiffness > 0.0),
            ("mass", self.mass, self.mass > 0.0),
            ("rest_displacement", self.rest_displacement, self.rest_displacement > 0.0),
            ("rest_speed", self.rest_speed, self.rest_speed > 0.0),
        ];

        for (name, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(TabViewError::InvalidSpring {
                    name,
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Damping ratio (1.0 = critically damped)
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: Self::DEFAULT_DAMPING,
            stiffness: Self::DEFAULT_STIFFNESS,
            mass: Self::DEFAULT_MASS,
            rest_displacement: 0.01,
            rest_speed: 0.05,
        }
    }
}

/// Drives the indicator progress (measured in tab indices) toward a target index
///
/// Pull-based: nothing moves unless the owner calls `step` from its frame
/// loop, so dropping the animator leaves nothing running.
#[derive(Debug, Clone)]
pub struct TabIndicatorAnimator {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl TabIndicatorAnimator {
    /// Create an animator resting at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Current progress value
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the spring is at rest on its target
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Point the spring at a new target, keeping position and velocity
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to a value and rest there
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance the simulation by one frame and return the new progress
    pub fn step(&mut self, dt: Duration) -> f32 {
        if self.is_settled() {
            return self.value;
        }

        let mut remaining = dt.as_secs_f32().min(MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            self.integrate(h);
            remaining -= h;

            if self.should_rest() {
                self.snap_to(self.target);
                break;
            }
        }

        self.value
    }

    /// Progress values for every frame until the spring rests (or `max_frames` is hit)
    ///
    /// Runs on a copy; the animator itself is left untouched.
    pub fn trajectory(&self, frame: Duration, max_frames: usize) -> Vec<f32> {
        let mut sim = self.clone();
        let mut values = Vec::new();
        while !sim.is_settled() && values.len() < max_frames {
            values.push(sim.step(frame));
        }
        values
    }

    fn integrate(&mut self, h: f32) {
        let displacement = self.value - self.target;
        let spring_force = -self.config.stiffness * displacement;
        let damping_force = -self.config.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / self.config.mass;

        // Semi-implicit Euler: velocity first, then position with the new velocity
        self.velocity += acceleration * h;
        self.value += self.velocity * h;
    }

    fn should_rest(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_speed
    }
}
