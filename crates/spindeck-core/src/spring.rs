//! Damped-spring interpolation driving every animated property in the core.
//!
//! Controllers never block on an animation: they retarget a [`Spring`] with a
//! [`SpringConfig`] and a [`Motion`] mode, then observe completion edges from
//! [`Spring::step`] during the ring tick. Integration is semi-implicit Euler
//! at a fixed internal substep.

/// Internal integration substep, milliseconds.
const SUBSTEP_MS: f32 = 4.0;
/// Value distance below which a spring counts as resting on its target.
const REST_DELTA: f32 = 1e-3;
/// Velocity magnitude (units per second) below which a spring can rest.
const REST_VELOCITY: f32 = 1e-3;

/// Physical curve parameters, in the animation collaborator's own terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        // collaborator default curve
        Self {
            mass: 1.0,
            tension: 170.0,
            friction: 26.0,
        }
    }
}

/// Whether an update is interpolated or applied as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Eased,
    Instant,
}

/// Whether a finished animation goes idle or replays from its start value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    OneShot,
    Looping,
}

/// Interpolation mode for one retarget call.
#[derive(Clone, Copy, Debug)]
pub struct Motion {
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Motion {
    pub const EASED: Motion = Motion {
        easing: Easing::Eased,
        repeat: Repeat::OneShot,
    };
    pub const EASED_LOOPING: Motion = Motion {
        easing: Easing::Eased,
        repeat: Repeat::Looping,
    };
    pub const INSTANT: Motion = Motion {
        easing: Easing::Instant,
        repeat: Repeat::OneShot,
    };
}

/// One interpolated scalar: current value, velocity, and an in-flight target.
#[derive(Clone, Debug)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    start: f32,
    config: SpringConfig,
    repeat: Repeat,
    delay_ms: f32,
    at_rest: bool,
    replay_queued: bool,
}

impl Spring {
    /// A spring already resting at `value`.
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            start: value,
            config: SpringConfig::default(),
            repeat: Repeat::OneShot,
            delay_ms: 0.0,
            at_rest: true,
            replay_queued: false,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Retarget the spring. `Instant` easing jumps straight to the target and
    /// fires no completion; `Eased` starts converging on the next step.
    pub fn set(&mut self, target: f32, config: SpringConfig, motion: Motion) {
        self.set_delayed(target, 0.0, config, motion);
    }

    /// Like [`Spring::set`], but integration only starts once `delay_ms` of
    /// stepped time has elapsed.
    pub fn set_delayed(&mut self, target: f32, delay_ms: f32, config: SpringConfig, motion: Motion) {
        self.replay_queued = false;
        self.target = target;
        self.config = config;
        self.repeat = motion.repeat;
        if motion.easing == Easing::Instant {
            self.value = target;
            self.velocity = 0.0;
            self.delay_ms = 0.0;
            self.at_rest = true;
            return;
        }
        self.start = self.value;
        self.delay_ms = delay_ms;
        self.at_rest = false;
    }

    /// Pin the spring at `value` and stop all motion, including a queued
    /// looping replay.
    pub fn halt_at(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.delay_ms = 0.0;
        self.at_rest = true;
        self.replay_queued = false;
    }

    /// Advance by `dt_ms`. Returns `true` on the step where the spring comes
    /// to rest on its target (the completion edge). A `Looping` spring fires
    /// the edge, then replays from its start value on the following step
    /// unless it gets retargeted or halted first.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        if self.at_rest {
            return false;
        }
        let mut remaining = dt_ms;
        if self.delay_ms > 0.0 {
            if self.delay_ms >= remaining {
                self.delay_ms -= remaining;
                return false;
            }
            remaining -= self.delay_ms;
            self.delay_ms = 0.0;
        }
        if self.replay_queued {
            self.replay_queued = false;
            self.value = self.start;
            self.velocity = 0.0;
        }
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_MS) / 1000.0;
            remaining -= SUBSTEP_MS;
            let displacement = self.value - self.target;
            let accel =
                (-self.config.tension * displacement - self.config.friction * self.velocity)
                    / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            if self.velocity.abs() < REST_VELOCITY && (self.value - self.target).abs() < REST_DELTA
            {
                self.value = self.target;
                self.velocity = 0.0;
                match self.repeat {
                    Repeat::OneShot => self.at_rest = true,
                    Repeat::Looping => self.replay_queued = true,
                }
                return true;
            }
        }
        false
    }
}
