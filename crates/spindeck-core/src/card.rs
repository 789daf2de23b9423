//! Card controller: a single card's tilt/yaw response to direct
//! manipulation and its selection emphasis.
//!
//! The card itself is deliberately dumb about ring state; the ring routes
//! input to it only while the card is clickable.

use std::f32::consts::PI;

use glam::Vec3;

use crate::constants::{CARD_SPRING, DRAG_ANGLE_DIVISOR, SELECT_SCALE, TILT_LIMIT};
use crate::spring::{Motion, Spring};

pub struct CardController {
    index: usize,
    /// Rotation about x, constrained so the card cannot over-rotate.
    tilt: Spring,
    /// Rotation about y, unclamped.
    yaw: Spring,
    scale: Spring,
}

impl CardController {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            tilt: Spring::at(0.0),
            yaw: Spring::at(0.0),
            scale: Spring::at(1.0),
        }
    }

    /// Pointer-down frame: track the finger exactly, no easing.
    pub fn on_drag(&mut self, dx: f32, dy: f32) {
        let tilt = (dy / DRAG_ANGLE_DIVISOR).clamp(-TILT_LIMIT, TILT_LIMIT);
        let yaw = dx / DRAG_ANGLE_DIVISOR;
        self.tilt.set(tilt, CARD_SPRING, Motion::INSTANT);
        self.yaw.set(yaw, CARD_SPRING, Motion::INSTANT);
    }

    /// Release: the card eases onto its half-turn grid, front or back
    /// facing, and the tilt returns to neutral.
    pub fn on_release(&mut self) {
        let damped = (self.yaw.value() / PI).round() * PI;
        self.yaw.set(damped, CARD_SPRING, Motion::EASED);
        self.tilt.set(0.0, CARD_SPRING, Motion::EASED);
    }

    /// Click: enlarge to the emphasis scale. Ring-level selection is routed
    /// by the carousel, not from here.
    pub fn on_click(&mut self) {
        self.scale.set(SELECT_SCALE, CARD_SPRING, Motion::EASED);
        log::debug!("[card] {} clicked", self.index);
    }

    pub(crate) fn tick(&mut self, dt_ms: f32) {
        self.tilt.step(dt_ms);
        self.yaw.step(dt_ms);
        self.scale.step(dt_ms);
    }

    /// Local Euler rotation (tilt, yaw, 0).
    #[inline]
    pub fn rotation(&self) -> Vec3 {
        Vec3::new(self.tilt.value(), self.yaw.value(), 0.0)
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }
}
