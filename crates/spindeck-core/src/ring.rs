//! Ring controller: drag-to-rotate, inertial release, snap-to-nearest card,
//! entrance sequencing, and the terminal select/dismiss transition.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec3;
use smallvec::SmallVec;

use crate::card::CardController;
use crate::constants::{
    CAPTURE_SURFACE_SCALE, CAPTURE_SURFACE_SIZE, DISMISS_Y, ENTRANCE_STAGGER_MS,
    ENTRANCE_START_FRACTION, INERTIA_FACTOR, RING_DRAG_SPRING, RING_RADIUS, RING_REST_SPRING,
    RING_SNAP_SPRING, RING_Y_OFFSET, SCALE_LIFTED, SCALE_RESTING, TAP_SUPPRESS_MS,
};
use crate::error::ConfigError;
use crate::gesture::{CardDragSample, DragSample, GestureConfig};
use crate::spring::{Motion, Spring};
use crate::state::{CarouselEvent, CaptureSurface, RingPhase, SlotPhase, Transform};

/// Round `angle` to the nearest multiple of `step`.
#[inline]
pub fn snap_to_nearest(angle: f32, step: f32) -> f32 {
    (angle / step).round() * step
}

/// Index of the card centered by a snapped angle, wrapped into `[0, n)`.
///
/// Euclidean remainder keeps the mapping continuous and periodic for
/// arbitrarily large rotations in either direction.
#[inline]
pub fn wrap_index(snapped: f32, step: f32, n: usize) -> usize {
    ((snapped / step).round() as i64).rem_euclid(n as i64) as usize
}

/// Ring construction parameters.
#[derive(Clone, Copy, Debug)]
pub struct CarouselConfig {
    pub card_count: usize,
    pub radius: f32,
    pub with_entrance_animation: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_count: 12,
            radius: RING_RADIUS,
            with_entrance_animation: true,
        }
    }
}

/// A card's fixed seat on the ring plus its entrance/dismissal motion.
struct Slot {
    /// Angular position, fixed at construction.
    angle: f32,
    /// Cartesian home position at full radius.
    home: Vec3,
    /// Fraction of the full radius, animated 0.1 -> 1.0 during entrance.
    radial: Spring,
    /// Vertical offset, animated 0 -> DISMISS_Y on dismissal.
    drop: Spring,
    phase: SlotPhase,
}

/// The carousel ring: one rotating group of evenly spaced card slots.
///
/// All state transitions happen inside the input methods or inside
/// [`Carousel::tick`], which integrates the springs and dispatches
/// completions. Each instance owns its state exclusively.
pub struct Carousel {
    step: f32,
    angle: Spring,
    scale: Spring,
    active_index: usize,
    is_dragging: bool,
    is_initializing: bool,
    is_selected: bool,
    settling: bool,
    slots: SmallVec<[Slot; 16]>,
    cards: Vec<CardController>,
}

impl Carousel {
    pub fn new(config: CarouselConfig) -> Result<Self, ConfigError> {
        if config.card_count == 0 {
            return Err(ConfigError::EmptyRing);
        }
        if !config.radius.is_finite() || config.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(config.radius));
        }
        let n = config.card_count;
        let step = TAU / n as f32;
        let slots = (0..n)
            .map(|idx| {
                let angle = step * idx as f32;
                let home = Vec3::new(
                    config.radius * angle.sin(),
                    0.0,
                    config.radius * angle.cos(),
                );
                let (radial, phase) = if config.with_entrance_animation {
                    let mut radial = Spring::at(ENTRANCE_START_FRACTION);
                    radial.set_delayed(
                        1.0,
                        ENTRANCE_STAGGER_MS * idx as f32,
                        RING_REST_SPRING,
                        Motion::EASED,
                    );
                    (radial, SlotPhase::Entering)
                } else {
                    (Spring::at(1.0), SlotPhase::Idle)
                };
                Slot {
                    angle,
                    home,
                    radial,
                    drop: Spring::at(0.0),
                    phase,
                }
            })
            .collect::<SmallVec<[Slot; 16]>>();
        let cards = (0..n).map(CardController::new).collect();
        Ok(Self {
            step,
            angle: Spring::at(0.0),
            scale: Spring::at(SCALE_RESTING),
            active_index: 0,
            is_dragging: false,
            is_initializing: config.with_entrance_animation,
            is_selected: false,
            settling: false,
            slots,
            cards,
        })
    }

    /// Feed one normalized ring drag sample. Taps never rotate the ring.
    pub fn apply(&mut self, sample: DragSample) {
        if sample.tap {
            return;
        }
        if sample.down {
            self.on_drag_move(sample.direction, sample.velocity);
        } else {
            self.on_drag_end(sample.direction, sample.velocity);
        }
    }

    /// Pointer-down drag: rotate with the finger. No-op while the ring is
    /// initializing or already selected.
    pub fn on_drag_move(&mut self, dx: f32, vx: f32) {
        if self.is_initializing || self.is_selected {
            return;
        }
        if !self.is_dragging {
            log::debug!("[ring] begin drag");
        }
        self.is_dragging = true;
        // a fresh drag supersedes any settle still converging
        self.settling = false;
        let yaw = self.angle.value() + dx * vx;
        self.angle.set(yaw, RING_DRAG_SPRING, Motion::EASED);
        self.scale.set(SCALE_LIFTED, RING_DRAG_SPRING, Motion::EASED);
    }

    /// Drag release: extrapolate the release swing into extra rotation and
    /// start the settle animation toward it.
    pub fn on_drag_end(&mut self, dx: f32, vx: f32) {
        if self.is_initializing || self.is_selected || !self.is_dragging {
            return;
        }
        let yaw = self.angle.value() + dx * vx;
        let target = yaw + dx * vx * INERTIA_FACTOR;
        self.settling = true;
        self.angle.set(target, RING_DRAG_SPRING, Motion::EASED_LOOPING);
        self.scale.set(SCALE_LIFTED, RING_DRAG_SPRING, Motion::EASED);
        log::debug!("[ring] release -> target {:.3}", target);
    }

    /// Feed one card-level drag sample; routed only while that card is
    /// clickable (sole active card, ring at rest).
    pub fn drag_card(&mut self, index: usize, sample: CardDragSample) {
        if !self.is_card_clickable(index) {
            return;
        }
        if sample.down {
            self.cards[index].on_drag(sample.dx, sample.dy);
        } else {
            self.cards[index].on_release();
        }
    }

    /// Click the card at `index`: emphasis-scale it and select it. Ignored
    /// unless the card is clickable.
    pub fn click_card(&mut self, index: usize, out_events: &mut Vec<CarouselEvent>) {
        if !self.is_card_clickable(index) {
            return;
        }
        self.cards[index].on_click();
        self.select_card(index, out_events);
    }

    /// Terminal transition: keep slot `index` in place and drop every other
    /// slot out of the visible plane. Idempotent once selected.
    pub fn select_card(&mut self, index: usize, out_events: &mut Vec<CarouselEvent>) {
        if self.is_selected || index >= self.slots.len() {
            return;
        }
        self.is_selected = true;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if i == index {
                continue;
            }
            slot.phase = SlotPhase::Dismissed;
            slot.drop.set(DISMISS_Y, RING_SNAP_SPRING, Motion::EASED);
        }
        out_events.push(CarouselEvent::CardSelected { index });
        log::info!("[ring] card {} selected", index);
    }

    /// Advance all springs by `dt` and dispatch completions. Interaction
    /// milestones are appended to `out_events`.
    pub fn tick(&mut self, dt: Duration, out_events: &mut Vec<CarouselEvent>) {
        let dt_ms = dt.as_secs_f32() * 1000.0;

        for slot in &mut self.slots {
            if slot.radial.step(dt_ms) && slot.phase == SlotPhase::Entering {
                slot.phase = SlotPhase::Idle;
            }
            slot.drop.step(dt_ms);
        }
        if self.is_initializing && self.slots.iter().all(|s| s.radial.is_at_rest()) {
            self.is_initializing = false;
            out_events.push(CarouselEvent::EntranceFinished);
            log::debug!("[ring] entrance finished, dragging enabled");
        }

        if self.angle.step(dt_ms) && self.settling {
            self.on_settle(out_events);
        }
        self.scale.step(dt_ms);

        for card in &mut self.cards {
            card.tick(dt_ms);
        }
    }

    /// Rest dispatch for the settle animation: snap to the nearest card,
    /// recompute the active index, clear the dragging flag.
    fn on_settle(&mut self, out_events: &mut Vec<CarouselEvent>) {
        let snapped = snap_to_nearest(self.angle.value(), self.step);
        self.is_dragging = false;
        let index = wrap_index(snapped, self.step, self.slots.len());
        if index != self.active_index {
            self.active_index = index;
            out_events.push(CarouselEvent::ActiveCardChanged { index });
            log::debug!("[ring] active card -> {}", index);
        }
        if (self.angle.value() - snapped).abs() <= 1e-3 {
            // already centered; end the settle here
            self.angle.halt_at(snapped);
            self.scale.set(SCALE_RESTING, RING_SNAP_SPRING, Motion::EASED);
            self.settling = false;
            out_events.push(CarouselEvent::RingSettled { angle: snapped });
            log::debug!("[ring] settled at {:.3}", snapped);
        } else {
            self.angle.set(snapped, RING_SNAP_SPRING, Motion::EASED_LOOPING);
            self.scale.set(SCALE_RESTING, RING_SNAP_SPRING, Motion::EASED);
        }
    }

    pub fn is_card_clickable(&self, index: usize) -> bool {
        !self.is_dragging
            && !self.is_initializing
            && !self.is_selected
            && index == self.active_index
    }

    pub fn phase(&self) -> RingPhase {
        if self.is_initializing {
            RingPhase::Initializing
        } else if self.is_selected {
            RingPhase::Selected
        } else if self.settling {
            RingPhase::Settling
        } else if self.is_dragging {
            RingPhase::Dragging
        } else {
            RingPhase::Idle
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle.value()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[inline]
    pub fn card_count(&self) -> usize {
        self.slots.len()
    }

    /// Angular spacing between adjacent slots.
    #[inline]
    pub fn step_angle(&self) -> f32 {
        self.step
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[inline]
    pub fn is_initializing(&self) -> bool {
        self.is_initializing
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn slot_phase(&self, index: usize) -> SlotPhase {
        self.slots[index].phase
    }

    pub fn card(&self, index: usize) -> &CardController {
        &self.cards[index]
    }

    /// Placement of the whole rotating group.
    pub fn ring_transform(&self) -> Transform {
        Transform {
            position: Vec3::new(0.0, RING_Y_OFFSET, 0.0),
            rotation: Vec3::new(0.0, self.angle.value(), 0.0),
            scale: self.scale.value(),
        }
    }

    /// Placement of slot `index` within the group: home position scaled by
    /// the entrance fraction, plus the dismissal drop on y.
    pub fn slot_transform(&self, index: usize) -> Transform {
        let slot = &self.slots[index];
        let f = slot.radial.value();
        Transform {
            position: Vec3::new(slot.home.x * f, slot.drop.value(), slot.home.z * f),
            rotation: Vec3::new(0.0, slot.angle, 0.0),
            scale: 1.0,
        }
    }

    /// Local placement of the card mesh inside slot `index` (tilt/yaw from
    /// direct manipulation, emphasis scale from selection).
    pub fn card_transform(&self, index: usize) -> Transform {
        let card = &self.cards[index];
        Transform {
            position: Vec3::ZERO,
            rotation: card.rotation(),
            scale: card.scale(),
        }
    }

    /// The invisible oversized plane that captures ring-level drags.
    pub fn capture_surface(&self) -> CaptureSurface {
        CaptureSurface {
            size: CAPTURE_SURFACE_SIZE,
            scale: CAPTURE_SURFACE_SCALE,
            visible: false,
            opacity: 0.0,
        }
    }

    /// Gesture-layer configuration reflecting the current input gate.
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            enabled: !self.is_initializing && !self.is_selected,
            filter_taps: true,
            tap_delay_ms: TAP_SUPPRESS_MS,
        }
    }
}
