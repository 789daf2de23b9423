use crate::spring::SpringConfig;

// Shared layout/animation tuning constants used by the ring and card
// controllers and by frontends placing the scene.

// Ring layout
pub const RING_RADIUS: f32 = 2.0; // world-space distance from ring center to each card
pub const CARD_WIDTH: f32 = 0.35;
pub const CARD_HEIGHT: f32 = 0.6;
pub const RING_Y_OFFSET: f32 = -CARD_HEIGHT / 4.0; // vertical offset of the whole group

// Ring scale states
pub const SCALE_RESTING: f32 = 1.0; // idle ring scale
pub const SCALE_LIFTED: f32 = 1.08; // slight zoom while the ring is being dragged

// Drag response
pub const INERTIA_FACTOR: f32 = 0.7; // post-release rotation as a fraction of the release swing
pub const TAP_SUPPRESS_MS: f32 = 300.0; // gesture layer holds drags shorter than this

// Card manipulation
pub const TILT_LIMIT: f32 = core::f32::consts::PI / 7.0; // max pitch while a card is dragged
pub const DRAG_ANGLE_DIVISOR: f32 = 100.0; // pointer units per radian of card rotation
pub const SELECT_SCALE: f32 = 2.5; // emphasis scale of a chosen card
pub const DISMISS_Y: f32 = -10.0; // vertical drop applied to non-selected cards

// Entrance
pub const ENTRANCE_STAGGER_MS: f32 = 100.0; // per-index delay before a slot flies in
pub const ENTRANCE_START_FRACTION: f32 = 0.1; // slots start at this fraction of the full radius

// Drag-capture surface
pub const CAPTURE_SURFACE_SIZE: f32 = 10.0;
pub const CAPTURE_SURFACE_SCALE: f32 = 5.0;

// Spring presets (mass, tension, friction)
pub const RING_REST_SPRING: SpringConfig = SpringConfig {
    mass: 1.0,
    tension: 150.0,
    friction: 40.0,
};
pub const RING_DRAG_SPRING: SpringConfig = SpringConfig {
    mass: 0.5,
    tension: 50.0,
    friction: 20.0,
};
pub const RING_SNAP_SPRING: SpringConfig = SpringConfig {
    mass: 1.0,
    tension: 100.0,
    friction: 60.0,
};
pub const CARD_SPRING: SpringConfig = SpringConfig {
    mass: 1.0,
    tension: 300.0,
    friction: 80.0,
};
