//! Interaction-state types shared with the frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. A frontend consumes them
//! to place the ring and its cards each frame and to react to interaction
//! milestones.

use glam::Vec3;

/// Where the ring is in its interaction life cycle.
///
/// `Initializing → Idle ⇄ Dragging → Settling → Idle → Selected`, with
/// `Selected` terminal for the ring instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingPhase {
    Initializing,
    Idle,
    Dragging,
    Settling,
    Selected,
}

/// Per-slot life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotPhase {
    Entering,
    Idle,
    Dismissed,
}

/// Read-only interpolated placement a renderer consumes each frame.
///
/// `rotation` is Euler angles in radians around x/y/z; `scale` is uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

/// Descriptor for the oversized invisible plane that receives ring-level
/// drags, so card gestures and ring gestures do not contend for the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureSurface {
    pub size: f32,
    pub scale: f32,
    pub visible: bool,
    pub opacity: f32,
}

/// Interaction milestones emitted by `Carousel::tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// The last slot's entrance animation finished; dragging is now enabled.
    EntranceFinished,
    /// The snapped angle centered a different card.
    ActiveCardChanged { index: usize },
    /// The ring came fully to rest after a drag release.
    RingSettled { angle: f32 },
    /// A card was chosen; the ring is now terminal.
    CardSelected { index: usize },
}
