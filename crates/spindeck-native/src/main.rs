//! Scripted driver for the carousel interaction core.
//!
//! Replays a full session against a 12-card ring at a fixed frame interval:
//! entrance, a drag with inertial release, the snap to the nearest card, a
//! card flip, and the terminal selection. Events and final placements are
//! logged; there is no renderer attached.

use std::time::Duration;

use glam::{Mat3, Vec3};
use spindeck_core::{
    Carousel, CarouselConfig, CarouselEvent, CardDragSample, DragSample, RingPhase, Transform,
};

const FRAME: Duration = Duration::from_millis(16);
/// Upper bound on scripted wait loops, in frames (~40 s of simulated time).
const MAX_FRAMES: usize = 2500;

fn drain(events: &mut Vec<CarouselEvent>) {
    for ev in events.drain(..) {
        log::info!("[demo] {:?}", ev);
    }
}

/// Tick until `done(ring)` holds. Returns the simulated time spent.
fn run_until(
    ring: &mut Carousel,
    events: &mut Vec<CarouselEvent>,
    done: impl Fn(&Carousel) -> bool,
) -> anyhow::Result<Duration> {
    for frame in 0..MAX_FRAMES {
        if done(ring) {
            return Ok(FRAME * frame as u32);
        }
        ring.tick(FRAME, events);
        drain(events);
    }
    anyhow::bail!("scripted wait did not converge within {} frames", MAX_FRAMES)
}

/// World-space slot position the way a renderer would compose it: the slot
/// transform scaled and rotated by the ring group transform.
fn world_position(ring_t: &Transform, slot_t: &Transform) -> Vec3 {
    Mat3::from_rotation_y(ring_t.rotation.y) * (slot_t.position * ring_t.scale) + ring_t.position
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut ring = Carousel::new(CarouselConfig::default())?;
    let mut events = Vec::new();

    // Entrance: slots fly in staggered; dragging is gated until the last one
    // lands.
    let spent = run_until(&mut ring, &mut events, |r| !r.is_initializing())?;
    log::info!("[demo] entrance done after {:?}", spent);

    // Pull the ring to the right across a few frames, then let go and watch
    // it settle on the nearest card.
    for _ in 0..4 {
        ring.apply(DragSample {
            direction: 1.0,
            velocity: 0.12,
            down: true,
            tap: false,
        });
        ring.tick(FRAME, &mut events);
        drain(&mut events);
    }
    ring.apply(DragSample {
        direction: 1.0,
        velocity: 0.30,
        down: false,
        tap: false,
    });
    run_until(&mut ring, &mut events, |r| r.phase() == RingPhase::Idle)?;
    let active = ring.active_index();
    log::info!(
        "[demo] settled at {:.3} rad, card {} centered",
        ring.angle(),
        active
    );

    // Flip the active card over and back onto its half-turn grid.
    ring.drag_card(
        active,
        CardDragSample {
            dx: 280.0,
            dy: 30.0,
            down: true,
        },
    );
    ring.drag_card(
        active,
        CardDragSample {
            dx: 280.0,
            dy: 0.0,
            down: false,
        },
    );
    run_until(&mut ring, &mut events, |r| {
        (r.card_transform(r.active_index()).rotation.y - std::f32::consts::PI).abs() < 1e-2
    })?;
    log::info!(
        "[demo] card {} flipped to {:.3} rad",
        active,
        ring.card_transform(active).rotation.y
    );

    // Pick it: every other slot drops out of view.
    ring.click_card(active, &mut events);
    drain(&mut events);
    run_until(&mut ring, &mut events, |r| {
        (0..r.card_count())
            .filter(|&i| i != r.active_index())
            .all(|i| (r.slot_transform(i).position.y + 10.0).abs() < 1e-2)
    })?;

    let ring_t = ring.ring_transform();
    for i in 0..ring.card_count() {
        let world = world_position(&ring_t, &ring.slot_transform(i));
        log::info!(
            "[demo] slot {:>2} at ({:+.2}, {:+.2}, {:+.2}) scale {:.2}",
            i,
            world.x,
            world.y,
            world.z,
            ring.card_transform(i).scale
        );
    }
    log::info!("[demo] session complete, card {} selected", active);
    Ok(())
}
