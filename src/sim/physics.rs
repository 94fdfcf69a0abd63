//! Physics integration and collision resolution
//!
//! One fixed timestep per call. Movement resolves axis by axis: the box
//! moves horizontally and snaps against whatever it ran into, then moves
//! vertically and snaps again. That covers the platformer cases (landing,
//! wall-stopping, head bonks) for static axis-aligned geometry without a
//! general sweep; a fast enough box can still tunnel a thin platform,
//! which the floor clamp backstops.
//!
//! Pass order is a contract: corner hits resolve horizontally first.
//! Swapping the passes changes observable corner behavior.
//!
//! Each pass assumes at most one platform overlaps the box; with sane
//! level geometry that holds, and ties just resolve in iteration order.

use super::geom::Aabb;
use super::state::{Blob, World};
use crate::config::Tuning;

/// Advance the blob one tick: gravity, horizontal pass, vertical pass,
/// floor clamp, canvas clamp
pub fn step(blob: &mut Blob, world: &World, tuning: &Tuning) {
    blob.vel.y += tuning.gravity;

    // The collision proxy is a square on the fixed collision radius; the
    // animated silhouette never feeds back into this box.
    let mut bb = Aabb::from_center(blob.pos, blob.radius);

    // Horizontal pass. The ground plane is skipped on purpose: it spans
    // the whole canvas and must never act as a side wall.
    bb.x += blob.vel.x;
    for platform in world.platforms.iter().filter(|p| !p.ground) {
        if bb.overlaps(&platform.rect) {
            if blob.vel.x > 0.0 {
                // Moving right: stop at the platform's left edge
                bb.x = platform.rect.x - bb.w;
            } else if blob.vel.x < 0.0 {
                // Moving left: stop at the right edge
                bb.x = platform.rect.right();
            }
            blob.vel.x = 0.0;
        }
    }

    // Vertical pass re-derives grounded from scratch every tick
    blob.on_ground = false;
    bb.y += blob.vel.y;
    for platform in &world.platforms {
        if bb.overlaps(&platform.rect) {
            if blob.vel.y > 0.0 {
                // Falling: land on top
                bb.y = platform.rect.y - bb.h;
                blob.vel.y = 0.0;
                blob.on_ground = true;
            } else if blob.vel.y < 0.0 {
                // Rising: bonk the underside
                bb.y = platform.rect.bottom();
                blob.vel.y = 0.0;
            }
        }
    }

    // Safety net against tunneling past the floor. Leaves on_ground alone;
    // the floor platform itself re-grounds the box next tick.
    let floor_limit = world.floor_y - bb.h;
    if bb.y > floor_limit {
        log::warn!("floor clamp engaged at y={:.1} (vy was {:.2})", bb.y, blob.vel.y);
        bb.y = floor_limit;
        blob.vel.y = 0.0;
    }

    blob.pos = bb.center();

    // Keep the full collision radius inside the canvas horizontally
    blob.pos.x = blob.pos.x.clamp(blob.radius, world.width - blob.radius);
}
