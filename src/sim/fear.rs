//! The panic meter
//!
//! A single [0, 1] scalar driven by how far the blob is from the nearest
//! pool of light. Negative distance means the blob is inside a pool. The
//! meter is updated exactly once per tick, first in the tick order, from
//! the position the previous tick produced - the one-tick lag between
//! movement and fear is part of the tuned feel.

use glam::Vec2;

use crate::config::{LightSource, Tuning};
use crate::remap01_clamped;

/// Signed distance from `pos` to the nearest light edge; negative inside
/// a pool, `None` when no lights are configured
pub fn nearest_light_distance(pos: Vec2, lights: &[LightSource]) -> Option<f32> {
    lights
        .iter()
        .map(|light| pos.distance(light.pos) - light.radius)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// Darkness target in [0, 1] for the current position
pub fn darkness_target(pos: Vec2, lights: &[LightSource], tuning: &Tuning) -> f32 {
    match nearest_light_distance(pos, lights) {
        Some(d) => remap01_clamped(d, tuning.panic_dist_calm, tuning.panic_dist_dark),
        // Calm default when the level has no lights at all
        None => 0.0,
    }
}

/// Smooth the meter one tick toward the current darkness target
pub fn update(panic: &mut f32, pos: Vec2, lights: &[LightSource], tuning: &Tuning) {
    let target = darkness_target(pos, lights, tuning);
    *panic += tuning.panic_smoothing * (target - *panic);
    // The target is already in [0, 1]; the clamp guards float drift
    *panic = panic.clamp(0.0, 1.0);
}
