//! Background ambience: drifting shadows and the darkness overlay
//!
//! Presentation-facing state that is still simulation-owned. Shadow
//! silhouettes drift across the canvas every tick and wrap at the edges;
//! the overlay, spotlight and vignette numbers are derived from panic.
//! Nothing in here feeds back into physics.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Tuning;
use crate::lerp;

/// Margin past the canvas edge before a shadow wraps to the other side
const WRAP_MARGIN: f32 = 100.0;

/// A drifting background silhouette
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shadow {
    pub pos: Vec2,
    pub radius: f32,
    /// Constant horizontal drift per tick
    pub drift_vx: f32,
    /// Phase offset into the shared breathing oscillation
    pub phase: f32,
}

/// Scatter `count` shadows over the canvas from the session RNG
pub fn spawn_shadows(rng: &mut Pcg32, count: usize, width: f32, height: f32) -> Vec<Shadow> {
    (0..count)
        .map(|_| {
            let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
            Shadow {
                pos: Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
                radius: rng.random_range(30.0..90.0),
                drift_vx: rng.random_range(0.2..0.8) * sign,
                phase: rng.random_range(0.0..1000.0),
            }
        })
        .collect()
}

/// Drift every shadow one tick, wrapping around the canvas edges
pub fn drift(shadows: &mut [Shadow], width: f32) {
    for shadow in shadows.iter_mut() {
        shadow.pos.x += shadow.drift_vx;
        if shadow.pos.x < -WRAP_MARGIN {
            shadow.pos.x = width + WRAP_MARGIN;
        } else if shadow.pos.x > width + WRAP_MARGIN {
            shadow.pos.x = -WRAP_MARGIN;
        }
    }
}

/// Breathing radius of a shadow at the given tick
pub fn breathing_radius(shadow: &Shadow, tick: u64) -> f32 {
    shadow.radius + (tick as f32 * 0.02 + shadow.phase).sin() * 8.0
}

/// Alpha of a shadow silhouette, 0-255 scale; darker when scared
pub fn shadow_alpha(panic: f32) -> f32 {
    30.0 + 120.0 * panic
}

/// Alpha of the full-canvas darkness overlay, 0-255 scale
pub fn darkness_alpha(panic: f32) -> f32 {
    170.0 * (0.35 + 0.65 * panic)
}

/// Radius of the spotlight hole cut around the blob; shrinks when scared
pub fn spotlight_radius(tuning: &Tuning, panic: f32) -> f32 {
    lerp(tuning.spotlight_calm, tuning.spotlight_panic, panic)
}

/// Alpha of the extra vignette layered over the darkness, 0-255 scale
pub fn vignette_alpha(panic: f32) -> f32 {
    60.0 * panic
}
