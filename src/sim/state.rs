//! Session state and core simulation types
//!
//! Everything mutable lives on [`SimState`]; there are no ambient globals,
//! so independent sessions can run side by side and tests can drive one
//! deterministically from a seed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ambience::{self, Shadow};
use super::noise::ValueNoise;
use crate::config::{ConfigError, LightSource, Platform, Tuning, WorldConfig};
use crate::consts::SHADOW_COUNT;

/// The playable character: a soft blob with a rigid square collision proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    /// Center of mass
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius. The drawn silhouette wobbles around this value
    /// but never feeds back into collision.
    pub radius: f32,
    /// Resting on top of a platform this tick; re-derived every vertical pass
    pub on_ground: bool,
    /// Breathing animation phase, advanced by `breath_speed` each tick
    pub breath_t: f32,
    pub breath_speed: f32,
    pub wobble_amp: f32,
    pub wobble_freq: f32,
}

impl Blob {
    /// Spawn resting just above the floor line at the given x
    pub fn spawn(x: f32, floor_y: f32, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(x, floor_y - tuning.blob_radius - 1.0),
            vel: Vec2::ZERO,
            radius: tuning.blob_radius,
            on_ground: false,
            breath_t: 0.0,
            breath_speed: tuning.breath_speed_calm,
            wobble_amp: tuning.wobble_amp_calm,
            wobble_freq: tuning.wobble_freq_calm,
        }
    }
}

/// Static level geometry and canvas bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Top edge of the floor band
    pub floor_y: f32,
    pub platforms: Vec<Platform>,
    pub lights: Vec<LightSource>,
}

/// One independent simulation session
///
/// Two sessions built from the same config and seed, fed the same inputs,
/// stay bit-identical tick for tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub world: World,
    pub tuning: Tuning,
    pub blob: Blob,
    /// Fear meter, 0 calm to 1 terrified
    pub panic: f32,
    pub shadows: Vec<Shadow>,
    pub(crate) noise: ValueNoise,
}

impl SimState {
    /// Validate the config and build a session from it
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let floor_y = config.floor_y();
        let mut rng = Pcg32::seed_from_u64(seed);
        let shadows =
            ambience::spawn_shadows(&mut rng, SHADOW_COUNT, config.canvas_w, config.canvas_h);
        let blob = Blob::spawn(config.spawn_x, floor_y, &config.tuning);

        log::info!(
            "session up: seed={seed}, {} platforms, {} lights",
            config.platforms.len(),
            config.lights.len()
        );

        Ok(Self {
            seed,
            time_ticks: 0,
            world: World {
                width: config.canvas_w,
                height: config.canvas_h,
                floor_y,
                platforms: config.platforms,
                lights: config.lights,
            },
            tuning: config.tuning,
            blob,
            panic: 0.0,
            shadows,
            noise: ValueNoise::new(seed),
        })
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            pos: self.blob.pos,
            vel: self.blob.vel,
            on_ground: self.blob.on_ground,
            panic: self.panic,
            breath_t: self.blob.breath_t,
            breath_speed: self.blob.breath_speed,
            wobble_amp: self.blob.wobble_amp,
            wobble_freq: self.blob.wobble_freq,
            spotlight_radius: ambience::spotlight_radius(&self.tuning, self.panic),
            darkness_alpha: ambience::darkness_alpha(self.panic),
            vignette_alpha: ambience::vignette_alpha(self.panic),
            shadow_alpha: ambience::shadow_alpha(self.panic),
            shadows: self
                .shadows
                .iter()
                .map(|s| ShadowSprite {
                    pos: s.pos,
                    radius: ambience::breathing_radius(s, self.time_ticks),
                })
                .collect(),
        }
    }
}

/// A shadow silhouette as the presentation layer should draw it this tick
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShadowSprite {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything the presentation layer draws from, captured once per tick
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub pos: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    pub panic: f32,
    pub breath_t: f32,
    pub breath_speed: f32,
    pub wobble_amp: f32,
    pub wobble_freq: f32,
    pub spotlight_radius: f32,
    /// Alphas on a 0-255 scale
    pub darkness_alpha: f32,
    pub vignette_alpha: f32,
    pub shadow_alpha: f32,
    pub shadows: Vec<ShadowSprite>,
}
