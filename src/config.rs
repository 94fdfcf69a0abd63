//! World layout and feel constants
//!
//! Everything the simulation needs at startup lives here: canvas bounds,
//! platform layout, light pools, and every tuning constant under one named
//! field. A config is validated once when a session is created; the tick
//! loop assumes well-formed numbers after that and has no error paths.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::geom::Aabb;

/// A static platform the blob can stand on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Aabb,
    /// Marks the ground plane. It spans the whole canvas, so the horizontal
    /// collision pass skips it - it must never act as a side wall.
    #[serde(default)]
    pub ground: bool,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Aabb::new(x, y, w, h),
            ground: false,
        }
    }

    pub fn ground(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Aabb::new(x, y, w, h),
            ground: true,
        }
    }
}

/// A circular pool of light; a safe zone the panic meter calms down in
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LightSource {
    pub pos: Vec2,
    pub radius: f32,
}

impl LightSource {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
        }
    }
}

/// Movement and fear tuning
///
/// One named field per constant. All velocities and accelerations are in
/// pixels per tick; the simulation never scales them by elapsed time.
/// Defaults are the shipped feel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // Horizontal movement
    pub accel: f32,
    pub max_run: f32,
    // Vertical
    pub gravity: f32,
    /// Negative is up
    pub jump_impulse: f32,
    // Friction coefficients, multiplied into vx every tick
    pub friction_air: f32,
    pub friction_ground: f32,
    // Fear leaking into physics
    /// Acceleration multiplier at full panic: accel * (1 + boost * panic)
    pub fear_accel_boost: f32,
    /// Effective friction scales toward this floor as panic rises (more slide)
    pub fear_friction_floor: f32,
    /// Speed cap scales toward max_run * factor at full panic
    pub fear_speed_factor: f32,
    /// Panic level above which a grounded blob trembles
    pub tremble_threshold: f32,
    pub tremble_strength: f32,
    /// Noise coordinate advance per tick
    pub tremble_rate: f32,
    // Panic meter
    pub panic_smoothing: f32,
    /// Signed distance to the nearest light edge at or below which the
    /// darkness target is 0
    pub panic_dist_calm: f32,
    /// Distance at or above which the darkness target is 1
    pub panic_dist_dark: f32,
    // Collision
    pub blob_radius: f32,
    // Cosmetic extremes (calm -> panicked); consumed by presentation only
    pub breath_speed_calm: f32,
    pub breath_speed_panic: f32,
    pub wobble_amp_calm: f32,
    pub wobble_amp_panic: f32,
    pub wobble_freq_calm: f32,
    pub wobble_freq_panic: f32,
    pub spotlight_calm: f32,
    pub spotlight_panic: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            accel: 0.55,
            max_run: 4.0,
            gravity: 0.65,
            jump_impulse: -11.0,
            friction_air: 0.995,
            friction_ground: 0.88,
            fear_accel_boost: 0.6,
            fear_friction_floor: 0.94,
            fear_speed_factor: 0.82,
            tremble_threshold: 0.15,
            tremble_strength: 0.35,
            tremble_rate: 0.2,
            panic_smoothing: 0.04,
            panic_dist_calm: -60.0,
            panic_dist_dark: 220.0,
            blob_radius: BLOB_RADIUS,
            breath_speed_calm: 0.01,
            breath_speed_panic: 0.05,
            wobble_amp_calm: 7.0,
            wobble_amp_panic: 14.0,
            wobble_freq_calm: 0.9,
            wobble_freq_panic: 1.6,
            spotlight_calm: 160.0,
            spotlight_panic: 90.0,
        }
    }
}

/// Errors reported by [`WorldConfig::validate`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas must have positive finite dimensions, got {w}x{h}")]
    Canvas { w: f32, h: f32 },
    #[error("floor height {floor_height} does not fit inside canvas height {canvas_h}")]
    Floor { floor_height: f32, canvas_h: f32 },
    #[error("platform {index} must have positive finite extent, got {w}x{h}")]
    Platform { index: usize, w: f32, h: f32 },
    #[error("light {index} must have a positive finite radius, got {radius}")]
    Light { index: usize, radius: f32 },
    #[error("tuning field `{field}` is out of range: {value}")]
    Tuning { field: &'static str, value: f32 },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Full startup configuration for one simulation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub canvas_w: f32,
    pub canvas_h: f32,
    /// Height of the floor band, measured up from the bottom canvas edge
    pub floor_height: f32,
    /// Blob spawn x; spawn y is derived from the floor line
    pub spawn_x: f32,
    pub platforms: Vec<Platform>,
    pub lights: Vec<LightSource>,
    pub tuning: Tuning,
}

impl Default for WorldConfig {
    /// The shipped level: a full-width floor, four steps, three light pools
    fn default() -> Self {
        let floor_y = CANVAS_H - FLOOR_HEIGHT;
        Self {
            canvas_w: CANVAS_W,
            canvas_h: CANVAS_H,
            floor_height: FLOOR_HEIGHT,
            spawn_x: 80.0,
            platforms: vec![
                Platform::ground(0.0, floor_y, CANVAS_W, FLOOR_HEIGHT),
                Platform::new(120.0, floor_y - 70.0, 120.0, 12.0), // low step
                Platform::new(300.0, floor_y - 120.0, 90.0, 12.0), // mid step
                Platform::new(440.0, floor_y - 180.0, 130.0, 12.0), // high step
                Platform::new(520.0, floor_y - 70.0, 90.0, 12.0),  // return ramp
            ],
            lights: vec![
                LightSource::new(80.0, floor_y - 40.0, 120.0),
                LightSource::new(320.0, floor_y - 140.0, 110.0),
                LightSource::new(560.0, floor_y - 80.0, 120.0),
            ],
            tuning: Tuning::default(),
        }
    }
}

impl WorldConfig {
    /// Top edge of the floor band
    pub fn floor_y(&self) -> f32 {
        self.canvas_h - self.floor_height
    }

    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed geometry and out-of-range tuning before a session
    /// starts. An empty light list is allowed: the panic target then
    /// defaults to calm.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = |v: f32| v.is_finite();

        if !(finite(self.canvas_w) && finite(self.canvas_h))
            || self.canvas_w <= 0.0
            || self.canvas_h <= 0.0
        {
            return Err(ConfigError::Canvas {
                w: self.canvas_w,
                h: self.canvas_h,
            });
        }
        if !finite(self.floor_height) || self.floor_height < 0.0 || self.floor_height >= self.canvas_h
        {
            return Err(ConfigError::Floor {
                floor_height: self.floor_height,
                canvas_h: self.canvas_h,
            });
        }
        for (index, p) in self.platforms.iter().enumerate() {
            let r = &p.rect;
            if !(finite(r.x) && finite(r.y) && finite(r.w) && finite(r.h)) || r.w <= 0.0 || r.h <= 0.0
            {
                return Err(ConfigError::Platform {
                    index,
                    w: r.w,
                    h: r.h,
                });
            }
        }
        for (index, l) in self.lights.iter().enumerate() {
            if !(finite(l.pos.x) && finite(l.pos.y) && finite(l.radius)) || l.radius <= 0.0 {
                return Err(ConfigError::Light {
                    index,
                    radius: l.radius,
                });
            }
        }

        let t = &self.tuning;
        let positive = [
            ("blob_radius", t.blob_radius),
            ("max_run", t.max_run),
            ("gravity", t.gravity),
        ];
        for (field, value) in positive {
            if !finite(value) || value <= 0.0 {
                return Err(ConfigError::Tuning { field, value });
            }
        }
        let unit = [
            ("friction_air", t.friction_air),
            ("friction_ground", t.friction_ground),
            ("panic_smoothing", t.panic_smoothing),
        ];
        for (field, value) in unit {
            if !finite(value) || value <= 0.0 || value > 1.0 {
                return Err(ConfigError::Tuning { field, value });
            }
        }
        if !finite(t.jump_impulse) || t.jump_impulse >= 0.0 {
            return Err(ConfigError::Tuning {
                field: "jump_impulse",
                value: t.jump_impulse,
            });
        }
        if !(finite(t.panic_dist_calm) && finite(t.panic_dist_dark))
            || t.panic_dist_calm >= t.panic_dist_dark
        {
            return Err(ConfigError::Tuning {
                field: "panic_dist_calm",
                value: t.panic_dist_calm,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        WorldConfig::default().validate().unwrap();
    }

    #[test]
    fn test_rejects_bad_canvas() {
        let mut config = WorldConfig::default();
        config.canvas_w = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Canvas { .. })
        ));

        let mut config = WorldConfig::default();
        config.canvas_h = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Canvas { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_platform() {
        let mut config = WorldConfig::default();
        config.platforms.push(Platform::new(10.0, 10.0, -5.0, 12.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Platform { index: 5, .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_light() {
        let mut config = WorldConfig::default();
        config.lights[1].radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Light { index: 1, .. })
        ));
    }

    #[test]
    fn test_empty_lights_allowed() {
        let mut config = WorldConfig::default();
        config.lights.clear();
        config.validate().unwrap();
    }

    #[test]
    fn test_rejects_upward_friction() {
        let mut config = WorldConfig::default();
        config.tuning.friction_ground = 1.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Tuning {
                field: "friction_ground",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let mut config = WorldConfig::default();
        config.tuning.jump_impulse = 3.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Tuning {
                field: "jump_impulse",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_inverted_panic_window() {
        let mut config = WorldConfig::default();
        config.tuning.panic_dist_calm = 300.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Tuning {
                field: "panic_dist_calm",
                ..
            })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = WorldConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = WorldConfig::from_json(&json).unwrap();
        assert_eq!(parsed.platforms.len(), config.platforms.len());
        assert_eq!(parsed.lights.len(), config.lights.len());
        assert!((parsed.tuning.gravity - config.tuning.gravity).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let mut config = WorldConfig::default();
        config.tuning.max_run = -1.0;
        let json = serde_json::to_string(&config).unwrap();
        assert!(WorldConfig::from_json(&json).is_err());
    }
}
