//! Character controller
//!
//! Turns held direction keys and the jump edge event into velocity changes
//! before physics integration. Panic leaks into every constant here:
//! harder acceleration, an involuntary tremble, less friction, a lower
//! speed cap. It also retunes the cosmetic breathing/wobble parameters,
//! which feed presentation and never physics.

use crate::config::Tuning;
use crate::lerp;

use super::noise::ValueNoise;
use super::state::Blob;
use super::tick::TickInput;

/// Apply one tick of input and fear to the blob's velocity
pub fn apply(
    blob: &mut Blob,
    input: &TickInput,
    panic: f32,
    noise: &ValueNoise,
    tick: u64,
    tuning: &Tuning,
) {
    // Skittish acceleration: fear makes inputs feel jerky
    let boost = 1.0 + tuning.fear_accel_boost * panic;
    blob.vel.x += tuning.accel * input.direction() * boost;

    // Involuntary tremble while standing scared
    if blob.on_ground && panic > tuning.tremble_threshold {
        let n = noise.sample(tick as f32 * tuning.tremble_rate);
        blob.vel.x += (n - 0.5) * tuning.tremble_strength * panic;
    }

    // Friction, with fear dragging the coefficient toward more slide
    let base = if blob.on_ground {
        tuning.friction_ground
    } else {
        tuning.friction_air
    };
    blob.vel.x *= base * lerp(1.0, tuning.fear_friction_floor, panic);

    // Speed cap shrinks as panic rises
    let max_run = lerp(tuning.max_run, tuning.max_run * tuning.fear_speed_factor, panic);
    blob.vel.x = blob.vel.x.clamp(-max_run, max_run);

    // Jump: edge event, grounded only
    if input.jump && blob.on_ground {
        blob.vel.y = tuning.jump_impulse;
        blob.on_ground = false;
        log::debug!("jump at x={:.1}", blob.pos.x);
    }

    // Cosmetic retune: breathing and wobble track panic
    blob.breath_speed = lerp(tuning.breath_speed_calm, tuning.breath_speed_panic, panic);
    blob.wobble_amp = lerp(tuning.wobble_amp_calm, tuning.wobble_amp_panic, panic);
    blob.wobble_freq = lerp(tuning.wobble_freq_calm, tuning.wobble_freq_panic, panic);
    blob.breath_t += blob.breath_speed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn grounded_blob() -> Blob {
        let tuning = Tuning::default();
        let mut blob = Blob::spawn(80.0, 324.0, &tuning);
        blob.on_ground = true;
        blob.pos = Vec2::new(80.0, 298.0);
        blob
    }

    #[test]
    fn test_direction_cancels_when_both_held() {
        let input = TickInput {
            move_left: true,
            move_right: true,
            jump: false,
        };
        assert_eq!(input.direction(), 0.0);
        assert_eq!(TickInput::default().direction(), 0.0);
    }

    #[test]
    fn test_acceleration_scales_with_panic() {
        let tuning = Tuning::default();
        let noise = ValueNoise::new(0);
        let input = TickInput {
            move_right: true,
            ..Default::default()
        };

        let mut calm = grounded_blob();
        apply(&mut calm, &input, 0.0, &noise, 1, &tuning);

        // Full panic boosts acceleration but the tremble also kicks in, so
        // compare against an airborne blob where the tremble is gated off.
        let mut scared = grounded_blob();
        scared.on_ground = false;
        apply(&mut scared, &input, 1.0, &noise, 1, &tuning);

        assert!(calm.vel.x > 0.0);
        assert!(scared.vel.x > calm.vel.x);
    }

    #[test]
    fn test_grounded_jump_sets_impulse_and_lifts_off() {
        let tuning = Tuning::default();
        let noise = ValueNoise::new(0);
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        let mut blob = grounded_blob();
        apply(&mut blob, &input, 0.0, &noise, 1, &tuning);
        assert_eq!(blob.vel.y, tuning.jump_impulse);
        assert!(!blob.on_ground);
    }

    #[test]
    fn test_airborne_jump_is_a_no_op() {
        let tuning = Tuning::default();
        let noise = ValueNoise::new(0);
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        let mut blob = grounded_blob();
        blob.on_ground = false;
        blob.vel.y = -4.0;
        apply(&mut blob, &input, 0.0, &noise, 1, &tuning);
        assert_eq!(blob.vel.y, -4.0);
    }

    #[test]
    fn test_speed_cap_tightens_with_panic() {
        let tuning = Tuning::default();
        let noise = ValueNoise::new(0);
        let input = TickInput {
            move_right: true,
            ..Default::default()
        };

        let mut blob = grounded_blob();
        blob.vel.x = 100.0;
        apply(&mut blob, &input, 0.0, &noise, 1, &tuning);
        assert!((blob.vel.x - tuning.max_run).abs() < 1e-5);

        let mut blob = grounded_blob();
        blob.on_ground = false;
        blob.vel.x = 100.0;
        apply(&mut blob, &input, 1.0, &noise, 1, &tuning);
        let panicked_cap = tuning.max_run * tuning.fear_speed_factor;
        assert!((blob.vel.x - panicked_cap).abs() < 1e-5);
    }

    #[test]
    fn test_tremble_requires_ground_and_panic() {
        let tuning = Tuning::default();
        let noise = ValueNoise::new(42);
        let input = TickInput::default();

        // Grounded and scared: the blob shakes with no input at all
        let mut blob = grounded_blob();
        apply(&mut blob, &input, 0.5, &noise, 3, &tuning);
        assert!(blob.vel.x.abs() > 0.0);

        // Below the panic threshold: perfectly still
        let mut blob = grounded_blob();
        apply(&mut blob, &input, 0.1, &noise, 3, &tuning);
        assert_eq!(blob.vel.x, 0.0);

        // Airborne: no tremble however scared
        let mut blob = grounded_blob();
        blob.on_ground = false;
        apply(&mut blob, &input, 0.9, &noise, 3, &tuning);
        assert_eq!(blob.vel.x, 0.0);
    }

    #[test]
    fn test_cosmetics_track_panic() {
        let tuning = Tuning::default();
        let noise = ValueNoise::new(0);
        let input = TickInput::default();

        let mut blob = grounded_blob();
        blob.on_ground = false;
        apply(&mut blob, &input, 1.0, &noise, 1, &tuning);
        assert!((blob.breath_speed - tuning.breath_speed_panic).abs() < 1e-5);
        assert!((blob.wobble_amp - tuning.wobble_amp_panic).abs() < 1e-5);
        assert!((blob.wobble_freq - tuning.wobble_freq_panic).abs() < 1e-5);
        assert!(blob.breath_t > 0.0);
    }
}
