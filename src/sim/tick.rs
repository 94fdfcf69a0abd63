//! Fixed timestep simulation tick
//!
//! One call advances the whole session by one tick, in a fixed order:
//! panic first (from the position the previous tick produced), then the
//! controller, then physics, then ambience. Panic therefore lags position
//! by one tick; that lag is part of the tuned feel. Do not reorder.

use super::state::SimState;
use super::{ambience, controller, fear, physics};

/// Input commands for a single tick
///
/// `move_left`/`move_right` mirror held keys and are read fresh every
/// tick. `jump` is an edge event meaning "pressed since the last tick";
/// the host must clear it once the tick has run, or the blob will jump
/// again the moment it next lands.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl TickInput {
    /// Held direction: -1 left, 1 right, 0 for neither or both
    pub fn direction(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput) {
    state.time_ticks += 1;

    fear::update(
        &mut state.panic,
        state.blob.pos,
        &state.world.lights,
        &state.tuning,
    );

    controller::apply(
        &mut state.blob,
        input,
        state.panic,
        &state.noise,
        state.time_ticks,
        &state.tuning,
    );

    physics::step(&mut state.blob, &state.world, &state.tuning);

    ambience::drift(&mut state.shadows, state.world.width);
}
