//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick, no delta-time scaling)
//! - Seeded RNG and seeded noise only
//! - No rendering or platform dependencies
//!
//! Tick order is fixed: panic, controller, physics, ambience. See [`tick`].

pub mod ambience;
pub mod controller;
pub mod fear;
pub mod geom;
pub mod noise;
pub mod physics;
pub mod state;
pub mod tick;

pub use ambience::Shadow;
pub use geom::Aabb;
pub use noise::ValueNoise;
pub use state::{Blob, RenderSnapshot, ShadowSprite, SimState, World};
pub use tick::{TickInput, tick};
