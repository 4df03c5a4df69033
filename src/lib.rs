pub mod api;
pub mod components;
pub mod core;

// Re-export key types at crate root for convenience
pub use api::sim::{SimConfig, Simulation};
pub use components::planet::{Orbit, Planet};
pub use components::player::Player;
pub use core::assist::{AssistEngine, AssistParams};
pub use core::collision::{intersects, poll_collision};
pub use core::gravity::{gravity_force, step_physics, G, MIN_FORCE_DISTANCE};
pub use core::navigation::{project_onto, resolve, NavigationContext, VELOCITY_NOISE_FLOOR};
pub use core::scene::{PlanetId, PlanetSet};
pub use core::state::{holds, PlayerState, StateParams};
pub use core::time::FixedTimestep;
