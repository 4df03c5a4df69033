use glam::Vec2;

use crate::components::planet::Planet;
use crate::components::player::Player;

/// Gravitational constant shared by the force model, the assist engine's
/// mass formulas, and level generation.
pub const G: f32 = 10.0;

/// At or below this separation the force is zero: the inverse-square law
/// blows up as the player crosses a planet's center.
pub const MIN_FORCE_DISTANCE: f32 = 1.0;

/// Gravitational pull of `planet` on a unit-mass body at `position`.
///
/// Zero when the planet's orbit is off (a dark planet exerts no pull) and
/// inside the singularity clamp. Degenerate geometry recovers locally; it
/// is never an error.
pub fn gravity_force(planet: &Planet, position: Vec2) -> Vec2 {
    if !planet.orbit().is_on() {
        return Vec2::ZERO;
    }

    let offset = position - planet.position();
    let distance = offset.length();
    if distance <= MIN_FORCE_DISTANCE {
        return Vec2::ZERO;
    }

    let direction = -offset / distance;
    direction * (G * planet.mass() / (distance * distance))
}

/// One physics step against the active planet: accumulate its pull, then
/// advance the Verlet integrator. Runs after the assist engine so the force
/// reads the already-adjusted mass.
pub fn step_physics(player: &mut Player, planet: &Planet, dt: f32) {
    let force = gravity_force(planet, player.position());
    player.accelerate(force);
    player.integrate(dt);
}
