use glam::Vec2;

use crate::components::player::Player;
use crate::core::scene::{PlanetId, PlanetSet};
use crate::core::state::StateParams;

/// Velocity components below this magnitude are floating-point jitter and
/// snap to exact zero, so the assist never oscillates around a dead-still
/// axis. Units per second.
pub const VELOCITY_NOISE_FLOOR: f32 = 1.0;

/// Per-frame navigation snapshot.
///
/// Every handle in here is guaranteed to resolve: [`resolve`] is the only
/// constructor and refuses to build a context without a live target, so
/// downstream code indexes the planet set without re-checking. The context
/// is never mutated; each frame replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationContext {
    /// Nearest planet whose orbit is on, i.e. the one pulling the player in.
    pub target: PlanetId,
    /// Nearest planet regardless of orbit state.
    pub nearest: PlanetId,
    /// The planet the player last stably orbited; respawn lands here.
    pub previous: PlanetId,
    /// Signed distance to the target orbit: positive outside, negative inside.
    pub player_error: f32,
    /// Player velocity along the target-center-to-player axis.
    pub player_radial_v: Vec2,
    /// Player velocity perpendicular to that axis.
    pub player_tangent_v: Vec2,
}

/// Projection of `v` onto `axis`; zero vector when the axis is degenerate.
/// Never NaN.
pub fn project_onto(v: Vec2, axis: Vec2) -> Vec2 {
    let len_sq = axis.length_squared();
    if len_sq <= f32::EPSILON {
        return Vec2::ZERO;
    }
    axis * (v.dot(axis) / len_sq)
}

/// Build the navigation context for this frame.
///
/// Scans every planet once, tracking two independent minima: the nearest
/// planet outright, and the nearest whose orbit is on. Exact-distance ties
/// keep the planet encountered first (stable but unspecified order).
///
/// `previous` threads the prior frame's context through so the respawn
/// planet survives target changes; pass `None` on the very first frame.
///
/// # Panics
///
/// Panics when the set is empty or no planet has its orbit on. That is a
/// level-setup bug, not a runtime condition: a silent fallback would
/// corrupt every downstream computation this frame.
pub fn resolve(
    planets: &PlanetSet,
    player: &Player,
    dt: f32,
    previous: Option<&NavigationContext>,
    params: &StateParams,
) -> NavigationContext {
    let mut nearest: Option<(PlanetId, f32)> = None;
    let mut target: Option<(PlanetId, f32)> = None;

    for (id, planet) in planets.iter() {
        let distance = player.distance_to(planet);
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((id, distance));
        }
        if planet.orbit().is_on() && target.map_or(true, |(_, best)| distance < best) {
            target = Some((id, distance));
        }
    }

    let (nearest, _) = nearest.expect("navigation: planet set is empty");
    let (target, target_distance) =
        target.expect("navigation: no planet has its orbit on");

    let target_planet = &planets[target];
    let player_error = target_distance - target_planet.orbit().radius();

    let (player_radial_v, player_tangent_v) = decompose_velocity(
        player.velocity(dt),
        player.position() - target_planet.position(),
    );

    NavigationContext {
        target,
        nearest,
        previous: previous_planet(target, previous, params),
        player_error,
        player_radial_v,
        player_tangent_v,
    }
}

/// Carry the respawn planet across frames.
///
/// First frame: the target bootstraps it. After that it only advances when
/// the player leaves an orbit it had actually settled into; a flyby past
/// some other planet must not move the respawn point.
fn previous_planet(
    target: PlanetId,
    previous: Option<&NavigationContext>,
    params: &StateParams,
) -> PlanetId {
    let Some(prev) = previous else {
        return target;
    };
    let was_in_orbit = prev.player_error.abs() <= params.orbit_error_tolerance;
    if prev.target != target && was_in_orbit {
        return prev.target;
    }
    prev.previous
}

/// Split `velocity` into components along and perpendicular to `outward`
/// (the target-center-to-player vector). Each component snaps to zero below
/// [`VELOCITY_NOISE_FLOOR`].
fn decompose_velocity(velocity: Vec2, outward: Vec2) -> (Vec2, Vec2) {
    let radial = project_onto(velocity, outward.normalize_or_zero());
    let tangent = velocity - radial;
    (snap_noise(radial), snap_noise(tangent))
}

fn snap_noise(v: Vec2) -> Vec2 {
    if v.length() < VELOCITY_NOISE_FLOOR {
        Vec2::ZERO
    } else {
        v
    }
}
