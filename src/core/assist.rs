use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::components::player::Player;
use crate::core::gravity::G;
use crate::core::navigation::NavigationContext;
use crate::core::scene::PlanetSet;
use crate::core::state::{holds, PlayerState, StateParams};

/// Tunables for the assist engine. Correction factors are per-second
/// decay/growth rates, applied as `factor.powf(dt)` so convergence speed
/// does not depend on the frame rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistParams {
    /// Extra pull while approaching from far outside: the boosted mass is
    /// `(1 + power)` times the mass a circular orbit would need at the
    /// player's current tangential speed.
    pub planet_mass_boost_power: f32,
    /// Per-second decay of the radial velocity component inside the ring.
    pub radial_smoothing_factor: f32,
    /// Per-second growth applied to a too-slow tangential component.
    pub tangent_boost_factor: f32,
    /// Per-second decay applied to a too-fast tangential component.
    pub tangent_smoothing_factor: f32,
    /// Tangential speed error below which no correction applies.
    pub tangent_correction_tolerance: f32,
    /// The tangential speed the correction steers toward.
    pub target_orbital_speed: f32,
}

impl Default for AssistParams {
    fn default() -> Self {
        Self {
            planet_mass_boost_power: 0.5,
            radial_smoothing_factor: 0.025,
            tangent_boost_factor: 1.35,
            tangent_smoothing_factor: 0.89,
            tangent_correction_tolerance: 10.0,
            target_orbital_speed: 500.0,
        }
    }
}

/// Applies corrective impulses that settle the player into the target
/// orbit: mass boosting on approach, then (inside the smoothing ring and
/// below the radial gate) radial damping, tangential correction, and a
/// mass adjustment that makes the required circular-orbit mass track the
/// player's actual radius and speed.
pub struct AssistEngine {
    params: AssistParams,
}

impl AssistEngine {
    pub fn new(params: AssistParams) -> Self {
        info!(
            "assist engine: radial decay {}/s, tangent boost {}/s, tangent smoothing {}/s, \
             target orbital speed {} u/s, mass boost power {}",
            params.radial_smoothing_factor,
            params.tangent_boost_factor,
            params.tangent_smoothing_factor,
            params.target_orbital_speed,
            params.planet_mass_boost_power,
        );
        Self { params }
    }

    pub fn params(&self) -> &AssistParams {
        &self.params
    }

    /// One frame of assist, invoked after [`resolve`] and before the
    /// physics step. May mutate the target planet's mass and overwrite the
    /// player's velocity (which discards any pending acceleration).
    ///
    /// [`resolve`]: crate::core::navigation::resolve
    pub fn apply(
        &self,
        ctx: &NavigationContext,
        planets: &mut PlanetSet,
        player: &mut Player,
        state_params: &StateParams,
        dt: f32,
    ) {
        let exploding = player.is_exploding();
        let orbit_radius = planets[ctx.target].orbit().radius();

        let mut v_radial = ctx.player_radial_v;
        let mut v_tangent = ctx.player_tangent_v;

        // Mass boosting engages while the player closes in from far
        // outside: overshooting the circular-orbit mass for the player's
        // actual tangential speed keeps the orbit reachable even off the
        // design speed.
        if holds(PlayerState::FarOutsideOrbit, ctx, exploding, state_params) {
            let boosted = (1.0 + self.params.planet_mass_boost_power)
                * v_tangent.length_squared()
                * orbit_radius
                / G;
            trace!(
                "mass boost: {} -> {boosted}",
                planets[ctx.target].mass()
            );
            planets[ctx.target].set_mass(boosted);
        }

        // Everything below only runs inside the smoothing ring.
        if !holds(PlayerState::InsideSmoothingRing, ctx, exploding, state_params) {
            return;
        }

        // Hard gate: a steep approach gets no help this frame.
        if v_radial.length() > state_params.radial_smoothing_threshold {
            debug!(
                "assist skipped: radial speed {} above threshold {}",
                v_radial.length(),
                state_params.radial_smoothing_threshold
            );
            return;
        }

        // Radial smoothing: exponential decay toward zero radial velocity.
        v_radial *= self.params.radial_smoothing_factor.powf(dt);

        // Tangential correction: steer the tangential speed toward the
        // target orbital speed, boosting or damping as needed.
        let tangent_error = self.params.target_orbital_speed - v_tangent.length();
        if tangent_error.abs() > self.params.tangent_correction_tolerance {
            let factor = if tangent_error > 0.0 {
                self.params.tangent_boost_factor
            } else {
                self.params.tangent_smoothing_factor
            };
            trace!(
                "tangent correction ({factor}/s): {} -> target {}",
                v_tangent.length(),
                self.params.target_orbital_speed
            );
            v_tangent *= factor.powf(dt);
        }

        // Mass adjustment: the circular-orbit mass for the corrected
        // tangential speed at the player's actual radius. Nudges a
        // near-circular but off-radius orbit toward circular instead of
        // yanking the player onto the design radius.
        let adjusted =
            v_tangent.length_squared() * (orbit_radius + ctx.player_error) / G;
        planets[ctx.target].set_mass(adjusted);

        player.set_velocity(v_radial + v_tangent, dt);
    }
}

impl Default for AssistEngine {
    fn default() -> Self {
        Self::new(AssistParams::default())
    }
}
