use serde::{Deserialize, Serialize};

use crate::core::navigation::NavigationContext;

/// Discrete player states, derived on demand from the navigation context.
///
/// These are predicates, not a partition: several can hold at once (a player
/// in the target orbit is also somewhere inside it), and callers query the
/// one they care about instead of matching a stored tag. Nothing caches the
/// result, so the answer can never drift from the numbers it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    FarOutsideOrbit,
    NearOutsideOrbit,
    SomewhereOutsideOrbit,
    SomewhereInsideOrbit,
    InsideSmoothingRing,
    InTargetOrbit,
    InStableOrbit,
    Exploding,
}

/// Thresholds for the classifier. Distances and speeds in world units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateParams {
    /// Inner extent of the smoothing ring, below the orbit radius.
    pub smoothing_ring_inner: f32,
    /// Outer extent of the smoothing ring, above the orbit radius.
    pub smoothing_ring_outer: f32,
    /// Multiplier on the outer ring extent past which the player counts as
    /// far outside the orbit.
    pub far_distance_factor: f32,
    /// Error band (± around the orbit radius) that counts as "in orbit".
    pub orbit_error_tolerance: f32,
    /// Radial speed below which an inside-orbit player counts as stable.
    /// Shared with the assist engine's hard gate.
    pub radial_smoothing_threshold: f32,
}

/// Total smoothing ring size, split inner : outer.
const SMOOTHING_RING_SIZE: f32 = 125.0;
const SMOOTHING_RING_RATIO: (f32, f32) = (1.0, 100.0);

impl Default for StateParams {
    fn default() -> Self {
        let ratio_sum = SMOOTHING_RING_RATIO.0 + SMOOTHING_RING_RATIO.1;
        Self {
            smoothing_ring_inner: SMOOTHING_RING_SIZE * SMOOTHING_RING_RATIO.0 / ratio_sum,
            smoothing_ring_outer: SMOOTHING_RING_SIZE * SMOOTHING_RING_RATIO.1 / ratio_sum,
            far_distance_factor: 1.5,
            orbit_error_tolerance: 15.0,
            radial_smoothing_threshold: 400.0,
        }
    }
}

/// Whether `state` holds for the given context. Pure; safe to call any
/// number of times per frame.
pub fn holds(
    state: PlayerState,
    ctx: &NavigationContext,
    exploding: bool,
    params: &StateParams,
) -> bool {
    let error = ctx.player_error;
    match state {
        PlayerState::Exploding => exploding,
        PlayerState::SomewhereInsideOrbit => error < params.smoothing_ring_outer,
        PlayerState::SomewhereOutsideOrbit => {
            !holds(PlayerState::SomewhereInsideOrbit, ctx, exploding, params)
        }
        PlayerState::FarOutsideOrbit => {
            error > params.far_distance_factor * params.smoothing_ring_outer
        }
        PlayerState::NearOutsideOrbit => {
            holds(PlayerState::SomewhereOutsideOrbit, ctx, exploding, params)
                && !holds(PlayerState::FarOutsideOrbit, ctx, exploding, params)
        }
        PlayerState::InsideSmoothingRing => {
            error > -params.smoothing_ring_inner
                && holds(PlayerState::SomewhereInsideOrbit, ctx, exploding, params)
        }
        PlayerState::InTargetOrbit => error.abs() <= params.orbit_error_tolerance,
        PlayerState::InStableOrbit => {
            holds(PlayerState::SomewhereInsideOrbit, ctx, exploding, params)
                && ctx.player_radial_v.length() < params.radial_smoothing_threshold
        }
    }
}
