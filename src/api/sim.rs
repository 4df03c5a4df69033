use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::player::Player;
use crate::core::assist::{AssistEngine, AssistParams};
use crate::core::collision::poll_collision;
use crate::core::gravity::step_physics;
use crate::core::navigation::{resolve, NavigationContext};
use crate::core::scene::PlanetSet;
use crate::core::state::{holds, PlayerState, StateParams};

/// Tunables for a simulation run. Distances and speeds in world units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Speed cap applied while the player drifts outside the orbit. Inside,
    /// the smoothing ring owns the velocity and the cap stays out of it.
    pub max_drift_speed: f32,
    pub state: StateParams,
    pub assist: AssistParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_drift_speed: 1000.0,
            state: StateParams::default(),
            assist: AssistParams::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Owns the planet set, the player, and the assist engine, and runs the
/// per-frame control flow. The render and input layers sit outside and
/// talk to this facade.
pub struct Simulation {
    planets: PlanetSet,
    player: Player,
    engine: AssistEngine,
    config: SimConfig,
    context: Option<NavigationContext>,
}

impl Simulation {
    /// The planet set must contain at least one planet with its orbit on;
    /// the resolver re-checks this every tick, since orbits toggle at
    /// runtime.
    ///
    /// # Panics
    ///
    /// Panics when no planet has its orbit on.
    pub fn new(planets: PlanetSet, player: Player, config: SimConfig) -> Self {
        assert!(
            planets.any_orbit_on(),
            "simulation requires at least one planet with its orbit on"
        );
        Self {
            planets,
            player,
            engine: AssistEngine::new(config.assist.clone()),
            config,
            context: None,
        }
    }

    /// Advance one frame:
    /// respawn if the last frame ended in a collision, resolve the
    /// navigation context, clamp drift speed outside the orbit, run the
    /// assist engine, step gravity + integration against the target, then
    /// poll collisions.
    ///
    /// # Panics
    ///
    /// Panics if `dt` is not strictly positive, or if no planet has its
    /// orbit on (level-setup bug).
    pub fn tick(&mut self, dt: f32) {
        assert!(dt > 0.0, "tick requires dt > 0");

        if self.player.is_exploding() {
            self.respawn();
        }

        let ctx = resolve(
            &self.planets,
            &self.player,
            dt,
            self.context.as_ref(),
            &self.config.state,
        );

        self.engine
            .apply(&ctx, &mut self.planets, &mut self.player, &self.config.state, dt);

        if holds(PlayerState::SomewhereOutsideOrbit, &ctx, false, &self.config.state) {
            self.player.clamp_speed(self.config.max_drift_speed, dt);
        }

        step_physics(&mut self.player, &self.planets[ctx.target], dt);

        if poll_collision(&self.player.hit_vertices(dt), &self.planets) {
            self.player.explode();
        }

        self.context = Some(ctx);
    }

    /// Put the player back on the orbit it last stably held: the point on
    /// the previous planet's orbit ring nearest the wreck, at rest.
    fn respawn(&mut self) {
        let Some(ctx) = self.context else {
            // Exploded before the first resolve: nowhere to go back to.
            self.player.respawn_at(self.player.position());
            return;
        };
        let planet = &self.planets[ctx.previous];
        let outward = (self.player.position() - planet.position()).normalize_or_zero();
        let outward = if outward == Vec2::ZERO { Vec2::X } else { outward };
        let spawn = planet.position() + outward * planet.orbit().radius();
        debug!("respawn at {spawn:?} on previous planet {:?}", ctx.previous);
        self.player.respawn_at(spawn);
    }

    /// Input-layer hook for the "switch target" key: light every orbit back
    /// up, then shut off the current target's so the next-nearest active
    /// orbit takes over at the following resolve.
    pub fn switch_target_orbit(&mut self) {
        let Some(ctx) = self.context else { return };
        self.planets.set_all_orbits_on();
        self.planets.toggle_orbit(ctx.target);
    }

    /// The most recent frame's context, if a tick has run.
    pub fn context(&self) -> Option<&NavigationContext> {
        self.context.as_ref()
    }

    /// Whether `state` holds for the player right now. Requires at least
    /// one completed tick.
    pub fn player_is(&self, state: PlayerState) -> bool {
        self.context.as_ref().is_some_and(|ctx| {
            holds(state, ctx, self.player.is_exploding(), &self.config.state)
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn planets(&self) -> &PlanetSet {
        &self.planets
    }

    pub fn planets_mut(&mut self) -> &mut PlanetSet {
        &mut self.planets
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::planet::Planet;
    use crate::core::gravity::G;

    const DT: f32 = 1.0 / 60.0;

    fn orbiting_sim() -> Simulation {
        // Mass chosen so 500 u/s is circular at r = 300: m = v^2 r / G.
        let mut planets = PlanetSet::new();
        planets.spawn(Planet::new(Vec2::ZERO, 500.0 * 500.0 * 300.0 / G, 100.0, 300.0));
        let player = Player::new(Vec2::new(300.0, 0.0), Vec2::new(0.0, 500.0), DT);
        Simulation::new(planets, player, SimConfig::default())
    }

    #[test]
    #[should_panic(expected = "dt > 0")]
    fn zero_dt_tick_panics() {
        orbiting_sim().tick(0.0);
    }

    #[test]
    #[should_panic(expected = "orbit on")]
    fn construction_rejects_all_orbits_off() {
        let mut planets = PlanetSet::new();
        planets.spawn(Planet::new(Vec2::ZERO, 1000.0, 100.0, 300.0).with_orbit_off());
        let player = Player::new(Vec2::new(300.0, 0.0), Vec2::ZERO, DT);
        Simulation::new(planets, player, SimConfig::default());
    }

    #[test]
    fn tick_populates_context() {
        let mut sim = orbiting_sim();
        assert!(sim.context().is_none());
        sim.tick(DT);
        let ctx = sim.context().expect("context after tick");
        assert!(ctx.player_error.abs() < 5.0);
        assert!(sim.player_is(PlayerState::InTargetOrbit));
    }

    #[test]
    fn stable_orbit_survives_many_frames() {
        let mut sim = orbiting_sim();
        for _ in 0..600 {
            sim.tick(DT);
        }
        let ctx = sim.context().unwrap();
        assert!(
            ctx.player_error.abs() < 20.0,
            "drifted off orbit: error = {}",
            ctx.player_error
        );
        assert!(sim.player_is(PlayerState::InStableOrbit));
    }

    #[test]
    fn collision_explodes_then_respawns_on_previous_orbit() {
        let mut planets = PlanetSet::new();
        planets.spawn(Planet::new(Vec2::ZERO, 1000.0, 100.0, 300.0));
        // Heading straight at the planet from just outside its surface.
        let player = Player::new(Vec2::new(150.0, 0.0), Vec2::new(-600.0, 0.0), DT);
        let mut sim = Simulation::new(planets, player, SimConfig::default());

        let mut exploded = false;
        for _ in 0..120 {
            sim.tick(DT);
            if sim.player_is(PlayerState::Exploding) {
                exploded = true;
                break;
            }
        }
        assert!(exploded, "player never hit the planet");

        // Next tick respawns on the orbit ring of the previous planet.
        sim.tick(DT);
        assert!(!sim.player_is(PlayerState::Exploding));
        let radius = sim.player().position().length();
        assert!(
            (radius - 300.0).abs() < 1.0,
            "respawn radius = {radius}"
        );
    }

    #[test]
    fn drift_clamp_applies_only_outside() {
        let mut planets = PlanetSet::new();
        planets.spawn(Planet::new(Vec2::ZERO, 1000.0, 50.0, 300.0));
        // Far outside, well over the cap, pointed away from the planet so
        // it won't collide.
        let player = Player::new(Vec2::new(0.0, 2000.0), Vec2::new(3000.0, 0.0), DT);
        let mut sim = Simulation::new(planets, player, SimConfig::default());
        sim.tick(DT);
        let speed = sim.player().velocity(DT).length();
        assert!(
            speed <= sim.config().max_drift_speed + 1.0,
            "speed = {speed}"
        );
    }

    #[test]
    fn drift_clamp_exempts_player_inside_orbit() {
        let mut planets = PlanetSet::new();
        planets.spawn(Planet::new(Vec2::ZERO, 1000.0, 100.0, 300.0));
        // On the orbit radius, shooting straight out over the cap. The
        // radial gate keeps the assist off, and inside the orbit the clamp
        // must stay out of it too: the speed survives the tick.
        let player = Player::new(Vec2::new(0.0, 300.0), Vec2::new(0.0, 1005.0), DT);
        let mut sim = Simulation::new(planets, player, SimConfig::default());
        sim.tick(DT);
        let speed = sim.player().velocity(DT).length();
        assert!(
            speed > sim.config().max_drift_speed + 1.0,
            "inside-orbit speed was clamped: {speed}"
        );
    }

    #[test]
    fn switch_target_orbit_moves_target() {
        let mut planets = PlanetSet::new();
        let a = planets.spawn(Planet::new(Vec2::ZERO, 1000.0, 50.0, 300.0));
        let b = planets.spawn(Planet::new(Vec2::new(2000.0, 0.0), 1000.0, 50.0, 300.0));
        let player = Player::new(Vec2::new(0.0, 600.0), Vec2::ZERO, DT);
        let mut sim = Simulation::new(planets, player, SimConfig::default());

        sim.tick(DT);
        assert_eq!(sim.context().unwrap().target, a);

        sim.switch_target_orbit();
        assert!(!sim.planets()[a].orbit().is_on());
        assert!(sim.planets()[b].orbit().is_on());

        sim.tick(DT);
        assert_eq!(sim.context().unwrap().target, b);
    }

    #[test]
    fn switch_twice_restores_all_orbits() {
        let mut planets = PlanetSet::new();
        let a = planets.spawn(Planet::new(Vec2::ZERO, 1000.0, 50.0, 300.0));
        planets.spawn(Planet::new(Vec2::new(2000.0, 0.0), 1000.0, 50.0, 300.0));
        let player = Player::new(Vec2::new(0.0, 600.0), Vec2::ZERO, DT);
        let mut sim = Simulation::new(planets, player, SimConfig::default());

        sim.tick(DT);
        sim.switch_target_orbit();
        sim.tick(DT);
        sim.switch_target_orbit();
        // The second switch re-lit A's orbit before toggling B's off.
        assert!(sim.planets()[a].orbit().is_on());
    }

    #[test]
    fn config_from_json_overrides_and_defaults() {
        let config = SimConfig::from_json(
            r#"{"max_drift_speed": 800.0, "assist": {"target_orbital_speed": 650.0}}"#,
        )
        .unwrap();
        assert!((config.max_drift_speed - 800.0).abs() < 1e-6);
        assert!((config.assist.target_orbital_speed - 650.0).abs() < 1e-6);
        assert!((config.state.orbit_error_tolerance - 15.0).abs() < 1e-6);

        assert!(SimConfig::from_json("not json").is_err());
    }
}
