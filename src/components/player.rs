use glam::Vec2;

use crate::components::planet::Planet;

/// The player's triangular hull in local space: nose at -Y, base at +Y.
/// Used for collision only; rendering is the game layer's problem.
const HULL: [Vec2; 3] = [
    Vec2::new(0.0, -20.0),
    Vec2::new(10.0, 10.0),
    Vec2::new(-10.0, 10.0),
];

/// The player-controlled body, advanced by Verlet integration.
///
/// Velocity is never stored: it is always derived as
/// `(position - previous_position) / dt`, and writing it back-solves
/// `previous_position` exactly, so a set-then-read round-trips.
///
/// Two coupled contracts, relied on by the assist engine:
/// - [`set_velocity`](Player::set_velocity) discards any pending
///   acceleration.
/// - [`set_position`](Player::set_position) zeroes the velocity.
#[derive(Debug, Clone)]
pub struct Player {
    position: Vec2,
    previous_position: Vec2,
    acceleration: Vec2,
    exploding: bool,
}

impl Player {
    pub fn new(position: Vec2, initial_velocity: Vec2, dt: f32) -> Self {
        Self {
            position,
            // Verlet needs a previous position; back-solve it so the first
            // velocity read returns the initial velocity.
            previous_position: position - initial_velocity * dt,
            acceleration: Vec2::ZERO,
            exploding: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self, dt: f32) -> Vec2 {
        (self.position - self.previous_position) / dt
    }

    pub fn set_velocity(&mut self, velocity: Vec2, dt: f32) {
        self.previous_position = self.position - velocity * dt;
        self.acceleration = Vec2::ZERO;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.previous_position = position;
    }

    /// Accumulate a force for the next integration step.
    /// The player has unit mass, so force and acceleration coincide.
    pub fn accelerate(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// One Verlet step. Consumes the accumulated acceleration.
    pub fn integrate(&mut self, dt: f32) {
        let current = self.position;
        self.position = 2.0 * current - self.previous_position + self.acceleration * (dt * dt);
        self.previous_position = current;
        self.acceleration = Vec2::ZERO;
    }

    /// Cap the speed at `max_speed`, keeping the direction.
    pub fn clamp_speed(&mut self, max_speed: f32, dt: f32) {
        let velocity = self.velocity(dt);
        let speed = velocity.length();
        if speed > max_speed {
            self.set_velocity(velocity / speed * max_speed, dt);
        }
    }

    pub fn is_exploding(&self) -> bool {
        self.exploding
    }

    pub fn explode(&mut self) {
        self.exploding = true;
    }

    /// Reposition after an explosion. Clears the flag; the reposition
    /// itself zeroes the velocity per the [`set_position`] contract.
    ///
    /// [`set_position`]: Player::set_position
    pub fn respawn_at(&mut self, position: Vec2) {
        self.set_position(position);
        self.exploding = false;
    }

    /// Heading in radians. The hull's nose points along -Y at rest, so the
    /// velocity angle gets a quarter-turn offset.
    pub fn heading(&self, dt: f32) -> f32 {
        let velocity = self.velocity(dt);
        velocity.y.atan2(velocity.x) + std::f32::consts::FRAC_PI_2
    }

    /// The hull's vertices in world space, rotated to face the velocity.
    pub fn hit_vertices(&self, dt: f32) -> [Vec2; 3] {
        let rotation = Vec2::from_angle(self.heading(dt));
        HULL.map(|point| self.position + rotation.rotate(point))
    }

    pub fn offset_from(&self, planet: &Planet) -> Vec2 {
        self.position - planet.position()
    }

    pub fn distance_to(&self, planet: &Planet) -> f32 {
        self.offset_from(planet).length()
    }
}
