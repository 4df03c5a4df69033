use glam::Vec2;

/// A circular orbit around its owning planet.
///
/// The radius is fixed at creation; only the on/off flag changes at runtime.
/// An orbit that is off still exists and still renders dimmed in the game
/// layer, but the navigation resolver never targets it and it exerts no pull.
#[derive(Debug, Clone)]
pub struct Orbit {
    radius: f32,
    on: bool,
}

impl Orbit {
    /// Create an orbit with the given radius, switched on.
    pub fn new(radius: f32) -> Self {
        Self { radius, on: true }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn turn_on(&mut self) {
        self.on = true;
    }

    pub fn turn_off(&mut self) {
        self.on = false;
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
    }
}

/// A planet: fixed position and collision radius, runtime-adjusted mass,
/// and exactly one owned [`Orbit`].
///
/// Position never changes after creation. Mass is mutated every frame by the
/// assist engine and read back by the force model within the same frame.
#[derive(Debug, Clone)]
pub struct Planet {
    position: Vec2,
    mass: f32,
    radius: f32,
    orbit: Orbit,
}

impl Planet {
    pub fn new(position: Vec2, mass: f32, radius: f32, orbit_radius: f32) -> Self {
        Self {
            position,
            mass,
            radius,
            orbit: Orbit::new(orbit_radius),
        }
    }

    /// Builder helper: start with the orbit switched off.
    pub fn with_orbit_off(mut self) -> Self {
        self.orbit.turn_off();
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut Orbit {
        &mut self.orbit
    }
}
