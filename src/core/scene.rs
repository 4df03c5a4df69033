use std::ops::{Index, IndexMut};

use crate::components::planet::Planet;

/// Stable handle to a planet in a [`PlanetSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanetId(pub u32);

/// Flat-Vec planet storage with stable indices.
///
/// Planets are spawned once by the level layer and never removed, so a
/// [`PlanetId`] stays valid for the lifetime of the set. The navigation
/// context carries these handles across frames and compares them for
/// same-planet identity.
pub struct PlanetSet {
    planets: Vec<Planet>,
}

impl PlanetSet {
    pub fn new() -> Self {
        Self {
            planets: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            planets: Vec::with_capacity(capacity),
        }
    }

    /// Add a planet, returning its permanent handle.
    pub fn spawn(&mut self, planet: Planet) -> PlanetId {
        let id = PlanetId(self.planets.len() as u32);
        self.planets.push(planet);
        id
    }

    pub fn get(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: PlanetId) -> Option<&mut Planet> {
        self.planets.get_mut(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlanetId, &Planet)> {
        self.planets
            .iter()
            .enumerate()
            .map(|(idx, planet)| (PlanetId(idx as u32), planet))
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Switch every planet's orbit on.
    pub fn set_all_orbits_on(&mut self) {
        for planet in &mut self.planets {
            planet.orbit_mut().turn_on();
        }
    }

    /// Flip one planet's orbit flag. No-op for an unknown handle.
    pub fn toggle_orbit(&mut self, id: PlanetId) {
        if let Some(planet) = self.get_mut(id) {
            planet.orbit_mut().toggle();
        }
    }

    /// Whether any planet currently has its orbit on. The navigation
    /// resolver requires this to hold before every frame.
    pub fn any_orbit_on(&self) -> bool {
        self.planets.iter().any(|planet| planet.orbit().is_on())
    }
}

impl Default for PlanetSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<PlanetId> for PlanetSet {
    type Output = Planet;

    fn index(&self, id: PlanetId) -> &Planet {
        &self.planets[id.0 as usize]
    }
}

impl IndexMut<PlanetId> for PlanetSet {
    fn index_mut(&mut self, id: PlanetId) -> &mut Planet {
        &mut self.planets[id.0 as usize]
    }
}
