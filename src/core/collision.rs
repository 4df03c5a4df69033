use glam::Vec2;

use crate::components::planet::Planet;
use crate::core::scene::PlanetSet;

/// Whether any vertex lies strictly inside `planet`'s circle.
pub fn intersects(vertices: &[Vec2], planet: &Planet) -> bool {
    vertices
        .iter()
        .any(|vertex| (*vertex - planet.position()).length() < planet.radius())
}

/// Whether any vertex of the player's world-space hull is inside any
/// planet. O(planets × vertices); fine for hundreds of planets and a
/// handful of vertices.
pub fn poll_collision(vertices: &[Vec2], planets: &PlanetSet) -> bool {
    planets.iter().any(|(_, planet)| intersects(vertices, planet))
}
