//! Per-particle state as handed over by the simulation.

use serde::{Deserialize, Serialize};

/// A single particle at one timestep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Particle identifier, stable across frames
    pub id: i64,
    /// Position along x
    pub x: f64,
    /// Position along y
    pub y: f64,
    /// Orientation in radians (unbounded, any multiple of 2π)
    pub angle: f64,
    /// Particle radius
    pub radius: f64,
}

impl Particle {
    pub fn new(id: i64, x: f64, y: f64, angle: f64, radius: f64) -> Self {
        Self { id, x, y, angle, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_particle() {
        let json = r#"{"id": 7, "x": 1.5, "y": 2.0, "angle": -3.1, "radius": 0.25}"#;
        let particle: Particle = serde_json::from_str(json).unwrap();
        assert_eq!(particle, Particle::new(7, 1.5, 2.0, -3.1, 0.25));
    }

    #[test]
    fn test_negative_id_is_accepted() {
        let json = r#"{"id": -42, "x": 0.0, "y": 0.0, "angle": 0.0, "radius": 1.0}"#;
        let particle: Particle = serde_json::from_str(json).unwrap();
        assert_eq!(particle.id, -42);
    }
}
