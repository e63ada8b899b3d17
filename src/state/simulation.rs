//! One frame of simulation output.

use serde::{Deserialize, Serialize};

use super::Particle;

/// Ordered particles of a single frame plus the side length of the square domain.
///
/// Particles are assumed to lie in `[0, space_dimension] × [0, space_dimension]`.
/// Their order is kept as given when the frame is exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationData {
    pub particles: Vec<Particle>,
    pub space_dimension: u32,
}

impl SimulationData {
    pub fn new(particles: Vec<Particle>, space_dimension: u32) -> Self {
        Self {
            particles,
            space_dimension,
        }
    }

    /// Number of real particles in the frame
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
