//! Particle state handed over by the simulation, one frame at a time.
//!
//! The exporter only borrows this data; it never keeps copies between frames.

mod particle;
mod simulation;

pub use particle::Particle;
pub use simulation::SimulationData;
