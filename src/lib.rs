//! Ovito frame export - particle trajectories for the Ovito visualization tool
//!
//! A simulation hands over one frame at a time. Each particle is written with
//! its position, radius, and a colour taken from its orientation angle. Four
//! blue marker particles pin the corners of the square simulation domain so
//! the viewer keeps a fixed bounding box.
//!
//! ```no_run
//! use ovito_frame_export::export::FrameExporter;
//! use ovito_frame_export::state::Particle;
//!
//! # fn main() -> anyhow::Result<()> {
//! let particles = vec![Particle::new(1, 1.0, 2.0, 0.0, 0.5)];
//!
//! let mut exporter = FrameExporter::new("run.xyz");
//! exporter.open(particles.len())?;
//! exporter.write_frame(0, &particles, 10)?;
//! exporter.close()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod export;
pub mod state;

pub use config::ExportParameters;
pub use export::{FrameExporter, FrameWriter, Rgb};
pub use state::{Particle, SimulationData};
