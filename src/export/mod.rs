//! Export of simulation frames for external visualization.
//!
//! Writes Ovito-readable text files with orientation-coloured particles.

pub mod color;
mod ovito;

pub use color::{calculate_hue, normalize_angle, Rgb};
pub use ovito::{FrameExporter, FrameWriter, BOUNDARY_MARKER_COUNT, COLUMN_HEADER};
