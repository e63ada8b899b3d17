//! Configuration for where exports are written.

mod parameters;

pub use parameters::{ExportParameters, DEFAULT_PARAMETERS_PATH};
