//! Ovito text export for particle trajectories.
//!
//! File layout:
//!
//! ```text
//! <particles + 4>
//! ID X Y Xv Yv R G B r
//! <frame index>
//! <id> <x> <y> <r> <g> <b> <radius>    one line per particle
//! id0 0 0 0 0 0 255 0                  four corner markers
//! id0 <L> 0 0 0 0 255 0
//! id<L> 0 0 0 0 0 255 0
//! id<L> <L> 0 0 0 0 255 0
//! ```
//!
//! The header names velocity columns that particle lines never carry; the
//! viewer maps columns positionally and tolerates the short lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;

use super::color::Rgb;
use crate::config::ExportParameters;
use crate::state::{Particle, SimulationData};

/// Column names on the second header line
pub const COLUMN_HEADER: &str = "ID X Y Xv Yv R G B r";

/// Corner markers appended to every frame
pub const BOUNDARY_MARKER_COUNT: usize = 4;

/// Streams frames in Ovito's text layout to any writer.
///
/// The header is written on construction; every call to
/// [`write_frame`](Self::write_frame) appends one complete frame block.
pub struct FrameWriter<W: Write> {
    inner: W,
    particles_amount: usize,
    frames_written: usize,
}

impl<W: Write> FrameWriter<W> {
    /// Wrap `inner` and write the two header lines.
    ///
    /// `particles_amount` is the number of real particles per frame; the
    /// declared line count adds the four boundary markers.
    pub fn new(mut inner: W, particles_amount: usize) -> Result<Self> {
        writeln!(inner, "{}", particles_amount + BOUNDARY_MARKER_COUNT)?;
        writeln!(inner, "{}", COLUMN_HEADER)?;

        Ok(Self {
            inner,
            particles_amount,
            frames_written: 0,
        })
    }

    /// Append one frame: index line, particle lines in the given order, corner markers
    pub fn write_frame(
        &mut self,
        frame_index: usize,
        particles: &[Particle],
        space_dimension: u32,
    ) -> Result<()> {
        if particles.len() != self.particles_amount {
            log::warn!(
                "Frame {} has {} particles but the header declares {}",
                frame_index,
                particles.len(),
                self.particles_amount
            );
        }

        writeln!(self.inner, "{}", frame_index)?;
        for particle in particles {
            self.write_particle(particle)?;
        }
        self.write_boundaries(space_dimension)?;

        self.frames_written += 1;
        log::debug!(
            "Wrote frame {} ({} particles)",
            frame_index,
            particles.len()
        );
        Ok(())
    }

    fn write_particle(&mut self, particle: &Particle) -> Result<()> {
        // Debug formatting keeps a trailing ".0" on whole values
        writeln!(
            self.inner,
            "{} {:?} {:?} {} {:?}",
            particle.id,
            particle.x,
            particle.y,
            Rgb::from_angle(particle.angle),
            particle.radius
        )?;
        Ok(())
    }

    fn write_boundaries(&mut self, space_dimension: u32) -> Result<()> {
        let l = space_dimension;
        for (x, y) in [(0, 0), (0, l), (l, 0), (l, l)] {
            writeln!(self.inner, "id{} {} 0 0 {} 0", x, y, Rgb::BLUE)?;
        }
        Ok(())
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// File-backed exporter with an explicit `open` → `write_frame`* → `close` lifecycle.
///
/// The destination is fixed at construction. Nothing touches the filesystem
/// until [`open`](Self::open). [`close`](Self::close) consumes the exporter,
/// so frames cannot be written after it.
pub struct FrameExporter {
    path: PathBuf,
    writer: Option<FrameWriter<BufWriter<File>>>,
}

impl FrameExporter {
    /// Exporter for a caller-chosen destination
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            writer: None,
        }
    }

    /// Exporter writing into the configured output directory.
    ///
    /// Creates the directory if it doesn't exist.
    /// Filename is auto-generated with timestamp: `<prefix>_YYYYMMDD_HHMMSS.<extension>`
    pub fn timestamped(params: &ExportParameters) -> Result<Self> {
        std::fs::create_dir_all(&params.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                params.output_dir.display()
            )
        })?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!(
            "{}_{}.{}",
            params.file_prefix, timestamp, params.extension
        );

        Ok(Self::new(params.output_dir.join(filename)))
    }

    /// Create the destination file and write the header.
    ///
    /// An existing file is truncated.
    pub fn open(&mut self, particles_amount: usize) -> Result<()> {
        if self.writer.is_some() {
            bail!("Ovito export to {} is already open", self.path.display());
        }

        let file = File::create(&self.path)
            .with_context(|| format!("failed to create {}", self.path.display()))?;
        let writer = FrameWriter::new(BufWriter::new(file), particles_amount)
            .with_context(|| format!("failed to write header to {}", self.path.display()))?;
        self.writer = Some(writer);

        log::info!("Ovito export started: {}", self.path.display());
        Ok(())
    }

    /// Append one frame block
    pub fn write_frame(
        &mut self,
        frame_index: usize,
        particles: &[Particle],
        space_dimension: u32,
    ) -> Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            bail!(
                "cannot write frame {} to {}: export not opened",
                frame_index,
                self.path.display()
            );
        };

        writer
            .write_frame(frame_index, particles, space_dimension)
            .with_context(|| {
                format!(
                    "failed to write frame {} to {}",
                    frame_index,
                    self.path.display()
                )
            })
    }

    /// Append the frame described by `data`
    pub fn write_simulation(&mut self, frame_index: usize, data: &SimulationData) -> Result<()> {
        self.write_frame(frame_index, &data.particles, data.space_dimension)
    }

    /// Open, write every frame numbered from zero, and close.
    ///
    /// The header declares the first frame's particle count; an empty
    /// sequence yields a header-only file declaring just the markers.
    pub fn export_all(mut self, frames: &[SimulationData]) -> Result<PathBuf> {
        let particles_amount = frames.first().map_or(0, SimulationData::len);
        self.open(particles_amount)?;
        for (index, frame) in frames.iter().enumerate() {
            self.write_simulation(index, frame)?;
        }
        self.close()
    }

    /// Whether [`open`](Self::open) has succeeded
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Frames appended since `open`
    pub fn frames_written(&self) -> usize {
        self.writer.as_ref().map_or(0, FrameWriter::frames_written)
    }

    /// Flush, release the file and return its path
    pub fn close(self) -> Result<PathBuf> {
        let Some(writer) = self.writer else {
            bail!(
                "cannot close {}: export was never opened",
                self.path.display()
            );
        };

        let frames = writer.frames_written();
        writer
            .finish()
            .with_context(|| format!("failed to flush {}", self.path.display()))?;

        log::info!(
            "Ovito export completed: {} ({} frames)",
            self.path.display(),
            frames
        );
        Ok(self.path)
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
