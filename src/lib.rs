//! Renders the mode shape of a vibrating circular membrane (a drumhead) as
//! an RGBA PNG.
//!
//! A single eigenmode is selected by an angular mode number m and a radial
//! index n. The displacement field sin(m*theta) * J_m(k_mn * r) is evaluated
//! on a square grid over [-1, 1] x [-1, 1], thresholded into a boolean mask
//! of visible lobes, and mapped through a white alpha-ramp color table to a
//! PNG file.
//!
//! ```no_run
//! use drumhead::DrumParameters;
//!
//! drumhead::render_to_file(&DrumParameters::default(), "drum.png").unwrap();
//! ```

use std::path::Path;

use thiserror::Error;

pub mod bessel;
pub mod colormap;
pub mod mode;
pub mod render;

pub use colormap::ColorTable;
pub use mode::{Grid, Mask, ModeEvaluator};

#[derive(Debug, Error)]
pub enum DrumError {
    #[error("radial index must be at least 1")]
    InvalidRadialIndex,
    #[error("grid resolution must be at least 2")]
    InvalidResolution,
    #[error("visibility threshold must be non-negative")]
    InvalidThreshold,
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Parameters of a single rendering run.
///
/// The defaults reproduce the original output: the (3, 2) mode on a 256x256
/// grid with a visibility threshold of 0.1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrumParameters {
    /// Angular mode number m, the order of the Bessel function.
    pub angular_mode: u32,
    /// Radial index n, 1-based into the ascending positive zeros of J_m.
    pub radial_index: usize,
    /// Grid resolution per axis; also the color table length.
    pub resolution: usize,
    /// Minimum displacement magnitude for a point to render.
    pub threshold: f64,
}

impl DrumParameters {
    pub fn new(
        angular_mode: u32,
        radial_index: usize,
        resolution: usize,
        threshold: f64,
    ) -> Result<Self, DrumError> {
        if radial_index < 1 {
            return Err(DrumError::InvalidRadialIndex);
        }
        if resolution < 2 {
            return Err(DrumError::InvalidResolution);
        }
        if threshold.is_nan() || threshold < 0.0 {
            return Err(DrumError::InvalidThreshold);
        }

        Ok(Self {
            angular_mode,
            radial_index,
            resolution,
            threshold,
        })
    }
}

impl Default for DrumParameters {
    fn default() -> Self {
        Self {
            angular_mode: 3,
            radial_index: 2,
            resolution: 256,
            threshold: 0.1,
        }
    }
}

/// Evaluates the mode selected by `params` and writes it as a PNG at `path`,
/// overwriting any existing file.
pub fn render_to_file<P: AsRef<Path>>(params: &DrumParameters, path: P) -> Result<(), DrumError> {
    let grid = Grid::linspace(params.resolution)?;
    let mask = ModeEvaluator::new(params)?.evaluate(&grid);
    let table = ColorTable::alpha_ramp(params.resolution)?;

    render::write_png(&mask, &table, path)
}
