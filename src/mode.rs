use crate::{bessel, DrumError, DrumParameters};

/// Uniformly spaced coordinates over [-1, 1], used for both image axes.
#[derive(Debug, Clone)]
pub struct Grid {
    coords: Vec<f64>,
}

impl Grid {
    pub fn linspace(resolution: usize) -> Result<Self, DrumError> {
        if resolution < 2 {
            return Err(DrumError::InvalidResolution);
        }

        let step = 2.0 / (resolution - 1) as f64;
        let coords = (0..resolution).map(|i| -1.0 + step * i as f64).collect();

        Ok(Self { coords })
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn resolution(&self) -> usize {
        self.coords.len()
    }
}

/// Boolean image of which grid points render as part of the mode pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    resolution: usize,
    cells: Vec<bool>,
}

impl Mask {
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Cell at column `ix`, row `iy`. Row 0 corresponds to y = -1.
    pub fn get(&self, ix: usize, iy: usize) -> bool {
        self.cells[iy * self.resolution + ix]
    }

    pub fn count_true(&self) -> usize {
        self.iter().filter(|&cell| cell).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().copied()
    }
}

/// Evaluates the displacement field of a single eigenmode of a circular
/// membrane, sin(m*theta) * J_m(k_mn * r), and thresholds it into a [`Mask`].
#[derive(Debug, Clone)]
pub struct ModeEvaluator {
    angular_mode: u32,
    radial_zero: f64,
    threshold: f64,
}

impl ModeEvaluator {
    /// Resolves the radial wavenumber k_mn (the n-th positive zero of J_m)
    /// for the mode selected by `params`.
    pub fn new(params: &DrumParameters) -> Result<Self, DrumError> {
        let radial_zero = bessel::jn_zero(params.angular_mode, params.radial_index)?;

        Ok(Self {
            angular_mode: params.angular_mode,
            radial_zero,
            threshold: params.threshold,
        })
    }

    /// Radial wavenumber of the mode, k_mn.
    pub fn radial_zero(&self) -> f64 {
        self.radial_zero
    }

    /// Membrane displacement at a single point.
    ///
    /// The point is read in polar form: theta = atan2(y, x) in (-pi, pi],
    /// r = hypot(x, y). At the center r = 0, so the displacement is 0 for
    /// every mode.
    pub fn displacement(&self, x: f64, y: f64) -> f64 {
        let theta = y.atan2(x);
        let r = x.hypot(y);

        (self.angular_mode as f64 * theta).sin() * bessel::j_m(self.angular_mode, self.radial_zero * r)
    }

    /// True iff the point lies strictly inside the unit disk and its
    /// displacement magnitude exceeds the visibility threshold.
    pub fn is_visible(&self, x: f64, y: f64) -> bool {
        x.hypot(y) < 1.0 && self.displacement(x, y).abs() > self.threshold
    }

    /// Thresholded mode pattern over the full grid.
    pub fn evaluate(&self, grid: &Grid) -> Mask {
        let resolution = grid.resolution();
        let mut cells = Vec::with_capacity(resolution * resolution);

        for &y in grid.coords() {
            for &x in grid.coords() {
                cells.push(self.is_visible(x, y));
            }
        }

        Mask { resolution, cells }
    }
}
