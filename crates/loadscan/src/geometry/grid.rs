use crate::{
    config::{ContainerConfig, GridConfig},
    constants::SAMPLED_LENGTH_FRACTION,
    error::Result,
    geometry::types::{GridIndex, HeightField},
};
use glam::{DVec2, DVec3};
use log::debug;
use serde::Serialize;

/// Scan lines along Y and targets along X, plus their cross product `points[line][target]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingGrid {
    pub y_lines: Vec<f64>,
    pub x_targets: Vec<f64>,
    pub points: Vec<Vec<DVec2>>,
}

impl SamplingGrid {
    /// Scan lines cover the central band of the length, targets the full width.
    pub fn build(container: &ContainerConfig, grid: &GridConfig) -> Result<Self> {
        container.validate()?;
        grid.validate()?;

        let half_band = container.length * SAMPLED_LENGTH_FRACTION / 2.0;
        let y_lines = linspace(-half_band, half_band, grid.scan_lines);
        let x_targets = linspace(
            -container.width / 2.0,
            container.width / 2.0,
            grid.targets_per_line,
        );

        let points = y_lines
            .iter()
            .map(|&y| x_targets.iter().map(|&x| DVec2::new(x, y)).collect())
            .collect();

        let out = Self {
            y_lines,
            x_targets,
            points,
        };
        debug!(
            "sampling grid: {}x{} points, dx={:.3} mm, dy={:.3} mm",
            out.n_lines(),
            out.n_targets(),
            out.dx(),
            out.dy()
        );
        Ok(out)
    }

    pub fn n_lines(&self) -> usize {
        self.y_lines.len()
    }

    pub fn n_targets(&self) -> usize {
        self.x_targets.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_lines(), self.n_targets())
    }

    /// Spacing of `x_targets`
    pub fn dx(&self) -> f64 {
        self.x_targets[1] - self.x_targets[0]
    }

    /// Spacing of `y_lines`
    pub fn dy(&self) -> f64 {
        self.y_lines[1] - self.y_lines[0]
    }

    #[inline]
    pub fn point(&self, index: GridIndex) -> DVec2 {
        self.points[index.line][index.target]
    }

    /// All indices in `(line, target)` order
    pub fn indices(&self) -> impl Iterator<Item = GridIndex> + '_ {
        (0..self.n_lines())
            .flat_map(move |line| (0..self.n_targets()).map(move |t| GridIndex::new(line, t)))
    }

    pub fn ensure_matches(&self, field: &HeightField) -> Result<()> {
        field.ensure_shape(self.n_lines(), self.n_targets())
    }

    /// Grid points raised to the elevations in `field`
    pub fn lift(&self, field: &HeightField) -> Result<Vec<Vec<DVec3>>> {
        self.ensure_matches(field)?;
        Ok(self
            .points
            .iter()
            .enumerate()
            .map(|(line, row)| {
                row.iter()
                    .zip(field.row(line))
                    .map(|(p, &z)| p.extend(z))
                    .collect()
            })
            .collect())
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive; `n >= 2`
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    let mut out: Vec<f64> = (0..n).map(|k| start + k as f64 * step).collect();
    out[n - 1] = end;
    out
}
