use crate::error::{Result, ScanError};
use glam::{DVec2, DVec3};
use serde::Serialize;

/// Grid index shared by every derived artifact: `[line][target]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GridIndex {
    pub line: usize,   // scan line (row, along Y)
    pub target: usize, // target on the line (column, along X)
}

impl GridIndex {
    pub fn new(line: usize, target: usize) -> Self {
        Self { line, target }
    }
}

/// Row-major elevation samples [mm], co-indexed with the sampling grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeightField {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl HeightField {
    /// Same-shaped field of zeros (the container floor)
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub(crate) fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Self { rows, cols, values }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, index: GridIndex) -> f64 {
        self.values[index.line * self.cols + index.target]
    }

    /// One scan line worth of samples
    pub fn row(&self, line: usize) -> &[f64] {
        &self.values[line * self.cols..(line + 1) * self.cols]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn ensure_shape(&self, rows: usize, cols: usize) -> Result<()> {
        if self.rows != rows || self.cols != cols {
            return Err(ScanError::ShapeMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Straight segment from the emitter to one grid target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ray {
    pub index: GridIndex,
    pub origin: DVec3,
    pub terminus: DVec3,
}

impl Ray {
    pub fn direction(&self) -> DVec3 {
        (self.terminus - self.origin).normalize_or_zero()
    }

    /// Distance the scanner would report [mm]
    pub fn length(&self) -> f64 {
        self.origin.distance(self.terminus)
    }
}

/// Which container edge a wall belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WallSide {
    Left,  // x = min(x_targets)
    Right, // x = max(x_targets)
    Back,  // y = min(y_lines)
    Front, // y = max(y_lines)
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [
        WallSide::Left,
        WallSide::Right,
        WallSide::Back,
        WallSide::Front,
    ];
}

/// Planar quad: floor-start, floor-end, top-end, top-start
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallPolygon {
    pub side: WallSide,
    pub segment: usize, // index of the first of the two grid points along the free axis
    pub vertices: [DVec3; 4],
}

impl WallPolygon {
    /// Coordinate of the boundary plane (x for left/right, y for back/front)
    pub fn plane_coordinate(&self) -> f64 {
        match self.side {
            WallSide::Left | WallSide::Right => self.vertices[0].x,
            WallSide::Back | WallSide::Front => self.vertices[0].y,
        }
    }

    /// Vertex positions projected onto the wall plane as (free axis, z)
    pub fn in_plane(&self) -> [DVec2; 4] {
        self.vertices.map(|v| match self.side {
            WallSide::Left | WallSide::Right => DVec2::new(v.y, v.z),
            WallSide::Back | WallSide::Front => DVec2::new(v.x, v.z),
        })
    }

    /// Shoelace area in the wall plane
    pub fn area(&self) -> f64 {
        let p = self.in_plane();
        let twice: f64 = (0..4).map(|k| p[k].perp_dot(p[(k + 1) % 4])).sum();
        twice.abs() * 0.5
    }
}
