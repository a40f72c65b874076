use crate::{
    error::Result,
    geometry::{grid::SamplingGrid, rays::Emitter, types::HeightField},
};
use glam::DVec2;
use serde::Serialize;

/// One scan line seen from the side: load samples and rays in the x-z plane
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanProfile {
    pub line: usize,
    pub y: f64,
    pub samples: Vec<DVec2>,       // (x, z) per target
    pub emitter: DVec2,            // (x, z) of the emitter
    pub segments: Vec<[DVec2; 2]>, // emitter -> sample
}

impl ScanProfile {
    pub fn peak(&self) -> Option<DVec2> {
        self.samples.iter().copied().max_by(|a, b| a.y.total_cmp(&b.y))
    }

    pub fn trough(&self) -> Option<DVec2> {
        self.samples.iter().copied().min_by(|a, b| a.y.total_cmp(&b.y))
    }

    pub fn mean_height(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|p| p.y).sum::<f64>() / self.samples.len() as f64
    }
}

/// Profiles for every scan line, in line order
pub fn scan_profiles(
    grid: &SamplingGrid,
    load: &HeightField,
    emitter: &Emitter,
) -> Result<Vec<ScanProfile>> {
    grid.ensure_matches(load)?;
    let eye = DVec2::new(emitter.position.x, emitter.position.z);

    Ok(grid
        .y_lines
        .iter()
        .enumerate()
        .map(|(line, &y)| {
            let samples: Vec<DVec2> = grid
                .x_targets
                .iter()
                .zip(load.row(line))
                .map(|(&x, &z)| DVec2::new(x, z))
                .collect();
            let segments = samples.iter().map(|&p| [eye, p]).collect();
            ScanProfile {
                line,
                y,
                samples,
                emitter: eye,
                segments,
            }
        })
        .collect())
}
