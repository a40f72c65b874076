use crate::{
    config::ContainerConfig,
    geometry::{grid::SamplingGrid, types::HeightField},
};
use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Portable seeded generator: the same seed yields the same stream on every platform.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Nominal load level with a uniform downward perturbation per cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceModel {
    pub nominal_height: f64,
    pub max_deviation: f64,
}

impl SurfaceModel {
    pub fn new(nominal_height: f64, max_deviation: f64) -> Self {
        Self {
            nominal_height,
            max_deviation,
        }
    }

    pub fn from_container(container: &ContainerConfig) -> Self {
        Self::new(container.nominal_height, container.max_deviation)
    }

    /// `H + U`, `U ~ uniform[-D, 0)`, clipped to `[0, H]`.
    ///
    /// Samples are drawn in `(line, target)` order, one per cell. Any `D` is accepted:
    /// zero gives a flat field, negative or oversized values are absorbed by the clip.
    pub fn load_field<R: Rng>(&self, grid: &SamplingGrid, rng: &mut R) -> HeightField {
        let (rows, cols) = grid.shape();
        let h = self.nominal_height;
        let d = self.max_deviation;
        if d > h {
            warn!("max_deviation ({d}) exceeds nominal_height ({h}); some heights will clip to 0");
        }

        let values = (0..rows * cols)
            .map(|_| {
                let u: f64 = rng.r#gen();
                let offset = -d + d * u;
                (h + offset).max(0.0).min(h)
            })
            .collect();

        let field = HeightField::from_values(rows, cols, values);
        debug!(
            "load field {}x{}: min={:.1} mm, max={:.1} mm",
            rows,
            cols,
            field.min(),
            field.max()
        );
        field
    }

    pub fn seeded_load_field(&self, grid: &SamplingGrid, seed: u64) -> HeightField {
        self.load_field(grid, &mut seeded_rng(seed))
    }
}

/// All-zero field co-indexed with `grid`
pub fn floor_field(grid: &SamplingGrid) -> HeightField {
    let (rows, cols) = grid.shape();
    HeightField::zeros(rows, cols)
}
