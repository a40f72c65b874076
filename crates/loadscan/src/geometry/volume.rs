use crate::{
    constants::MM3_PER_M3,
    error::Result,
    geometry::{grid::SamplingGrid, types::HeightField},
};

/// Fill volume [m^3] between two co-indexed fields.
///
/// Every sample stands for one full `dx * dy` cell, boundary samples included.
/// This is a plain left-Riemann sum, not an area-weighted integral.
pub fn estimate_volume_m3(load: &HeightField, floor: &HeightField, dx: f64, dy: f64) -> Result<f64> {
    floor.ensure_shape(load.rows(), load.cols())?;

    let sum_mm: f64 = load
        .values()
        .iter()
        .zip(floor.values())
        .map(|(z_load, z_floor)| z_load - z_floor)
        .sum();

    Ok(sum_mm * dx * dy / MM3_PER_M3)
}

/// Same estimate with the spacing taken from `grid`
pub fn fill_volume_m3(grid: &SamplingGrid, load: &HeightField, floor: &HeightField) -> Result<f64> {
    grid.ensure_matches(load)?;
    estimate_volume_m3(load, floor, grid.dx(), grid.dy())
}
