use crate::{
    config::Config,
    error::Result,
    geometry::{
        ContainerWalls, Emitter, HeightField, Ray, RayCaster, SamplingGrid, ScanProfile,
        SurfaceModel, fill_volume_m3, floor_field, scan_profiles, seeded_rng,
    },
};
use glam::DVec3;
use log::{debug, info};
use serde::Serialize;

/// Everything derived from one configuration. Nothing here is shared between runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRun {
    pub config: Config,
    pub grid: SamplingGrid,
    pub load: HeightField,
    pub floor: HeightField,
    pub floor_surface: Vec<Vec<DVec3>>, // grid lifted to z = 0
    pub walls: ContainerWalls,
    pub emitter: Emitter,
    pub floor_rays: Vec<Ray>,   // empty container
    pub surface_rays: Vec<Ray>, // loaded container
    pub profiles: Vec<ScanProfile>,
    pub volume_m3: f64,
}

impl SimulationRun {
    /// Validate, build the grid, seed one generator and derive every artifact from it
    pub fn execute(config: &Config) -> Result<Self> {
        config.validate()?;
        info!(
            "simulating {}x{} mm container, seed {}",
            config.container.length, config.container.width, config.surface.seed
        );

        let grid = SamplingGrid::build(&config.container, &config.grid)?;

        let mut rng = seeded_rng(config.surface.seed);
        let load = SurfaceModel::from_container(&config.container).load_field(&grid, &mut rng);
        let floor = floor_field(&grid);
        let floor_surface = grid.lift(&floor)?;

        let walls = ContainerWalls::build(&grid, &load)?;
        debug!("built {} wall polygons", walls.len());

        let emitter = Emitter::for_container(&config.container, &config.emitter);
        let caster = RayCaster::new(emitter, &grid);
        let floor_rays = caster.floor_hits();
        let surface_rays = caster.surface_hits(&load)?;
        debug!(
            "cast {} floor rays and {} surface rays from {:?}",
            floor_rays.len(),
            surface_rays.len(),
            emitter.position
        );

        let profiles = scan_profiles(&grid, &load, &emitter)?;
        let volume_m3 = fill_volume_m3(&grid, &load, &floor)?;
        info!("estimated fill volume: {:.3} m3", volume_m3);

        Ok(Self {
            config: config.clone(),
            grid,
            load,
            floor,
            floor_surface,
            walls,
            emitter,
            floor_rays,
            surface_rays,
            profiles,
            volume_m3,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::geometry::{GridIndex, WallSide};

    #[test]
    fn test_default_run() {
        let run = SimulationRun::execute(&Config::default()).unwrap();
        assert_eq!(run.grid.shape(), (3, 20));
        assert_eq!(run.load.shape(), (3, 20));
        assert_eq!(run.floor_rays.len(), 60);
        assert_eq!(run.surface_rays.len(), 60);
        assert_eq!(run.walls.len(), 42);
        assert_eq!(run.profiles.len(), 3);
        assert_eq!(run.floor_surface.len(), 3);
        assert!(run.volume_m3 > 0.0);
    }

    #[test]
    fn test_runs_are_reproducible() {
        let a = SimulationRun::execute(&Config::default()).unwrap();
        let b = SimulationRun::execute(&Config::default()).unwrap();
        assert_eq!(a.load, b.load);
        assert_eq!(a.surface_rays, b.surface_rays);
        assert_eq!(a.volume_m3.to_bits(), b.volume_m3.to_bits());

        let mut other = Config::default();
        other.surface.seed = 43;
        let c = SimulationRun::execute(&other).unwrap();
        assert_ne!(a.load, c.load);
    }

    #[test]
    fn test_artifacts_share_grid_indices() {
        let run = SimulationRun::execute(&Config::default()).unwrap();
        let (rows, cols) = run.grid.shape();

        for ray in &run.surface_rays {
            let p = run.grid.point(ray.index);
            assert_eq!(ray.terminus, p.extend(run.load.get(ray.index)));
        }
        for (line, row) in run.floor_surface.iter().enumerate() {
            for (target, p) in row.iter().enumerate() {
                let index = GridIndex::new(line, target);
                assert_eq!(p.truncate(), run.grid.point(index));
                assert_eq!(p.z, run.floor.get(index));
            }
        }
        for poly in run.walls.side(WallSide::Front) {
            let start = GridIndex::new(rows - 1, poly.segment);
            assert_eq!(poly.vertices[0].truncate(), run.grid.point(start));
            assert_eq!(poly.vertices[3].z, run.load.get(start));
        }
        for poly in run.walls.side(WallSide::Left) {
            let start = GridIndex::new(poly.segment, 0);
            assert_eq!(poly.vertices[0].truncate(), run.grid.point(start));
            assert_eq!(poly.vertices[3].z, run.load.get(start));
        }
        let corner = GridIndex::new(rows - 1, cols - 1);
        assert_eq!(run.profiles[rows - 1].samples[cols - 1].y, run.load.get(corner));
    }

    #[test]
    fn test_invalid_resolution_aborts_run() {
        let mut config = Config::default();
        config.grid.targets_per_line = 1;
        assert!(matches!(
            SimulationRun::execute(&config),
            Err(ScanError::InvalidResolution { .. })
        ));
    }

    #[test]
    fn test_json_dump_contains_volume() {
        let run = SimulationRun::execute(&Config::default()).unwrap();
        let json = run.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let volume = value["volume_m3"].as_f64().unwrap();
        assert!((volume - run.volume_m3).abs() < 1e-9);
        assert_eq!(value["floor_rays"].as_array().map(Vec::len), Some(60));
        assert_eq!(value["walls"]["back"].as_array().map(Vec::len), Some(19));
    }
}
