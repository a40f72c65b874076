use crate::{
    config::{ContainerConfig, EmitterConfig},
    error::Result,
    geometry::{
        grid::SamplingGrid,
        types::{GridIndex, HeightField, Ray},
    },
};
use glam::DVec3;
use serde::Serialize;

/// Fixed scanner mounting point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emitter {
    pub position: DVec3,
}

impl Emitter {
    /// Centered on X, behind the back edge and above the nominal load level
    pub fn for_container(container: &ContainerConfig, emitter: &EmitterConfig) -> Self {
        Self {
            position: DVec3::new(
                0.0,
                -(container.length / 2.0 + emitter.back_margin),
                container.nominal_height + emitter.top_margin,
            ),
        }
    }
}

/// Where a cast ray ends
#[derive(Debug, Clone, Copy)]
pub enum RayTarget<'a> {
    /// Empty container: every ray reaches z = 0
    Floor,
    /// Loaded container: rays stop on the load surface
    Surface(&'a HeightField),
}

/// Idealized straight rays, no occlusion by the walls
#[derive(Debug, Clone, Copy)]
pub struct RayCaster<'a> {
    emitter: Emitter,
    grid: &'a SamplingGrid,
}

impl<'a> RayCaster<'a> {
    pub fn new(emitter: Emitter, grid: &'a SamplingGrid) -> Self {
        Self { emitter, grid }
    }

    pub fn emitter(&self) -> Emitter {
        self.emitter
    }

    /// One ray per grid point to the floor, in `(line, target)` order
    pub fn floor_hits(&self) -> Vec<Ray> {
        self.collect(|_| 0.0)
    }

    /// One ray per grid point to the load surface, in `(line, target)` order
    pub fn surface_hits(&self, load: &HeightField) -> Result<Vec<Ray>> {
        self.grid.ensure_matches(load)?;
        Ok(self.collect(|index| load.get(index)))
    }

    pub fn cast(&self, target: RayTarget<'_>) -> Result<Vec<Ray>> {
        match target {
            RayTarget::Floor => Ok(self.floor_hits()),
            RayTarget::Surface(load) => self.surface_hits(load),
        }
    }

    fn collect<F>(&self, height_at: F) -> Vec<Ray>
    where
        F: Fn(GridIndex) -> f64,
    {
        self.grid
            .indices()
            .map(|index| Ray {
                index,
                origin: self.emitter.position,
                terminus: self.grid.point(index).extend(height_at(index)),
            })
            .collect()
    }
}
