pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod simulation;

pub use config::Config;
pub use constants::{
    DEFAULT_LENGTH_MM, DEFAULT_MAX_DEVIATION_MM, DEFAULT_NOMINAL_HEIGHT_MM, DEFAULT_SEED,
    DEFAULT_WIDTH_MM, MIN_GRID_POINTS,
};
pub use error::{Result, ScanError};
pub use geometry::{
    ContainerWalls, Emitter, GridIndex, HeightField, Ray, RayCaster, RayTarget, SamplingGrid,
    ScanProfile, SurfaceModel, WallPolygon, WallSide,
};
pub use simulation::SimulationRun;
