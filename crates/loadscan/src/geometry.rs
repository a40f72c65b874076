pub mod grid;
pub mod height_field;
pub mod profile;
pub mod rays;
pub mod types;
pub mod volume;
pub mod walls;

pub use grid::SamplingGrid;
pub use height_field::{SurfaceModel, floor_field, seeded_rng};
pub use profile::{ScanProfile, scan_profiles};
pub use rays::{Emitter, RayCaster, RayTarget};
pub use types::{GridIndex, HeightField, Ray, WallPolygon, WallSide};
pub use volume::{estimate_volume_m3, fill_volume_m3};
pub use walls::ContainerWalls;
