/// Container envelope defaults [mm]
pub const DEFAULT_LENGTH_MM: f64 = 8000.0; // along Y
pub const DEFAULT_WIDTH_MM: f64 = 2500.0; // along X
pub const DEFAULT_NOMINAL_HEIGHT_MM: f64 = 1500.0;
pub const DEFAULT_MAX_DEVIATION_MM: f64 = 500.0; // downward only

/// Sampling resolution
pub const DEFAULT_SCAN_LINES: usize = 3;
pub const DEFAULT_TARGETS_PER_LINE: usize = 20;
pub const MIN_GRID_POINTS: usize = 2; // spacing is undefined below this

/// Emitter offsets from the container edge [mm]
pub const DEFAULT_BACK_MARGIN_MM: f64 = 1000.0; // behind the back wall
pub const DEFAULT_TOP_MARGIN_MM: f64 = 1000.0; // above the nominal load height

pub const DEFAULT_SEED: u64 = 42;

/// Fraction of the container length covered by the scan lines (centered band)
pub const SAMPLED_LENGTH_FRACTION: f64 = 2.0 / 3.0;

/// unit conversion mm^3 -> m^3
pub const MM3_PER_M3: f64 = 1e9;
