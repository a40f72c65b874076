use crate::{
    constants::{
        DEFAULT_BACK_MARGIN_MM, DEFAULT_LENGTH_MM, DEFAULT_MAX_DEVIATION_MM,
        DEFAULT_NOMINAL_HEIGHT_MM, DEFAULT_SCAN_LINES, DEFAULT_SEED, DEFAULT_TARGETS_PER_LINE,
        DEFAULT_TOP_MARGIN_MM, DEFAULT_WIDTH_MM, MIN_GRID_POINTS,
    },
    error::{Result, ScanError},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub container: ContainerConfig,
    pub grid: GridConfig,
    pub emitter: EmitterConfig,
    pub surface: SurfaceConfig,
}

/// Physical envelope of the container [mm]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContainerConfig {
    pub length: f64,         // along Y
    pub width: f64,          // along X
    pub nominal_height: f64, // load height before perturbation
    pub max_deviation: f64,  // downward perturbation bound
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH_MM,
            width: DEFAULT_WIDTH_MM,
            nominal_height: DEFAULT_NOMINAL_HEIGHT_MM,
            max_deviation: DEFAULT_MAX_DEVIATION_MM,
        }
    }
}

impl ContainerConfig {
    /// Length, width and nominal height must be strictly positive.
    /// The deviation is only required to be finite: out-of-range heights are clipped.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("nominal_height", self.nominal_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScanError::NonPositiveDimension { name, value });
            }
        }

        if !self.max_deviation.is_finite() {
            return Err(ScanError::Config(format!(
                "max_deviation must be finite, got {}",
                self.max_deviation
            )));
        }

        Ok(())
    }
}

/// Sampling resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridConfig {
    pub scan_lines: usize,       // rows along Y
    pub targets_per_line: usize, // columns along X
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            scan_lines: DEFAULT_SCAN_LINES,
            targets_per_line: DEFAULT_TARGETS_PER_LINE,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scan_lines < MIN_GRID_POINTS {
            return Err(ScanError::InvalidResolution {
                axis: "scan_lines",
                count: self.scan_lines,
            });
        }
        if self.targets_per_line < MIN_GRID_POINTS {
            return Err(ScanError::InvalidResolution {
                axis: "targets_per_line",
                count: self.targets_per_line,
            });
        }
        Ok(())
    }
}

/// Emitter placement relative to the container [mm]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub back_margin: f64, // distance behind the back edge (y = -length/2)
    pub top_margin: f64,  // distance above the nominal height
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            back_margin: DEFAULT_BACK_MARGIN_MM,
            top_margin: DEFAULT_TOP_MARGIN_MM,
        }
    }
}

impl EmitterConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.back_margin.is_finite() || !self.top_margin.is_finite() {
            return Err(ScanError::Config(format!(
                "emitter margins must be finite, got back={} top={}",
                self.back_margin, self.top_margin
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub seed: u64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl Config {
    /// Read, parse and validate a TOML config file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScanError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ScanError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.container.validate()?;
        self.grid.validate()?;
        self.emitter.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.container.length, 8000.0);
        assert_eq!(config.grid.scan_lines, 3);
        assert_eq!(config.grid.targets_per_line, 20);
        assert_eq!(config.surface.seed, 42);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[container]\nmax_deviation = 0.0\n\n[surface]\nseed = 7\n"
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.container.max_deviation, 0.0);
        assert_eq!(config.container.width, DEFAULT_WIDTH_MM);
        assert_eq!(config.surface.seed, 7);
        assert_eq!(config.emitter, EmitterConfig::default());
    }

    #[test]
    fn test_load_rejects_single_scan_line() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[grid]\nscan_lines = 1\n").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ScanError::InvalidResolution {
                axis: "scan_lines",
                count: 1
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load_from_file(Path::new("nonexistent/loadscan.toml"));
        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn test_load_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[container\nlength = ").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        let mut config = Config::default();
        config.container.width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ScanError::NonPositiveDimension { name: "width", .. })
        ));

        let mut config = Config::default();
        config.container.length = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ScanError::NonPositiveDimension { name: "length", .. })
        ));

        let mut config = Config::default();
        config.container.nominal_height = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_or_negative_deviation_is_accepted() {
        let mut config = Config::default();
        config.container.max_deviation = 5000.0;
        assert!(config.validate().is_ok());

        config.container.max_deviation = -200.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_target_rejected() {
        let grid = GridConfig {
            scan_lines: 3,
            targets_per_line: 1,
        };
        assert!(matches!(
            grid.validate(),
            Err(ScanError::InvalidResolution {
                axis: "targets_per_line",
                count: 1
            })
        ));
    }

    #[test]
    fn test_shipped_default_file_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
