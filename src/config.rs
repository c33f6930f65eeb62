//! Pad tuning values and the demo host's pad layout.
//!
//! Both live in a single TOML file under `~/.padcontrol/`. Missing files and
//! missing fields fall back to defaults, so a partial file only overrides what
//! it names.

use crate::pad::{DirectionSet, PadError};
use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

const CONFIG_DIR: &str = ".padcontrol";
const CONFIG_FILE: &str = "padcontrol.toml";

/// Geometry and styling constants shared by every pad
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PadSettings {
    /// Upper bound for the peak edge on bidirectional axes, in logical units
    pub preferred_edge_length: f64,
    /// Share of the bounds extent used as the minimum peak edge
    pub min_edge_fraction: f64,
    pub dot_radius: f64,
    /// Applied to the unidirectional minimum edge while a touch is active
    pub selection_growth_multiplier: f64,
    /// Elevation exponent while a touch is active
    pub selection_growth_exponent: f64,
    pub plane_corner_radius: f64,
    pub stroke_width: f64,
    /// Duration of the return-to-rest animation
    pub animation_duration_ms: u64,
    pub default_plane_count: usize,
}

impl Default for PadSettings {
    fn default() -> Self {
        Self {
            preferred_edge_length: 88.0,
            min_edge_fraction: 0.25,
            dot_radius: 8.0,
            selection_growth_multiplier: 1.15,
            selection_growth_exponent: 2.0,
            plane_corner_radius: 8.0,
            stroke_width: 2.0,
            animation_duration_ms: 50,
            default_plane_count: 4,
        }
    }
}

impl PadSettings {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Checks the values that bound the peak size.
    ///
    /// The grown unidirectional edge is at most
    /// `min_edge_fraction * selection_growth_multiplier` of the extent, so that
    /// product has to stay within `[0, 1]` for the peak to fit its bounds.
    pub fn validate(&self) -> Result<(), PadError> {
        let invalid = |name: &'static str, value: f64| -> Result<(), PadError> {
            warn!("Rejecting pad setting {} = {}", name, value);
            Err(PadError::InvalidSettings { name, value })
        };

        if !(self.preferred_edge_length >= 0.0) {
            return invalid("preferred_edge_length", self.preferred_edge_length);
        }
        if !(self.selection_growth_multiplier >= 1.0) {
            return invalid(
                "selection_growth_multiplier",
                self.selection_growth_multiplier,
            );
        }
        let grown_fraction = self.min_edge_fraction * self.selection_growth_multiplier;
        if !(self.min_edge_fraction >= 0.0 && grown_fraction <= 1.0) {
            return invalid("min_edge_fraction", self.min_edge_fraction);
        }
        Ok(())
    }
}

/// Which group a pad is laid out in by the demo host
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadRow {
    Omni,
    Horizontal,
    Vertical,
}

/// One pad shown by the demo host
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PadEntry {
    pub label: String,
    pub directions: DirectionSet,
    /// Falls back to [`PadSettings::default_plane_count`]
    pub planes: Option<usize>,
    pub row: PadRow,
}

impl PadEntry {
    pub fn new(label: &str, directions: DirectionSet, planes: Option<usize>, row: PadRow) -> Self {
        Self {
            label: label.to_string(),
            directions,
            planes,
            row,
        }
    }
}

/// Complete demo configuration
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub settings: PadSettings,
    pub pads: Vec<PadEntry>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            settings: PadSettings::default(),
            pads: vec![
                PadEntry::new("omni", DirectionSet::ALL, Some(3), PadRow::Omni),
                PadEntry::new("left", DirectionSet::LEFT, None, PadRow::Horizontal),
                PadEntry::new("right", DirectionSet::RIGHT, None, PadRow::Horizontal),
                PadEntry::new("left + right", DirectionSet::HORIZONTAL, None, PadRow::Horizontal),
                PadEntry::new("up", DirectionSet::UP, None, PadRow::Vertical),
                PadEntry::new("down", DirectionSet::DOWN, None, PadRow::Vertical),
                PadEntry::new("up + down", DirectionSet::VERTICAL, None, PadRow::Vertical),
            ],
        }
    }
}

impl DemoConfig {
    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        let mut path = get_home_dir();
        path.push(CONFIG_DIR);
        path.push(CONFIG_FILE);
        path
    }

    /// Writes the default configuration to `path` unless a file already exists
    pub fn ensure_default_config(path: &Path) -> Result<()> {
        if path.exists() {
            debug!("Config file already present at {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| eyre!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(&DemoConfig::default())
            .map_err(|e| eyre!("Failed to serialize default config: {}", e))?;

        fs::write(path, content).map_err(|e| eyre!("Failed to write config file: {}", e))?;

        info!("Wrote default config to {}", path.display());
        Ok(())
    }

    /// Loads the configuration, using defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Config file {} does not exist, using default",
                path.display()
            );
            return Ok(DemoConfig::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| eyre!("Failed to read config file: {}", e))?;

        let config: DemoConfig =
            toml::from_str(&content).map_err(|e| eyre!("Failed to parse config file: {}", e))?;

        config.validate()?;

        info!(
            "Loaded config from {} with {} pads",
            path.display(),
            config.pads.len()
        );
        Ok(config)
    }

    /// Rejects settings and pads that could not be constructed
    pub fn validate(&self) -> Result<(), PadError> {
        self.settings.validate()?;
        if self.settings.default_plane_count == 0 {
            return Err(PadError::NoPlanes);
        }
        for pad in &self.pads {
            if pad.planes == Some(0) {
                warn!("Pad '{}' is configured without planes", pad.label);
                return Err(PadError::NoPlanes);
            }
        }
        Ok(())
    }
}

fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        warn!("Could not determine home directory, using current directory");
        PathBuf::from(".")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_config_path(name: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        env::temp_dir()
            .join(format!("padcontrol_{name}_{suffix}"))
            .join(CONFIG_FILE)
    }

    #[test]
    fn default_settings_match_pad_constants() {
        let settings = PadSettings::default();
        assert_eq!(settings.preferred_edge_length, 88.0);
        assert_eq!(settings.selection_growth_multiplier, 1.15);
        assert_eq!(settings.selection_growth_exponent, 2.0);
        assert_eq!(settings.animation_duration(), Duration::from_millis(50));
        assert_eq!(settings.default_plane_count, 4);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let config: DemoConfig = toml::from_str(
            r#"
            [settings]
            dot_radius = 12.0
            "#,
        )
        .expect("parse");

        assert_eq!(config.settings.dot_radius, 12.0);
        assert_eq!(config.settings.preferred_edge_length, 88.0);
        assert_eq!(config.pads.len(), 7);
    }

    #[test]
    fn pads_parse_directions_from_flag_text() {
        let config: DemoConfig = toml::from_str(
            r#"
            [[pads]]
            label = "throttle"
            directions = "UP | DOWN"
            row = "Vertical"
            "#,
        )
        .expect("parse");

        assert_eq!(config.pads.len(), 1);
        assert_eq!(config.pads[0].directions, DirectionSet::VERTICAL);
        assert_eq!(config.pads[0].planes, None);
    }

    #[test]
    fn zero_planes_are_rejected() {
        let mut config = DemoConfig::default();
        config.pads[0].planes = Some(0);
        assert!(matches!(config.validate(), Err(PadError::NoPlanes)));
    }

    #[test]
    fn oversized_peak_settings_are_rejected() {
        let config: DemoConfig = toml::from_str(
            r#"
            [settings]
            min_edge_fraction = 1.0
            "#,
        )
        .expect("parse");
        assert!(matches!(
            config.validate(),
            Err(PadError::InvalidSettings {
                name: "min_edge_fraction",
                ..
            })
        ));

        let mut settings = PadSettings::default();
        settings.selection_growth_multiplier = 0.5;
        assert!(settings.validate().is_err());

        settings = PadSettings::default();
        settings.preferred_edge_length = f64::NAN;
        assert!(settings.validate().is_err());

        settings = PadSettings::default();
        settings.selection_growth_multiplier = 2.0;
        settings.min_edge_fraction = 0.5;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn load_fails_for_invalid_settings_file() {
        let path = temp_config_path("invalid");
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).expect("dir");
        }
        fs::write(&path, "[settings]\nselection_growth_multiplier = 5.0\n").expect("write");

        assert!(DemoConfig::load(&path).is_err());

        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir).expect("cleanup");
        }
    }

    #[test]
    fn ensure_default_then_load() {
        let path = temp_config_path("roundtrip");

        DemoConfig::ensure_default_config(&path).expect("write default");
        assert!(path.exists());

        let loaded = DemoConfig::load(&path).expect("load");
        assert_eq!(loaded, DemoConfig::default());

        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir).expect("cleanup");
        }
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = temp_config_path("missing");
        let loaded = DemoConfig::load(&path).expect("load");
        assert_eq!(loaded, DemoConfig::default());
    }
}
