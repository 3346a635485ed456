//! Game settings and preferences
//!
//! Read from a JSON file in the working directory. Gameplay
//! tuning is fixed in `consts`; only presentation and runtime knobs live here.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use crate::sim::HelperChoice;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub window_width: u32,
    pub window_height: u32,
    /// Nominal frame rate
    pub target_fps: u32,
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (no health bar flash)
    pub reduced_motion: bool,

    // === Run ===
    /// Fixed RNG seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// Helper the demo player picks
    pub demo_helper: HelperChoice,
    /// Headless safety stop
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: SCREEN_WIDTH as u32,
            window_height: SCREEN_HEIGHT as u32,
            target_fps: TARGET_FPS,
            show_fps: false,

            reduced_motion: false,

            seed: None,
            demo_helper: HelperChoice::Friends,
            max_frames: 60 * 60 * 10,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "stress-eliminator.json";

    /// Highest frame rate honored; above 1000 a frame would round to 0 ms
    pub const MAX_TARGET_FPS: u32 = 240;

    /// Milliseconds per frame at the target rate
    pub fn frame_ms(&self) -> u32 {
        1000 / self.target_fps.clamp(1, Self::MAX_TARGET_FPS)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the default file in the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("stress-eliminator-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(&temp_path("does-not-exist.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_written_file() {
        let path = temp_path("roundtrip.json");
        let settings = Settings {
            seed: Some(1234),
            show_fps: true,
            demo_helper: HelperChoice::Pets,
            ..Settings::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{ "reduced_motion": true, "target_fps": 30 }"#).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = fs::remove_file(&path);
        assert!(loaded.reduced_motion);
        assert_eq!(loaded.target_fps, 30);
        assert_eq!(loaded.frame_ms(), 33);
        assert_eq!(loaded.window_width, 1200);
    }

    #[test]
    fn test_frame_ms_never_zero() {
        let fast = Settings {
            target_fps: 5000,
            ..Settings::default()
        };
        assert_eq!(fast.frame_ms(), 4);
        let stopped = Settings {
            target_fps: 0,
            ..Settings::default()
        };
        assert_eq!(stopped.frame_ms(), 1000);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = temp_path("bad.json");
        fs::write(&path, "not json").unwrap();
        let loaded = Settings::load_from(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, Settings::default());
    }
}
