//! Presentation and accessibility preferences
//!
//! Persisted as JSON next to the high scores. Fields are individually
//! defaulted so older files keep loading after new toggles appear.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sim::MAX_PARTICLES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Visual effects ===
    /// CRT scanline overlay
    #[serde(default = "default_true")]
    pub scanlines: bool,
    /// Screen shake on impacts
    #[serde(default = "default_true")]
    pub screen_shake: bool,
    /// Particle bursts
    #[serde(default = "default_true")]
    pub particles: bool,

    // === HUD ===
    #[serde(default)]
    pub show_fps: bool,

    // === Accessibility ===
    /// Minimize shake and flicker
    #[serde(default)]
    pub reduced_motion: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scanlines: true,
            screen_shake: true,
            particles: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = "settings.json";

    fn path() -> PathBuf {
        crate::data_dir().join(Self::FILE_NAME)
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective scanline overlay (respects reduced_motion)
    pub fn effective_scanlines(&self) -> bool {
        self.scanlines && !self.reduced_motion
    }

    /// Particle cap handed to each game on construction
    pub fn particle_budget(&self) -> usize {
        if self.particles && !self.reduced_motion {
            MAX_PARTICLES
        } else {
            0
        }
    }

    /// Load from disk; missing or corrupt files fall back to defaults
    pub fn load() -> Self {
        match fs::read_to_string(Self::path()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {:?}", Self::path());
                    settings
                }
                Err(e) => {
                    log::warn!("Settings file unreadable ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> io::Result<()> {
        let path = Self::path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_overrides_effects() {
        let mut s = Settings::default();
        assert!(s.effective_screen_shake());
        assert!(s.effective_scanlines());
        s.reduced_motion = true;
        assert!(!s.effective_screen_shake());
        assert!(!s.effective_scanlines());
    }

    #[test]
    fn particle_budget_gates_on_toggles() {
        let mut s = Settings::default();
        assert_eq!(s.particle_budget(), MAX_PARTICLES);
        s.particles = false;
        assert_eq!(s.particle_budget(), 0);
        s.particles = true;
        s.reduced_motion = true;
        assert_eq!(s.particle_budget(), 0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let s: Settings = serde_json::from_str(r#"{"scanlines": false}"#).unwrap();
        assert!(!s.scanlines);
        assert!(s.screen_shake);
        assert!(!s.show_fps);
    }
}
