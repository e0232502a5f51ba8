//! Logic Sims - a terminal arcade of four retro minigames
//!
//! Core modules:
//! - `sim`: deterministic simulation engine (input, collision, session, particles)
//! - `games`: the four minigame rulesets built on the engine
//! - `render`: software framebuffer with a phosphor palette and bitmap font
//! - `platform`: terminal presentation and input events
//! - `highscores` / `settings`: JSON-persisted player data

pub mod games;
pub mod highscores;
pub mod menu;
pub mod platform;
pub mod render;
pub mod runner;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Engine configuration constants
pub mod consts {
    /// Logical raster size shared by every minigame
    pub const SCREEN_W: i32 = 320;
    pub const SCREEN_H: i32 = 240;

    /// Target frame cadence (~30 FPS keeps terminal output comfortable)
    pub const FRAME_MS: u64 = 33;
    /// Largest simulation step fed to a game after a stall
    pub const MAX_FRAME_DT: f32 = 1.0 / 20.0;
    /// Slow-motion multiplier while a freeze (hit-stop) timer runs
    pub const FREEZE_DT_SCALE: f32 = 0.25;
}

/// Directory holding persisted player data (high scores, settings)
pub fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .map(|d| d.join("logic-sims"))
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}
