//! The four minigame rulesets
//!
//! Each game is an independent 100-200 line ruleset over the shared engine:
//! it owns a `SessionState`, entity collections and a seeded RNG, and
//! implements the sampler -> updater -> particles -> renderer pipeline through
//! the `Minigame` trait.

pub mod decoupler;
pub mod icebreaker;
pub mod sentinel;
pub mod truth_filter;

pub use decoupler::Decoupler;
pub use icebreaker::IceBreaker;
pub use sentinel::Sentinel;
pub use truth_filter::TruthFilter;

use crate::render::FrameBuffer;
use crate::sim::{InputState, SessionState};

/// One playable simulation, driven by the frame loop in `runner`
pub trait Minigame {
    fn kind(&self) -> GameKind;

    /// Re-initialize for a fresh run (restart after game over)
    fn reset(&mut self);

    /// Advance one frame. `dt` is clamped wall time in seconds.
    fn update(&mut self, input: &InputState, dt: f32);

    /// Paint the current state; post-processing happens in the runner
    fn render(&self, fb: &mut FrameBuffer);

    fn session(&self) -> &SessionState;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GameKind {
    Sentinel,
    IceBreaker,
    TruthFilter,
    Decoupler,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Sentinel,
        GameKind::IceBreaker,
        GameKind::TruthFilter,
        GameKind::Decoupler,
    ];

    pub fn title(self) -> &'static str {
        match self {
            GameKind::Sentinel => "SENTINEL DEF",
            GameKind::IceBreaker => "ICE BREAKER",
            GameKind::TruthFilter => "TRUTH FILTER",
            GameKind::Decoupler => "DECOUPLER",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            GameKind::Sentinel => "COMBAT CORPORATE SURVEILLANCE DRONES",
            GameKind::IceBreaker => "BYPASS FROZEN FIREWALLS",
            GameKind::TruthFilter => "FILTER NOISE FROM THE STREAM",
            GameKind::Decoupler => "SEPARATE LOGIC FROM MONOLITHS",
        }
    }

    /// Stable key for the high score tables
    pub fn slug(self) -> &'static str {
        match self {
            GameKind::Sentinel => "sentinel",
            GameKind::IceBreaker => "icebreaker",
            GameKind::TruthFilter => "truth-filter",
            GameKind::Decoupler => "decoupler",
        }
    }
}

/// Construct a game with a seeded RNG and the persisted best score
pub fn build(
    kind: GameKind,
    seed: u64,
    best_score: u32,
    particle_budget: usize,
) -> Box<dyn Minigame> {
    match kind {
        GameKind::Sentinel => Box::new(Sentinel::new(seed, best_score, particle_budget)),
        GameKind::IceBreaker => Box::new(IceBreaker::new(seed, best_score)),
        GameKind::TruthFilter => Box::new(TruthFilter::new(seed, best_score)),
        GameKind::Decoupler => Box::new(Decoupler::new()),
    }
}
