//! Deterministic simulation engine shared by all minigames
//!
//! Everything in here must stay pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - All per-session bookkeeping lives in `SessionState`

pub mod input;
pub mod particles;
pub mod rect;
pub mod session;
pub mod starfield;

pub use input::{Button, InputState};
pub use particles::{MAX_PARTICLES, Particle, ParticleSet};
pub use rect::Rect;
pub use session::{LifePolicy, SessionState};
pub use starfield::Starfield;
