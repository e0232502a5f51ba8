//! Decorative burst particles
//!
//! Purely visual; never consulted by gameplay logic. A set-wide budget keeps
//! the worst case bounded (and lets the particles setting disable them).

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

/// Default particle budget
pub const MAX_PARTICLES: usize = 256;

/// Downward pull applied to every particle, pixels/s^2
const PARTICLE_GRAVITY: f32 = 120.0;

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub life: f32,
    /// Square side in logical pixels (1 or 2)
    pub size: i32,
}

impl Particle {
    /// 1.0 at spawn fading to 0.0 at expiry
    pub fn intensity(&self) -> f32 {
        (1.0 - self.age / self.life).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct ParticleSet {
    parts: Vec<Particle>,
    budget: usize,
}

impl ParticleSet {
    pub fn new(budget: usize) -> Self {
        Self {
            parts: Vec::with_capacity(budget.min(MAX_PARTICLES)),
            budget,
        }
    }

    /// Scatter a burst of sparks around a point
    pub fn spawn_burst(&mut self, at: Vec2, count: usize, rng: &mut Pcg32) {
        for _ in 0..count {
            if self.parts.len() >= self.budget {
                return;
            }
            self.parts.push(Particle {
                pos: at,
                vel: Vec2::new(rng.random_range(-60.0..60.0), rng.random_range(-80.0..40.0)),
                age: 0.0,
                life: rng.random_range(0.25..0.55),
                size: if rng.random::<f32>() < 0.7 { 1 } else { 2 },
            });
        }
    }

    pub fn update(&mut self, dt: f32) {
        for p in &mut self.parts {
            p.age += dt;
            p.pos += p.vel * dt;
            p.vel.y += PARTICLE_GRAVITY * dt;
        }
        self.parts.retain(|p| p.age < p.life);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn clear(&mut self) {
        self.parts.clear();
    }
}
