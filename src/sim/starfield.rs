//! Scrolling starfield backdrop
//!
//! Decoration only, advanced independently of gameplay.

use rand::Rng;
use rand_pcg::Pcg32;

const STAR_COUNT: usize = 70;

#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x: i32,
    pub y: f32,
    /// Size/speed factor in 0.3..1.2; bright stars are the fast ones
    pub s: f32,
}

impl Star {
    pub fn is_bright(&self) -> bool {
        self.s > 0.9
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    width: i32,
    height: i32,
}

impl Starfield {
    pub fn new(width: i32, height: i32, rng: &mut Pcg32) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.random_range(0..width),
                y: rng.random_range(0.0..height as f32),
                s: rng.random_range(0.3..1.2),
            })
            .collect();
        Self {
            stars,
            width,
            height,
        }
    }

    /// Scroll downward; stars wrap back to the top at a fresh column
    pub fn update(&mut self, dt: f32, rng: &mut Pcg32) {
        for star in &mut self.stars {
            star.y += (18.0 + star.s * 25.0) * dt;
            if star.y >= self.height as f32 {
                star.y = 0.0;
                star.x = rng.random_range(0..self.width);
                star.s = rng.random_range(0.3..1.2);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn stars_stay_in_bounds_across_updates() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = Starfield::new(320, 240, &mut rng);
        for _ in 0..600 {
            field.update(1.0 / 30.0, &mut rng);
        }
        for star in field.iter() {
            assert!((0..320).contains(&star.x));
            assert!(star.y >= 0.0 && star.y < 240.0);
        }
    }
}
