//! Per-play-through session state
//!
//! One explicit struct holds every counter a game mutates during a run, so
//! update logic stays unit-testable without any rendering attached. Once the
//! game-over flag is set, all mutators become no-ops until `reset`.

use serde::{Deserialize, Serialize};

/// When losing a life ends the run. The games inherit different thresholds
/// and keep them: unifying would change observable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifePolicy {
    /// Run ends when lives reach exactly zero
    AtZero,
    /// Run ends only when lives drop below zero
    BelowZero,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u32,
    pub high_score: u32,
    /// Wave / level / solve counter, 1-based
    pub wave: u32,
    /// Signed so the BelowZero policy can represent the final -1
    pub lives: i32,
    pub bombs: u32,
    pub game_over: bool,
    /// Camera shake timer, seconds remaining
    pub shake: f32,
    /// Hit-stop timer, seconds remaining (scales dt down while active)
    pub freeze: f32,
    /// Elapsed session time, seconds
    pub t: f32,
    policy: LifePolicy,
    starting_lives: i32,
}

impl SessionState {
    pub fn new(lives: i32, policy: LifePolicy) -> Self {
        Self {
            score: 0,
            high_score: 0,
            wave: 1,
            lives,
            bombs: 0,
            game_over: false,
            shake: 0.0,
            freeze: 0.0,
            t: 0.0,
            policy,
            starting_lives: lives,
        }
    }

    /// Back to a fresh run, keeping the high score
    pub fn reset(&mut self) {
        let high = self.high_score;
        *self = Self::new(self.starting_lives, self.policy);
        self.high_score = high;
    }

    pub fn policy(&self) -> LifePolicy {
        self.policy
    }

    /// Award points; the high score tracks live
    pub fn add_score(&mut self, points: u32) {
        if self.game_over {
            return;
        }
        self.score += points;
        self.high_score = self.high_score.max(self.score);
    }

    /// Subtract points, floored at zero
    pub fn penalize(&mut self, points: u32) {
        if self.game_over {
            return;
        }
        self.score = self.score.saturating_sub(points);
    }

    /// Decrement lives and apply the game-over policy.
    /// Returns true if this loss ended the run.
    pub fn lose_life(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.lives -= 1;
        let over = match self.policy {
            LifePolicy::AtZero => self.lives <= 0,
            LifePolicy::BelowZero => self.lives < 0,
        };
        if over {
            self.game_over = true;
        }
        over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_tracks_high_score() {
        let mut s = SessionState::new(3, LifePolicy::AtZero);
        s.add_score(120);
        s.add_score(80);
        assert_eq!(s.score, 200);
        assert_eq!(s.high_score, 200);
    }

    #[test]
    fn penalty_floors_at_zero() {
        let mut s = SessionState::new(3, LifePolicy::AtZero);
        s.add_score(30);
        s.penalize(50);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn at_zero_policy_ends_on_last_life() {
        let mut s = SessionState::new(1, LifePolicy::AtZero);
        assert!(s.lose_life());
        assert_eq!(s.lives, 0);
        assert!(s.game_over);
    }

    #[test]
    fn below_zero_policy_allows_zero_lives() {
        let mut s = SessionState::new(1, LifePolicy::BelowZero);
        assert!(!s.lose_life());
        assert_eq!(s.lives, 0);
        assert!(!s.game_over);
        assert!(s.lose_life());
        assert_eq!(s.lives, -1);
        assert!(s.game_over);
    }

    #[test]
    fn game_over_freezes_all_counters() {
        let mut s = SessionState::new(1, LifePolicy::AtZero);
        s.add_score(100);
        s.lose_life();
        s.add_score(50);
        s.penalize(50);
        s.lose_life();
        assert_eq!(s.score, 100);
        assert_eq!(s.lives, 0);
    }

    #[test]
    fn reset_keeps_high_score_only() {
        let mut s = SessionState::new(3, LifePolicy::BelowZero);
        s.add_score(500);
        s.wave = 4;
        s.lose_life();
        s.reset();
        assert_eq!(s.score, 0);
        assert_eq!(s.wave, 1);
        assert_eq!(s.lives, 3);
        assert_eq!(s.high_score, 500);
        assert!(!s.game_over);
    }
}
