//! SIM_03 Truth Filter - catch falling signal, dodge falling noise
//!
//! Items rain from the top edge; roughly 70% are noise. Catching signal
//! pays 100, catching noise costs a life and 50 points (floored at zero).
//! The run ends when lives reach zero.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{GameKind, Minigame};
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::render::{self, FrameBuffer, Shade};
use crate::sim::{Button, InputState, LifePolicy, Rect, SessionState};

const PLAYER_SIZE: f32 = 10.0;
const PLAYER_Y: f32 = SCREEN_H as f32 - 30.0;
const PLAYER_SPEED: f32 = 180.0;
const ITEM_SIZE: f32 = 10.0;
/// Per-second spawn rate; the chance of at least one item is ~this * dt
const SPAWN_RATE: f32 = 3.0;
const NOISE_SHARE: f64 = 0.7;
const TRUTH_POINTS: u32 = 100;
const NOISE_PENALTY: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Truth,
    Noise,
}

#[derive(Debug, Clone)]
pub struct FallingItem {
    pub rect: Rect,
    pub kind: ItemKind,
    /// Fall speed in px/s
    pub speed: f32,
}

pub struct TruthFilter {
    pub session: SessionState,
    pub player: Rect,
    pub items: Vec<FallingItem>,
    rng: Pcg32,
}

impl TruthFilter {
    pub fn new(seed: u64, best_score: u32) -> Self {
        let mut session = SessionState::new(3, LifePolicy::AtZero);
        session.high_score = best_score;
        Self {
            session,
            player: Self::spawn_rect(),
            items: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn spawn_rect() -> Rect {
        Rect::new(SCREEN_W as f32 / 2.0, PLAYER_Y, PLAYER_SIZE, PLAYER_SIZE)
    }

    fn spawn_item(&mut self) {
        self.items.push(FallingItem {
            rect: Rect::new(
                self.rng.random_range(0.0..SCREEN_W as f32 - ITEM_SIZE),
                -20.0,
                ITEM_SIZE,
                ITEM_SIZE,
            ),
            kind: if self.rng.random_bool(NOISE_SHARE) {
                ItemKind::Noise
            } else {
                ItemKind::Truth
            },
            speed: self.rng.random_range(90.0..210.0),
        });
    }
}

impl Minigame for TruthFilter {
    fn kind(&self) -> GameKind {
        GameKind::TruthFilter
    }

    fn reset(&mut self) {
        self.session.reset();
        self.player = Self::spawn_rect();
        self.items.clear();
    }

    fn update(&mut self, input: &InputState, dt: f32) {
        if self.session.game_over {
            return;
        }
        self.session.t += dt;

        let mut ax = 0.0;
        if input.is_held(Button::Left) {
            ax -= 1.0;
        }
        if input.is_held(Button::Right) {
            ax += 1.0;
        }
        self.player.pos.x += ax * PLAYER_SPEED * dt;
        self.player.pos.x = self.player.pos.x.clamp(0.0, SCREEN_W as f32 - PLAYER_SIZE);

        if self.rng.random::<f32>() < SPAWN_RATE * dt {
            self.spawn_item();
        }

        let player = self.player;
        let mut caught_truth = 0u32;
        let mut caught_noise = 0u32;
        self.items.retain_mut(|item| {
            item.rect.pos.y += item.speed * dt;
            if player.overlaps(&item.rect) {
                match item.kind {
                    ItemKind::Truth => caught_truth += 1,
                    ItemKind::Noise => caught_noise += 1,
                }
                return false;
            }
            item.rect.pos.y < SCREEN_H as f32
        });
        for _ in 0..caught_truth {
            self.session.add_score(TRUTH_POINTS);
        }
        for _ in 0..caught_noise {
            // Penalty lands before the life, so it still applies on the
            // hit that ends the run
            self.session.penalize(NOISE_PENALTY);
            self.session.lose_life();
        }
    }

    fn render(&self, fb: &mut FrameBuffer) {
        fb.clear(Shade::Black);

        let px = self.player.pos.x as i32;
        let py = self.player.pos.y as i32;
        fb.fill_rect(px, py, PLAYER_SIZE as i32, PLAYER_SIZE as i32, Shade::White);
        fb.outline_rect(
            px - 2,
            py - 2,
            PLAYER_SIZE as i32 + 4,
            PLAYER_SIZE as i32 + 4,
            Shade::Green,
        );

        for item in &self.items {
            let x = item.rect.pos.x as i32;
            let y = item.rect.pos.y as i32;
            match item.kind {
                ItemKind::Truth => fb.fill_rect(x, y, 8, 8, Shade::White),
                ItemKind::Noise => {
                    fb.fill_rect(x, y, 8, 8, Shade::Red);
                    render::draw_text(fb, x - 4, y - 7, "FAKE", Shade::Red, 1);
                }
            }
        }

        let s = &self.session;
        render::draw_text(fb, 10, 12, &format!("SCORE: {}", s.score), Shade::Green, 1);
        render::draw_text(fb, 10, 24, &format!("LIVES: {}", s.lives.max(0)), Shade::Green, 1);

        if s.game_over {
            fb.dim_all();
            render::draw_text_centered(
                fb,
                SCREEN_W / 2,
                SCREEN_H / 2 - 12,
                "UPLINK INTERRUPTED",
                Shade::Green,
                1,
            );
            render::draw_text_centered(
                fb,
                SCREEN_W / 2,
                SCREEN_H / 2 + 4,
                "TRUTH WAS COMPROMISED",
                Shade::Green,
                1,
            );
            render::draw_text_centered(
                fb,
                SCREEN_W / 2,
                SCREEN_H / 2 + 24,
                "PRESS ENTER TO RESTART",
                Shade::GreenSoft,
                1,
            );
        }
    }

    fn session(&self) -> &SessionState {
        &self.session
    }
}
