//! SIM_04 Decoupler - grid block-pushing puzzle
//!
//! Sokoban rules on a 16x12 grid of 20-pixel cells: walls block, a single
//! data block can be pushed into free space, two blocks or a wall behind it
//! cancel the push. Covering every target resets the layout and counts a
//! decoupled node. There are no lives and no failure state.

use glam::IVec2;

use super::{GameKind, Minigame};
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::render::{self, FrameBuffer, Shade};
use crate::sim::{Button, InputState, LifePolicy, SessionState};

pub const GRID: i32 = 20;
pub const GRID_W: i32 = SCREEN_W / GRID;
pub const GRID_H: i32 = SCREEN_H / GRID;

/// Held-key step cadence in seconds
const MOVE_COOLDOWN: f32 = 0.15;
/// How long the solved banner stays up
const BANNER_TIME: f32 = 2.0;

const PLAYER_START: IVec2 = IVec2::new(5, 5);
const BLOCK_STARTS: [IVec2; 2] = [IVec2::new(8, 5), IVec2::new(5, 8)];
const TARGETS: [IVec2; 2] = [IVec2::new(12, 5), IVec2::new(5, 10)];
const WALLS: [IVec2; 3] = [IVec2::new(4, 4), IVec2::new(4, 5), IVec2::new(4, 6)];

pub struct Decoupler {
    pub session: SessionState,
    pub player: IVec2,
    pub blocks: Vec<IVec2>,
    pub targets: Vec<IVec2>,
    pub walls: Vec<IVec2>,
    move_cooldown: f32,
    banner_t: f32,
}

impl Decoupler {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(0, LifePolicy::AtZero),
            player: PLAYER_START,
            blocks: BLOCK_STARTS.to_vec(),
            targets: TARGETS.to_vec(),
            walls: WALLS.to_vec(),
            move_cooldown: 0.0,
            banner_t: 0.0,
        }
    }

    fn is_wall(&self, at: IVec2) -> bool {
        !(0..GRID_W).contains(&at.x)
            || !(0..GRID_H).contains(&at.y)
            || self.walls.contains(&at)
    }

    /// Attempt a one-cell step, pushing at most one block. Returns whether
    /// the player moved.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let step = IVec2::new(dx, dy);
        let next = self.player + step;
        if self.is_wall(next) {
            return false;
        }
        if let Some(idx) = self.blocks.iter().position(|&b| b == next) {
            let behind = next + step;
            if self.is_wall(behind) || self.blocks.contains(&behind) {
                return false;
            }
            self.blocks[idx] = behind;
        }
        self.player = next;

        if self.solved() {
            self.session.wave += 1;
            self.banner_t = BANNER_TIME;
            self.player = PLAYER_START;
            self.blocks = BLOCK_STARTS.to_vec();
        }
        true
    }

    /// Every target is covered by some block
    pub fn solved(&self) -> bool {
        self.targets.iter().all(|t| self.blocks.contains(t))
    }
}

impl Default for Decoupler {
    fn default() -> Self {
        Self::new()
    }
}

impl Minigame for Decoupler {
    fn kind(&self) -> GameKind {
        GameKind::Decoupler
    }

    fn reset(&mut self) {
        self.session.reset();
        self.player = PLAYER_START;
        self.blocks = BLOCK_STARTS.to_vec();
        self.move_cooldown = 0.0;
        self.banner_t = 0.0;
    }

    fn update(&mut self, input: &InputState, dt: f32) {
        self.session.t += dt;
        if self.banner_t > 0.0 {
            self.banner_t -= dt;
        }
        self.move_cooldown -= dt;
        if self.move_cooldown > 0.0 {
            return;
        }
        let step = if input.is_held(Button::Left) {
            Some((-1, 0))
        } else if input.is_held(Button::Right) {
            Some((1, 0))
        } else if input.is_held(Button::Up) {
            Some((0, -1))
        } else if input.is_held(Button::Down) {
            Some((0, 1))
        } else {
            None
        };
        if let Some((dx, dy)) = step {
            self.try_move(dx, dy);
            self.move_cooldown = MOVE_COOLDOWN;
        }
    }

    fn render(&self, fb: &mut FrameBuffer) {
        fb.clear(Shade::Black);

        for x in (0..SCREEN_W).step_by(GRID as usize) {
            fb.fill_rect(x, 0, 1, SCREEN_H, Shade::GreenFaint);
        }
        for y in (0..SCREEN_H).step_by(GRID as usize) {
            fb.fill_rect(0, y, SCREEN_W, 1, Shade::GreenFaint);
        }

        for t in &self.targets {
            fb.fill_rect(t.x * GRID, t.y * GRID, GRID, GRID, Shade::GreenDim);
        }
        for w in &self.walls {
            fb.fill_rect(w.x * GRID, w.y * GRID, GRID, GRID, Shade::Grey);
        }
        for b in &self.blocks {
            fb.fill_rect(b.x * GRID + 2, b.y * GRID + 2, GRID - 4, GRID - 4, Shade::White);
            fb.outline_rect(b.x * GRID + 2, b.y * GRID + 2, GRID - 4, GRID - 4, Shade::Green);
        }
        fb.fill_rect(
            self.player.x * GRID,
            self.player.y * GRID,
            GRID,
            GRID,
            Shade::Green,
        );

        render::draw_text(
            fb,
            10,
            4,
            &format!("NODE {:02}", self.session.wave),
            Shade::Green,
            1,
        );

        if self.banner_t > 0.0 {
            fb.fill_rect(0, SCREEN_H / 2 - 12, SCREEN_W, 24, Shade::Black);
            render::draw_text_centered(
                fb,
                SCREEN_W / 2,
                SCREEN_H / 2 - 3,
                "NODE DECOUPLED // UPLINK SECURE",
                Shade::Green,
                1,
            );
        }
    }

    fn session(&self) -> &SessionState {
        &self.session
    }
}
