//! SIM_02 Ice Breaker - lane-crossing run to the goal row
//!
//! The board is ten 24-pixel rows. The bottom half scrolls hostile agent
//! patrols; the upper gap rows are lethal unless the player rides a moving
//! tunnel across. Reaching the top row scores, raises the level and
//! respawns faster lanes. Lives end the run at zero.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{GameKind, Minigame};
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::render::{self, FrameBuffer, Shade};
use crate::sim::{Button, InputState, LifePolicy, Rect, SessionState};

pub const ROW_H: i32 = 24;
const ROWS: i32 = SCREEN_H / ROW_H;
const PLAYER_W: f32 = 20.0;
const PLAYER_H: f32 = ROW_H as f32 - 4.0;
const STEP_X: f32 = 24.0;
const GOAL_POINTS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneKind {
    Agent,
    Tunnel,
}

#[derive(Debug, Clone)]
pub struct LaneEntity {
    pub rect: Rect,
    /// Horizontal velocity in px/s; sign gives direction
    pub speed: f32,
    pub kind: LaneKind,
}

pub struct IceBreaker {
    pub session: SessionState,
    pub player: Rect,
    pub entities: Vec<LaneEntity>,
    rng: Pcg32,
}

impl IceBreaker {
    pub fn new(seed: u64, best_score: u32) -> Self {
        let mut session = SessionState::new(3, LifePolicy::AtZero);
        session.high_score = best_score;
        let mut game = Self {
            session,
            player: Self::spawn_rect(),
            entities: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        game.spawn_lanes();
        game
    }

    fn spawn_rect() -> Rect {
        Rect::new(
            SCREEN_W as f32 / 2.0 - PLAYER_W / 2.0,
            (SCREEN_H - ROW_H) as f32,
            PLAYER_W,
            PLAYER_H,
        )
    }

    /// Rebuild both lane bands for the current level. Agent lanes sit in the
    /// lower band, tunnels in the upper gap; adjacent lanes alternate
    /// direction and speeds scale with level.
    pub fn spawn_lanes(&mut self) {
        self.entities.clear();
        let level = self.session.wave as f32;
        for i in 1..=3 {
            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
            let speed =
                (0.5 + self.rng.random::<f32>()) * (0.8 + level * 0.2) * dir * 60.0;
            for j in 0..3 {
                self.entities.push(LaneEntity {
                    rect: Rect::new(
                        (j * 120) as f32,
                        (SCREEN_H - (i + 1) * ROW_H) as f32,
                        60.0,
                        ROW_H as f32,
                    ),
                    speed,
                    kind: LaneKind::Agent,
                });
            }
        }
        for i in 5..=7 {
            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
            let speed =
                (0.4 + self.rng.random::<f32>()) * (0.6 + level * 0.1) * dir * 60.0;
            for j in 0..2 {
                self.entities.push(LaneEntity {
                    rect: Rect::new(
                        (j * 180) as f32,
                        (SCREEN_H - (i + 1) * ROW_H) as f32,
                        100.0,
                        ROW_H as f32,
                    ),
                    speed,
                    kind: LaneKind::Tunnel,
                });
            }
        }
    }

    fn reset_player(&mut self) {
        self.player = Self::spawn_rect();
    }

    /// Row index the player currently occupies
    pub fn player_row(&self) -> i32 {
        (self.player.pos.y / ROW_H as f32) as i32
    }
}

impl Minigame for IceBreaker {
    fn kind(&self) -> GameKind {
        GameKind::IceBreaker
    }

    fn reset(&mut self) {
        self.session.reset();
        self.reset_player();
        self.spawn_lanes();
    }

    fn update(&mut self, input: &InputState, dt: f32) {
        if self.session.game_over {
            return;
        }
        self.session.t += dt;

        // Discrete hops, one per key press
        if input.was_pressed(Button::Left) {
            self.player.pos.x -= STEP_X;
        }
        if input.was_pressed(Button::Right) {
            self.player.pos.x += STEP_X;
        }
        if input.was_pressed(Button::Up) {
            self.player.pos.y -= ROW_H as f32;
        }
        if input.was_pressed(Button::Down) {
            self.player.pos.y += ROW_H as f32;
        }
        self.player.pos.x = self.player.pos.x.clamp(0.0, SCREEN_W as f32 - PLAYER_W);
        self.player.pos.y = self
            .player
            .pos
            .y
            .clamp(0.0, (SCREEN_H - ROW_H) as f32);

        // Row is judged before lane collisions can bounce the player home
        let row = self.player_row();
        let mut on_tunnel = false;

        for i in 0..self.entities.len() {
            let speed = self.entities[i].speed;
            let w = self.entities[i].rect.size.x;
            self.entities[i].rect.pos.x += speed * dt;
            if self.entities[i].rect.pos.x > SCREEN_W as f32 {
                self.entities[i].rect.pos.x = -w;
            }
            if self.entities[i].rect.pos.x < -w {
                self.entities[i].rect.pos.x = SCREEN_W as f32;
            }

            if self.player.overlaps(&self.entities[i].rect) {
                match self.entities[i].kind {
                    LaneKind::Agent => {
                        self.session.lose_life();
                        self.reset_player();
                    }
                    LaneKind::Tunnel => {
                        on_tunnel = true;
                        // Carried along with the tunnel
                        self.player.pos.x += speed * dt;
                    }
                }
            }
        }

        // The firewall gap is lethal without a tunnel underfoot
        if (2..=4).contains(&row) && !on_tunnel {
            self.session.lose_life();
            self.reset_player();
        }

        if self.player.pos.y < ROW_H as f32 {
            self.session.add_score(GOAL_POINTS);
            self.session.wave += 1;
            self.reset_player();
            self.spawn_lanes();
        }
    }

    fn render(&self, fb: &mut FrameBuffer) {
        fb.clear(Shade::Black);

        for i in 0..ROWS {
            let y = i * ROW_H;
            let backdrop = match i {
                0 => Shade::GoalGreen,
                9 => Shade::LaneGreen,
                2..=4 => Shade::Navy,
                5 => Shade::Charcoal,
                _ => Shade::Black,
            };
            if backdrop != Shade::Black {
                fb.fill_rect(0, y, SCREEN_W, ROW_H, backdrop);
            }
            fb.outline_rect(0, y, SCREEN_W, ROW_H, Shade::GreenFaint);
        }

        for e in &self.entities {
            let x = e.rect.pos.x as i32;
            let y = e.rect.pos.y as i32;
            let w = e.rect.size.x as i32;
            let (fill, label) = match e.kind {
                LaneKind::Agent => (Shade::Red, "[ ICE ]"),
                LaneKind::Tunnel => (Shade::DarkGreen, "== TUNNEL =="),
            };
            fb.fill_rect(x, y + 2, w, ROW_H - 4, fill);
            render::draw_text_centered(fb, x + w / 2, y + ROW_H / 2 - 2, label, Shade::Green, 1);
        }

        let px = self.player.pos.x as i32;
        let py = self.player.pos.y as i32;
        fb.fill_rect(px, py + 4, PLAYER_W as i32, PLAYER_H as i32, Shade::Green);
        render::draw_text_centered(
            fb,
            px + PLAYER_W as i32 / 2,
            py + ROW_H / 2 - 2,
            "(@)",
            Shade::Black,
            1,
        );

        let s = &self.session;
        render::draw_text(
            fb,
            10,
            4,
            &format!("SCORE: {}  LIVES: {}  LVL: {}", s.score, s.lives.max(0), s.wave),
            Shade::Green,
            1,
        );

        if s.game_over {
            fb.dim_all();
            render::draw_text_centered(fb, SCREEN_W / 2, SCREEN_H / 2 - 18, "UPLINK LOST", Shade::Green, 2);
            render::draw_text_centered(
                fb,
                SCREEN_W / 2,
                SCREEN_H / 2 + 14,
                "PRESS ENTER TO RECONNECT",
                Shade::Green,
                1,
            );
        }
    }

    fn session(&self) -> &SessionState {
        &self.session
    }
}
