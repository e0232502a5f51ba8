//! SIM_01 Sentinel Def - fixed shooter against diving drone waves
//!
//! Hostiles spawn in a formation grid, drift and bob in place, and
//! occasionally peel off into dive attacks that strafe the player. Bombs
//! clear nearby hostiles and every hostile shot. Lives follow the
//! below-zero policy: the run ends on the hit that takes lives to -1.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{GameKind, Minigame};
use crate::consts::{FREEZE_DT_SCALE, SCREEN_H, SCREEN_W};
use crate::render::{self, FrameBuffer, Shade};
use crate::sim::{Button, InputState, LifePolicy, ParticleSet, Rect, SessionState, Starfield};

const PLAYER_W: f32 = 12.0;
const PLAYER_H: f32 = 8.0;
const PLAYER_SPEED: f32 = 120.0;
const PLAYER_SPAWN_X: f32 = SCREEN_W as f32 / 2.0;
const PLAYER_Y: f32 = SCREEN_H as f32 - 18.0;
const FIRE_COOLDOWN: f32 = 0.12;
const SHOT_SPEED: f32 = 220.0;
const SPAWN_INVULN: f32 = 1.2;
const HIT_INVULN: f32 = 1.3;
const BOMB_RADIUS: f32 = 140.0;
const MAX_BOMBS: u32 = 4;
const STARTING_BOMBS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostileClass {
    Leader,
    Fighter,
    Drone,
}

impl HostileClass {
    /// Fixed point value awarded once, when the hostile goes inactive
    pub fn points(self) -> u32 {
        match self {
            HostileClass::Leader => 120,
            HostileClass::Fighter => 80,
            HostileClass::Drone => 50,
        }
    }

    /// Per-frame dive probability at the 60 Hz reference rate
    fn dive_chance(self) -> f32 {
        match self {
            HostileClass::Leader => 0.003,
            _ => 0.001,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hostile {
    pub rect: Rect,
    /// Formation slot this hostile eases back toward
    pub home: Vec2,
    pub class: HostileClass,
    pub hp: i32,
    pub phase: f32,
    pub diving: bool,
    pub dive_t: f32,
    pub fire_t: f32,
    pub alive: bool,
}

#[derive(Debug, Clone)]
pub struct Shot {
    pub rect: Rect,
    pub vel: Vec2,
}

#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub rect: Rect,
    pub cooldown: f32,
    pub invuln: f32,
}

pub struct Sentinel {
    pub session: SessionState,
    pub player: PlayerShip,
    pub hostiles: Vec<Hostile>,
    pub shots: Vec<Shot>,
    pub hostile_shots: Vec<Shot>,
    pub particles: ParticleSet,
    stars: Starfield,
    rng: Pcg32,
}

impl Sentinel {
    pub fn new(seed: u64, best_score: u32, particle_budget: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = Starfield::new(SCREEN_W, SCREEN_H, &mut rng);
        let mut session = SessionState::new(3, LifePolicy::BelowZero);
        session.high_score = best_score;
        session.bombs = STARTING_BOMBS;
        let mut game = Self {
            session,
            player: PlayerShip {
                rect: Rect::new(PLAYER_SPAWN_X, PLAYER_Y, PLAYER_W, PLAYER_H),
                cooldown: 0.0,
                invuln: SPAWN_INVULN,
            },
            hostiles: Vec::new(),
            shots: Vec::new(),
            hostile_shots: Vec::new(),
            particles: ParticleSet::new(particle_budget),
            stars,
            rng,
        };
        game.spawn_wave();
        game
    }

    /// Formation grid for the current wave: 6 columns, 3-5 rows
    pub fn spawn_wave(&mut self) {
        let wave = self.session.wave;
        let cols = 6;
        let rows = 3 + ((wave - 1) / 2).min(2);
        let (start_x, start_y, dx, dy) = (60.0, 40.0, 34.0, 20.0);
        for r in 0..rows {
            for c in 0..cols {
                let class = match r {
                    0 => HostileClass::Leader,
                    1 => HostileClass::Fighter,
                    _ => HostileClass::Drone,
                };
                let w = if r == 0 { 14.0 } else { 12.0 };
                let home = Vec2::new(start_x + c as f32 * dx, start_y + r as f32 * dy);
                self.hostiles.push(Hostile {
                    rect: Rect::new(home.x, home.y, w, 10.0),
                    home,
                    class,
                    hp: if r == 0 { 2 } else { 1 },
                    phase: self.rng.random_range(0.0..std::f32::consts::TAU),
                    diving: false,
                    dive_t: 0.0,
                    fire_t: self.rng.random_range(0.6..2.1),
                    alive: true,
                });
            }
        }
    }

    fn award(&mut self, class: HostileClass) {
        self.session.add_score(class.points());
    }

    fn hostile_fire(rng: &mut Pcg32, wave: u32, from: &Rect) -> Shot {
        Shot {
            rect: Rect::new(from.pos.x + from.size.x / 2.0 - 1.0, from.pos.y + from.size.y, 2.0, 6.0),
            vel: Vec2::new(rng.random_range(-10.0..10.0), 95.0 + wave as f32 * 6.0),
        }
    }

    /// Damage-the-player path; a no-op while the invulnerability grace runs
    fn kill_player(&mut self) {
        if self.player.invuln > 0.0 {
            return;
        }
        self.session.lose_life();
        self.session.shake = 0.35;
        self.session.freeze = 0.08;
        let center = self.player.rect.center();
        self.particles.spawn_burst(center, 22, &mut self.rng);
        self.player.invuln = HIT_INVULN;
        self.player.rect.pos.x = PLAYER_SPAWN_X;
    }
}

impl Minigame for Sentinel {
    fn kind(&self) -> GameKind {
        GameKind::Sentinel
    }

    fn reset(&mut self) {
        self.session.reset();
        self.session.bombs = STARTING_BOMBS;
        self.player = PlayerShip {
            rect: Rect::new(PLAYER_SPAWN_X, PLAYER_Y, PLAYER_W, PLAYER_H),
            cooldown: 0.0,
            invuln: SPAWN_INVULN,
        };
        self.shots.clear();
        self.hostile_shots.clear();
        self.hostiles.clear();
        self.particles.clear();
        self.spawn_wave();
    }

    fn update(&mut self, input: &InputState, dt: f32) {
        if self.session.game_over {
            return;
        }
        let mut dt = dt;
        if self.session.freeze > 0.0 {
            self.session.freeze -= dt;
            dt *= FREEZE_DT_SCALE;
        }
        self.session.t += dt;
        let wave = self.session.wave as f32;
        let t = self.session.t;

        self.stars.update(dt, &mut self.rng);

        // Player movement and fire
        let mut ax = 0.0;
        if input.is_held(Button::Left) {
            ax -= 1.0;
        }
        if input.is_held(Button::Right) {
            ax += 1.0;
        }
        self.player.rect.pos.x += ax * PLAYER_SPEED * dt;
        self.player.rect.pos.x = self
            .player
            .rect
            .pos
            .x
            .clamp(8.0, SCREEN_W as f32 - PLAYER_W - 8.0);
        self.player.cooldown -= dt;
        if input.is_held(Button::Fire) && self.player.cooldown <= 0.0 {
            self.shots.push(Shot {
                rect: Rect::new(
                    self.player.rect.pos.x + PLAYER_W / 2.0 - 1.0,
                    self.player.rect.pos.y - 6.0,
                    2.0,
                    6.0,
                ),
                vel: Vec2::new(0.0, -SHOT_SPEED),
            });
            self.player.cooldown = FIRE_COOLDOWN;
        }

        // Bomb: clears hostile shots and damages everything near the player
        if input.was_pressed(Button::Bomb) && self.session.bombs > 0 {
            self.session.bombs -= 1;
            self.hostile_shots.clear();
            self.session.shake = 0.25;
            let center = self.player.rect.center();
            self.particles.spawn_burst(center, 18, &mut self.rng);
            for i in 0..self.hostiles.len() {
                if !self.hostiles[i].alive {
                    continue;
                }
                let d2 = self.hostiles[i].rect.center().distance_squared(center);
                if d2 < BOMB_RADIUS * BOMB_RADIUS {
                    self.hostiles[i].hp -= 1;
                    if self.hostiles[i].hp <= 0 {
                        self.hostiles[i].alive = false;
                        let class = self.hostiles[i].class;
                        let at = self.hostiles[i].rect.center();
                        self.award(class);
                        self.particles.spawn_burst(at, 12, &mut self.rng);
                    }
                }
            }
        }

        if self.player.invuln > 0.0 {
            self.player.invuln -= dt;
        }

        // Projectiles
        for s in &mut self.shots {
            s.rect.pos += s.vel * dt;
        }
        self.shots.retain(|s| s.rect.pos.y > -12.0);
        for s in &mut self.hostile_shots {
            s.rect.pos += s.vel * dt;
        }
        self.hostile_shots.retain(|s| s.rect.pos.y < SCREEN_H as f32 + 12.0);

        // Formation drift, bobbing and dive attacks
        let drift = (t * 0.9).sin() * (10.0 + (wave * 0.8).min(18.0));
        let ease = 1.0 - 0.001_f32.powf(dt);
        let mut dived_into_player: Vec<usize> = Vec::new();
        for (i, h) in self.hostiles.iter_mut().enumerate() {
            if !h.alive {
                continue;
            }
            if !h.diving {
                let bob = (t * 2.0 + h.phase).sin() * (6.0 + (wave * 0.6).min(10.0));
                h.rect.pos.x += (h.home.x + drift - h.rect.pos.x) * ease;
                h.rect.pos.y += (h.home.y + bob - h.rect.pos.y) * ease;
                let p = h.class.dive_chance() * (1.0 + wave * 0.1) * dt * 60.0;
                if self.rng.random::<f32>() < p {
                    h.diving = true;
                }
            } else {
                h.dive_t += dt;
                h.rect.pos.x += (h.dive_t * 6.0).sin() * (38.0 + wave * 2.0) * dt;
                h.rect.pos.y += (60.0 + wave * 12.0) * dt;
                h.fire_t -= dt;
                if h.fire_t <= 0.0 {
                    self.hostile_shots
                        .push(Self::hostile_fire(&mut self.rng, wave as u32, &h.rect));
                    h.fire_t = self.rng.random_range(0.35..0.95);
                }
                if h.rect.pos.y > SCREEN_H as f32 - 80.0 && h.dive_t > 1.1 {
                    h.diving = false;
                    h.dive_t = 0.0;
                    h.rect.pos.y = self.rng.random_range(18.0..40.0);
                }
            }
            if h.diving && h.rect.overlaps(&self.player.rect) {
                h.alive = false;
                dived_into_player.push(i);
            }
        }
        for i in dived_into_player {
            let class = self.hostiles[i].class;
            let at = self.hostiles[i].rect.center();
            self.award(class);
            self.particles.spawn_burst(at, 18, &mut self.rng);
            self.kill_player();
        }

        // Player shots vs hostiles
        let mut si = 0;
        'shots: while si < self.shots.len() {
            for h in self.hostiles.iter_mut().filter(|h| h.alive) {
                if self.shots[si].rect.overlaps(&h.rect) {
                    h.hp -= 1;
                    let hit_at = self.shots[si].rect.pos;
                    self.particles.spawn_burst(hit_at, 6, &mut self.rng);
                    if h.hp <= 0 {
                        h.alive = false;
                        self.session.add_score(h.class.points());
                        self.session.shake = 0.12;
                        let at = h.rect.center();
                        self.particles.spawn_burst(at, 14, &mut self.rng);
                    }
                    self.shots.remove(si);
                    continue 'shots;
                }
            }
            si += 1;
        }

        // Hostile shots vs player
        let hit = self
            .hostile_shots
            .iter()
            .any(|s| s.rect.overlaps(&self.player.rect));
        if hit {
            self.kill_player();
        }

        self.particles.update(dt);

        // Wave clear: replenish a bomb and respawn denser
        if self.hostiles.iter().all(|h| !h.alive) {
            self.session.wave += 1;
            self.session.bombs = (self.session.bombs + 1).min(MAX_BOMBS);
            self.hostiles.clear();
            self.spawn_wave();
        }

        self.session.shake = (self.session.shake - dt).max(0.0);
    }

    fn render(&self, fb: &mut FrameBuffer) {
        fb.clear(Shade::Black);

        for star in self.stars.iter() {
            let shade = if star.is_bright() {
                Shade::Green
            } else {
                Shade::GreenSoft
            };
            fb.put(star.x, star.y as i32, shade);
        }

        let s = &self.session;
        render::draw_text(
            fb,
            8,
            6,
            &format!("SCORE {:06}  HI {:06}", s.score, s.high_score),
            Shade::Green,
            1,
        );
        render::draw_text(
            fb,
            8,
            16,
            &format!("WAVE {}  LIVES {}  BOMBS {}", s.wave, s.lives.max(0), s.bombs),
            Shade::Green,
            1,
        );

        for h in self.hostiles.iter().filter(|h| h.alive) {
            let x = h.rect.pos.x as i32;
            let y = h.rect.pos.y as i32;
            let w = h.rect.size.x as i32;
            match h.class {
                HostileClass::Leader => {
                    fb.glow_rect(x + 2, y + 2, w - 4, 2);
                    fb.glow_rect(x, y + 4, w, 3);
                    fb.glow_rect(x + 6, y, 2, 2);
                }
                HostileClass::Fighter => {
                    fb.glow_rect(x + 4, y + 2, w - 8, 2);
                    fb.glow_rect(x + 2, y + 4, w - 4, 3);
                }
                HostileClass::Drone => {
                    fb.glow_rect(x + 1, y + 2, w - 2, 6);
                    fb.fill_rect(x + 5, y + 4, 2, 2, Shade::Black);
                    fb.fill_rect(x + 6, y + 4, 1, 1, Shade::Green);
                }
            }
        }

        for shot in &self.shots {
            fb.glow_rect(
                shot.rect.pos.x as i32,
                shot.rect.pos.y as i32,
                shot.rect.size.x as i32,
                shot.rect.size.y as i32,
            );
        }
        for shot in &self.hostile_shots {
            fb.fill_rect(
                shot.rect.pos.x as i32,
                shot.rect.pos.y as i32,
                shot.rect.size.x as i32,
                shot.rect.size.y as i32,
                Shade::GreenSoft,
            );
        }

        // Invulnerability flicker hides the ship on alternating ticks
        let flicker = self.player.invuln > 0.0 && (self.session.t * 12.0) as i32 % 2 == 0;
        if !flicker {
            let x = self.player.rect.pos.x as i32;
            let y = self.player.rect.pos.y as i32;
            fb.glow_rect(x + 5, y + 1, 2, 6);
            fb.glow_rect(x, y + 6, 12, 2);
            fb.glow_line(x, y + 7, x + 4, y + 3);
            fb.glow_line(x + 11, y + 7, x + 7, y + 3);
        }

        for p in self.particles.iter() {
            fb.fill_rect(
                p.pos.x as i32,
                p.pos.y as i32,
                p.size,
                p.size,
                Shade::from_intensity(p.intensity()),
            );
        }

        if self.session.game_over {
            fb.dim_all();
            render::draw_text_centered(fb, SCREEN_W / 2, SCREEN_H / 2 - 22, "GAME OVER", Shade::Green, 3);
            render::draw_text_centered(
                fb,
                SCREEN_W / 2,
                SCREEN_H / 2 + 16,
                "PRESS ENTER TO RESTART",
                Shade::Green,
                1,
            );
        }
    }

    fn session(&self) -> &SessionState {
        &self.session
    }
}
