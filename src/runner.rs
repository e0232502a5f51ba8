//! Fixed-cadence frame loop
//!
//! Drives one game session: sample input, advance the simulation with
//! clamped wall-clock dt, paint, post-process, present. Restart after game
//! over stays here so every game gets it for free.

use std::io;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::consts::{FRAME_MS, MAX_FRAME_DT};
use crate::games::Minigame;
use crate::platform::{TermSignal, Terminal};
use crate::render::{self, FrameBuffer, Shade};
use crate::settings::Settings;
use crate::sim::{Button, InputState};

/// How a session ended and what it scored
#[derive(Debug, Clone, Copy)]
pub struct GameOutcome {
    pub score: u32,
    pub wave: u32,
    /// True when the whole program should exit, not just this session
    pub quit: bool,
}

pub fn run_game(
    term: &mut Terminal,
    game: &mut dyn Minigame,
    settings: &Settings,
) -> io::Result<GameOutcome> {
    let frame_budget = Duration::from_millis(FRAME_MS);
    let mut input = InputState::new();
    let mut fb = FrameBuffer::new();
    let mut rng = rand::rng();
    let mut last = Instant::now();

    // FPS meter state
    let mut fps = 0u32;
    let mut fps_frames = 0u32;
    let mut fps_t = 0.0f32;

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last).as_secs_f32().min(MAX_FRAME_DT);
        last = frame_start;

        let (signal, _) = term.pump(&mut input);
        match signal {
            TermSignal::Quit => {
                return Ok(outcome(game, true));
            }
            TermSignal::Back => {
                return Ok(outcome(game, false));
            }
            TermSignal::None => {}
        }

        if game.session().game_over && input.was_pressed(Button::Confirm) {
            game.reset();
        } else {
            game.update(&input, dt);
        }
        // Presses are single-frame; clear them only after the update pass
        // has had its chance to observe them
        input.end_frame();

        game.render(&mut fb);
        if settings.effective_scanlines() {
            fb.scanlines();
        }

        fps_frames += 1;
        fps_t += dt;
        if fps_t >= 0.5 {
            fps = (fps_frames as f32 / fps_t).round() as u32;
            fps_frames = 0;
            fps_t = 0.0;
        }
        if settings.show_fps {
            render::draw_text(
                &mut fb,
                FrameBuffer::WIDTH - 40,
                4,
                &format!("{} FPS", fps),
                Shade::GreenSoft,
                1,
            );
        }

        let shake = game.session().shake;
        let offset = if shake > 0.0 && settings.effective_screen_shake() {
            (
                (rng.random_range(-1.0..1.0) * shake * 10.0) as i32,
                (rng.random_range(-1.0..1.0) * shake * 10.0) as i32,
            )
        } else {
            (0, 0)
        };
        term.present(&fb, offset)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}

fn outcome(game: &dyn Minigame, quit: bool) -> GameOutcome {
    let s = game.session();
    GameOutcome {
        score: s.score,
        wave: s.wave,
        quit,
    }
}
