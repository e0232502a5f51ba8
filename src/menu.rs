//! Cabinet select screen
//!
//! A starfield backdrop behind the four simulations, their blurbs and best
//! scores. Digits pick a game; 's' and 'm' flip presentation toggles and
//! persist them immediately.

use std::io;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{FRAME_MS, MAX_FRAME_DT, SCREEN_H, SCREEN_W};
use crate::games::GameKind;
use crate::highscores::HighScores;
use crate::platform::{TermSignal, Terminal};
use crate::render::{self, FrameBuffer, Shade};
use crate::settings::Settings;
use crate::sim::{InputState, Starfield};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameKind),
    Quit,
}

pub fn show_menu(
    term: &mut Terminal,
    settings: &mut Settings,
    scores: &HighScores,
    seed: u64,
) -> io::Result<MenuChoice> {
    let frame_budget = Duration::from_millis(FRAME_MS);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut stars = Starfield::new(SCREEN_W, SCREEN_H, &mut rng);
    let mut input = InputState::new();
    let mut fb = FrameBuffer::new();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last).as_secs_f32().min(MAX_FRAME_DT);
        last = frame_start;

        let (signal, chars) = term.pump(&mut input);
        if signal == TermSignal::Quit || signal == TermSignal::Back {
            return Ok(MenuChoice::Quit);
        }
        for c in chars {
            match c {
                '1' => return Ok(MenuChoice::Play(GameKind::Sentinel)),
                '2' => return Ok(MenuChoice::Play(GameKind::IceBreaker)),
                '3' => return Ok(MenuChoice::Play(GameKind::TruthFilter)),
                '4' => return Ok(MenuChoice::Play(GameKind::Decoupler)),
                'q' => return Ok(MenuChoice::Quit),
                's' => {
                    settings.scanlines = !settings.scanlines;
                    if let Err(e) = settings.save() {
                        log::warn!("Failed to save settings: {}", e);
                    }
                }
                'm' => {
                    settings.reduced_motion = !settings.reduced_motion;
                    if let Err(e) = settings.save() {
                        log::warn!("Failed to save settings: {}", e);
                    }
                }
                _ => {}
            }
        }
        input.end_frame();

        stars.update(dt, &mut rng);

        fb.clear(Shade::Black);
        for star in stars.iter() {
            let shade = if star.is_bright() {
                Shade::GreenSoft
            } else {
                Shade::GreenDim
            };
            fb.put(star.x, star.y as i32, shade);
        }

        render::draw_text_centered(&mut fb, SCREEN_W / 2, 18, "LOGIC SIMULATORS", Shade::Green, 3);
        render::draw_text_centered(
            &mut fb,
            SCREEN_W / 2,
            40,
            "SELECT SIMULATION",
            Shade::GreenSoft,
            1,
        );

        for (i, kind) in GameKind::ALL.iter().enumerate() {
            let y = 62 + i as i32 * 34;
            render::draw_text(
                &mut fb,
                40,
                y,
                &format!("[{}] SIM 0{} {}", i + 1, i + 1, kind.title()),
                Shade::Green,
                1,
            );
            render::draw_text(&mut fb, 56, y + 9, kind.blurb(), Shade::GreenDim, 1);
            let best = scores.best(*kind);
            if best > 0 {
                render::draw_text(&mut fb, 56, y + 18, &format!("BEST {}", best), Shade::GreenSoft, 1);
            }
        }

        let scan = if settings.scanlines { "ON" } else { "OFF" };
        let motion = if settings.reduced_motion { "ON" } else { "OFF" };
        render::draw_text(
            &mut fb,
            40,
            SCREEN_H - 28,
            &format!("(S) SCANLINES {}  (M) REDUCED MOTION {}", scan, motion),
            Shade::GreenDim,
            1,
        );
        render::draw_text(&mut fb, 40, SCREEN_H - 16, "(Q) DISCONNECT", Shade::GreenDim, 1);

        if settings.effective_scanlines() {
            fb.scanlines();
        }
        term.present(&fb, (0, 0))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}
