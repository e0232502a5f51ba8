use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use logic_sims::games;
use logic_sims::menu::{self, MenuChoice};
use logic_sims::platform::Terminal;
use logic_sims::runner;
use logic_sims::{HighScores, Settings};

/// Wall clock nanos make a good-enough session seed
fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut settings = Settings::load();
    let mut scores = HighScores::load();
    let mut term = Terminal::new()?;

    loop {
        match menu::show_menu(&mut term, &mut settings, &scores, seed_from_clock())? {
            MenuChoice::Quit => break,
            MenuChoice::Play(kind) => {
                log::info!("Starting {}", kind.title());
                let mut game = games::build(
                    kind,
                    seed_from_clock(),
                    scores.best(kind),
                    settings.particle_budget(),
                );
                let outcome = runner::run_game(&mut term, game.as_mut(), &settings)?;
                if scores.record(kind, outcome.score, outcome.wave).is_some() {
                    if let Err(e) = scores.save() {
                        log::warn!("Failed to save high scores: {}", e);
                    }
                }
                if outcome.quit {
                    break;
                }
            }
        }
    }

    Ok(())
}
