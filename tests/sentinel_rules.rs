//! Sentinel Def rule coverage: wave formation, lives, bombs, scoring

use glam::Vec2;

use logic_sims::games::sentinel::{Hostile, HostileClass, Sentinel, Shot};
use logic_sims::games::Minigame;
use logic_sims::sim::{Button, InputState, LifePolicy, Rect};

const DT: f32 = 0.016;

fn game() -> Sentinel {
    Sentinel::new(1, 0, 256)
}

fn idle() -> InputState {
    InputState::new()
}

fn step(game: &mut Sentinel, input: &mut InputState, frames: usize) {
    for _ in 0..frames {
        game.update(input, DT);
        input.end_frame();
    }
}

fn shot_on_player(game: &Sentinel) -> Shot {
    let p = game.player.rect;
    Shot {
        rect: Rect::new(p.pos.x + 2.0, p.pos.y + 2.0, 2.0, 6.0),
        vel: Vec2::new(0.0, 95.0),
    }
}

#[test]
fn first_wave_is_a_full_formation() {
    let g = game();
    assert_eq!(g.hostiles.len(), 18);
    assert!(g.hostiles.iter().all(|h| h.alive));
    assert_eq!(g.session.lives, 3);
    assert_eq!(g.session.bombs, 2);
    assert_eq!(g.session.wave, 1);
    assert_eq!(g.session.policy(), LifePolicy::BelowZero);
}

#[test]
fn formation_mixes_all_three_classes() {
    let g = game();
    for class in [
        HostileClass::Leader,
        HostileClass::Fighter,
        HostileClass::Drone,
    ] {
        assert!(g.hostiles.iter().any(|h| h.class == class));
    }
    // Leaders take two hits
    assert!(
        g.hostiles
            .iter()
            .filter(|h| h.class == HostileClass::Leader)
            .all(|h| h.hp == 2)
    );
}

#[test]
fn clearing_the_wave_advances_and_respawns() {
    let mut g = game();
    for h in &mut g.hostiles {
        h.alive = false;
    }
    g.update(&idle(), DT);
    assert_eq!(g.session.wave, 2);
    assert!(g.hostiles.len() >= 18);
    assert!(g.hostiles.iter().all(|h| h.alive));
    // Wave clear replenishes a bomb
    assert_eq!(g.session.bombs, 3);
}

#[test]
fn hostile_shot_costs_a_life_and_recenters_the_ship() {
    let mut g = game();
    g.player.invuln = 0.0;
    g.player.rect.pos.x = 50.0;
    let shot = shot_on_player(&g);
    g.hostile_shots.push(shot);
    g.update(&idle(), DT);
    assert_eq!(g.session.lives, 2);
    assert!(g.player.invuln > 0.0);
    assert_eq!(g.player.rect.pos.x, 160.0);
    assert!(g.session.shake > 0.0);
    assert!(!g.session.game_over);
}

#[test]
fn invulnerability_grace_protects_lives() {
    let mut g = game();
    assert!(g.player.invuln > 0.0);
    let shot = shot_on_player(&g);
    g.hostile_shots.push(shot);
    g.update(&idle(), DT);
    assert_eq!(g.session.lives, 3);
}

#[test]
fn run_ends_only_below_zero_lives() {
    let mut g = game();
    g.session.lives = 0;
    g.player.invuln = 0.0;
    let shot = shot_on_player(&g);
    g.hostile_shots.push(shot);
    g.update(&idle(), DT);
    assert_eq!(g.session.lives, -1);
    assert!(g.session.game_over);
}

#[test]
fn drone_kill_awards_fifty_points() {
    let mut g = game();
    g.hostiles.clear();
    g.hostiles.push(Hostile {
        rect: Rect::new(100.0, 100.0, 12.0, 10.0),
        home: Vec2::new(100.0, 100.0),
        class: HostileClass::Drone,
        hp: 1,
        phase: 0.0,
        diving: false,
        dive_t: 0.0,
        fire_t: 10.0,
        alive: true,
    });
    g.shots.push(Shot {
        rect: Rect::new(104.0, 102.0, 2.0, 6.0),
        vel: Vec2::ZERO,
    });
    g.update(&idle(), DT);
    assert_eq!(g.session.score, 50);
}

#[test]
fn leader_takes_two_hits_and_pays_more() {
    let mut g = game();
    g.hostiles.clear();
    g.hostiles.push(Hostile {
        rect: Rect::new(100.0, 100.0, 14.0, 10.0),
        home: Vec2::new(100.0, 100.0),
        class: HostileClass::Leader,
        hp: 2,
        phase: 0.0,
        diving: false,
        dive_t: 0.0,
        fire_t: 10.0,
        alive: true,
    });
    g.shots.push(Shot {
        rect: Rect::new(104.0, 102.0, 2.0, 6.0),
        vel: Vec2::ZERO,
    });
    g.update(&idle(), DT);
    assert_eq!(g.session.score, 0);
    assert!(g.hostiles[0].alive);
    g.shots.push(Shot {
        rect: Rect::new(104.0, 102.0, 2.0, 6.0),
        vel: Vec2::ZERO,
    });
    g.update(&idle(), DT);
    assert_eq!(g.session.score, 120);
}

#[test]
fn fire_is_throttled_by_cooldown() {
    let mut g = game();
    let mut input = idle();
    input.key_down(Button::Fire);
    step(&mut g, &mut input, 1);
    assert_eq!(g.shots.len(), 1);
    // Held fire waits out the cooldown before the next shot
    step(&mut g, &mut input, 4);
    assert_eq!(g.shots.len(), 1);
    step(&mut g, &mut input, 5);
    assert_eq!(g.shots.len(), 2);
}

#[test]
fn bomb_clears_hostile_shots_and_spends_a_charge() {
    let mut g = game();
    g.hostile_shots.push(Shot {
        rect: Rect::new(10.0, 10.0, 2.0, 6.0),
        vel: Vec2::new(0.0, 95.0),
    });
    let mut input = idle();
    input.key_down(Button::Bomb);
    g.update(&input, DT);
    assert_eq!(g.session.bombs, 1);
    assert!(g.hostile_shots.is_empty());
    assert!(g.session.shake > 0.0);
}

#[test]
fn updates_stop_after_game_over_until_reset() {
    let mut g = game();
    g.session.add_score(500);
    g.session.game_over = true;
    let t_before = g.session.t;
    let mut input = idle();
    input.key_down(Button::Fire);
    g.update(&input, DT);
    assert_eq!(g.session.t, t_before);
    assert!(g.shots.is_empty());
    g.reset();
    assert!(!g.session.game_over);
    assert_eq!(g.session.score, 0);
    assert_eq!(g.session.high_score, 500);
    assert_eq!(g.session.lives, 3);
    assert_eq!(g.hostiles.len(), 18);
}
