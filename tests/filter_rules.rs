//! Truth Filter rule coverage: catches, penalties, lives, the score floor

use logic_sims::games::truth_filter::{FallingItem, ItemKind, TruthFilter};
use logic_sims::games::Minigame;
use logic_sims::sim::{Button, InputState, LifePolicy, Rect};

const DT: f32 = 0.016;

fn game() -> TruthFilter {
    TruthFilter::new(1, 0)
}

fn idle() -> InputState {
    InputState::new()
}

/// A stationary item parked on the player so the next update catches it
fn item_on_player(g: &TruthFilter, kind: ItemKind) -> FallingItem {
    FallingItem {
        rect: Rect::new(g.player.pos.x + 2.0, g.player.pos.y + 2.0, 10.0, 10.0),
        kind,
        speed: 0.0,
    }
}

#[test]
fn starts_with_three_lives_at_zero_policy() {
    let g = game();
    assert_eq!(g.session.lives, 3);
    assert_eq!(g.session.policy(), LifePolicy::AtZero);
    assert!(g.items.is_empty());
}

#[test]
fn catching_truth_pays_one_hundred() {
    let mut g = game();
    let item = item_on_player(&g, ItemKind::Truth);
    g.items.push(item);
    g.update(&idle(), DT);
    assert_eq!(g.session.score, 100);
    assert_eq!(g.session.lives, 3);
}

#[test]
fn catching_noise_costs_a_life_and_fifty_points() {
    let mut g = game();
    let truth = item_on_player(&g, ItemKind::Truth);
    g.items.push(truth);
    g.update(&idle(), DT);
    let noise = item_on_player(&g, ItemKind::Noise);
    g.items.push(noise);
    g.update(&idle(), DT);
    assert_eq!(g.session.score, 50);
    assert_eq!(g.session.lives, 2);
}

#[test]
fn penalty_floors_the_score_at_zero() {
    let mut g = game();
    let noise = item_on_player(&g, ItemKind::Noise);
    g.items.push(noise);
    g.update(&idle(), DT);
    assert_eq!(g.session.score, 0);
    assert_eq!(g.session.lives, 2);
}

#[test]
fn third_noise_ends_the_run() {
    let mut g = game();
    for _ in 0..3 {
        let noise = item_on_player(&g, ItemKind::Noise);
        g.items.push(noise);
        g.update(&idle(), DT);
    }
    assert_eq!(g.session.lives, 0);
    assert!(g.session.game_over);
}

#[test]
fn final_hit_still_applies_the_penalty() {
    let mut g = game();
    let truth = item_on_player(&g, ItemKind::Truth);
    g.items.push(truth);
    g.update(&idle(), DT);
    g.session.lives = 1;
    let noise = item_on_player(&g, ItemKind::Noise);
    g.items.push(noise);
    g.update(&idle(), DT);
    assert_eq!(g.session.score, 50);
    assert!(g.session.game_over);
}

#[test]
fn game_over_freezes_updates_until_reset() {
    let mut g = game();
    g.session.game_over = true;
    let mut input = idle();
    input.key_down(Button::Left);
    let x = g.player.pos.x;
    g.update(&input, DT);
    assert_eq!(g.player.pos.x, x);
    g.reset();
    assert!(!g.session.game_over);
    assert_eq!(g.session.lives, 3);
    assert!(g.items.is_empty());
}

#[test]
fn movement_clamps_to_the_screen() {
    let mut g = game();
    let mut input = idle();
    input.key_down(Button::Left);
    for _ in 0..200 {
        g.update(&input, DT);
        // Keep the stream out of the way of the movement assertions
        g.items.clear();
    }
    assert_eq!(g.player.pos.x, 0.0);
    input.key_up(Button::Left);
    input.key_down(Button::Right);
    for _ in 0..200 {
        g.update(&input, DT);
        g.items.clear();
    }
    assert_eq!(g.player.pos.x, 320.0 - 10.0);
}

#[test]
fn items_despawn_below_the_screen() {
    let mut g = game();
    g.items.push(FallingItem {
        rect: Rect::new(50.0, 235.0, 10.0, 10.0),
        kind: ItemKind::Noise,
        speed: 1234.0,
    });
    g.update(&idle(), DT);
    assert!(g.items.iter().all(|i| i.speed != 1234.0));
    assert_eq!(g.session.lives, 3);
}
