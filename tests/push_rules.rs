//! Decoupler rule coverage: pushes, blockers, bounds, the win condition

use glam::IVec2;

use logic_sims::games::decoupler::Decoupler;
use logic_sims::games::Minigame;
use logic_sims::sim::{Button, InputState};

#[test]
fn step_into_empty_space_moves_the_player() {
    let mut g = Decoupler::new();
    assert!(g.try_move(0, -1));
    assert_eq!(g.player, IVec2::new(5, 4));
}

#[test]
fn walls_block_the_player() {
    let mut g = Decoupler::new();
    // Wall column sits directly left of the start
    assert!(!g.try_move(-1, 0));
    assert_eq!(g.player, IVec2::new(5, 5));
}

#[test]
fn grid_edges_act_as_walls() {
    let mut g = Decoupler::new();
    g.player = IVec2::new(0, 0);
    assert!(!g.try_move(-1, 0));
    assert!(!g.try_move(0, -1));
    assert_eq!(g.player, IVec2::new(0, 0));
}

#[test]
fn adjacent_block_gets_pushed() {
    let mut g = Decoupler::new();
    g.player = IVec2::new(7, 5);
    assert!(g.try_move(1, 0));
    assert_eq!(g.player, IVec2::new(8, 5));
    assert!(g.blocks.contains(&IVec2::new(9, 5)));
}

#[test]
fn push_into_a_wall_cancels_the_whole_move() {
    let mut g = Decoupler::new();
    g.blocks[0] = IVec2::new(5, 4);
    g.player = IVec2::new(6, 4);
    // Wall at (4,4) sits behind the block
    assert!(!g.try_move(-1, 0));
    assert_eq!(g.player, IVec2::new(6, 4));
    assert!(g.blocks.contains(&IVec2::new(5, 4)));
}

#[test]
fn two_blocks_in_a_row_cannot_be_pushed() {
    let mut g = Decoupler::new();
    g.blocks[0] = IVec2::new(7, 5);
    g.blocks[1] = IVec2::new(8, 5);
    g.player = IVec2::new(6, 5);
    assert!(!g.try_move(1, 0));
    assert_eq!(g.player, IVec2::new(6, 5));
}

#[test]
fn covering_every_target_solves_and_resets_the_layout() {
    let mut g = Decoupler::new();
    // One block already home, push the other onto its target
    g.blocks[1] = IVec2::new(5, 10);
    g.blocks[0] = IVec2::new(11, 5);
    g.player = IVec2::new(10, 5);
    assert!(g.try_move(1, 0));
    assert_eq!(g.session.wave, 2);
    // Layout resets for the next node
    assert_eq!(g.player, IVec2::new(5, 5));
    assert!(g.blocks.contains(&IVec2::new(8, 5)));
    assert!(g.blocks.contains(&IVec2::new(5, 8)));
}

#[test]
fn held_direction_steps_on_a_cooldown() {
    let mut g = Decoupler::new();
    let mut input = InputState::new();
    input.key_down(Button::Up);
    g.update(&input, 0.016);
    input.end_frame();
    assert_eq!(g.player, IVec2::new(5, 4));
    // Within the cooldown window nothing moves
    for _ in 0..4 {
        g.update(&input, 0.016);
        input.end_frame();
    }
    assert_eq!(g.player, IVec2::new(5, 4));
    // Past it, the held key steps again
    for _ in 0..6 {
        g.update(&input, 0.016);
        input.end_frame();
    }
    assert_eq!(g.player, IVec2::new(5, 3));
}

#[test]
fn there_is_no_failure_state() {
    let mut g = Decoupler::new();
    for _ in 0..200 {
        g.try_move(1, 0);
        g.try_move(0, 1);
    }
    assert!(!g.session.game_over);
    assert_eq!(g.session.score, 0);
}
