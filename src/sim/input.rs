//! Frame-sampled input state
//!
//! Two sets: "currently held" and "newly pressed this frame". A key-down adds
//! to both only if the key was not already held, so holding a key never
//! re-triggers one-shot actions. The pressed set is cleared once per frame,
//! after the update pass.

/// Abstract control signals, decoupled from physical key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Bomb,
    Confirm,
}

impl Button {
    pub const COUNT: usize = 7;

    fn index(self) -> usize {
        match self {
            Button::Left => 0,
            Button::Right => 1,
            Button::Up => 2,
            Button::Down => 3,
            Button::Fire => 4,
            Button::Bomb => 5,
            Button::Confirm => 6,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; Button::COUNT],
    pressed: [bool; Button::COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, button: Button) {
        let i = button.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    pub fn key_up(&mut self, button: Button) {
        self.held[button.index()] = false;
    }

    /// Continuous actions: true while the key stays down
    pub fn is_held(&self, button: Button) -> bool {
        self.held[button.index()]
    }

    /// One-shot actions: true only on the frame the key went down
    pub fn was_pressed(&self, button: Button) -> bool {
        self.pressed[button.index()]
    }

    /// Call after each frame's update pass
    pub fn end_frame(&mut self) {
        self.pressed = [false; Button::COUNT];
    }

    /// Drop all state (on game switch, so stale holds don't leak across views)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
