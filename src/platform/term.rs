use std::collections::HashMap;
use std::io::{self, BufWriter, Stdout, Write, stdout};
use std::sync::mpsc;
use std::thread;

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::render::{FrameBuffer, Shade};
use crate::sim::{Button, InputState};

/// Presented cell grid: each '▀' cell carries two 2x2-downsampled texels
const CELL_W: i32 = FrameBuffer::WIDTH / 2;
const CELL_H: i32 = FrameBuffer::HEIGHT / 4;

/// A key is considered held if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// OS key-repeat refreshes the timestamp faster than the window expires.
const HOLD_WINDOW: u64 = 4;

/// Out-of-band result of draining input for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSignal {
    None,
    /// Esc: leave the current game, back to the menu
    Back,
    /// Ctrl-C: tear everything down
    Quit,
}

/// Raw-mode terminal session. Restores the terminal on drop.
pub struct Terminal {
    out: BufWriter<Stdout>,
    rx: mpsc::Receiver<Event>,
    /// Terminal reports key release events (kitty protocol)
    enhanced: bool,
    /// Last frame each key was seen pressed or repeating
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    last_size: (u16, u16),
}

fn map_key(code: KeyCode) -> Option<Button> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Button::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Button::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Button::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Button::Down),
        KeyCode::Char(' ') | KeyCode::Char('z') | KeyCode::Char('Z') => Some(Button::Fire),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Button::Bomb),
        KeyCode::Enter => Some(Button::Confirm),
        _ => None,
    }
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut out = BufWriter::new(stdout());

        terminal::enable_raw_mode()?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;

        // Ask for key-release events; classic terminals fall back to the
        // hold-window expiry below.
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            let _ = out.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ));
        }

        // Blocking reads live on their own thread so the frame loop never
        // waits on input
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        log::info!(
            "Terminal session started (keyboard enhancement: {})",
            enhanced
        );

        Ok(Self {
            out,
            rx,
            enhanced,
            key_frame: HashMap::new(),
            frame: 0,
            last_size: terminal::size()?,
        })
    }

    /// Drain pending key events into the input state. Returns any
    /// out-of-band signal plus the characters pressed this frame (menus use
    /// those for selection and toggles).
    pub fn pump(&mut self, input: &mut InputState) -> (TermSignal, Vec<char>) {
        self.frame += 1;
        let mut signal = TermSignal::None;
        let mut chars = Vec::new();

        while let Ok(ev) = self.rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        signal = TermSignal::Quit;
                        continue;
                    }
                    if code == KeyCode::Esc {
                        signal = TermSignal::Back;
                        continue;
                    }
                    if let KeyCode::Char(c) = code {
                        chars.push(c.to_ascii_lowercase());
                    }
                    self.key_frame.insert(code, self.frame);
                    if let Some(button) = map_key(code) {
                        input.key_down(button);
                    }
                }
                KeyEventKind::Repeat => {
                    self.key_frame.insert(code, self.frame);
                }
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                    if let Some(button) = map_key(code) {
                        input.key_up(button);
                    }
                }
            }
        }

        // Without release events, keys expire when their repeats stop
        if !self.enhanced {
            let frame = self.frame;
            let mut released = Vec::new();
            self.key_frame.retain(|code, last| {
                let live = frame.saturating_sub(*last) <= HOLD_WINDOW;
                if !live {
                    released.push(*code);
                }
                live
            });
            for code in released {
                if let Some(button) = map_key(code) {
                    input.key_up(button);
                }
            }
        }

        (signal, chars)
    }

    /// Draw the framebuffer centered in the terminal. `shake` is a source
    /// pixel offset applied while sampling.
    pub fn present(&mut self, fb: &FrameBuffer, shake: (i32, i32)) -> io::Result<()> {
        let size = terminal::size()?;
        if size != self.last_size {
            self.last_size = size;
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        }
        let (cols, rows) = (size.0 as i32, size.1 as i32);
        let ox = ((cols - CELL_W) / 2).max(0);
        let oy = ((rows - CELL_H) / 2).max(0);
        let vis_w = CELL_W.min(cols - ox);
        let vis_h = CELL_H.min(rows - oy);

        for cy in 0..vis_h {
            self.out.queue(cursor::MoveTo(ox as u16, (oy + cy) as u16))?;
            let mut last_fg: Option<Color> = None;
            let mut last_bg: Option<Color> = None;
            for cx in 0..vis_w {
                let top = sample(fb, cx, cy * 2, shake);
                let bot = sample(fb, cx, cy * 2 + 1, shake);
                let fg = to_color(top);
                let bg = to_color(bot);
                if last_fg != Some(fg) {
                    self.out.queue(SetForegroundColor(fg))?;
                    last_fg = Some(fg);
                }
                if last_bg != Some(bg) {
                    self.out.queue(SetBackgroundColor(bg))?;
                    last_bg = Some(bg);
                }
                self.out.queue(Print('▀'))?;
            }
        }
        self.out.queue(ResetColor)?;
        self.out.flush()
    }
}

/// Downsample one 2x2 pixel block to its brightest shade. Thin glows
/// survive the shrink this way; averaging would wash them out.
fn sample(fb: &FrameBuffer, tx: i32, ty: i32, shake: (i32, i32)) -> Shade {
    let mut best = Shade::Black;
    let mut best_luma = 0u8;
    for dy in 0..2 {
        for dx in 0..2 {
            let s = fb.get(tx * 2 + dx + shake.0, ty * 2 + dy + shake.1);
            let l = s.luma();
            if l > best_luma {
                best = s;
                best_luma = l;
            }
        }
    }
    best
}

fn to_color(shade: Shade) -> Color {
    let (r, g, b) = shade.rgb();
    Color::Rgb { r, g, b }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
