//! Software raster renderer
//!
//! Every game paints into a fixed 320x240 `FrameBuffer` of palette shades.
//! Post-processing (scanlines, the dim game-over veil) happens here too; the
//! terminal presenter in `platform` turns the buffer into half-block cells.

pub mod font;

pub use font::{draw_text, draw_text_centered, text_width};

use crate::consts::{SCREEN_H, SCREEN_W};

/// The phosphor palette. Alpha blending from the source material maps onto a
/// small fixed ramp of green intensities plus a handful of accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Shade {
    Black,
    /// Faintest green (grid lines, dying sparks)
    GreenFaint,
    /// Dim green (glow halos, fresh-ish sparks)
    GreenDim,
    /// Soft green (hostile shots, dim stars)
    GreenSoft,
    /// Full phosphor green
    Green,
    /// Dark UI green (#004411)
    DarkGreen,
    /// Goal row backdrop (#002200)
    GoalGreen,
    /// Start row backdrop (#001100)
    LaneGreen,
    White,
    Silver,
    Grey,
    Charcoal,
    Red,
    RedDim,
    Navy,
    NavyDim,
}

impl Shade {
    /// sRGB triple for the terminal presenter
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Shade::Black => (0, 0, 0),
            Shade::GreenFaint => (0, 38, 15),
            Shade::GreenDim => (0, 89, 36),
            Shade::GreenSoft => (0, 153, 61),
            Shade::Green => (0, 255, 102),
            Shade::DarkGreen => (0, 68, 17),
            Shade::GoalGreen => (0, 34, 0),
            Shade::LaneGreen => (0, 17, 0),
            Shade::White => (255, 255, 255),
            Shade::Silver => (176, 176, 176),
            Shade::Grey => (51, 51, 51),
            Shade::Charcoal => (17, 17, 17),
            Shade::Red => (255, 0, 0),
            Shade::RedDim => (140, 0, 0),
            Shade::Navy => (0, 0, 51),
            Shade::NavyDim => (0, 0, 26),
        }
    }

    /// One step darker on the ramp (scanlines, game-over veil)
    pub fn dimmed(self) -> Shade {
        match self {
            Shade::Green => Shade::GreenSoft,
            Shade::GreenSoft => Shade::GreenDim,
            Shade::GreenDim => Shade::GreenFaint,
            Shade::GreenFaint => Shade::Black,
            Shade::DarkGreen => Shade::GoalGreen,
            Shade::GoalGreen => Shade::LaneGreen,
            Shade::LaneGreen => Shade::Black,
            Shade::White => Shade::Silver,
            Shade::Silver => Shade::Grey,
            Shade::Grey => Shade::Charcoal,
            Shade::Charcoal => Shade::Black,
            Shade::Red => Shade::RedDim,
            Shade::RedDim => Shade::Black,
            Shade::Navy => Shade::NavyDim,
            Shade::NavyDim => Shade::Black,
            Shade::Black => Shade::Black,
        }
    }

    /// Brightness rank used when downsampling picks a representative pixel
    pub fn luma(self) -> u8 {
        let (r, g, b) = self.rgb();
        // Integer approximation of rec601 luma
        ((r as u32 * 77 + g as u32 * 150 + b as u32 * 29) >> 8) as u8
    }

    /// Intensity ramp for particle rendering (1.0 = freshest)
    pub fn from_intensity(intensity: f32) -> Shade {
        if intensity > 0.75 {
            Shade::Green
        } else if intensity > 0.5 {
            Shade::GreenSoft
        } else if intensity > 0.25 {
            Shade::GreenDim
        } else {
            Shade::GreenFaint
        }
    }
}

/// Fixed-resolution raster surface
pub struct FrameBuffer {
    pixels: Vec<Shade>,
}

impl FrameBuffer {
    pub const WIDTH: i32 = SCREEN_W;
    pub const HEIGHT: i32 = SCREEN_H;

    pub fn new() -> Self {
        Self {
            pixels: vec![Shade::Black; (SCREEN_W * SCREEN_H) as usize],
        }
    }

    pub fn clear(&mut self, shade: Shade) {
        self.pixels.fill(shade);
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Shade {
        if x < 0 || y < 0 || x >= SCREEN_W || y >= SCREEN_H {
            Shade::Black
        } else {
            self.pixels[(y * SCREEN_W + x) as usize]
        }
    }

    #[inline]
    pub fn put(&mut self, x: i32, y: i32, shade: Shade) {
        if x >= 0 && y >= 0 && x < SCREEN_W && y < SCREEN_H {
            self.pixels[(y * SCREEN_W + x) as usize] = shade;
        }
    }

    /// Clipped filled rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, shade: Shade) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(SCREEN_W);
        let y1 = (y + h).min(SCREEN_H);
        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels[(py * SCREEN_W + px) as usize] = shade;
            }
        }
    }

    /// One-pixel rectangle outline
    pub fn outline_rect(&mut self, x: i32, y: i32, w: i32, h: i32, shade: Shade) {
        self.fill_rect(x, y, w, 1, shade);
        self.fill_rect(x, y + h - 1, w, 1, shade);
        self.fill_rect(x, y, 1, h, shade);
        self.fill_rect(x + w - 1, y, 1, h, shade);
    }

    /// Bresenham line
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, shade: Shade) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.put(x, y, shade);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Bright rectangle with a one-pixel dim halo (the phosphor bloom look)
    pub fn glow_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.fill_rect(x - 1, y - 1, w + 2, h + 2, Shade::GreenDim);
        self.fill_rect(x, y, w, h, Shade::Green);
    }

    /// Bright line over a dim thick halo
    pub fn glow_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        for (ox, oy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            self.line(x1 + ox, y1 + oy, x2 + ox, y2 + oy, Shade::GreenDim);
        }
        self.line(x1, y1, x2, y2, Shade::Green);
    }

    /// Darken every other row (CRT scanline overlay)
    pub fn scanlines(&mut self) {
        for y in (1..SCREEN_H).step_by(2) {
            for x in 0..SCREEN_W {
                let i = (y * SCREEN_W + x) as usize;
                self.pixels[i] = self.pixels[i].dimmed();
            }
        }
    }

    /// Darken the whole surface (game-over veil)
    pub fn dim_all(&mut self) {
        for px in &mut self.pixels {
            *px = px.dimmed().dimmed();
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
