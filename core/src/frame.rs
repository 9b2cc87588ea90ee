use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// A snapshot of every pixel, indexed as [y][x].
pub type Frame = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Frame buffer
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// Pixels only ever change by being cleared or XORed with a sprite.
#[derive(Clone)]
pub struct FrameBuffer {
    pixels: Frame,
    dirty: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            dirty: false,
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }

    /// Flips the pixel at (x, y), wrapping both coordinates around the screen.
    /// Returns true if a lit pixel was erased.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let pixel = &mut self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH];
        let erased = *pixel;
        *pixel = !*pixel;
        self.dirty = true;
        erased
    }

    /// XORs an 8-pixel-wide sprite onto the screen with its top left corner at (x, y).
    /// Each row is one byte, most significant bit leftmost; set bits flip pixels.
    /// Returns true if any lit pixel was erased.
    pub fn draw_sprite(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in rows.iter().enumerate() {
            for bit in 0..8 {
                if byte & (0x80 >> bit) != 0 {
                    collision |= self.toggle(x + bit, y + row);
                }
            }
        }
        self.dirty = true;
        collision
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    pub fn snapshot(&self) -> Frame {
        self.pixels
    }

    /// Returns the frame if it changed since the last call.
    pub fn take(&mut self) -> Option<Frame> {
        if self.dirty {
            self.dirty = false;
            Some(self.pixels)
        } else {
            None
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
