//! Confetti burst played when the counter reaches 21.

use crate::counter::CelebrationEffect;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

const PIECES: [&str; 5] = ["*", "•", "+", "·", "✦"];
/// Roughly one cell in this many gets a piece.
const DENSITY: u64 = 9;

/// Tick-driven confetti overlay.
#[derive(Debug, Clone)]
pub struct Confetti {
    duration: u32,
    remaining: u32,
    frame: u64,
    bursts: u64,
}

impl Confetti {
    pub fn new(duration_ticks: u32) -> Self {
        Self {
            duration: duration_ticks,
            remaining: 0,
            frame: 0,
            bursts: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Number of times the burst has been fired.
    pub fn bursts(&self) -> u64 {
        self.bursts
    }

    pub fn on_tick(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.frame += 1;
        }
    }

    pub fn layer<'a>(&'a self, colors: &'a [Color]) -> ConfettiLayer<'a> {
        ConfettiLayer {
            confetti: self,
            colors,
        }
    }
}

impl CelebrationEffect for Confetti {
    fn fire(&mut self) {
        self.remaining = self.duration;
        self.frame = 0;
        self.bursts += 1;
        tracing::info!(ticks = self.duration, "confetti burst");
    }
}

/// Draws the current confetti frame over blank cells only.
pub struct ConfettiLayer<'a> {
    confetti: &'a Confetti,
    colors: &'a [Color],
}

impl Widget for ConfettiLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.confetti.is_active() || self.colors.is_empty() {
            return;
        }
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let h = scatter(x - area.x, y - area.y, self.confetti.frame);
                if h % DENSITY != 0 {
                    continue;
                }
                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };
                if cell.symbol() != " " {
                    continue;
                }
                let piece = PIECES[((h >> 8) % PIECES.len() as u64) as usize];
                let color = self.colors[((h >> 16) % self.colors.len() as u64) as usize];
                cell.set_symbol(piece).set_fg(color);
            }
        }
    }
}

// Pieces fall one row per frame: the hash is keyed on the row the piece
// started in.
fn scatter(x: u16, y: u16, frame: u64) -> u64 {
    let row = u64::from(y).wrapping_sub(frame);
    let mut h = u64::from(x).wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ row.wrapping_mul(0xc2b2_ae3d_27d4_eb4f);
    h ^= h >> 29;
    h = h.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    h ^ (h >> 32)
}
