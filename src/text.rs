//! Glyph blitting
//!
//! Text is drawn one glyph cell at a time through region writes on the
//! black plane. Glyph bits are complemented on the way out: fonts mark ink
//! with 1, panel RAM marks white with 1. There is no red text.
//!
//! Control bytes:
//!
//! | byte | horizontal            | vertical                        |
//! |------|-----------------------|---------------------------------|
//! | 0x08 | column - 1, floor 0   | row - 1, floor 0                |
//! | 0x09 | column to next 4      | row to next 4                   |
//! | 0x0A | row + 1, column 0     | column - 1, row 0               |
//! | 0x0D | column 0              | row 0                           |
//!
//! Every other byte is a glyph and advances the cursor by one cell.
//!
//! Nothing is clipped. Cursor cells are 8-bit, pixel X is 8-bit and pixel Y
//! is 16-bit, all wrapping. Text running past the panel edge lands wherever
//! the wrapped coordinates point, as it always has on this controller.

use embedded_hal::delay::DelayNs;

use crate::driver::Ssd1680;
use crate::error::Error;
use crate::font::Font;
use crate::region::Region;
use crate::transport::{Activity, Transport};

const BACKSPACE: u8 = 0x08;
const TAB: u8 = 0x09;
const LINE_FEED: u8 = 0x0A;
const CARRIAGE_RETURN: u8 = 0x0D;

const TAB_WIDTH: u8 = 4;

/// Direction glyphs advance in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Left to right, lines top to bottom
    Horizontal,
    /// Top to bottom, lines right to left. For glyph tables rotated 90°
    Vertical,
}

/// Text cursor in glyph cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    orientation: Orientation,
    col: u8,
    row: u8,
}

impl Cursor {
    /// Cursor at cell `(0, 0)`
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            col: 0,
            row: 0,
        }
    }

    /// Current `(column, row)` cell
    pub fn position(&self) -> (u8, u8) {
        (self.col, self.row)
    }

    /// Consume one byte. Returns the cell to draw a glyph in, or `None` for
    /// a control byte.
    pub fn feed(&mut self, byte: u8) -> Option<(u8, u8)> {
        // along: the axis glyphs advance on, across: the line axis
        let (along, across) = match self.orientation {
            Orientation::Horizontal => (&mut self.col, &mut self.row),
            Orientation::Vertical => (&mut self.row, &mut self.col),
        };
        match byte {
            BACKSPACE => *along = along.saturating_sub(1),
            TAB => *along = (*along / TAB_WIDTH).wrapping_add(1).wrapping_mul(TAB_WIDTH),
            LINE_FEED => {
                *across = match self.orientation {
                    Orientation::Horizontal => across.wrapping_add(1),
                    Orientation::Vertical => across.wrapping_sub(1),
                };
                *along = 0;
            }
            CARRIAGE_RETURN => *along = 0,
            _ => {
                let cell = (self.col, self.row);
                match self.orientation {
                    Orientation::Horizontal => self.col = self.col.wrapping_add(1),
                    Orientation::Vertical => self.row = self.row.wrapping_add(1),
                }
                return Some(cell);
            }
        }
        None
    }
}

impl<T, D, A> Ssd1680<T, D, A>
where
    T: Transport,
    D: DelayNs,
    A: Activity,
{
    /// Draw `text` left to right starting at pixel `(left, top)`.
    ///
    /// `left` must be byte aligned. Stops at the first failing glyph write.
    pub fn text(&mut self, left: u8, top: u16, text: &[u8], font: &Font<'_>) -> Result<(), Error> {
        self.draw_text(Orientation::Horizontal, left, top, text, font)
    }

    /// Draw `text` top to bottom, lines advancing leftwards.
    pub fn vertical_text(
        &mut self,
        left: u8,
        top: u16,
        text: &[u8],
        font: &Font<'_>,
    ) -> Result<(), Error> {
        self.draw_text(Orientation::Vertical, left, top, text, font)
    }

    fn draw_text(
        &mut self,
        orientation: Orientation,
        left: u8,
        top: u16,
        text: &[u8],
        font: &Font<'_>,
    ) -> Result<(), Error> {
        let mut cursor = Cursor::new(orientation);
        for &byte in text {
            let Some((col, row)) = cursor.feed(byte) else {
                continue;
            };
            let x = left.wrapping_add(font.width().wrapping_mul(col));
            let y = top.wrapping_add(u16::from(font.height()).wrapping_mul(u16::from(row)));
            let cell = Region::new(x, y, font.width(), u16::from(font.height()));
            self.write_black_inverted(&cell, font.glyph(byte))?;
        }
        Ok(())
    }
}
