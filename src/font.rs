//! Fixed-size bitmap fonts
//!
//! A font is 256 glyphs, one per byte value, stored back to back. Each glyph
//! is `width / 8 * height` bytes, row-major, MSB first, with 1 meaning ink.

use crate::error::{check_aligned, Error};

/// Read-only glyph table.
#[derive(Clone, Copy, Debug)]
pub struct Font<'a> {
    width: u8,
    height: u8,
    glyphs: &'a [u8],
}

impl<'a> Font<'a> {
    /// Glyphs in a table
    pub const GLYPH_COUNT: usize = 256;

    /// Wrap a glyph table. `width` must be a multiple of 8 and `glyphs`
    /// exactly 256 glyphs long.
    pub fn new(width: u8, height: u8, glyphs: &'a [u8]) -> Result<Self, Error> {
        check_aligned("glyph width", width)?;
        if width == 0 || height == 0 {
            return Err(Error::OutOfRange("glyph size"));
        }
        let expected = Self::GLYPH_COUNT * usize::from(width / 8) * usize::from(height);
        if glyphs.len() != expected {
            return Err(Error::GlyphTable {
                expected,
                actual: glyphs.len(),
            });
        }
        Ok(Self {
            width,
            height,
            glyphs,
        })
    }

    /// Glyph width in pixels
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Glyph height in pixels
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Bytes per glyph
    pub fn glyph_len(&self) -> usize {
        usize::from(self.width / 8) * usize::from(self.height)
    }

    /// Bitmap of character `code`
    pub fn glyph(&self, code: u8) -> &'a [u8] {
        let len = self.glyph_len();
        let start = usize::from(code) * len;
        &self.glyphs[start..start + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn glyph_lookup_by_byte_value() {
        let table: Vec<u8> = (0..=255u8).flat_map(|c| [c; 16]).collect();
        let font = Font::new(8, 16, &table).unwrap();
        assert_eq!(font.glyph_len(), 16);
        assert_eq!(font.glyph(b'A'), &[b'A'; 16]);
        assert_eq!(font.glyph(0xFF), &[0xFF; 16]);
    }

    #[test]
    fn table_must_hold_256_glyphs() {
        let table = [0u8; 255 * 8];
        assert!(matches!(
            Font::new(8, 8, &table),
            Err(Error::GlyphTable {
                expected: 2048,
                actual: 2040
            })
        ));
    }

    #[test]
    fn width_must_be_byte_aligned() {
        let table = [0u8; 256 * 6];
        assert!(matches!(
            Font::new(6, 8, &table),
            Err(Error::Alignment { value: 6, .. })
        ));
    }
}
