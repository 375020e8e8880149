//! Register encoders
//!
//! Pure functions from typed arguments to the exact bytes a register takes.
//! Multi-byte values go out little-endian. Packed registers come with an
//! unpacker so the layout can be checked both ways.

use crate::color::{Color, FillPattern};
use crate::config::{Config, ScanMode};
use crate::error::{check_aligned, Error};
use crate::flag::Flag;

/// Address counter walk order after each RAM byte (0x11).
///
/// Bit 0: X increments, bit 1: Y increments, bit 2: Y is the fast axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DataEntryMode {
    /// X-, Y-, X first
    LeftThenUp = 0b000,
    /// X+, Y-, X first
    RightThenUp = 0b001,
    /// X-, Y+, X first
    LeftThenDown = 0b010,
    /// X+, Y+, X first. Row-major from the top-left corner
    #[default]
    RightThenDown = 0b011,
    /// Y-, X-, Y first
    UpThenLeft = 0b100,
    /// Y-, X+, Y first
    UpThenRight = 0b101,
    /// Y+, X-, Y first
    DownThenLeft = 0b110,
    /// Y+, X+, Y first
    DownThenRight = 0b111,
}

impl DataEntryMode {
    /// Register byte
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// RAM plane selected for reads (0x41).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RamBank {
    /// Black/white plane, written with 0x24
    Black = 0,
    /// Red plane, written with 0x26
    Red = 1,
}

impl RamBank {
    /// Register byte
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// First gate line scanned (0x0F).
pub fn gate_scan_start(top: u16) -> [u8; 2] {
    top.to_le_bytes()
}

/// Gate scan setting (0x01): number of gate lines and scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateScan {
    /// Gate lines, 16 bits
    pub rows: u16,
    /// Scan order byte (GD/SM/TB bits), 0 for top-to-bottom interleaved
    pub order: u8,
}

impl GateScan {
    /// Wire bytes: rows (little-endian) then the order byte
    pub fn to_bytes(self) -> [u8; 3] {
        let [lo, hi] = self.rows.to_le_bytes();
        [lo, hi, self.order]
    }

    /// Inverse of [`GateScan::to_bytes`]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            rows: u16::from_le_bytes([bytes[0], bytes[1]]),
            order: bytes[2],
        }
    }
}

/// Horizontal RAM window (0x44) in byte columns.
///
/// `left` and `width` are pixels and must both be multiples of 8.
pub fn ram_x_range(left: u8, width: u8) -> Result<[u8; 2], Error> {
    check_aligned("left", left)?;
    check_aligned("width", width)?;
    if width == 0 {
        return Err(Error::OutOfRange("region width"));
    }
    let end = (u16::from(left) + u16::from(width)) / 8 - 1;
    Ok([left / 8, end as u8])
}

/// Vertical RAM window (0x45): first and last row, 16 bits each.
///
/// The last row wraps past `u16::MAX`, the counter wraps the same way.
pub fn ram_y_range(top: u16, height: u16) -> Result<[u8; 4], Error> {
    if height == 0 {
        return Err(Error::OutOfRange("region height"));
    }
    let end = top.wrapping_add(height - 1);
    let [top_lo, top_hi] = top.to_le_bytes();
    let [end_lo, end_hi] = end.to_le_bytes();
    Ok([top_lo, top_hi, end_lo, end_hi])
}

/// X address counter (0x4E) for a pixel column on a byte boundary.
pub fn ram_x_address(x: u8) -> Result<u8, Error> {
    check_aligned("x", x)?;
    Ok(x / 8)
}

/// Y address counter (0x4F).
pub fn ram_y_address(y: u16) -> [u8; 2] {
    y.to_le_bytes()
}

/// Display Update Control 1 (0x21).
///
/// Low byte: bit 2 bypass black, bit 3 invert black, bit 6 bypass red,
/// bit 7 invert red. High byte: bit 7 source scan mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct UpdateControl1 {
    /// Ignore the black/white plane
    pub bypass_black: bool,
    /// Invert the black/white plane
    pub invert_black: bool,
    /// Ignore the red plane
    pub bypass_red: bool,
    /// Invert the red plane
    pub invert_red: bool,
    /// Narrow source scan
    pub narrow_scan: bool,
}

impl UpdateControl1 {
    /// Defaults for a panel: red bypassed on one-bit panels, nothing inverted.
    pub fn for_config(config: &Config) -> Self {
        Self {
            bypass_red: (config.color_depth as u8) & 1 == 1,
            narrow_scan: config.scan_mode == ScanMode::NarrowScan,
            ..Self::default()
        }
    }

    /// Wire bytes, low byte first
    pub fn to_bytes(self) -> [u8; 2] {
        let mut low = 0;
        if self.bypass_black {
            low |= Flag::UPDATE1_BYPASS_BLACK;
        }
        if self.invert_black {
            low |= Flag::UPDATE1_INVERT_BLACK;
        }
        if self.bypass_red {
            low |= Flag::UPDATE1_BYPASS_RED;
        }
        if self.invert_red {
            low |= Flag::UPDATE1_INVERT_RED;
        }
        let high = if self.narrow_scan {
            Flag::UPDATE1_NARROW_SCAN
        } else {
            0
        };
        [low, high]
    }

    /// Inverse of [`UpdateControl1::to_bytes`], reserved bits ignored
    pub fn from_bytes([low, high]: [u8; 2]) -> Self {
        Self {
            bypass_black: low & Flag::UPDATE1_BYPASS_BLACK != 0,
            invert_black: low & Flag::UPDATE1_INVERT_BLACK != 0,
            bypass_red: low & Flag::UPDATE1_BYPASS_RED != 0,
            invert_red: low & Flag::UPDATE1_INVERT_RED != 0,
            narrow_scan: high & Flag::UPDATE1_NARROW_SCAN != 0,
        }
    }
}

/// Border Waveform Control (0x3C).
///
/// Bits 1:0 LUT selector, bit 2 transition, bits 7:3 zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Border {
    /// Waveform slot the border follows
    pub lut: Color,
    /// Transition flag
    pub transition: bool,
}

impl Border {
    /// Border showing `color`, transition on
    pub fn new(color: Color) -> Self {
        Self {
            lut: color,
            transition: true,
        }
    }

    /// Register byte
    pub fn to_byte(self) -> u8 {
        let transition = if self.transition {
            Flag::BORDER_TRANSITION
        } else {
            0
        };
        (self.lut.bits() & Flag::BORDER_LUT_MASK) | transition
    }

    /// Inverse of [`Border::to_byte`]
    pub fn from_byte(byte: u8) -> Self {
        Self {
            lut: Color::from_bits(byte & Flag::BORDER_LUT_MASK),
            transition: byte & Flag::BORDER_TRANSITION != 0,
        }
    }
}

fn pattern_strides(pattern: FillPattern) -> u8 {
    ((pattern.y as u8) << Flag::PATTERN_Y_SHIFT) | pattern.x as u8
}

/// Auto write pattern for the black/white plane (0x47).
///
/// Bit 7 carries bit 0 of `color`.
pub fn black_pattern(pattern: FillPattern, color: Color) -> u8 {
    pattern_strides(pattern) | (color.black_plane_bit() << 7)
}

/// Auto write pattern for the red plane (0x46).
///
/// Bit 1 of `color` shifted left by six, which also lands on bit 7.
pub fn red_pattern(pattern: FillPattern, color: Color) -> u8 {
    pattern_strides(pattern) | (color.red_plane_bit() << 6)
}

/// Temperature from the two bytes returned by 0x1B.
pub fn temperature(raw: [u8; 2]) -> u16 {
    u16::from_le_bytes(raw) >> 4
}
