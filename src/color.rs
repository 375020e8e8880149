//! Colors and built-in fill patterns

/// Pixel colors the controller composites from its two RAM planes.
///
/// The red plane is composited after the black/white plane, so a pixel
/// marked in both shows red. There is no blending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Color {
    /// Black ink
    Black = 0,
    /// Paper white
    #[default]
    White = 1,
    /// Red ink
    Red = 2,
    /// Second red waveform slot
    AlternateRed = 3,
}

impl Color {
    /// Register value of the color
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Bit 0, the value written to the black/white plane
    pub const fn black_plane_bit(self) -> u8 {
        self.bits() & 0b01
    }

    /// Bit 1, the value written to the red plane (kept in place)
    pub const fn red_plane_bit(self) -> u8 {
        self.bits() & 0b10
    }

    /// Decode the 2-bit color field of a register
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Color::Black,
            1 => Color::White,
            2 => Color::Red,
            _ => Color::AlternateRed,
        }
    }
}

/// Stride of the controller's auto-write test pattern along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Pattern {
    /// Toggle every 8 pixels
    Pattern8 = 0,
    /// Toggle every 16 pixels
    Pattern16 = 1,
    /// Toggle every 32 pixels
    Pattern32 = 2,
    /// Toggle every 64 pixels
    Pattern64 = 3,
    /// Toggle every 128 pixels
    Pattern128 = 4,
    /// Toggle every 256 pixels
    Pattern256 = 5,
    /// No toggling
    Solid = 7,
}

/// Pattern strides of one RAM plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillPattern {
    /// Stride along the source (X) axis
    pub x: Pattern,
    /// Stride along the gate (Y) axis
    pub y: Pattern,
}

impl FillPattern {
    /// Fill the whole plane with one value
    pub const SOLID: FillPattern = FillPattern::new(Pattern::Solid, Pattern::Solid);

    /// Pattern with the given X and Y strides
    pub const fn new(x: Pattern, y: Pattern) -> Self {
        Self { x, y }
    }
}
