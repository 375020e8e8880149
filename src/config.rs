//! Panel configuration
//!
//! Fixed for the lifetime of a driver. The four control lines are bound by
//! the [`Transport`](crate::transport::Transport) implementation and named
//! through [`Line`](crate::transport::Line), so they do not appear here.

use crate::error::{check_aligned, Error};
use crate::{MAX_HEIGHT, MAX_WIDTH};

/// Default per-transaction bus timeout
pub const DEFAULT_TIMEOUT_MS: u32 = 100;

/// Number of RAM planes the panel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorDepth {
    /// Black/white only, red plane bypassed
    OneBit = 1,
    /// Black/white plus red
    TwoBit = 2,
}

impl TryFrom<u8> for ColorDepth {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            1 => Ok(ColorDepth::OneBit),
            2 => Ok(ColorDepth::TwoBit),
            _ => Err(Error::OutOfRange("color depth")),
        }
    }
}

/// Source (column) addressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ScanMode {
    /// Full column range
    WideScan = 0,
    /// Inset by one byte column on each edge
    NarrowScan = 1,
}

/// Panel geometry and bus settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Per-transaction bus timeout handed to the transport
    pub timeout_ms: u32,
    /// Planes in use
    pub color_depth: ColorDepth,
    /// Source addressing mode
    pub scan_mode: ScanMode,
    /// Horizontal resolution in pixels, a multiple of 8
    pub width: u8,
    /// Vertical resolution in rows
    pub height: u16,
}

impl Config {
    /// 1.54in 152x152 black/white/red panel
    pub const PANEL_152X152_TRICOLOR: Config = Config::new(152, 152)
        .with_color_depth(ColorDepth::TwoBit)
        .with_scan_mode(ScanMode::NarrowScan);

    /// 2.7in 176x264 black/white panel
    pub const PANEL_176X264_MONO: Config = Config::new(176, 264);

    /// 2.9in 176x296 black/white panel
    pub const PANEL_176X296_MONO: Config = Config::new(176, 296);

    /// Monochrome, wide-scan panel of the given resolution
    pub const fn new(width: u8, height: u16) -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            color_depth: ColorDepth::OneBit,
            scan_mode: ScanMode::WideScan,
            width,
            height,
        }
    }

    /// Set the number of planes
    pub const fn with_color_depth(mut self, color_depth: ColorDepth) -> Self {
        self.color_depth = color_depth;
        self
    }

    /// Set the source addressing mode
    pub const fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    /// Set the per-transaction bus timeout
    pub const fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Check the resolution against the controller's limits.
    pub fn validate(&self) -> Result<(), Error> {
        check_aligned("horizontal resolution", self.width)?;
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(Error::OutOfRange("horizontal resolution"));
        }
        if self.height == 0 || self.height > MAX_HEIGHT {
            return Err(Error::OutOfRange("vertical resolution"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::PANEL_176X296_MONO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for config in [
            Config::PANEL_152X152_TRICOLOR,
            Config::PANEL_176X264_MONO,
            Config::PANEL_176X296_MONO,
        ] {
            config.validate().unwrap();
        }
        assert_eq!(Config::default().height, 296);
        assert_eq!(Config::default().timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn width_must_be_byte_aligned() {
        let err = Config::new(150, 152).validate().unwrap_err();
        assert!(matches!(err, Error::Alignment { value: 150, .. }));
    }

    #[test]
    fn resolution_limits() {
        assert!(matches!(
            Config::new(0, 10).validate(),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(
            Config::new(184, 10).validate(),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(
            Config::new(176, 297).validate(),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn color_depth_from_bits() {
        assert_eq!(ColorDepth::try_from(1).unwrap(), ColorDepth::OneBit);
        assert_eq!(ColorDepth::try_from(2).unwrap(), ColorDepth::TwoBit);
        assert!(ColorDepth::try_from(3).is_err());
        assert!(ColorDepth::try_from(0).is_err());
    }
}
