//! Rectangular RAM transfers
//!
//! A region is addressed in pixels. `left` and `width` must be multiples of
//! 8 because the controller's horizontal address is a byte column. Plane
//! buffers are row-major, MSB first, exactly `width / 8 * height` bytes.
//! Every argument is checked before the first byte goes out.

use embedded_hal::delay::DelayNs;

use crate::cmd::Cmd;
use crate::config::Config;
use crate::driver::Ssd1680;
use crate::error::{check_aligned, Error};
use crate::register::RamBank;
use crate::transport::{Activity, Transport};

/// A byte-aligned rectangle of panel RAM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// First column in pixels, a multiple of 8
    pub left: u8,
    /// First row
    pub top: u16,
    /// Width in pixels, a multiple of 8
    pub width: u8,
    /// Height in rows
    pub height: u16,
}

impl Region {
    /// Region with its top-left corner at `(left, top)`
    pub const fn new(left: u8, top: u16, width: u8, height: u16) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The whole panel
    pub const fn full(config: &Config) -> Self {
        Self::new(0, 0, config.width, config.height)
    }

    /// Bytes one plane of this region occupies
    pub fn byte_len(&self) -> usize {
        usize::from(self.width / 8) * usize::from(self.height)
    }

    /// Check alignment and that the region is not empty. A region running
    /// past row `u16::MAX` wraps to row 0.
    pub fn validate(&self) -> Result<(), Error> {
        check_aligned("left", self.left)?;
        check_aligned("width", self.width)?;
        if self.width == 0 {
            return Err(Error::OutOfRange("region width"));
        }
        if self.height == 0 {
            return Err(Error::OutOfRange("region height"));
        }
        Ok(())
    }

    fn check_buffer(&self, len: usize) -> Result<(), Error> {
        let expected = self.byte_len();
        if len == expected {
            Ok(())
        } else {
            Err(Error::BufferSize {
                expected,
                actual: len,
            })
        }
    }
}

enum Payload<'a> {
    Plain(&'a [u8]),
    Inverted(&'a [u8]),
}

impl<T, D, A> Ssd1680<T, D, A>
where
    T: Transport,
    D: DelayNs,
    A: Activity,
{
    fn set_window(&mut self, region: &Region) -> Result<(), Error> {
        self.set_horizontal_range(region.left, region.width)?;
        self.set_vertical_range(region.top, region.height)
    }

    /// Write one or both planes of `region`.
    ///
    /// Each plane is a separate transaction preceded by its own start
    /// address, since both share the address counter.
    pub fn write_region(
        &mut self,
        region: &Region,
        black: Option<&[u8]>,
        red: Option<&[u8]>,
    ) -> Result<(), Error> {
        region.validate()?;
        for plane in [black, red].into_iter().flatten() {
            region.check_buffer(plane.len())?;
        }
        log::debug!("write_region {:?}", region);

        self.set_window(region)?;
        if let Some(data) = black {
            self.write_plane(Cmd::WRITE_BLACK, region, Payload::Plain(data))?;
        }
        if let Some(data) = red {
            self.write_plane(Cmd::WRITE_RED, region, Payload::Plain(data))?;
        }
        Ok(())
    }

    /// Write the complement of `data` to the black plane of `region`.
    pub(crate) fn write_black_inverted(&mut self, region: &Region, data: &[u8]) -> Result<(), Error> {
        region.validate()?;
        region.check_buffer(data.len())?;
        self.set_window(region)?;
        self.write_plane(Cmd::WRITE_BLACK, region, Payload::Inverted(data))
    }

    fn write_plane(&mut self, command: u8, region: &Region, payload: Payload<'_>) -> Result<(), Error> {
        self.set_start_address(region.left, region.top)?;
        match payload {
            Payload::Plain(data) => self.interface.send(command, data),
            Payload::Inverted(data) => self.interface.send_inverted(command, data),
        }
    }

    /// Read one or both planes of `region` back from controller RAM.
    ///
    /// On error the output buffers hold unspecified contents.
    pub fn read_region(
        &mut self,
        region: &Region,
        black: Option<&mut [u8]>,
        red: Option<&mut [u8]>,
    ) -> Result<(), Error> {
        region.validate()?;
        for len in [black.as_deref(), red.as_deref()]
            .into_iter()
            .flatten()
            .map(<[u8]>::len)
        {
            region.check_buffer(len)?;
        }
        log::debug!("read_region {:?}", region);

        self.set_window(region)?;
        if let Some(buffer) = black {
            self.read_plane(RamBank::Black, region, buffer)?;
        }
        if let Some(buffer) = red {
            self.read_plane(RamBank::Red, region, buffer)?;
        }
        Ok(())
    }

    fn read_plane(&mut self, bank: RamBank, region: &Region, buffer: &mut [u8]) -> Result<(), Error> {
        self.select_ram_bank(bank)?;
        self.set_start_address(region.left, region.top)?;
        self.interface.read_ram(Cmd::READ_RAM, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_len_counts_byte_columns() {
        assert_eq!(Region::new(8, 0, 16, 10).byte_len(), 20);
        assert_eq!(Region::full(&Config::PANEL_176X264_MONO).byte_len(), 22 * 264);
    }

    #[test]
    fn validation() {
        assert!(Region::new(8, 0, 16, 10).validate().is_ok());
        assert!(matches!(
            Region::new(3, 0, 8, 8).validate(),
            Err(Error::Alignment { what: "left", value: 3 })
        ));
        assert!(matches!(
            Region::new(0, 0, 10, 8).validate(),
            Err(Error::Alignment { what: "width", value: 10 })
        ));
        assert!(Region::new(0, 0, 8, 0).validate().is_err());
        assert!(Region::new(0, u16::MAX, 8, 2).validate().is_ok());
    }
}
