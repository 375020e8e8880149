//! `embedded-graphics` interop
//!
//! Conversions only: the driver has no frame buffer to draw into. Render
//! into your own buffer and hand the bytes to
//! [`Ssd1680::write_region`](crate::driver::Ssd1680::write_region) with a
//! [`Region`] built from the target rectangle.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::color::Color;
use crate::error::Error;
use crate::region::Region;

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::Off => Color::White,
            BinaryColor::On => Color::Black,
        }
    }
}

impl TryFrom<Rectangle> for Region {
    type Error = Error;

    /// Fails when the rectangle has a negative origin, does not fit the
    /// address counters or is not byte aligned horizontally.
    fn try_from(rect: Rectangle) -> Result<Self, Error> {
        let left = u8::try_from(rect.top_left.x).map_err(|_| Error::OutOfRange("rectangle x"))?;
        let top = u16::try_from(rect.top_left.y).map_err(|_| Error::OutOfRange("rectangle y"))?;
        let width =
            u8::try_from(rect.size.width).map_err(|_| Error::OutOfRange("rectangle width"))?;
        let height =
            u16::try_from(rect.size.height).map_err(|_| Error::OutOfRange("rectangle height"))?;
        let region = Region::new(left, top, width, height);
        region.validate()?;
        Ok(region)
    }
}

impl From<Region> for Rectangle {
    fn from(region: Region) -> Self {
        Rectangle::new(
            Point::new(i32::from(region.left), i32::from(region.top)),
            Size::new(u32::from(region.width), u32::from(region.height)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_color_maps_on_to_ink() {
        assert_eq!(Color::from(BinaryColor::On), Color::Black);
        assert_eq!(Color::from(BinaryColor::Off), Color::White);
    }

    #[test]
    fn rectangle_to_region() {
        let rect = Rectangle::new(Point::new(16, 40), Size::new(24, 10));
        let region = Region::try_from(rect).unwrap();
        assert_eq!(region, Region::new(16, 40, 24, 10));
        assert_eq!(Rectangle::from(region), rect);
    }

    #[test]
    fn rejected_rectangles() {
        let negative = Rectangle::new(Point::new(-8, 0), Size::new(8, 8));
        assert!(matches!(
            Region::try_from(negative),
            Err(Error::OutOfRange("rectangle x"))
        ));
        let unaligned = Rectangle::new(Point::new(4, 0), Size::new(8, 8));
        assert!(matches!(
            Region::try_from(unaligned),
            Err(Error::Alignment { what: "left", value: 4 })
        ));
        let too_wide = Rectangle::new(Point::zero(), Size::new(512, 8));
        assert!(Region::try_from(too_wide).is_err());
    }
}
