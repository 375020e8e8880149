//! SSD1680 ePaper Display Driver
//!
//! Drives the SSD1680 bistable display controller over a 4-wire SPI-like
//! command/data bus plus the chip-select, data/command, reset and busy lines.
//! Used in 152x152 tri-color and 176x264 / 176x296 monochrome panels.
//!
//! This driver is loosely modeled after the
//! [epd-waveshare](https://github.com/caemor/epd-waveshare) drivers but built
//! around region transfers instead of a whole-frame buffer.
//!
//! ## Architecture
//!
//! - [`transport::Transport`] is the only thing the protocol logic talks to:
//!   set/read a control line, transmit bytes, receive bytes.
//!   [`transport::SpiTransport`] binds it onto `embedded-hal` traits.
//! - [`interface::DisplayInterface`] frames one opcode plus its payload per
//!   chip-select assertion.
//! - [`register`] packs every controller register into its wire bytes.
//! - [`driver::Ssd1680`] owns the lifecycle (reset, init, refresh), the RAM
//!   windows and the region transfers; [`text`] blits glyphs on top of them.
//!
//! ### Usage
//!
//! ```rust, ignore
//! use ssd1680::prelude::*;
//!
//! let transport = SpiTransport::new(spi, cs, dc, rst, busy);
//! let mut epd = Ssd1680::new(transport, delay, Config::PANEL_176X264_MONO)?;
//!
//! epd.init()?;
//! epd.clear(Color::White)?;
//! epd.text(8, 16, b"Hello\nworld", &font)?;
//! epd.refresh()?;
//! ```
//!
//! Every call blocks until the controller has accepted it. `refresh()` blocks
//! for as long as the panel needs to redraw, which can be several seconds.
#![no_std]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod font;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod interface;
pub mod region;
pub mod register;
pub mod state;
pub mod text;
pub mod transport;

pub mod cmd;
pub mod flag;

/// Maximum display height this driver supports
pub const MAX_HEIGHT: u16 = 296;

/// Maximum display width this driver supports
pub const MAX_WIDTH: u8 = 176;

/// Useful exports
pub mod prelude {
    pub use crate::color::{Color, FillPattern, Pattern};
    pub use crate::config::{ColorDepth, Config, ScanMode};
    pub use crate::driver::Ssd1680;
    pub use crate::error::Error;
    pub use crate::font::Font;
    pub use crate::region::Region;
    pub use crate::register::{DataEntryMode, RamBank};
    pub use crate::text::{Cursor, Orientation};
    pub use crate::transport::{Activity, ActivityLed, Line, NoActivity, SpiTransport, Transport};
}
