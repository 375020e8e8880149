//! Driver error type
pub use display_interface::DisplayError;

use crate::state::{Event, State};

/// Everything a driver call can fail with.
///
/// Argument errors are raised before the first byte goes out on the bus.
/// Transport errors abort the running sequence with the control lines
/// restored; nothing already sent is rolled back.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A horizontal coordinate or width is not a multiple of 8 pixels
    #[error("{what} {value} is not a multiple of 8")]
    Alignment {
        /// Which argument was misaligned
        what: &'static str,
        /// The offending value
        value: u8,
    },
    /// The bus or a control line failed
    #[error("transport failure: {0:?}")]
    Transport(DisplayError),
    /// A size or address does not fit the controller's counters
    #[error("{0} is out of range")]
    OutOfRange(&'static str),
    /// A plane buffer does not match the region it is written to or read from
    #[error("buffer holds {actual} bytes, region needs {expected}")]
    BufferSize {
        /// `width / 8 * height`
        expected: usize,
        /// Length of the buffer handed in
        actual: usize,
    },
    /// A glyph table is not exactly 256 glyphs long
    #[error("glyph table holds {actual} bytes, font needs {expected}")]
    GlyphTable {
        /// `256 * width / 8 * height`
        expected: usize,
        /// Length of the table handed in
        actual: usize,
    },
    /// The call is not legal in the current lifecycle state
    #[error("cannot handle {event:?} while {state:?}")]
    InvalidState {
        /// State the driver was in
        state: State,
        /// Transition that was requested
        event: Event,
    },
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Transport(e)
    }
}

/// Reject a horizontal pixel value that does not sit on a byte boundary.
pub(crate) fn check_aligned(what: &'static str, value: u8) -> Result<(), Error> {
    if value % 8 == 0 {
        Ok(())
    } else {
        Err(Error::Alignment { what, value })
    }
}
