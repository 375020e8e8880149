//! Fixed payloads, bit masks and timings.

/// Various flags and constants used by the SSD1680 driver.
///
/// Fixed payloads, register bit positions and protocol timings. Bit positions
/// are documented next to the masks; the packing itself lives in
/// [`crate::register`].
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Display Update Control 2 (0x22): clock, analog, load temp, load LUT,
    // display, analog off, clock off
    pub const UPDATE_FULL_SEQUENCE: u8 = 0xF7;

    // Temperature Sensor Control (0x18)
    pub const INTERNAL_TEMP_SENSOR: u8 = 0x80;

    // Booster Soft Start Control (0x0C), phases 1-3 plus duration
    pub const BOOSTER_SOFT_START_DEFAULT: [u8; 4] = [0x80, 0x90, 0x90, 0x00];

    // Display Update Control 1 (0x21), low byte
    pub const UPDATE1_BYPASS_BLACK: u8 = 1 << 2;
    pub const UPDATE1_INVERT_BLACK: u8 = 1 << 3;
    pub const UPDATE1_BYPASS_RED: u8 = 1 << 6;
    pub const UPDATE1_INVERT_RED: u8 = 1 << 7;
    // Display Update Control 1 (0x21), high byte
    pub const UPDATE1_NARROW_SCAN: u8 = 1 << 7;

    // Border Waveform Control (0x3C)
    pub const BORDER_LUT_MASK: u8 = 0b11;
    pub const BORDER_TRANSITION: u8 = 1 << 2;

    // Auto Write pattern (0x46 / 0x47)
    pub const PATTERN_Y_SHIFT: u8 = 4;

    // Read RAM (0x27) emits this many undefined bytes before pixel data.
    // Measured on one panel revision, re-check on other parts.
    pub const DUMMY_READ_BYTES: usize = 2;

    // Read User ID (0x2E)
    pub const USER_ID_LEN: usize = 10;

    // Timings in milliseconds
    pub const RESET_PULSE_MS: u32 = 2;
    pub const RESET_SETTLE_MS: u32 = 10;
    pub const BUSY_POLL_MS: u32 = 2;
}
