//! Opcode table of the SSD1680 command set used by this driver.

/// Command bytes sent in command mode (D/C low).
pub struct Cmd;
#[allow(missing_docs)]
impl Cmd {
    // Gate / power configuration
    pub const GATE_SCAN: u8 = 0x01;
    pub const GATE_VOLTAGE: u8 = 0x03;
    pub const SOURCE_VOLTAGE: u8 = 0x04;
    pub const BOOSTER_SOFT_START: u8 = 0x0C;
    pub const GATE_SCAN_START: u8 = 0x0F;
    pub const DATA_ENTRY_MODE: u8 = 0x11;
    pub const SW_RESET: u8 = 0x12;
    pub const SELECT_TEMP_SENSOR: u8 = 0x18;
    pub const READ_TEMP: u8 = 0x1B;

    // Update
    pub const MASTER_ACTIVATION: u8 = 0x20;
    pub const UPDATE_CONTROL_1: u8 = 0x21;
    pub const UPDATE_CONTROL_2: u8 = 0x22;

    // RAM access
    pub const WRITE_BLACK: u8 = 0x24;
    pub const WRITE_RED: u8 = 0x26;
    pub const READ_RAM: u8 = 0x27;
    pub const VCOM_VOLTAGE: u8 = 0x2C;
    pub const READ_USER_ID: u8 = 0x2E;
    pub const BORDER: u8 = 0x3C;
    pub const RAM_READ_BANK: u8 = 0x41;
    pub const RAM_X_RANGE: u8 = 0x44;
    pub const RAM_Y_RANGE: u8 = 0x45;
    pub const PATTERN_RED: u8 = 0x46;
    pub const PATTERN_BLACK: u8 = 0x47;
    pub const RAM_X_COUNTER: u8 = 0x4E;
    pub const RAM_Y_COUNTER: u8 = 0x4F;

    pub const NOP: u8 = 0x7F;
}
