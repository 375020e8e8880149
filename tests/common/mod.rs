//! Simulated SSD1680 for host tests.
//!
//! Decodes the framed byte stream the driver produces, keeps both RAM planes
//! with their address windows and counters, and answers reads the way the
//! controller does (two dummy bytes ahead of RAM data).
#![allow(dead_code)]

use display_interface::DisplayError;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use ssd1680::cmd::Cmd;
use ssd1680::transport::{Line, Transport};
use ssd1680::{MAX_HEIGHT, MAX_WIDTH};

/// Bytes per RAM row
pub const STRIDE: usize = MAX_WIDTH as usize / 8;

/// Busy polls answered high after a software reset, refresh or pattern fill
pub const BUSY_POLLS: u32 = 3;

/// Filler returned for the dummy bytes of a RAM read
pub const DUMMY: u8 = 0xA5;

/// One chip-select assertion as seen on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub opcode: u8,
    pub data: Vec<u8>,
    pub read: usize,
}

pub struct SimPanel {
    pub frames: Vec<Frame>,
    pub lines: Vec<(Line, PinState)>,
    pub black: Vec<u8>,
    pub red: Vec<u8>,
    pub user_id: [u8; 10],
    pub temperature: [u8; 2],
    pub fail_on_opcode: Option<u8>,
    pub fail_receive_on: Option<u8>,
    pub timeout_ms: Option<u32>,
    pub busy_polls: u32,

    current: Option<Frame>,
    dc: PinState,
    busy_left: u32,
    bank: u8,
    x_range: (u8, u8),
    y_range: (u16, u16),
    x: u8,
    y: u16,
    read_offset: usize,
}

impl Default for SimPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SimPanel {
    pub fn new() -> Self {
        SimPanel {
            frames: Vec::new(),
            lines: Vec::new(),
            black: vec![0; STRIDE * MAX_HEIGHT as usize],
            red: vec![0; STRIDE * MAX_HEIGHT as usize],
            user_id: *b"SSD1680-ID",
            temperature: [0, 0],
            fail_on_opcode: None,
            fail_receive_on: None,
            timeout_ms: None,
            busy_polls: 0,
            current: None,
            dc: PinState::High,
            busy_left: 0,
            bank: 0,
            x_range: (0, STRIDE as u8 - 1),
            y_range: (0, MAX_HEIGHT - 1),
            x: 0,
            y: 0,
            read_offset: 0,
        }
    }

    /// Opcodes in the order they went out
    pub fn opcodes(&self) -> Vec<u8> {
        self.frames.iter().map(|f| f.opcode).collect()
    }

    /// Frames carrying `opcode`
    pub fn frames_for(&self, opcode: u8) -> Vec<&Frame> {
        self.frames.iter().filter(|f| f.opcode == opcode).collect()
    }

    /// Black plane byte at pixel column `x` (byte aligned), row `y`
    pub fn black_at(&self, x: u8, y: u16) -> u8 {
        self.black[Self::index(x / 8, y)]
    }

    /// Red plane byte at pixel column `x` (byte aligned), row `y`
    pub fn red_at(&self, x: u8, y: u16) -> u8 {
        self.red[Self::index(x / 8, y)]
    }

    fn index(column: u8, row: u16) -> usize {
        usize::from(row) * STRIDE + usize::from(column)
    }

    fn advance_counter(&mut self) {
        if self.x >= self.x_range.1 {
            self.x = self.x_range.0;
            self.y = if self.y >= self.y_range.1 {
                self.y_range.0
            } else {
                self.y + 1
            };
        } else {
            self.x += 1;
        }
    }

    fn write_ram(&mut self, opcode: u8, byte: u8) {
        let index = Self::index(self.x, self.y);
        let plane = if opcode == Cmd::WRITE_BLACK {
            &mut self.black
        } else {
            &mut self.red
        };
        if let Some(cell) = plane.get_mut(index) {
            *cell = byte;
        }
        self.advance_counter();
    }

    fn read_ram(&mut self) -> u8 {
        let index = Self::index(self.x, self.y);
        let plane = if self.bank == 0 { &self.black } else { &self.red };
        let byte = plane.get(index).copied().unwrap_or(0);
        self.advance_counter();
        byte
    }

    fn fill(&mut self, red: bool, pattern: u8) {
        // only solid fills are modelled
        if pattern & 0x77 != 0x77 {
            return;
        }
        let value = if pattern & 0x80 != 0 { 0xFF } else { 0x00 };
        let plane = if red { &mut self.red } else { &mut self.black };
        plane.iter_mut().for_each(|b| *b = value);
    }

    fn finish(&mut self, frame: Frame) {
        let d = &frame.data;
        match frame.opcode {
            Cmd::SW_RESET | Cmd::MASTER_ACTIVATION => self.busy_left = BUSY_POLLS,
            Cmd::RAM_X_RANGE if d.len() == 2 => self.x_range = (d[0], d[1]),
            Cmd::RAM_Y_RANGE if d.len() == 4 => {
                self.y_range = (
                    u16::from_le_bytes([d[0], d[1]]),
                    u16::from_le_bytes([d[2], d[3]]),
                )
            }
            Cmd::RAM_X_COUNTER if d.len() == 1 => self.x = d[0],
            Cmd::RAM_Y_COUNTER if d.len() == 2 => self.y = u16::from_le_bytes([d[0], d[1]]),
            Cmd::RAM_READ_BANK if d.len() == 1 => self.bank = d[0] & 1,
            Cmd::PATTERN_BLACK if d.len() == 1 => {
                self.fill(false, d[0]);
                self.busy_left = BUSY_POLLS;
            }
            Cmd::PATTERN_RED if d.len() == 1 => {
                self.fill(true, d[0]);
                self.busy_left = BUSY_POLLS;
            }
            _ => {}
        }
        self.frames.push(frame);
    }
}

impl Transport for SimPanel {
    fn set_line(&mut self, line: Line, state: PinState) -> Result<(), DisplayError> {
        self.lines.push((line, state));
        match (line, state) {
            (Line::ChipSelect, PinState::Low) => {
                self.current = None;
                self.read_offset = 0;
            }
            (Line::ChipSelect, PinState::High) => {
                if let Some(frame) = self.current.take() {
                    self.finish(frame);
                }
            }
            (Line::DataCommand, state) => self.dc = state,
            _ => {}
        }
        Ok(())
    }

    fn read_line(&mut self, line: Line) -> Result<PinState, DisplayError> {
        if line != Line::Busy {
            return Err(DisplayError::DCError);
        }
        if self.busy_left > 0 {
            self.busy_left -= 1;
            self.busy_polls += 1;
            Ok(PinState::High)
        } else {
            Ok(PinState::Low)
        }
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        if self.dc == PinState::Low {
            let opcode = bytes.first().copied().unwrap_or(0);
            self.current = Some(Frame {
                opcode,
                ..Frame::default()
            });
            if self.fail_on_opcode == Some(opcode) {
                return Err(DisplayError::BusWriteError);
            }
            return Ok(());
        }
        let Some(mut frame) = self.current.take() else {
            return Err(DisplayError::BusWriteError);
        };
        for &byte in bytes {
            if frame.opcode == Cmd::WRITE_BLACK || frame.opcode == Cmd::WRITE_RED {
                self.write_ram(frame.opcode, byte);
            }
        }
        frame.data.extend_from_slice(bytes);
        self.current = Some(frame);
        Ok(())
    }

    fn receive(&mut self, buffer: &mut [u8]) -> Result<(), DisplayError> {
        let Some(mut frame) = self.current.take() else {
            return Err(DisplayError::BusWriteError);
        };
        if self.fail_receive_on == Some(frame.opcode) {
            self.current = Some(frame);
            return Err(DisplayError::BusWriteError);
        }
        for out in buffer.iter_mut() {
            let offset = self.read_offset;
            *out = match frame.opcode {
                Cmd::READ_USER_ID => self.user_id.get(offset).copied().unwrap_or(0),
                Cmd::READ_TEMP => self.temperature.get(offset).copied().unwrap_or(0),
                Cmd::READ_RAM if offset < 2 => DUMMY,
                Cmd::READ_RAM => self.read_ram(),
                _ => 0,
            };
            self.read_offset += 1;
        }
        frame.read += buffer.len();
        self.current = Some(frame);
        Ok(())
    }

    fn set_timeout(&mut self, timeout_ms: u32) {
        self.timeout_ms = Some(timeout_ms);
    }
}

/// Delay that records every millisecond wait instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    pub ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.ms.push(ms);
    }
}

/// 8x8 font whose glyph for byte `c` is eight rows of `c`.
pub fn identity_font_table() -> Vec<u8> {
    (0..=255u8).flat_map(|c| [c; 8]).collect()
}
