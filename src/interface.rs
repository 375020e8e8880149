//! Command/data framing
//!
//! One transaction is: chip select low, D/C low, opcode byte, D/C high,
//! payload (written or read), chip select high. Chip select is released on
//! every exit path, the first error is the one reported.
use display_interface::DisplayError;
use embedded_hal::digital::PinState;

use crate::error::Error;
use crate::flag::Flag;
use crate::transport::{Activity, Line, NoActivity, Transport};

/// Payload bytes staged per bus write when the payload is transformed
const CHUNK_SIZE: usize = 32;

/// Frames opcodes and payloads over a [`Transport`].
pub struct DisplayInterface<T, A = NoActivity> {
    transport: T,
    activity: A,
}

impl<T> DisplayInterface<T> {
    /// Wrap a transport without an activity indicator
    pub fn new(transport: T) -> Self {
        DisplayInterface {
            transport,
            activity: NoActivity,
        }
    }
}

impl<T, A> DisplayInterface<T, A> {
    /// Swap in an activity indicator
    pub fn with_activity<B>(self, activity: B) -> DisplayInterface<T, B> {
        DisplayInterface {
            transport: self.transport,
            activity,
        }
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.transport
    }
}

impl<T, A> DisplayInterface<T, A>
where
    T: Transport,
    A: Activity,
{
    /// Basic function for sending a command without payload
    pub fn cmd(&mut self, command: u8) -> Result<(), Error> {
        self.send(command, &[])
    }

    /// Basic function for sending a command and the data belonging to it.
    pub fn send(&mut self, command: u8, data: &[u8]) -> Result<(), Error> {
        self.transaction(command, |transport| {
            if data.is_empty() {
                Ok(())
            } else {
                transport.transmit(data)
            }
        })
    }

    /// Send a command followed by the bitwise complement of `data`.
    pub fn send_inverted(&mut self, command: u8, data: &[u8]) -> Result<(), Error> {
        self.transaction(command, |transport| {
            let mut buffer = [0u8; CHUNK_SIZE];
            for chunk in data.chunks(CHUNK_SIZE) {
                for (out, byte) in buffer.iter_mut().zip(chunk) {
                    *out = !byte;
                }
                transport.transmit(&buffer[..chunk.len()])?;
            }
            Ok(())
        })
    }

    /// Send a command and read `buffer.len()` response bytes.
    pub fn receive(&mut self, command: u8, buffer: &mut [u8]) -> Result<(), Error> {
        self.transaction(command, |transport| {
            if buffer.is_empty() {
                Ok(())
            } else {
                transport.receive(buffer)
            }
        })
    }

    /// Read RAM: the controller answers with [`Flag::DUMMY_READ_BYTES`]
    /// undefined bytes before the pixel data, those are dropped.
    pub fn read_ram(&mut self, command: u8, buffer: &mut [u8]) -> Result<(), Error> {
        self.transaction(command, |transport| {
            let mut dummy = [0u8; Flag::DUMMY_READ_BYTES];
            transport.receive(&mut dummy)?;
            transport.receive(buffer)
        })
    }

    /// Put chip select and D/C in their idle (high) state
    pub fn park_lines(&mut self) -> Result<(), Error> {
        self.transport.set_line(Line::ChipSelect, PinState::High)?;
        self.transport.set_line(Line::DataCommand, PinState::High)?;
        Ok(())
    }

    /// Drive a control line outside of a transaction
    pub fn set_line(&mut self, line: Line, state: PinState) -> Result<(), Error> {
        Ok(self.transport.set_line(line, state)?)
    }

    /// Sample a control line
    pub fn read_line(&mut self, line: Line) -> Result<PinState, Error> {
        Ok(self.transport.read_line(line)?)
    }

    pub(crate) fn set_timeout(&mut self, timeout_ms: u32) {
        self.transport.set_timeout(timeout_ms);
    }

    fn transaction<F>(&mut self, command: u8, payload: F) -> Result<(), Error>
    where
        F: FnOnce(&mut T) -> Result<(), DisplayError>,
    {
        self.activity.begin();
        let result = self.framed(command, payload);
        let released = self.transport.set_line(Line::ChipSelect, PinState::High);
        self.activity.end();

        if let Err(e) = &result {
            log::error!("transaction 0x{:02X} failed: {:?}", command, e);
        }
        result?;
        released?;
        Ok(())
    }

    fn framed<F>(&mut self, command: u8, payload: F) -> Result<(), DisplayError>
    where
        F: FnOnce(&mut T) -> Result<(), DisplayError>,
    {
        self.transport.set_line(Line::ChipSelect, PinState::Low)?;
        // low for commands
        self.transport.set_line(Line::DataCommand, PinState::Low)?;
        let sent = self.transport.transmit(&[command]);
        // high for data, also the idle level if the opcode failed
        let data_mode = self.transport.set_line(Line::DataCommand, PinState::High);
        sent?;
        data_mode?;
        payload(&mut self.transport)
    }
}
