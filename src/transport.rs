//! Bus and control-line capability
//!
//! The protocol logic only ever sets or reads one of four lines and moves
//! bytes over the bus. [`SpiTransport`] provides that on top of
//! `embedded-hal`; anything else (a simulator, a bit-banged bus) can
//! implement [`Transport`] directly.
use display_interface::DisplayError;
use embedded_hal::{
    digital::{InputPin, OutputPin, PinState},
    spi::SpiBus,
};

/// The discrete control lines of the panel connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    /// Chip select, active low
    ChipSelect,
    /// Data/command select, low for command, high for data
    DataCommand,
    /// Reset, active low
    Reset,
    /// Busy, high while the controller works
    Busy,
}

/// Transport primitives the driver is written against.
///
/// Failures are reported in the [`DisplayError`] vocabulary: bus transfers
/// as `BusWriteError`, chip select as `CSError`, data/command and busy as
/// `DCError`, reset as `RSError`.
pub trait Transport {
    /// Drive an output line
    fn set_line(&mut self, line: Line, state: PinState) -> Result<(), DisplayError>;

    /// Sample a line
    fn read_line(&mut self, line: Line) -> Result<PinState, DisplayError>;

    /// Clock `bytes` out, returning once they are on the wire
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), DisplayError>;

    /// Clock `buffer.len()` bytes in
    fn receive(&mut self, buffer: &mut [u8]) -> Result<(), DisplayError>;

    /// Per-transaction timeout from the panel configuration
    fn set_timeout(&mut self, _timeout_ms: u32) {}
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn set_line(&mut self, line: Line, state: PinState) -> Result<(), DisplayError> {
        T::set_line(self, line, state)
    }

    fn read_line(&mut self, line: Line) -> Result<PinState, DisplayError> {
        T::read_line(self, line)
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        T::transmit(self, bytes)
    }

    fn receive(&mut self, buffer: &mut [u8]) -> Result<(), DisplayError> {
        T::receive(self, buffer)
    }

    fn set_timeout(&mut self, timeout_ms: u32) {
        T::set_timeout(self, timeout_ms)
    }
}

/// SPI bus plus four GPIOs.
///
/// Chip select is driven by the driver rather than by an `SpiDevice`, since
/// the data/command line has to flip in the middle of one selection.
/// Timeouts are left to the HAL's SPI peripheral.
pub struct SpiTransport<SPI, CS, DC, RST, BSY> {
    /// SPI bus
    spi: SPI,
    /// Chip select, low while a transaction runs
    cs: CS,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting
    rst: RST,
    /// High for busy, Wait until display is ready!
    busy: BSY,
}

impl<SPI, CS, DC, RST, BSY> SpiTransport<SPI, CS, DC, RST, BSY> {
    /// Bundle the bus and the control pins
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, busy: BSY) -> Self {
        SpiTransport {
            spi,
            cs,
            dc,
            rst,
            busy,
        }
    }

    /// Give the bus and pins back
    pub fn release(self) -> (SPI, CS, DC, RST, BSY) {
        (self.spi, self.cs, self.dc, self.rst, self.busy)
    }
}

impl<SPI, CS, DC, RST, BSY> Transport for SpiTransport<SPI, CS, DC, RST, BSY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    BSY: InputPin,
{
    fn set_line(&mut self, line: Line, state: PinState) -> Result<(), DisplayError> {
        match line {
            Line::ChipSelect => self.cs.set_state(state).map_err(|_| DisplayError::CSError),
            Line::DataCommand => self.dc.set_state(state).map_err(|_| DisplayError::DCError),
            Line::Reset => self.rst.set_state(state).map_err(|_| DisplayError::RSError),
            Line::Busy => {
                log::error!("busy is an input line and cannot be driven");
                Err(DisplayError::DCError)
            }
        }
    }

    fn read_line(&mut self, line: Line) -> Result<PinState, DisplayError> {
        match line {
            // DisplayError has no busy variant, map to DCError
            Line::Busy => self
                .busy
                .is_high()
                .map(PinState::from)
                .map_err(|_| DisplayError::DCError),
            _ => {
                log::error!("{:?} is an output line and cannot be read", line);
                Err(DisplayError::DCError)
            }
        }
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        match self.spi.write(bytes).and_then(|()| self.spi.flush()) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for {} bytes: {:?}", bytes.len(), e);
                Err(DisplayError::BusWriteError)
            }
        }
    }

    fn receive(&mut self, buffer: &mut [u8]) -> Result<(), DisplayError> {
        match self.spi.read(buffer) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("SPI read error for {} bytes: {:?}", buffer.len(), e);
                Err(DisplayError::BusWriteError)
            }
        }
    }
}

/// Optional transaction indicator, e.g. a debug LED.
///
/// Called around every bus transaction. Carries no protocol meaning.
pub trait Activity {
    /// A transaction is about to start
    fn begin(&mut self) {}

    /// The transaction finished, successfully or not
    fn end(&mut self) {}
}

/// Indicator that does nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoActivity;

impl Activity for NoActivity {}

/// LED that goes dark while the bus is in use.
pub struct ActivityLed<P> {
    pin: P,
}

impl<P: OutputPin> ActivityLed<P> {
    /// Wrap a pin, leaving it untouched until the first transaction
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Activity for ActivityLed<P> {
    fn begin(&mut self) {
        let _ = self.pin.set_low();
    }

    fn end(&mut self) {
        let _ = self.pin.set_high();
    }
}
