//! SSD1680 Display Driver Implementation
//!
//! ## Lifecycle
//!
//! - [`Ssd1680::reset`] - pulse the reset line, no bus traffic
//! - [`Ssd1680::init`] - reset, software reset, program gate scan, update
//!   control, data entry mode and temperature sensor
//! - [`Ssd1680::refresh`] - booster soft start, update sequence, master
//!   activation, then wait for the busy line
//!
//! ## RAM windows
//!
//! The controller keeps one address counter shared by both planes. The
//! horizontal range is in byte columns, so `left`, `width` and the start `x`
//! must sit on 8-pixel boundaries. Setting a range does not move the counter;
//! [`Ssd1680::set_start_address`] has to follow before every bulk transfer.
//!
//! ## BUSY Pin Wait
//!
//! [`Ssd1680::wait_until_idle`] polls the busy line every 2 ms with no
//! deadline. A refresh takes seconds. A stuck busy line hangs the call, so
//! an application that cannot tolerate that needs its own watchdog.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

use crate::cmd::Cmd;
use crate::color::{Color, FillPattern, Pattern};
use crate::config::Config;
use crate::error::Error;
use crate::flag::Flag;
use crate::interface::DisplayInterface;
use crate::register::{self, Border, DataEntryMode, GateScan, RamBank, UpdateControl1};
use crate::state::{Event, State};
use crate::transport::{Activity, Line, NoActivity, Transport};

/// SSD1680 E-Paper Display Driver
///
/// ## Type Parameters
///
/// - `T` - [`Transport`] carrying the bus and control lines
/// - `D` - Delay provider for reset timing and busy polling
/// - `A` - [`Activity`] indicator, none by default
pub struct Ssd1680<T, D, A = NoActivity> {
    pub(crate) interface: DisplayInterface<T, A>,
    delay: D,
    config: Config,
    state: State,
}

impl<T, D> Ssd1680<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Create the driver. Nothing is sent until [`Ssd1680::init`].
    pub fn new(transport: T, delay: D, config: Config) -> Result<Self, Error> {
        config.validate()?;
        log::debug!(
            "creating new Ssd1680 instance {}x{}",
            config.width, config.height
        );
        let mut interface = DisplayInterface::new(transport);
        interface.set_timeout(config.timeout_ms);
        Ok(Ssd1680 {
            interface,
            delay,
            config,
            state: State::PoweredOff,
        })
    }
}

impl<T, D, A> Ssd1680<T, D, A> {
    /// Toggle `activity` around every bus transaction
    pub fn with_activity<B: Activity>(self, activity: B) -> Ssd1680<T, D, B> {
        Ssd1680 {
            interface: self.interface.with_activity(activity),
            delay: self.delay,
            config: self.config,
            state: self.state,
        }
    }

    /// Panel configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Give the transport and delay back
    pub fn release(self) -> (T, D) {
        (self.interface.release(), self.delay)
    }
}

impl<T, D, A> Ssd1680<T, D, A>
where
    T: Transport,
    D: DelayNs,
    A: Activity,
{
    fn advance(&mut self, event: Event) -> Result<(), Error> {
        self.state = self.state.transition(event)?;
        Ok(())
    }

    // ==================== Lifecycle ====================

    /// Hardware reset: reset low for 2 ms, then high and settle for 10 ms.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.advance(Event::ResetAsserted)?;
        self.interface.set_line(Line::Reset, PinState::Low)?;
        self.delay.delay_ms(Flag::RESET_PULSE_MS);
        self.interface.set_line(Line::Reset, PinState::High)?;
        self.delay.delay_ms(Flag::RESET_SETTLE_MS);
        self.advance(Event::ResetReleased)
    }

    /// Cold initialisation. Leaves the controller idle with the default
    /// row-major data entry order.
    pub fn init(&mut self) -> Result<(), Error> {
        log::info!("Initializing SSD1680 {}x{}", self.config.width, self.config.height);
        self.interface.park_lines()?;
        self.reset()?;

        // Software reset - start with a clean state
        self.interface.cmd(Cmd::SW_RESET)?;
        self.wait_until_idle()?;
        self.advance(Event::SoftwareResetDone)?;

        let mut user_id = [0u8; Flag::USER_ID_LEN];
        self.interface.receive(Cmd::READ_USER_ID, &mut user_id)?;
        log::debug!("user id {:02X?}", user_id);

        self.set_gate_scan_range(0, self.config.height)?;
        self.update_control_1()?;
        self.update_control_2()?;
        self.set_data_entry_mode(DataEntryMode::RightThenDown)?;
        self.select_internal_temperature_sensor()?;

        self.advance(Event::Configured)
    }

    /// Push RAM contents to the panel and block until the busy line clears.
    ///
    /// Only legal once [`Ssd1680::init`] has completed. A failure leaves the
    /// driver in [`State::Updating`] until the next `init`.
    pub fn refresh(&mut self) -> Result<(), Error> {
        self.advance(Event::RefreshStarted)?;
        log::info!("Refreshing panel");
        self.interface
            .send(Cmd::BOOSTER_SOFT_START, &Flag::BOOSTER_SOFT_START_DEFAULT)?;
        self.update_control_2()?;
        self.interface.cmd(Cmd::MASTER_ACTIVATION)?;
        self.wait_until_idle()?;
        self.advance(Event::RefreshDone)
    }

    /// Poll the busy line every 2 ms until it goes low. No deadline.
    pub fn wait_until_idle(&mut self) -> Result<(), Error> {
        log::debug!("waiting for busy line to clear");
        let mut polls = 0u32;
        while self.interface.read_line(Line::Busy)? == PinState::High {
            self.delay.delay_ms(Flag::BUSY_POLL_MS);
            polls = polls.saturating_add(1);
        }
        log::debug!("busy line cleared after {} polls", polls);
        Ok(())
    }

    // ==================== Register programming ====================

    /// First gate line (0x0F) and number of gate lines (0x01)
    pub fn set_gate_scan_range(&mut self, top: u16, rows: u16) -> Result<(), Error> {
        log::debug!("gate scan: start {}, rows {}", top, rows);
        self.interface
            .send(Cmd::GATE_SCAN_START, &register::gate_scan_start(top))?;
        let scan = GateScan { rows, order: 0 };
        self.interface.send(Cmd::GATE_SCAN, &scan.to_bytes())
    }

    /// Plane bypass/inversion and scan mode for the configured panel (0x21)
    pub fn update_control_1(&mut self) -> Result<(), Error> {
        let control = UpdateControl1::for_config(&self.config);
        self.interface
            .send(Cmd::UPDATE_CONTROL_1, &control.to_bytes())
    }

    /// Select the full update sequence (0x22)
    pub fn update_control_2(&mut self) -> Result<(), Error> {
        self.interface
            .send(Cmd::UPDATE_CONTROL_2, &[Flag::UPDATE_FULL_SEQUENCE])
    }

    /// Address counter walk order (0x11)
    pub fn set_data_entry_mode(&mut self, mode: DataEntryMode) -> Result<(), Error> {
        self.interface.send(Cmd::DATA_ENTRY_MODE, &[mode.bits()])
    }

    /// Use the built-in temperature sensor (0x18)
    pub fn select_internal_temperature_sensor(&mut self) -> Result<(), Error> {
        self.interface
            .send(Cmd::SELECT_TEMP_SENSOR, &[Flag::INTERNAL_TEMP_SENSOR])
    }

    /// Border waveform following `color` (0x3C)
    pub fn set_border(&mut self, color: Color) -> Result<(), Error> {
        self.interface
            .send(Cmd::BORDER, &[Border::new(color).to_byte()])
    }

    /// Plane the next RAM read comes from (0x41)
    pub fn select_ram_bank(&mut self, bank: RamBank) -> Result<(), Error> {
        self.interface.send(Cmd::RAM_READ_BANK, &[bank.bits()])
    }

    /// Raw gate driving voltage (0x03)
    pub fn set_gate_voltage(&mut self, level: u8) -> Result<(), Error> {
        self.interface.send(Cmd::GATE_VOLTAGE, &[level])
    }

    /// Raw source driving voltages VSH1, VSH2, VSL (0x04)
    pub fn set_source_voltage(&mut self, levels: [u8; 3]) -> Result<(), Error> {
        self.interface.send(Cmd::SOURCE_VOLTAGE, &levels)
    }

    /// Raw VCOM level (0x2C)
    pub fn set_vcom(&mut self, level: u8) -> Result<(), Error> {
        self.interface.send(Cmd::VCOM_VOLTAGE, &[level])
    }

    /// Read the internal temperature sensor, fraction bits dropped
    pub fn read_temperature(&mut self) -> Result<u16, Error> {
        self.select_internal_temperature_sensor()?;
        let mut raw = [0u8; 2];
        self.interface.receive(Cmd::READ_TEMP, &mut raw)?;
        Ok(register::temperature(raw))
    }

    /// No operation (0x7F), terminates a pending RAM write or read
    pub fn nop(&mut self) -> Result<(), Error> {
        self.interface.cmd(Cmd::NOP)
    }

    // ==================== RAM windows ====================

    /// Horizontal RAM window in pixels, both on byte boundaries (0x44)
    pub fn set_horizontal_range(&mut self, left: u8, width: u8) -> Result<(), Error> {
        let range = register::ram_x_range(left, width)?;
        log::debug!("set_horizontal_range: x {}+{} -> {:?}", left, width, range);
        self.interface.send(Cmd::RAM_X_RANGE, &range)
    }

    /// Vertical RAM window in rows (0x45)
    pub fn set_vertical_range(&mut self, top: u16, height: u16) -> Result<(), Error> {
        let range = register::ram_y_range(top, height)?;
        log::debug!("set_vertical_range: y {}+{}", top, height);
        self.interface.send(Cmd::RAM_Y_RANGE, &range)
    }

    /// Move the address counter to pixel `(x, y)`; `x` on a byte boundary.
    pub fn set_start_address(&mut self, x: u8, y: u16) -> Result<(), Error> {
        let column = register::ram_x_address(x)?;
        log::debug!("set_start_address: x {}, y {}", x, y);
        self.interface.send(Cmd::RAM_X_COUNTER, &[column])?;
        self.interface
            .send(Cmd::RAM_Y_COUNTER, &register::ram_y_address(y))
    }

    /// Windows covering the whole panel
    pub fn reset_full_range(&mut self) -> Result<(), Error> {
        self.set_horizontal_range(0, self.config.width)?;
        self.set_vertical_range(0, self.config.height)
    }

    // ==================== Auto write ====================

    /// Fill both planes with the controller's pattern generator.
    ///
    /// The black plane gets bit 0 of `color`, the red plane bit 1.
    pub fn ram_fill(
        &mut self,
        black: FillPattern,
        red: FillPattern,
        color: Color,
    ) -> Result<(), Error> {
        log::info!("Filling RAM with {:?} ({:?} / {:?})", color, black, red);
        self.reset_full_range()?;
        self.interface
            .send(Cmd::PATTERN_BLACK, &[register::black_pattern(black, color)])?;
        self.wait_until_idle()?;
        self.interface
            .send(Cmd::PATTERN_RED, &[register::red_pattern(red, color)])?;
        self.wait_until_idle()
    }

    /// Fill the whole panel with one color
    pub fn clear(&mut self, color: Color) -> Result<(), Error> {
        self.ram_fill(FillPattern::SOLID, FillPattern::SOLID, color)
    }

    /// Checkerboard test fill: 16 px black squares over 8 px red squares
    pub fn checker(&mut self) -> Result<(), Error> {
        self.ram_fill(
            FillPattern::new(Pattern::Pattern16, Pattern::Pattern16),
            FillPattern::new(Pattern::Pattern8, Pattern::Pattern8),
            Color::AlternateRed,
        )
    }
}
