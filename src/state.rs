//! Controller lifecycle
//!
//! ```text
//! PoweredOff -> Resetting -> AwaitingReady -> Configuring -> Idle <-> Updating
//! ```
//!
//! A hardware reset is accepted from any state. Every other edge has exactly
//! one source state, so calling e.g. `refresh()` before `init()` surfaces as
//! [`Error::InvalidState`] instead of undefined panel behaviour.

use crate::error::Error;

/// Where the controller is in its reset/configure/refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Nothing has been sent yet
    #[default]
    PoweredOff,
    /// Reset line is held low
    Resetting,
    /// Reset released, waiting for the software reset to finish
    AwaitingReady,
    /// Software reset done, registers being programmed
    Configuring,
    /// Ready for RAM access and refreshes
    Idle,
    /// A refresh is running and the busy line is asserted
    Updating,
}

/// Transitions requested by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Reset line driven low
    ResetAsserted,
    /// Reset line driven high again
    ResetReleased,
    /// Software reset sent and the busy line cleared
    SoftwareResetDone,
    /// Cold-init register programming complete
    Configured,
    /// Master activation about to be sent
    RefreshStarted,
    /// Busy line cleared after master activation
    RefreshDone,
}

impl State {
    /// Apply `event`, returning the next state or why it is not allowed.
    pub fn transition(self, event: Event) -> Result<State, Error> {
        match (self, event) {
            (_, Event::ResetAsserted) => Ok(State::Resetting),
            (State::Resetting, Event::ResetReleased) => Ok(State::AwaitingReady),
            (State::AwaitingReady, Event::SoftwareResetDone) => Ok(State::Configuring),
            (State::Configuring, Event::Configured) => Ok(State::Idle),
            (State::Idle, Event::RefreshStarted) => Ok(State::Updating),
            (State::Updating, Event::RefreshDone) => Ok(State::Idle),
            (state, event) => Err(Error::InvalidState { state, event }),
        }
    }
}
