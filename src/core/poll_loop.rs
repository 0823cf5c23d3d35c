//! Poll loop driving one source and one screen

use super::screen::Screen;
use anyhow::Result;
use log::{debug, trace};
use std::time::{Duration, Instant};
use telemachus_dash_core::{BoxedDataSource, FetchError};
use telemachus_dash_render::{panel_frame, NO_SIGNAL};

/// Outcome of the most recent poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Telemetry arrived and the panel was drawn
    Polling,
    /// The service could not be reached
    NoSignal,
    /// A reply arrived but could not be read or decoded
    BadResponse,
}

/// Repeatedly fetches telemetry and redraws the panel
///
/// Cycles are strictly sequential. Each one builds its frame completely
/// before clearing the screen, and nothing decoded survives into the next
/// cycle. Failures never end the loop; the next tick simply tries again.
pub struct Dashboard<C: Screen> {
    source: BoxedDataSource,
    screen: C,
    interval: Duration,
    state: PollState,
}

impl<C: Screen> Dashboard<C> {
    pub fn new(source: BoxedDataSource, screen: C, interval: Duration) -> Self {
        Self {
            source,
            screen,
            interval,
            state: PollState::Polling,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn screen(&self) -> &C {
        &self.screen
    }

    /// Run one poll cycle and redraw
    pub fn tick(&mut self) -> Result<PollState> {
        let start = Instant::now();

        let (state, frame) = match self.source.poll() {
            Ok(snapshot) => (PollState::Polling, panel_frame(&snapshot)?),
            Err(e) => failure_frame(&e),
        };

        if state != self.state {
            debug!(
                "{}: {:?} -> {:?}",
                self.source.metadata().name,
                self.state,
                state
            );
        }
        self.state = state;

        self.screen.clear()?;
        self.screen.present(&frame)?;

        trace!("Poll cycle took {:?}", start.elapsed());
        Ok(state)
    }

    /// Poll forever, sleeping a fixed interval between cycles
    ///
    /// Only a failure to write to the screen ends the loop.
    pub fn run(&mut self) -> Result<()> {
        debug!(
            "Starting poll loop on {} every {:?}",
            self.source.metadata().description,
            self.interval
        );
        loop {
            self.tick()?;
            std::thread::sleep(self.interval);
        }
    }
}

/// Frame shown in place of the panel when a fetch fails
fn failure_frame(error: &FetchError) -> (PollState, String) {
    if error.is_no_signal() {
        debug!("Transport failure: {}", error);
        (PollState::NoSignal, format!("{}\n", NO_SIGNAL))
    } else {
        debug!("Bad datalink response: {}", error);
        (PollState::BadResponse, format!("{}\n", error))
    }
}
