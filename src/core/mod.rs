//! Poll loop and output surfaces

mod poll_loop;
mod screen;

pub use poll_loop::{Dashboard, PollState};
pub use screen::{MemoryScreen, Screen, TerminalScreen};
