//! Output surfaces for rendered frames

use crossterm::{cursor, style, terminal, QueueableCommand};
use std::io::{self, Stdout, Write};

/// Somewhere a frame can be drawn
///
/// Each cycle clears the surface and then presents one complete frame.
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;
    fn present(&mut self, frame: &str) -> io::Result<()>;
}

/// A real terminal, redrawn from the top-left corner
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl TerminalScreen<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.out.queue(style::Print(frame))?;
        self.out.flush()
    }
}

/// In-memory screen that keeps only what is visible after the last clear
#[derive(Debug, Default)]
pub struct MemoryScreen {
    contents: String,
    clears: usize,
}

impl MemoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently on screen
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// How many times the screen has been cleared
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Screen for MemoryScreen {
    fn clear(&mut self) -> io::Result<()> {
        self.contents.clear();
        self.clears += 1;
        Ok(())
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.contents.push_str(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_screen_homes_and_clears_before_frame() {
        let mut screen = TerminalScreen::new(Vec::new());
        screen.clear().unwrap();
        screen.present("no signal\n").unwrap();
        let written = String::from_utf8(screen.out).unwrap();
        assert!(written.starts_with("\x1b[1;1H\x1b[2J"));
        assert!(written.ends_with("no signal\n"));
    }

    #[test]
    fn memory_screen_drops_old_frame_on_clear() {
        let mut screen = MemoryScreen::new();
        screen.present("old").unwrap();
        screen.clear().unwrap();
        screen.present("new").unwrap();
        assert_eq!(screen.contents(), "new");
        assert_eq!(screen.clears(), 1);
    }
}
