use std::io::{self, Stdout};

use crossterm::{cursor, event, execute, terminal};

/// Owns raw mode and the alternate screen; restores both on drop.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            event::EnableBracketedPaste,
            event::EnableFocusChange
        )?;
        Ok(Self { stdout })
    }

    pub fn stdout(&mut self) -> &mut Stdout {
        &mut self.stdout
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let restored = execute!(
            self.stdout,
            event::DisableFocusChange,
            event::DisableBracketedPaste,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        if let Err(e) = restored.and_then(|_| terminal::disable_raw_mode()) {
            log::error!("failed to restore terminal: {e}");
        }
    }
}
