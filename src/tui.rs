// Terminal setup and teardown.
// Restores the terminal on setup failure and on panic.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn enter<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    execute!(out, EnterAlternateScreen)?;
    if mouse {
        execute!(out, EnableMouseCapture)?;
    }
    Ok(())
}

fn leave<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, DisableMouseCapture)?;
    }
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Puts the terminal into raw mode on the alternate screen.
///
/// If any step fails the steps already taken are undone before the error is
/// returned, so the shell is never left in raw mode.
pub fn init(mouse: bool) -> io::Result<Tui> {
    enable_raw_mode()?;
    let setup = enter(&mut io::stdout(), mouse)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    match setup {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            if let Err(r) = restore(mouse) {
                tracing::error!(error = %r, "unable to restore terminal");
            }
            Err(e)
        }
    }
}

/// Leaves raw mode and the alternate screen. Safe to call more than once.
pub fn restore(mouse: bool) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = leave(&mut io::stdout(), mouse);
    raw.and(screen)
}

/// Restores the terminal before the default panic report is printed.
pub fn install_panic_hook(mouse: bool) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if let Err(r) = restore(mouse) {
            tracing::error!(error = %r, "unable to exit terminal");
        }
        tracing::error!(%info, "panic");
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_enter_switches_to_alternate_screen() {
        let out = written(|w| enter(w, false));
        assert!(out.contains("\x1b[?1049h"));
        assert!(!out.contains("\x1b[?1000h"));
    }

    #[test]
    fn test_enter_with_mouse_enables_capture() {
        let out = written(|w| enter(w, true));
        assert!(out.contains("\x1b[?1049h"));
        assert!(out.contains("\x1b[?1000h"));
    }

    #[test]
    fn test_leave_restores_screen_and_cursor() {
        let out = written(|w| leave(w, true));
        assert!(out.contains("\x1b[?1000l"));
        assert!(out.contains("\x1b[?1049l"));
        assert!(out.contains("\x1b[?25h"));
    }
}
