//! One-shot terminal chart viewer.
//!
//! Takes over the terminal, draws a single chart until the user dismisses
//! it with `q`, Esc, or Ctrl+C, then restores the screen. The blocking
//! behavior mirrors an interactive plot window.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

use benchtop_analysis::{HeatingCurve, XrdScan};

use crate::chart::{render_heating_curve, render_xrd_scan};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Display a heating curve until dismissed.
pub fn show_heating_curve(curve: &HeatingCurve) -> io::Result<()> {
    run(|frame| {
        let area = frame.area();
        render_heating_curve(frame, area, curve);
    })
}

/// Display an XRD scan until dismissed.
pub fn show_xrd_scan(scan: &XrdScan) -> io::Result<()> {
    run(|frame| {
        let area = frame.area();
        render_xrd_scan(frame, area, scan);
    })
}

fn run<F: FnMut(&mut Frame)>(mut draw: F) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut draw);

    // Restore the terminal even if drawing failed.
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<F: FnMut(&mut Frame)>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    draw: &mut F,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame))?;
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_dismiss(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }
    }
}

fn is_dismiss(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_keys() {
        assert!(is_dismiss(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(is_dismiss(KeyCode::Esc, KeyModifiers::NONE));
        assert!(is_dismiss(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn other_keys_do_not_dismiss() {
        assert!(!is_dismiss(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!is_dismiss(KeyCode::Enter, KeyModifiers::NONE));
        assert!(!is_dismiss(KeyCode::Char('x'), KeyModifiers::CONTROL));
    }
}
