//! # TUI Adapter
//!
//! The ratatui-specific presentation layer. Handles terminal I/O, renders the
//! screen, and translates keyboard and mouse events into core `Action`s.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop only redraws after an event or when a notification expires.
//! While a notification is up, the poll timeout shrinks to the time it has
//! left so it disappears on schedule; otherwise the loop sleeps up to 500ms.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::rates::RateTable;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{AmountEvent, AmountInput, CurrencyListEvent, CurrencyListState, Snackbar};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub amount_input: AmountInput,
    pub currency_list: CurrencyListState,
    pub snackbar: Snackbar,
}

impl TuiState {
    pub fn new(currency_count: usize, notification_duration: Duration) -> Self {
        Self {
            amount_input: AmountInput::new(),
            currency_list: CurrencyListState::new(currency_count),
            snackbar: Snackbar::new(notification_duration),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Routes one terminal event through the components and the core.
///
/// Returns true when the app should exit.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: &TuiEvent, now: Instant) -> bool {
    let action = match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit | TuiEvent::MouseClick(..) => {
            match tui.currency_list.handle_event(event) {
                Some(CurrencyListEvent::Press(index)) => app
                    .rates
                    .get(index)
                    .map(|c| Action::ButtonPressed(c.name.clone())),
                None => None,
            }
        }
        _ => match tui.amount_input.handle_event(event) {
            Some(AmountEvent::Changed(text)) => Some(Action::TextChanged(text)),
            None => None,
        },
    };

    let Some(action) = action else {
        return false;
    };
    match update(app, action) {
        Effect::None => false,
        Effect::Notify(notification) => {
            tui.snackbar.show(notification, now);
            false
        }
        Effect::Quit => true,
    }
}

pub fn run(config: &ResolvedConfig, rates: RateTable) -> std::io::Result<()> {
    let mut app = App::new(rates);
    let mut tui = TuiState::new(
        app.rates.len(),
        Duration::from_millis(config.notification_ms),
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => return finish(Err(e)),
    };
    info!("Converter ready with {} currencies", app.rates.len());

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = tui
            .snackbar
            .remaining(Instant::now())
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));

        let first_event = match poll_event_timeout(timeout) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut pending = first_event;
        while let Some(event) = pending.take() {
            needs_redraw = true;
            if dispatch(&mut app, &mut tui, &event, Instant::now()) {
                should_quit = true;
                break;
            }
            match poll_event_immediate() {
                Ok(next) => pending = next,
                Err(e) => return finish(Err(e)),
            }
        }

        if should_quit {
            info!("Quit requested");
            break Ok(());
        }

        if tui.snackbar.expire(Instant::now()) {
            needs_redraw = true;
        }
    };

    finish(result)
}

fn finish(result: std::io::Result<()>) -> std::io::Result<()> {
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn state(app: &App) -> TuiState {
        TuiState::new(app.rates.len(), Duration::from_secs(2))
    }

    fn type_str(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            dispatch(app, tui, &TuiEvent::InputChar(c), Instant::now());
        }
    }

    #[test]
    fn test_typing_then_enter_converts() {
        let mut app = test_app();
        let mut tui = state(&app);
        type_str(&mut app, &mut tui, "100");
        assert_eq!(app.raw_input, "100");

        assert!(!dispatch(&mut app, &mut tui, &TuiEvent::Submit, Instant::now()));
        assert_eq!(app.result_text.as_deref(), Some("$ 1.20"));
        assert!(tui.snackbar.visible().is_none());
    }

    #[test]
    fn test_enter_without_amount_shows_snackbar() {
        let mut app = test_app();
        let mut tui = state(&app);
        dispatch(&mut app, &mut tui, &TuiEvent::Submit, Instant::now());
        assert!(app.target.is_none());
        assert_eq!(
            tui.snackbar.visible().map(|n| n.text.as_str()),
            Some("Enter a value to convert")
        );
    }

    #[test]
    fn test_live_recompute_while_typing() {
        let mut app = test_app();
        let mut tui = state(&app);
        type_str(&mut app, &mut tui, "5");
        dispatch(&mut app, &mut tui, &TuiEvent::CursorDown, Instant::now());
        dispatch(&mut app, &mut tui, &TuiEvent::CursorDown, Instant::now());
        dispatch(&mut app, &mut tui, &TuiEvent::Submit, Instant::now());
        assert_eq!(app.result_text.as_deref(), Some("¥ 7.50"));

        type_str(&mut app, &mut tui, "0");
        assert_eq!(app.result_text.as_deref(), Some("¥ 75.00"));
    }

    #[test]
    fn test_backspace_to_empty_keeps_result() {
        let mut app = test_app();
        let mut tui = state(&app);
        type_str(&mut app, &mut tui, "50");
        dispatch(&mut app, &mut tui, &TuiEvent::Submit, Instant::now());
        dispatch(&mut app, &mut tui, &TuiEvent::Backspace, Instant::now());
        dispatch(&mut app, &mut tui, &TuiEvent::Backspace, Instant::now());

        // "5" still converts; the empty field keeps that last result
        assert_eq!(app.raw_input, "");
        assert_eq!(app.result_text.as_deref(), Some("$ 0.06"));
        assert_eq!(
            tui.snackbar.visible().map(|n| n.text.as_str()),
            Some("Not a valid number to convert")
        );
    }

    #[test]
    fn test_quit_and_resize() {
        let mut app = test_app();
        let mut tui = state(&app);
        assert!(!dispatch(&mut app, &mut tui, &TuiEvent::Resize, Instant::now()));
        assert!(dispatch(&mut app, &mut tui, &TuiEvent::Quit, Instant::now()));
    }
}
