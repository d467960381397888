//! # Currency List Component
//!
//! One pressable row per currency in the rate table. The row for the current
//! target is painted in the selection colour; a separate keyboard cursor
//! (Up/Down, Enter) picks which row a press goes to. Mouse clicks press the
//! row under the pointer.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CurrencyListState` lives in `TuiState`
//! - `CurrencyList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::core::rates::RateTable;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Background of the row matching the current target.
const SELECTED_BG: Color = Color::Rgb(0xFF, 0xEA, 0xA7);
const FLAG_WIDTH: usize = 2;

/// Persistent state for the currency list.
pub struct CurrencyListState {
    len: usize,
    pub cursor: usize,
    pub list_state: ListState,
    /// Inner area from the last render, for mouse hit testing.
    last_inner: Rect,
}

impl CurrencyListState {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self {
            len,
            cursor: 0,
            list_state,
            last_inner: Rect::default(),
        }
    }

    fn move_cursor(&mut self, to: usize) {
        self.cursor = to;
        self.list_state.select(Some(to));
    }

    /// Map a screen position to the row drawn there, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_inner;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let index = self.list_state.offset() + (row - area.y) as usize;
        (index < self.len).then_some(index)
    }
}

/// Events emitted by the currency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyListEvent {
    /// The row at this position was pressed.
    Press(usize),
}

impl EventHandler for CurrencyListState {
    type Event = CurrencyListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CurrencyListEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.move_cursor(self.cursor.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.move_cursor((self.cursor + 1).min(self.len - 1));
                None
            }
            TuiEvent::Submit => Some(CurrencyListEvent::Press(self.cursor)),
            TuiEvent::MouseClick(column, row) => {
                let index = self.hit_test(*column, *row)?;
                self.move_cursor(index);
                Some(CurrencyListEvent::Press(index))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the currency list.
pub struct CurrencyList<'a> {
    state: &'a mut CurrencyListState,
    rates: &'a RateTable,
    target: Option<usize>,
}

impl<'a> CurrencyList<'a> {
    pub fn new(state: &'a mut CurrencyListState, rates: &'a RateTable, target: Option<usize>) -> Self {
        Self {
            state,
            rates,
            target,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Convert to ")
            .title_bottom(Line::from(" ↑↓ Move  Enter Convert  Esc Quit ").centered())
            .padding(Padding::horizontal(1));
        self.state.last_inner = block.inner(area);

        let name_width = self
            .rates
            .iter()
            .map(|r| r.name.width())
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = self
            .rates
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let is_target = self.target == Some(i);
                let style = if is_target {
                    Style::default()
                        .bg(SELECTED_BG)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let flag = pad_to(&record.flag, FLAG_WIDTH);
                let name = pad_to(&record.name, name_width);
                let marker = if is_target { "  ✓" } else { "" };

                ListItem::new(Line::from(vec![
                    Span::raw(flag),
                    Span::raw("  "),
                    Span::raw(name),
                    Span::raw("  "),
                    Span::raw(record.symbol.clone()),
                    Span::raw(marker),
                ]))
                .style(style)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("▶ ")
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Right-pad `s` with spaces to `width` display columns.
fn pad_to(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}
