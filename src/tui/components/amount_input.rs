//! # AmountInput Component
//!
//! Single-line field for the rupee amount.
//!
//! ## Responsibilities
//!
//! - Capture text input, capped at `MAX_INPUT_CHARS` characters
//! - Handle editing (backspace, delete, cursor movement, paste, clear)
//! - Report every content change so the core can recompute
//!
//! Non-numeric characters are accepted on purpose. Validation belongs to the
//! core, which answers with a notification rather than a refusal here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::MAX_INPUT_CHARS;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PREFIX: &str = "₹ ";
const PLACEHOLDER: &str = "Enter value to convert";

/// High-level events emitted by the AmountInput
#[derive(Debug, Clone, PartialEq)]
pub enum AmountEvent {
    /// Buffer content changed; carries the full new text.
    Changed(String),
}

pub struct AmountInput {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
    max_chars: usize,
}

impl AmountInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            max_chars: MAX_INPUT_CHARS,
        }
    }

    fn remaining(&self) -> usize {
        self.max_chars.saturating_sub(self.buffer.chars().count())
    }

    fn insert(&mut self, text: &str) -> Option<AmountEvent> {
        let accepted: String = text
            .chars()
            .filter(|c| !c.is_control())
            .take(self.remaining())
            .collect();
        if accepted.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, &accepted);
        self.cursor += accepted.len();
        Some(self.changed())
    }

    fn changed(&self) -> AmountEvent {
        AmountEvent::Changed(self.buffer.clone())
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

impl Default for AmountInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AmountInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!("Amount (max {} chars)", self.max_chars));

        let prefix = Span::styled(
            PREFIX,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        );
        let body = if self.buffer.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(self.buffer.as_str(), Style::default().fg(Color::Green))
        };

        frame.render_widget(Paragraph::new(Line::from(vec![prefix, body])).block(block), area);

        let offset = (PREFIX.width() + self.buffer[..self.cursor].width()) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        frame.set_cursor_position(((area.x + 1 + offset).min(max_x), area.y + 1));
    }
}

impl EventHandler for AmountInput {
    type Event = AmountEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(self.changed())
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                Some(self.changed())
            }
            TuiEvent::ClearInput => {
                if self.buffer.is_empty() {
                    return None;
                }
                self.buffer.clear();
                self.cursor = 0;
                Some(self.changed())
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn changed(text: &str) -> Option<AmountEvent> {
        Some(AmountEvent::Changed(text.to_string()))
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = AmountInput::new();
        assert_eq!(input.handle_event(&TuiEvent::InputChar('4')), changed("4"));
        assert_eq!(input.handle_event(&TuiEvent::InputChar('2')), changed("42"));
        assert_eq!(input.handle_event(&TuiEvent::Backspace), changed("4"));
        assert_eq!(input.handle_event(&TuiEvent::Backspace), changed(""));
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_length_cap() {
        let mut input = AmountInput::new();
        for _ in 0..MAX_INPUT_CHARS {
            assert!(input.handle_event(&TuiEvent::InputChar('9')).is_some());
        }
        assert_eq!(input.handle_event(&TuiEvent::InputChar('9')), None);
        assert_eq!(input.buffer.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_paste_is_truncated_and_filtered() {
        let mut input = AmountInput::new();
        input.handle_event(&TuiEvent::Paste("12\n34".to_string()));
        assert_eq!(input.buffer, "1234");

        let res = input.handle_event(&TuiEvent::Paste("5678901234567890".to_string()));
        assert_eq!(res, changed("12345678901234"));
    }

    #[test]
    fn test_non_numeric_characters_accepted() {
        let mut input = AmountInput::new();
        input.handle_event(&TuiEvent::InputChar('a'));
        input.handle_event(&TuiEvent::InputChar('₹'));
        assert_eq!(input.buffer, "a₹");
        assert_eq!(input.handle_event(&TuiEvent::Backspace), changed("a"));
    }

    #[test]
    fn test_cursor_editing() {
        let mut input = AmountInput::new();
        input.handle_event(&TuiEvent::Paste("100".to_string()));
        input.handle_event(&TuiEvent::CursorHome);
        assert_eq!(input.handle_event(&TuiEvent::InputChar('5')), changed("5100"));
        input.handle_event(&TuiEvent::CursorRight);
        assert_eq!(input.handle_event(&TuiEvent::Delete), changed("510"));
        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_clear_input() {
        let mut input = AmountInput::new();
        input.handle_event(&TuiEvent::Paste("77".to_string()));
        assert_eq!(input.handle_event(&TuiEvent::ClearInput), changed(""));
        assert_eq!(input.handle_event(&TuiEvent::ClearInput), None);
    }

    #[test]
    fn test_render_placeholder_and_value() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = AmountInput::new();

        terminal.draw(|f| {
            let area = f.area();
            input.render(f, area)
        }).unwrap();
        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Enter value to convert"));
        assert!(text.contains('₹'));

        input.handle_event(&TuiEvent::Paste("250".to_string()));
        terminal.draw(|f| {
            let area = f.area();
            input.render(f, area)
        }).unwrap();
        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("250"));
        assert!(!text.contains("Enter value"));
    }
}
