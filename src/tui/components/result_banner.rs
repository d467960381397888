//! # ResultBanner Component
//!
//! Shows the last converted amount, centred and bold. Renders nothing at all
//! while there is no result yet.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct ResultBanner<'a> {
    pub result_text: Option<&'a str>,
}

impl<'a> ResultBanner<'a> {
    pub fn new(result_text: Option<&'a str>) -> Self {
        Self { result_text }
    }
}

impl Component for ResultBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(text) = self.result_text.filter(|t| !t.is_empty()) else {
            return;
        };
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        frame.render_widget(paragraph, area);
    }
}
