//! # TitleBar Component
//!
//! Top line showing the app name and the current conversion target.
//!
//! Stateless: it receives everything as props and renders a single `Span`.
//!
//! 1. **Target selected**: `"Rupee Converter | ₹ → DOLLAR"`
//! 2. **Idle**: `"Rupee Converter | pick a currency"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Name of the selected target currency, if any
    pub target_name: Option<String>,
}

impl TitleBar {
    pub fn new(target_name: Option<String>) -> Self {
        Self { target_name }
    }

    fn text(&self) -> String {
        match &self.target_name {
            Some(name) => format!("Rupee Converter | ₹ → {name}"),
            None => "Rupee Converter | pick a currency".to_string(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| {
            let area = f.area();
            title_bar.render(f, area)
        }).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_idle() {
        let text = rendered(&mut TitleBar::new(None));
        assert!(text.contains("Rupee Converter"));
        assert!(text.contains("pick a currency"));
    }

    #[test]
    fn test_title_bar_with_target() {
        let text = rendered(&mut TitleBar::new(Some("EURO".to_string())));
        assert!(text.contains("EURO"));
        assert!(!text.contains("pick a currency"));
    }
}
