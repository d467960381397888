//! # Snackbar Component
//!
//! The notification sink. Shows the latest core notification in its own
//! colours along the bottom of the screen and hides it once the configured
//! duration has passed. A newer notification replaces the current one.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::notification::{Notification, Rgb};
use crate::tui::component::Component;

struct Shown {
    notification: Notification,
    since: Instant,
}

pub struct Snackbar {
    duration: Duration,
    current: Option<Shown>,
}

impl Snackbar {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn show(&mut self, notification: Notification, now: Instant) {
        log::debug!("Snackbar: {}", notification.text);
        self.current = Some(Shown {
            notification,
            since: now,
        });
    }

    /// Drops the notification once it has been up for `duration`.
    /// Returns true if something was hidden.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|s| now.saturating_duration_since(s.since) >= self.duration);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn visible(&self) -> Option<&Notification> {
        self.current.as_ref().map(|s| &s.notification)
    }

    /// Time left before the current notification expires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .map(|s| self.duration.saturating_sub(now.saturating_duration_since(s.since)))
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Component for Snackbar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(notification) = self.visible() else {
            return;
        };
        let style = Style::default()
            .bg(to_color(notification.background))
            .fg(to_color(notification.foreground))
            .add_modifier(Modifier::BOLD);
        let paragraph = Paragraph::new(notification.text.as_str())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(paragraph, area);
    }
}
