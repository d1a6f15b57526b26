use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::localization::current_labels;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyMessage {
    Warning(String),
    Info(String),
}

#[derive(Debug, Default)]
pub struct NotifyBanner {
    pub message: Option<NotifyMessage>,
}

impl NotifyBanner {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn set_info(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Info(msg));
    }

    pub fn set_warning(&mut self, msg: String) {
        self.message = Some(NotifyMessage::Warning(msg));
    }

    pub fn reset(&mut self) {
        self.message = None;
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if let Some(message) = &self.message {
            let (msg, bg, title) = match message {
                NotifyMessage::Info(m) => (m, Color::Blue, current_labels().info),
                NotifyMessage::Warning(m) => (m, Color::Yellow, current_labels().warning),
            };
            let widget = Paragraph::new(msg.clone())
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(widget, area);
        }
    }
}
