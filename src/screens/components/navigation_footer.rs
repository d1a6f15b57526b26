use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct NavigationFooter {}

impl NavigationFooter {
    pub fn new() -> Self {
        Self {}
    }

    /// Lays out `key = action` pairs, wrapping when the next pair would not fit.
    pub fn lines(&self, width: usize, entries: Vec<(String, String)>) -> Vec<Line<'static>> {
        let mut text = Vec::new();
        let mut current_line = Vec::new();
        let mut used = 0;
        for (key, action) in entries {
            let span_len = key.chars().count() + action.chars().count() + 3; // " = "
            if used > 0 && used + span_len > width {
                text.push(Line::from(std::mem::take(&mut current_line)));
                used = 0;
            }
            current_line.push(Span::styled(key, Style::default().fg(Color::Cyan)));
            current_line.push(Span::raw(" = "));
            current_line.push(Span::styled(action, Style::default().fg(Color::White)));
            current_line.push(Span::raw("   "));
            used += span_len + 3;
        }
        if !current_line.is_empty() {
            text.push(Line::from(current_line));
        }
        text
    }

    pub fn render(&self, f: &mut Frame, area: Rect, entries: Vec<(String, String)>) {
        let lines = self.lines(area.width.saturating_sub(1) as usize, entries);
        let paragraph = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::NONE)
                    .padding(Padding::new(1, 0, 0, 0)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

#[test]
fn test_footer_wraps_entries_that_do_not_fit() {
    let footer = NavigationFooter::new();
    let entries = vec![
        ("a".to_string(), "point blue".to_string()),
        ("l".to_string(), "point red".to_string()),
        ("r".to_string(), "reset".to_string()),
    ];
    assert_eq!(footer.lines(80, entries.clone()).len(), 1);
    assert_eq!(footer.lines(20, entries).len(), 3);
}
