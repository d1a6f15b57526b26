use crate::{
    localization::current_labels,
    shapes::enums::{FriendlyName, TeamSideEnum},
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Colour a side is drawn with across the board.
pub fn team_color(team: TeamSideEnum) -> Color {
    match team {
        TeamSideEnum::A => Color::Blue,
        TeamSideEnum::B => Color::Red,
    }
}

/// Lighter variant of [`team_color`], used for links and highlights.
pub fn team_light_color(team: TeamSideEnum) -> Color {
    match team {
        TeamSideEnum::A => Color::LightBlue,
        TeamSideEnum::B => Color::LightRed,
    }
}

#[derive(Debug, Clone)]
pub struct TeamPanel {
    pub team: TeamSideEnum,
}

impl TeamPanel {
    pub fn new(team: TeamSideEnum) -> Self {
        Self { team }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, score: u32, sets_won: u32, serving: bool) {
        let labels = current_labels();
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                score.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{}: ", labels.sets),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(sets_won.to_string()),
            ]),
        ];
        if serving {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("● {}", labels.serving),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            )));
        }
        // the serving side is drawn brighter
        let bg = if serving {
            team_light_color(self.team)
        } else {
            team_color(self.team)
        };
        let panel = Paragraph::new(Text::from(lines))
            .style(Style::default().fg(Color::White).bg(bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.team.friendly_name(labels))
                    .title_alignment(Alignment::Center),
            )
            .alignment(Alignment::Center);
        f.render_widget(panel, area);
    }
}
