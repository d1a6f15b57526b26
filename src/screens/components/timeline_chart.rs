use crate::{
    localization::current_labels,
    screens::components::team_panel::{team_color, team_light_color},
    shapes::{
        enums::{ConnectorEnum, TeamSideEnum},
        point::PointEntry,
        timeline::connectors,
    },
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MARKER_WIDTH: usize = 3;
const CELL_WIDTH: usize = MARKER_WIDTH + 1;
// title plus the three marker lines
const SET_HEIGHT: u16 = 4;

fn row_of(team: TeamSideEnum) -> usize {
    match team {
        TeamSideEnum::A => 0,
        TeamSideEnum::B => 2,
    }
}

/// Final (or running) score of a set, read from its points.
pub fn set_score(points: &[&PointEntry]) -> (u32, u32) {
    points.iter().fold((0, 0), |(a, b), p| match p.team {
        TeamSideEnum::A => (a.max(p.score_after), b),
        TeamSideEnum::B => (a, b.max(p.score_after)),
    })
}

/// Builds the three lines of a set: side A markers on top, links in the
/// middle, side B markers at the bottom. Only the most recent points that
/// fit in `width` are kept.
pub fn set_lines(points: &[&PointEntry], width: usize) -> [Line<'static>; 3] {
    let capacity = (width + 1) / CELL_WIDTH;
    let shown = &points[points.len().saturating_sub(capacity)..];
    let links = connectors(shown);
    let mut rows: [Vec<Span<'static>>; 3] = [vec![], vec![], vec![]];
    for (i, point) in shown.iter().enumerate() {
        let row = row_of(point.team);
        for (r, spans) in rows.iter_mut().enumerate() {
            if r == row {
                spans.push(Span::styled(
                    format!("{:^width$}", point.score_after, width = MARKER_WIDTH),
                    Style::default()
                        .fg(Color::White)
                        .bg(team_color(point.team))
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw(" ".repeat(MARKER_WIDTH)));
            }
        }
        if let Some(link) = links.get(i) {
            let (row, glyph, color) = match link {
                ConnectorEnum::Same(team) => (row_of(*team), "─", team_light_color(*team)),
                ConnectorEnum::Cross if point.team == TeamSideEnum::A => (1, "╲", Color::Magenta),
                ConnectorEnum::Cross => (1, "╱", Color::Magenta),
            };
            for (r, spans) in rows.iter_mut().enumerate() {
                if r == row {
                    spans.push(Span::styled(glyph, Style::default().fg(color)));
                } else {
                    spans.push(Span::raw(" "));
                }
            }
        }
    }
    rows.map(Line::from)
}

#[derive(Debug, Clone, Default)]
pub struct TimelineChart {}

impl TimelineChart {
    pub fn new() -> Self {
        Self {}
    }

    /// Renders the sets returned by `MatchState::visible_timelines`, keeping
    /// `selected` on screen.
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        timelines: &[Vec<&PointEntry>],
        selected: usize,
    ) {
        let labels = current_labels();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} (↑/↓)", labels.score_timeline));
        let inner = block.inner(area);
        f.render_widget(block, area);
        let fitting = ((inner.height / SET_HEIGHT) as usize).max(1);
        let offset = (selected + 1).saturating_sub(fitting);
        let visible: Vec<(usize, &Vec<&PointEntry>)> = timelines
            .iter()
            .enumerate()
            .skip(offset)
            .take(fitting)
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                visible
                    .iter()
                    .map(|_| Constraint::Length(SET_HEIGHT))
                    .chain(std::iter::once(Constraint::Min(0))),
            )
            .split(inner);
        let completed = timelines.len().saturating_sub(1);
        for ((index, points), row_area) in visible.into_iter().zip(rows.iter()) {
            let (a, b) = set_score(points);
            let name = if index == 0 {
                labels.current_set.to_string()
            } else {
                format!("{} {}", labels.set, completed + 1 - index)
            };
            let title_style = if index == selected {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let marker = if index == selected { "▶ " } else { "  " };
            let mut lines = vec![Line::from(Span::styled(
                format!("{}{} · {}-{}", marker, name, a, b),
                title_style,
            ))];
            if points.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    labels.no_points_yet,
                    Style::default().fg(Color::Gray),
                )));
            } else {
                lines.extend(set_lines(points, row_area.width as usize));
            }
            let bg = if index % 2 == 0 {
                Color::Reset
            } else {
                Color::DarkGray
            };
            f.render_widget(
                Paragraph::new(Text::from(lines)).style(Style::default().bg(bg)),
                *row_area,
            );
        }
    }
}
