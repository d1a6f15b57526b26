use crate::{
    localization::current_labels,
    logging::logger::log_info,
    providers::clock::Clock,
    screens::{
        components::{
            navigation_footer::NavigationFooter, notify_banner::NotifyBanner,
            team_panel::TeamPanel, timeline_chart::TimelineChart,
        },
        help_screen::HelpScreen,
        screen::{get_keybinding_actions, AppAction, Renderable, Sba, Screen},
    },
    shapes::{
        enums::{FriendlyName, ScreenActionEnum, TeamSideEnum},
        keybinding::KeyBindings,
        match_state::MatchState,
        point::PointEntry,
        settings::Settings,
    },
};
use crokey::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

#[derive(Debug)]
pub struct ScoreboardScreen<C: Clock> {
    settings: Settings,
    state: MatchState,
    clock: C,
    selected_set: usize,
    notify_message: NotifyBanner,
    footer: NavigationFooter,
    chart: TimelineChart,
    panels: [TeamPanel; 2],
    // where the panels were last drawn, for click-to-score
    panel_areas: [Rect; 2],
    combiner: crokey::Combiner,
    screen_key_bindings: KeyBindings,
}

impl<C: Clock> Renderable for ScoreboardScreen<C> {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(6)])
            .split(body);
        let (scores, history) = (rows[0], rows[1]);
        let panel_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(scores);
        let history_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(history);
        for (panel, area) in self.panels.iter().zip(panel_columns.iter()) {
            panel.render(
                f,
                *area,
                self.state.score(panel.team),
                self.state.sets_won(panel.team),
                self.state.server == panel.team,
            );
        }
        self.panel_areas = [panel_columns[0], panel_columns[1]];
        let timelines = self.state.visible_timelines();
        self.chart
            .render(f, history_columns[0], &timelines, self.selected_set);
        if let Some(points) = timelines.get(self.selected_set) {
            self.render_point_table(f, history_columns[1], points);
        }
        let screen_actions = &self.get_screen_actions();
        let kb = &self.settings.keybindings;
        let footer_entries = get_keybinding_actions(kb, screen_actions);
        self.screen_key_bindings = kb.slice(Sba::keys(screen_actions));
        self.footer.render(f, footer_left, footer_entries);
        self.notify_message.render(f, footer_right);
    }
}

impl<C: Clock> Screen for ScoreboardScreen<C> {
    fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(key_combination) = self.combiner.transform(key) else {
            return AppAction::None;
        };
        // any key dismisses the banner, then runs its action
        self.notify_message.reset();
        match self.screen_key_bindings.get(key_combination) {
            Some(ScreenActionEnum::ScorePointA) => self.score_point(TeamSideEnum::A),
            Some(ScreenActionEnum::ScorePointB) => self.score_point(TeamSideEnum::B),
            Some(ScreenActionEnum::Reset) => self.reset_match(),
            Some(ScreenActionEnum::Up) => {
                self.selected_set = self.selected_set.saturating_sub(1);
                AppAction::None
            }
            Some(ScreenActionEnum::Down) => {
                if self.selected_set < self.state.timeline.completed_set_count() {
                    self.selected_set += 1;
                }
                AppAction::None
            }
            Some(ScreenActionEnum::Help) => {
                AppAction::SwitchScreen(Box::new(HelpScreen::new(self.settings.clone())))
            }
            Some(ScreenActionEnum::Quit) => AppAction::Quit,
            _ => AppAction::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return AppAction::None;
        }
        let position = Position::new(mouse.column, mouse.row);
        let clicked = self
            .panels
            .iter()
            .zip(self.panel_areas.iter())
            .find(|(_, area)| area.contains(position))
            .map(|(panel, _)| panel.team);
        match clicked {
            Some(team) => {
                self.notify_message.reset();
                self.score_point(team)
            }
            None => AppAction::None,
        }
    }
}

impl<C: Clock> ScoreboardScreen<C> {
    pub fn new(settings: Settings, clock: C) -> Self {
        ScoreboardScreen {
            settings,
            state: MatchState::new(),
            clock,
            selected_set: 0,
            notify_message: NotifyBanner::new(),
            footer: NavigationFooter::new(),
            chart: TimelineChart::new(),
            panels: [TeamPanel::new(TeamSideEnum::A), TeamPanel::new(TeamSideEnum::B)],
            panel_areas: [Rect::default(), Rect::default()],
            combiner: crokey::Combiner::default(),
            screen_key_bindings: KeyBindings::empty(),
        }
    }

    /// Shows `message` as a warning until the next key press.
    pub fn with_warning(mut self, message: String) -> Self {
        self.notify_message.set_warning(message);
        self
    }

    #[cfg(test)]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[cfg(test)]
    pub fn selected_set(&self) -> usize {
        self.selected_set
    }

    fn score_point(&mut self, team: TeamSideEnum) -> AppAction {
        if let Some(winner) = self.state.score_point(team, self.clock.now()) {
            // a new set row appears on top: keep the same set selected
            if self.selected_set > 0 {
                self.selected_set += 1;
            }
            let labels = current_labels();
            let last_point = self
                .state
                .timeline
                .completed_sets()
                .next()
                .and_then(|set| set.last())
                .map(|p| p.to_string())
                .unwrap_or_default();
            log_info(&format!(
                "set won by {} (sets {}-{}), last point: {}",
                winner, self.state.sets_won_a, self.state.sets_won_b, last_point
            ));
            self.notify_message.set_info(
                labels
                    .set_won_by
                    .replace("{}", winner.friendly_name(labels)),
            );
        }
        AppAction::None
    }

    fn reset_match(&mut self) -> AppAction {
        log_info(&format!(
            "match reset at sets {}-{}",
            self.state.sets_won_a, self.state.sets_won_b
        ));
        self.state.reset_match();
        self.selected_set = 0;
        self.notify_message
            .set_info(current_labels().match_reset.to_string());
        AppAction::None
    }

    fn get_screen_actions(&self) -> Vec<Sba> {
        let mut actions = vec![
            Sba::Simple(ScreenActionEnum::ScorePointA),
            Sba::Simple(ScreenActionEnum::ScorePointB),
            Sba::Simple(ScreenActionEnum::Reset),
        ];
        if self.state.timeline.completed_set_count() > 0 {
            actions.push(Sba::Hidden(ScreenActionEnum::Up));
            actions.push(Sba::Hidden(ScreenActionEnum::Down));
        }
        actions.push(Sba::Simple(ScreenActionEnum::Help));
        actions.push(Sba::Simple(ScreenActionEnum::Quit));
        actions
    }

    fn point_row(&'_ self, i: usize, p: &PointEntry) -> Row<'_> {
        let labels = current_labels();
        Row::new(vec![
            format!(" {:<10}", p.team.friendly_name(labels)),
            format!(" {:>3}", p.score_after),
            format!(" {}", p.time_of_day()),
        ])
        .style(if i == 0 {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if i.is_multiple_of(2) {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        })
    }

    // latest points of the selected set first
    fn render_point_table(&self, f: &mut Frame, area: Rect, points: &[&PointEntry]) {
        let labels = current_labels();
        let rows = points
            .iter()
            .rev()
            .enumerate()
            .map(|(i, p)| self.point_row(i, p));
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(45),
                Constraint::Percentage(20),
                Constraint::Percentage(35),
            ],
        )
        .header(
            Row::new(vec![
                format!(" {}", labels.side),
                format!(" {}", labels.score),
                format!(" {}", labels.time),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", labels.points, points.len())),
        );
        f.render_widget(table, area);
    }
}
