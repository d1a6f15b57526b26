use crate::{
    localization::current_labels,
    screens::{
        components::navigation_footer::NavigationFooter,
        screen::{get_keybinding_actions, AppAction, Renderable, Sba, Screen},
    },
    shapes::{
        enums::{FriendlyName, ScreenActionEnum},
        keybinding::KeyBindings,
        settings::Settings,
    },
};
use crokey::crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

/// Read-only list of every action and the keys bound to it.
#[derive(Debug)]
pub struct HelpScreen {
    settings: Settings,
    footer: NavigationFooter,
    combiner: crokey::Combiner,
    screen_key_bindings: KeyBindings,
}

impl Renderable for HelpScreen {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, _footer_right: Rect) {
        let labels = current_labels();
        let rows: Vec<Row> = self
            .items()
            .into_iter()
            .map(|(action, keys)| Row::new(vec![action, keys]))
            .collect();
        let table = Table::new(rows, [Constraint::Length(24), Constraint::Min(10)])
            .header(
                Row::new(vec![labels.action, labels.keys])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(labels.keybindings),
            );
        f.render_widget(table, body);
        let screen_actions = &[
            Sba::Simple(ScreenActionEnum::Back),
            Sba::Simple(ScreenActionEnum::Quit),
        ];
        let kb = &self.settings.keybindings;
        self.footer
            .render(f, footer_left, get_keybinding_actions(kb, screen_actions));
        self.screen_key_bindings = kb.slice(Sba::keys(screen_actions));
    }
}

impl Screen for HelpScreen {
    fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self
            .combiner
            .transform(key)
            .and_then(|kc| self.screen_key_bindings.get(kc))
        {
            Some(ScreenActionEnum::Back) => AppAction::Back,
            Some(ScreenActionEnum::Quit) => AppAction::Quit,
            _ => AppAction::None,
        }
    }
}

impl HelpScreen {
    pub fn new(settings: Settings) -> Self {
        HelpScreen {
            settings,
            footer: NavigationFooter::new(),
            combiner: crokey::Combiner::default(),
            screen_key_bindings: KeyBindings::empty(),
        }
    }

    /// (action name, sorted key list) for every action, in display order.
    fn items(&self) -> Vec<(String, String)> {
        ScreenActionEnum::ALL
            .iter()
            .map(|action| {
                let mut keys: Vec<String> = self
                    .settings
                    .keybindings
                    .keybindings_for(action)
                    .iter()
                    .map(|kc| kc.to_string())
                    .collect();
                keys.sort();
                (
                    action.friendly_name(current_labels()).to_string(),
                    keys.join(", "),
                )
            })
            .collect()
    }
}
