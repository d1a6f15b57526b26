use crate::{
    localization::current_labels,
    shapes::{
        enums::{FriendlyName, ScreenActionEnum},
        keybinding::KeyBindings,
    },
};
use crokey::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub enum AppAction {
    None,
    SwitchScreen(Box<dyn Screen>),
    Back,
    Quit,
}

pub trait Renderable {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect);
}

pub trait Screen: Renderable {
    fn handle_key(&mut self, key: KeyEvent) -> AppAction;

    fn handle_mouse(&mut self, _mouse: MouseEvent) -> AppAction {
        AppAction::None
    }
}

/// An action offered by a screen.
///
/// `Hidden` actions are bound but left out of the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sba {
    Simple(ScreenActionEnum),
    Hidden(ScreenActionEnum),
}

impl Sba {
    pub fn action(&self) -> &ScreenActionEnum {
        match self {
            Sba::Simple(a) | Sba::Hidden(a) => a,
        }
    }

    pub fn keys(actions: &[Sba]) -> Vec<&ScreenActionEnum> {
        actions.iter().map(|a| a.action()).collect()
    }
}

/// Footer entries (shortest key, action name) for the visible actions.
pub fn get_keybinding_actions(kb: &KeyBindings, actions: &[Sba]) -> Vec<(String, String)> {
    actions
        .iter()
        .filter_map(|sba| match sba {
            Sba::Simple(action) => kb.shortest_key_for(action).map(|(ck, _)| {
                (
                    ck.to_string(),
                    action.friendly_name(current_labels()).to_string(),
                )
            }),
            Sba::Hidden(_) => None,
        })
        .collect()
}
