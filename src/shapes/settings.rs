use crate::{
    constants::DEFAULT_LANGUAGE,
    shapes::{enums::LanguageEnum, keybinding::KeyBindings},
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::RwLock};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_language")]
    pub language: LanguageEnum,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

fn default_language() -> LanguageEnum {
    LanguageEnum::from_str(DEFAULT_LANGUAGE).unwrap_or(LanguageEnum::En)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: default_language(),
            keybindings: KeyBindings::default(),
        }
    }
}

static CURRENT_SETTING: OnceCell<RwLock<Settings>> = OnceCell::new();

/// Default settings initialization (should be called once at startup).
pub fn init_settings(default: Settings) {
    if CURRENT_SETTING.set(RwLock::new(default.clone())).is_err() {
        set_settings(default);
    }
}

pub fn set_settings(settings: Settings) {
    if let Some(lock) = CURRENT_SETTING.get() {
        if let Ok(mut current) = lock.write() {
            *current = settings;
        }
    }
}

/// Returns the current settings, or the defaults before initialization.
pub fn current_settings() -> Settings {
    CURRENT_SETTING
        .get()
        .and_then(|lock| lock.read().ok().map(|s| s.clone()))
        .unwrap_or_default()
}

#[test]
fn test_deserialize_partial_settings() {
    let settings = serde_json::from_str::<Settings>(r#"{ "language": "ko" }"#)
        .expect("expected valid settings");
    assert_eq!(settings.language, LanguageEnum::Ko);
    assert!(!settings
        .keybindings
        .keybindings_for(&crate::shapes::enums::ScreenActionEnum::Reset)
        .is_empty());
    let settings = serde_json::from_str::<Settings>("{}").expect("expected valid settings");
    assert_eq!(settings.language, LanguageEnum::En);
}

#[test]
fn test_partial_keybindings_keep_quit_and_score_keys() {
    use crate::shapes::enums::ScreenActionEnum;
    let settings =
        serde_json::from_str::<Settings>(r#"{ "keybindings": { "score_point_a": ["z"] } }"#)
            .expect("expected valid settings");
    let kb = &settings.keybindings;
    assert!(!kb.keybindings_for(&ScreenActionEnum::Quit).is_empty());
    assert!(!kb.keybindings_for(&ScreenActionEnum::ScorePointB).is_empty());
    assert!(!kb.keybindings_for(&ScreenActionEnum::Reset).is_empty());
    assert_eq!(kb.keybindings_for(&ScreenActionEnum::ScorePointA).len(), 1);
}
