use {
    crate::shapes::enums::ScreenActionEnum,
    crokey::*,
    serde::{Deserialize, Serialize},
    std::{
        collections::{HashMap, HashSet},
        fmt,
    },
};

/// A mapping from key combinations to actions.
///
/// Several key combinations can go to the same action. When read from the
/// settings file, each listed action replaces its default keys; the others
/// keep theirs.
#[derive(Clone, Deserialize, Serialize)]
#[serde(from = "HashMap<ScreenActionEnum, HashSet<KeyCombination>>")]
pub struct KeyBindings {
    #[serde(skip)]
    map: HashMap<KeyCombination, ScreenActionEnum>,
    #[serde(flatten)]
    default_bindings: HashMap<ScreenActionEnum, HashSet<KeyCombination>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.set(ScreenActionEnum::ScorePointA, key!(a));
        bindings.set(ScreenActionEnum::ScorePointA, key!(left));
        bindings.set(ScreenActionEnum::ScorePointB, key!(l));
        bindings.set(ScreenActionEnum::ScorePointB, key!(right));
        bindings.set(ScreenActionEnum::Reset, key!(r));
        bindings.set(ScreenActionEnum::Up, key!(up));
        bindings.set(ScreenActionEnum::Down, key!(down));
        bindings.set(ScreenActionEnum::Help, key!(h));
        bindings.set(ScreenActionEnum::Back, key!(esc));
        bindings.set(ScreenActionEnum::Quit, key!(ctrl - q));
        bindings.set(ScreenActionEnum::Quit, key!(q));
        bindings
    }
}

impl From<HashMap<ScreenActionEnum, HashSet<KeyCombination>>> for KeyBindings {
    fn from(overrides: HashMap<ScreenActionEnum, HashSet<KeyCombination>>) -> Self {
        let mut bindings = Self::default();
        bindings.default_bindings.extend(overrides);
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: HashMap::default(),
            default_bindings: HashMap::new(),
        }
    }

    pub fn set<A: Into<ScreenActionEnum>>(&mut self, action: A, ck: KeyCombination) -> bool {
        self.default_bindings
            .entry(action.into())
            .or_default()
            .insert(ck)
    }

    fn set_to_map<A: Into<ScreenActionEnum>>(&mut self, action: A, ck: KeyCombination) {
        let action_enum = action.into();
        self.map.entry(ck).or_insert(action_enum);
    }

    pub fn get(&self, key: KeyCombination) -> Option<&ScreenActionEnum> {
        self.map.get(&key)
    }

    /// return the key combination for the action, choosing the one with the
    /// shortest Display representation.
    pub fn shortest_key_for(&self, action: &ScreenActionEnum) -> Option<(KeyCombination, String)> {
        let cks = self.default_bindings.get(action)?;
        let mut shortest: Option<(KeyCombination, String)> = None;
        for ck in cks {
            let s = ck.to_string();
            match &shortest {
                Some(previous) if previous.1.len() <= s.len() => {}
                _ => shortest = Some((*ck, s)),
            }
        }
        shortest.map(|(ck, _)| (ck, action.to_string()))
    }

    pub fn keybindings_for(&self, action: &ScreenActionEnum) -> HashSet<KeyCombination> {
        self.default_bindings
            .get(action)
            .cloned()
            .unwrap_or_default()
    }

    /// keeps only the bindings of the given actions, ready for lookup
    pub fn slice(&self, actions: Vec<&ScreenActionEnum>) -> KeyBindings {
        let mut slice = KeyBindings::empty();
        for (action, cks) in &self.default_bindings {
            if actions.contains(&action) {
                cks.iter()
                    .for_each(|ck| slice.set_to_map(action.to_owned(), *ck));
            }
        }
        slice
    }
}

impl fmt::Debug for KeyBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ds = f.debug_struct("KeyBindings");
        for (kc, action) in &self.map {
            ds.field(&kc.to_string(), &action);
        }
        ds.finish()
    }
}

#[test]
fn test_deserialize_keybindings() {
    #[derive(Deserialize)]
    struct Config {
        keybindings: KeyBindings,
    }
    let json = r#"
    {
        "keybindings": {
            "score_point_a": ["z"],
            "quit": ["q","ctrl-q"]
        }
    }
    "#;
    let conf = serde_json::from_str::<Config>(json).unwrap();
    assert_eq!(
        conf.keybindings.shortest_key_for(&ScreenActionEnum::Back),
        Some((key!(esc), "back".into()))
    );
    assert_eq!(
        conf.keybindings.shortest_key_for(&ScreenActionEnum::Quit),
        Some((key!(q), "quit".into()))
    );
    assert_eq!(
        conf.keybindings
            .shortest_key_for(&ScreenActionEnum::ScorePointA),
        Some((key!(z), "score_point_a".into()))
    );
}

#[test]
fn test_slice_only_resolves_requested_actions() {
    let kb = KeyBindings::default();
    let slice = kb.slice(vec![&ScreenActionEnum::ScorePointA, &ScreenActionEnum::Quit]);
    assert_eq!(slice.get(key!(a)), Some(&ScreenActionEnum::ScorePointA));
    assert_eq!(slice.get(key!(left)), Some(&ScreenActionEnum::ScorePointA));
    assert_eq!(slice.get(key!(q)), Some(&ScreenActionEnum::Quit));
    assert_eq!(slice.get(key!(r)), None);
    assert_eq!(kb.get(key!(a)), None);
}

#[test]
fn test_overriding_one_action_keeps_the_others() {
    let kb = serde_json::from_str::<KeyBindings>(r#"{ "score_point_a": ["z"] }"#)
        .expect("expected valid key bindings");
    assert_eq!(
        kb.keybindings_for(&ScreenActionEnum::ScorePointA),
        HashSet::from([key!(z)])
    );
    assert_eq!(
        kb.keybindings_for(&ScreenActionEnum::Quit),
        HashSet::from([key!(q), key!(ctrl - q)])
    );
    assert!(kb
        .keybindings_for(&ScreenActionEnum::ScorePointB)
        .contains(&key!(l)));
    let slice = kb.slice(vec![&ScreenActionEnum::ScorePointA]);
    assert_eq!(slice.get(key!(a)), None);
    assert_eq!(slice.get(key!(z)), Some(&ScreenActionEnum::ScorePointA));
}
