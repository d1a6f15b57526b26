pub mod enums;
pub mod keybinding;
pub mod match_state;
pub mod point;
pub mod settings;
pub mod timeline;
