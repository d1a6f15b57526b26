pub mod components;
pub mod help_screen;
pub mod scoreboard_screen;
pub mod screen;
