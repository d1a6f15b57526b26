pub const APP_DIRECTORY_NAME: &str = ".pongboard";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "pongboard.log";
pub const DEFAULT_LANGUAGE: &str = "en";
/// Points a side needs before it can take the set.
pub const SET_TARGET_SCORE: u32 = 11;
/// Minimum lead over the opponent to close a set.
pub const SET_WIN_MARGIN: u32 = 2;
/// The serve changes hands every this many points.
pub const SERVE_ROTATION_POINTS: u32 = 2;
