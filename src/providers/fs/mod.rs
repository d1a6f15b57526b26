pub mod path;
pub mod settings_store;
