pub mod clock;
pub mod fs;
pub mod settings_store;
