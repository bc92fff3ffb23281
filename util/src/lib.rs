pub mod format;
pub mod verify_config;
