pub mod app_config;
pub mod domain;
pub mod payload;
pub mod payload_loader;
