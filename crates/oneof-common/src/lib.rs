pub mod config;
pub mod loader;

pub type Result<T> = anyhow::Result<T>;
