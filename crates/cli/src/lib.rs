pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod lookup;
pub mod store;

pub use cli::Cli;
pub use config::Config;
