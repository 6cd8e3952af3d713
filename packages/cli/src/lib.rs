// ABOUTME: Shared setup for the coursemgr terminal front end
// ABOUTME: Environment configuration, logging initialisation, and the interactive prompter

pub mod config;
pub mod logging;
pub mod prompt;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use prompt::InquirePrompter;
