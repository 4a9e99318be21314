pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LambdaConfig, TomlConfig};

pub use adapters::{RequestEnvelope, ResponseEnvelope};
pub use crate::core::engine::SkillEngine;
pub use utils::error::{Result, SkillError};
