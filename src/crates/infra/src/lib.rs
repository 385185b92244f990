pub mod repository;

pub mod config;
pub use crate::config::{AppConfigImpl, DatabaseConfig, ServerConfig};

pub mod normalize;
pub use crate::normalize::TitleCaseNormalizer;
