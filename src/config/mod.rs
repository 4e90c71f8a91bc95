//! Configuration module for Sitescope
//!
//! Configuration is optional: every option has a default, and a TOML file
//! can override any subset. Tables mirror the pipeline stages: fetching,
//! generation, selection, and output.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, FetchConfig, GeneratorConfig, OutputConfig, Provider, SelectionConfig};
pub use validation::validate;
