/// Flags and the validated configuration built from them.
pub mod config;
mod error;
/// Render command.
pub mod render;
/// Template pattern expansion.
pub mod templates;

pub use config::{Args, Config};
pub use error::CliError;
