use dotplate::data::ResolveError;
use dotplate::render::RenderError;
use thiserror::Error;

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum CliError {
	/// Missing or inconsistent options.
	#[error("{0}")]
	Config(String),
	/// A template pattern was malformed or a match could not be read.
	#[error("template pattern {pattern}: {detail}")]
	Glob { pattern: String, detail: String },
	#[error(transparent)]
	Resolve(#[from] ResolveError),
	#[error(transparent)]
	Render(#[from] RenderError),
}
