use std::path::PathBuf;

use crate::cmd::CliError;

/// Expand each pattern with `glob`, keeping pattern order and skipping directories.
///
/// An empty result is not an error here; loading the template set reports it.
pub fn expand(patterns: &[String]) -> Result<Vec<PathBuf>, CliError> {
	let mut files = Vec::new();
	for pattern in patterns {
		let glob_error = |detail: String| CliError::Glob {
			pattern: pattern.clone(),
			detail,
		};

		let matches = glob::glob(pattern).map_err(|err| glob_error(err.to_string()))?;
		for entry in matches {
			let path = entry.map_err(|err| glob_error(err.to_string()))?;
			if path.is_dir() {
				tracing::debug!(path = %path.display(), "skipping directory");
				continue;
			}
			files.push(path);
		}
	}

	tracing::info!(files = ?files, "files for template parsing");
	Ok(files)
}
