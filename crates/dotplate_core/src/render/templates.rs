use std::fs;
use std::path::{Path, PathBuf};

use crate::render::RenderError;

/// Template sources loaded from disk, keyed by file name.
#[derive(Debug, Clone)]
pub struct TemplateSet {
	templates: Vec<(String, String)>,
	start: String,
}

impl TemplateSet {
	/// Load `files`; the first one becomes the start template.
	///
	/// Templates are named after their file name, so `include "header.tmpl"`
	/// finds `partials/header.tmpl`. A later file with the same name
	/// replaces an earlier one.
	pub fn load(files: &[PathBuf]) -> Result<Self, RenderError> {
		let first = files.first().ok_or(RenderError::NoTemplates)?;

		let mut set = Self {
			templates: Vec::with_capacity(files.len()),
			start: template_name(first),
		};
		for path in files {
			let source = fs::read_to_string(path).map_err(|source| RenderError::TemplateRead {
				path: path.clone(),
				source,
			})?;
			set.insert(template_name(path), source);
		}
		Ok(set)
	}

	/// Build a set from in-memory sources; the first entry is the start template.
	pub fn from_sources<I, N, S>(sources: I) -> Result<Self, RenderError>
	where
		I: IntoIterator<Item = (N, S)>,
		N: Into<String>,
		S: Into<String>,
	{
		let mut sources = sources.into_iter().map(|(name, source)| (name.into(), source.into()));
		let (start, source) = sources.next().ok_or(RenderError::NoTemplates)?;

		let mut set = Self {
			templates: Vec::new(),
			start: start.clone(),
		};
		set.insert(start, source);
		for (name, source) in sources {
			set.insert(name, source);
		}
		Ok(set)
	}

	/// Name of the template executed directly.
	pub fn start(&self) -> &str {
		&self.start
	}

	/// Template names in load order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.templates.iter().map(|(name, _)| name.as_str())
	}

	pub(crate) fn sources(&self) -> impl Iterator<Item = (&str, &str)> {
		self.templates.iter().map(|(name, source)| (name.as_str(), source.as_str()))
	}

	fn insert(&mut self, name: String, source: String) {
		match self.templates.iter_mut().find(|(existing, _)| *existing == name) {
			Some(slot) => slot.1 = source,
			None => self.templates.push((name, source)),
		}
	}
}

fn template_name(path: &Path) -> String {
	path.file_name().map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
