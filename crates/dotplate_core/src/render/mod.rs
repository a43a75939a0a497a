use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use minijinja::{AutoEscape, Environment};
use thiserror::Error;

use crate::data::Value;
use crate::funcs::FunctionRegistry;

mod bind;
mod templates;

/// Template sources and start-template selection.
pub use templates::TemplateSet;

/// Output escaping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
	/// Plain text, nothing is escaped.
	#[default]
	Text,
	/// HTML, every interpolated value is escaped unless marked trusted.
	Html,
}

impl RenderMode {
	/// Lower-case selector.
	pub fn as_str(self) -> &'static str {
		match self {
			RenderMode::Text => "text",
			RenderMode::Html => "html",
		}
	}

	fn auto_escape(self) -> AutoEscape {
		match self {
			RenderMode::Text => AutoEscape::None,
			RenderMode::Html => AutoEscape::Html,
		}
	}
}

impl fmt::Display for RenderMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RenderMode {
	type Err = RenderError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		[RenderMode::Text, RenderMode::Html]
			.into_iter()
			.find(|mode| mode.as_str().eq_ignore_ascii_case(value))
			.ok_or_else(|| RenderError::UnsupportedMode { value: value.to_owned() })
	}
}

/// Errors produced while loading, parsing or executing templates.
#[derive(Debug, Error)]
pub enum RenderError {
	/// Template list was empty.
	#[error("no template file found for parsing")]
	NoTemplates,
	/// Template file could not be read.
	#[error("unable to read template file, file=[{}], error=[{source}]", .path.display())]
	TemplateRead {
		/// Template file.
		path: PathBuf,
		/// Underlying filesystem error.
		#[source]
		source: std::io::Error,
	},
	/// Template source is not valid template syntax.
	#[error("unable to parse {mode} template, name=[{name}], error=[{source}]")]
	Parse {
		/// Active mode.
		mode: RenderMode,
		/// Template name.
		name: String,
		/// Engine diagnostic.
		#[source]
		source: minijinja::Error,
	},
	/// Template execution failed, including failures of template functions.
	#[error("unable to execute {mode} template, name=[{name}], error=[{source}]")]
	Execute {
		/// Active mode.
		mode: RenderMode,
		/// Start template name.
		name: String,
		/// Engine diagnostic.
		#[source]
		source: minijinja::Error,
	},
	/// Output could not be written or committed.
	#[error("unable to write output file, file=[{}], error=[{source}]", .path.display())]
	Output {
		/// Destination path.
		path: PathBuf,
		/// Underlying filesystem error.
		#[source]
		source: std::io::Error,
	},
	/// Output mode selector was not recognized.
	#[error("option format={value} not supported")]
	UnsupportedMode {
		/// Selector as supplied.
		value: String,
	},
}

/// Renders a [`TemplateSet`] with the template function table bound in.
#[derive(Debug, Clone)]
pub struct Renderer {
	mode: RenderMode,
	registry: FunctionRegistry,
}

impl Renderer {
	/// Renderer for `mode` with `registry` bound as global functions.
	pub fn new(mode: RenderMode, registry: FunctionRegistry) -> Self {
		Self { mode, registry }
	}

	/// Escaping mode in use.
	pub fn mode(&self) -> RenderMode {
		self.mode
	}

	/// Render the start template to a string.
	pub fn render_to_string(&self, set: &TemplateSet, root: &Value) -> Result<String, RenderError> {
		let env = self.environment(set)?;
		let template = env.get_template(set.start()).map_err(|source| self.missing_start(set, source))?;
		template.render(bind::root_context(root)).map_err(|source| self.execute_error(set, source))
	}

	/// Render the start template into `output`.
	///
	/// The content goes to a temporary file next to `output` and replaces it
	/// only once rendering has finished; on failure `output` is left as it was.
	/// An existing `output` keeps its permissions.
	pub fn render_to_file(&self, set: &TemplateSet, root: &Value, output: &Path) -> Result<(), RenderError> {
		let env = self.environment(set)?;
		let template = env.get_template(set.start()).map_err(|source| self.missing_start(set, source))?;
		let output_error = |source: std::io::Error| RenderError::Output {
			path: output.to_path_buf(),
			source,
		};

		let dir = match output.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};

		tracing::info!(template = set.start(), output = %output.display(), mode = %self.mode, "executing template");
		let rendered = template.render(bind::root_context(root)).map_err(|source| self.execute_error(set, source))?;

		let mut builder = tempfile::Builder::new();
		builder.prefix(".dotplate.");
		// New outputs get 0o666 minus the umask, like a plain create.
		#[cfg(unix)]
		{
			use std::os::unix::fs::PermissionsExt;
			builder.permissions(fs::Permissions::from_mode(0o666));
		}
		let mut staged = builder.tempfile_in(dir).map_err(output_error)?;
		staged.write_all(rendered.as_bytes()).map_err(output_error)?;
		staged.flush().map_err(output_error)?;
		if let Ok(existing) = fs::metadata(output) {
			staged.as_file().set_permissions(existing.permissions()).map_err(output_error)?;
		}
		staged.persist(output).map_err(|err| output_error(err.error))?;

		tracing::info!(output = %output.display(), "done");
		Ok(())
	}

	fn environment<'s>(&self, set: &'s TemplateSet) -> Result<Environment<'s>, RenderError> {
		let mut env = Environment::new();
		env.set_keep_trailing_newline(true);
		let mode = self.mode;
		env.set_auto_escape_callback(move |_name: &str| mode.auto_escape());
		bind::bind_functions(&mut env, &self.registry);

		for (name, source) in set.sources() {
			env.add_template(name, source).map_err(|source| RenderError::Parse {
				mode: self.mode,
				name: name.to_owned(),
				source,
			})?;
		}
		tracing::info!(templates = ?set.names().collect::<Vec<_>>(), "templates defined after parsing");
		Ok(env)
	}

	fn missing_start(&self, set: &TemplateSet, source: minijinja::Error) -> RenderError {
		RenderError::Parse {
			mode: self.mode,
			name: set.start().to_owned(),
			source,
		}
	}

	fn execute_error(&self, set: &TemplateSet, source: minijinja::Error) -> RenderError {
		RenderError::Execute {
			mode: self.mode,
			name: set.start().to_owned(),
			source,
		}
	}
}
