use std::path::PathBuf;

use dotplate::data::DotSource;
use dotplate::render::RenderMode;

use crate::cmd::CliError;

#[derive(clap::Args, Debug)]
pub struct Args {
	/// Comma-separated template files or glob patterns; the first match is executed.
	#[arg(long, value_delimiter = ',')]
	pub templates: Vec<String>,
	/// Destination file.
	#[arg(long)]
	pub output: Option<PathBuf>,
	/// Output mode: text or html.
	#[arg(long, default_value = "text")]
	pub format: String,
	/// File holding the root data.
	#[arg(long)]
	pub dotfile: Option<PathBuf>,
	/// Inline root data; `\n` is expanded to a newline.
	#[arg(long)]
	pub dotstring: Option<String>,
	/// Format of the root data: json, yaml, toml, csv, csvmap, xml, text or lines.
	#[arg(long, default_value = "text")]
	pub dottype: String,
}

/// Everything one render needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub templates: Vec<String>,
	pub output: PathBuf,
	pub mode: RenderMode,
	pub dot: DotSource,
	pub dot_type: String,
}

impl Config {
	pub fn from_args(args: Args) -> Result<Self, CliError> {
		let Args {
			templates,
			output,
			format,
			dotfile,
			dotstring,
			dottype,
		} = args;

		let templates: Vec<String> = templates.into_iter().filter(|pattern| !pattern.trim().is_empty()).collect();
		if templates.is_empty() {
			return Err(CliError::Config("missing required option --templates".to_owned()));
		}
		let output = output
			.filter(|path| !path.as_os_str().is_empty())
			.ok_or_else(|| CliError::Config("missing required option --output".to_owned()))?;
		let mode: RenderMode = format.parse()?;
		let dot = DotSource::from_parts(dotfile, dotstring)?;

		Ok(Self {
			templates,
			output,
			mode,
			dot,
			dot_type: dottype,
		})
	}
}
