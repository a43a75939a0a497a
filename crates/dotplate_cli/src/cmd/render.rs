use dotplate::data::resolve_root_value;
use dotplate::funcs::FunctionRegistry;
use dotplate::render::{Renderer, TemplateSet};

use crate::cmd::{CliError, Config, templates};

/// Resolve the root data, load the templates and render to the output file.
pub fn run(config: Config) -> Result<(), CliError> {
	let Config {
		templates: patterns,
		output,
		mode,
		dot,
		dot_type,
	} = config;

	let root = resolve_root_value(&dot, &dot_type)?;
	let files = templates::expand(&patterns)?;
	let set = TemplateSet::load(&files)?;

	Renderer::new(mode, FunctionRegistry::standard()).render_to_file(&set, &root, &output)?;
	Ok(())
}
