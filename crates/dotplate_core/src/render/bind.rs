use std::collections::BTreeMap;

use minijinja::{Environment, ErrorKind};

use crate::data::Value;
use crate::funcs::{FunctionRegistry, Output, TemplateFn};

/// Name under which the root value is visible to templates.
pub(crate) const DOT: &str = "dot";

/// Register every registry entry as a global template function.
pub(crate) fn bind_functions(env: &mut Environment<'_>, registry: &FunctionRegistry) {
	for entry in registry.iter() {
		let name = entry.name;
		let function = entry.function;
		env.add_function(name, move |arg: String| call(name, function, &arg));
	}
}

fn call(name: &'static str, function: TemplateFn, arg: &str) -> Result<minijinja::Value, minijinja::Error> {
	match function.call(arg) {
		Ok(Output::Data(value)) => Ok(to_template_value(&value)),
		Ok(Output::Trusted(_, text)) => Ok(minijinja::Value::from_safe_string(text)),
		Err(err) => Err(minijinja::Error::new(ErrorKind::InvalidOperation, format!("{name}: {err}")).with_source(err)),
	}
}

pub(crate) fn to_template_value(value: &Value) -> minijinja::Value {
	minijinja::Value::from_serialize(value)
}

/// Root context: `dot` holds the whole value, and record fields are also
/// visible as top-level variables.
pub(crate) fn root_context(root: &Value) -> minijinja::Value {
	let mut context: BTreeMap<String, minijinja::Value> = BTreeMap::new();
	if let Value::Record(record) = root {
		for field in &record.fields {
			context.entry(field.name.clone()).or_insert_with(|| to_template_value(&field.value));
		}
	}
	context.insert(DOT.to_owned(), to_template_value(root));
	minijinja::Value::from_serialize(&context)
}
