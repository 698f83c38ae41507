use minijinja::{Environment, UndefinedBehavior, Value};

use crate::domain::AppError;

/// Render a single template with strict undefined handling.
pub fn render_template(name: &str, source: &str, ctx: &Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.add_template(name, source).map_err(|e| template_error(name, e))?;
    let template = env.get_template(name).map_err(|e| template_error(name, e))?;
    template.render(ctx).map_err(|e| template_error(name, e))
}

fn template_error(name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { name: name.to_string(), reason: err.to_string() }
}
