//! Template registry for generated source text
//!
//! Templates use `trim_blocks` and `lstrip_blocks`, so block tags on their
//! own line leave no trace in the output.

use crate::error::Result;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Template name of the data-holder type
pub const MODEL: &str = "model.py";

/// Template name of the store type
pub const STORE: &str = "store.py";

/// Data-holder type template
pub const MODEL_TEMPLATE: &str = r"class {{ model_name }}:
    def __init__({{ init_params }}):
{% for field in fields %}
        self.{{ field }} = {{ field }}
{% endfor %}
";

/// Store type template
pub const STORE_TEMPLATE: &str = r"class {{ store_name }}:
    def __init__(self):
        self.data = []
        self.next_id = 1

    def create({{ create_params }}):
        instance = {{ model_name }}({{ constructor_args }})
        self.data.append(instance)
{% if advance_next_id %}
        self.next_id += 1
{% endif %}
        return instance

    def read_all(self):
        return self.data[:]

    def read(self, id):
        for item in self.data:
            if item.{{ id_field }} == id:
                return item
        return None

    def update({{ update_params }}):
        instance = self.read(id)
{% if guard_missing_update %}
        if instance is None:
            return None
{% endif %}
{% for field in attributes %}
        instance.{{ field }} = {{ field }}
{% endfor %}
        return instance

    def delete(self, id):
        for i, item in enumerate(self.data):
            if item.{{ id_field }} == id:
                del self.data[i]
                return True
        return False

";

/// Registry holding the compiled templates
pub struct TemplateRegistry {
    env: Environment<'static>,
}

impl TemplateRegistry {
    /// Create the registry and compile all templates
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();

        // Generating code, not HTML
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        env.add_template(MODEL, MODEL_TEMPLATE)?;
        env.add_template(STORE, STORE_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render a named template
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or the context is
    /// missing a variable it uses.
    pub fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let rendered = self.env.get_template(name)?.render(context)?;
        tracing::trace!(template = name, bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_templates_compile() {
        assert!(TemplateRegistry::new().is_ok());
    }

    #[test]
    fn test_render_model() {
        let registry = TemplateRegistry::new().unwrap();
        let rendered = registry
            .render(
                MODEL,
                &json!({
                    "model_name": "Point",
                    "init_params": "self, x, y",
                    "fields": ["x", "y"],
                }),
            )
            .unwrap();

        assert_eq!(
            rendered,
            "class Point:\n    def __init__(self, x, y):\n        self.x = x\n        self.y = y\n"
        );
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let registry = TemplateRegistry::new().unwrap();
        let result = registry.render(MODEL, &json!({ "model_name": "Point" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_template() {
        let registry = TemplateRegistry::new().unwrap();
        assert!(registry.render("nope.py", &json!({})).is_err());
    }
}
