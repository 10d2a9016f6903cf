//! Template repository keyed by element kind and shape variant

use minijinja::{Environment, ErrorKind, Template, UndefinedBehavior};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::descriptor::Level;
use crate::error::{DocGenError, Result};

/// Structural sub-kind of an element, selected by pattern, that picks a
/// different template than the plain one for its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Constructor,
    Getter,
    Setter,
    Constant,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Constructor => write!(f, "constructor"),
            Shape::Getter => write!(f, "getter"),
            Shape::Setter => write!(f, "setter"),
            Shape::Constant => write!(f, "constant"),
        }
    }
}

/// Lookup key for a template: element kind plus optional shape variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateKey {
    pub level: Level,
    pub shape: Option<Shape>,
}

impl TemplateKey {
    /// Key for the plain template of a kind
    pub fn plain(level: Level) -> Self {
        Self { level, shape: None }
    }

    /// Key for a shape variant of a kind
    pub fn shaped(level: Level, shape: Shape) -> Self {
        Self {
            level,
            shape: Some(shape),
        }
    }

    /// Template name inside the environment. Plain templates are named
    /// after the kind; shaped templates are level-scoped so the same shape
    /// name under different kinds cannot collide.
    fn template_name(&self) -> String {
        match self.shape {
            Some(shape) => format!("{}.{}", self.level, shape),
            None => self.level.to_string(),
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template_name())
    }
}

// Built-in template sources. Placeholders come from the parameter mapping
// the generators build; iteration order over paramNames/exceptionNames
// follows declaration order.
const METHOD_TEMPLATE: &str = "/**\n * {{ description | capitalize }}.\n *\n{% for param, desc in paramNames | items %} * @param {{ param }} the {{ desc }}\n{% endfor %}{% if isNotVoid %} * @return the {{ return }}\n{% endif %}{% for exc, desc in exceptionNames | items %} * @throws {{ exc }} the {{ desc }}\n{% endfor %} */";

const CONSTRUCTOR_TEMPLATE: &str = "/**\n * Instantiates a new {{ description }}.\n *\n{% for param, desc in paramNames | items %} * @param {{ param }} the {{ desc }}\n{% endfor %}{% for exc, desc in exceptionNames | items %} * @throws {{ exc }} the {{ desc }}\n{% endfor %} */";

const GETTER_TEMPLATE: &str =
    "/**\n * Gets the {{ partName }}.\n *\n * @return the {{ partName }}\n */";

const SETTER_TEMPLATE: &str = "/**\n * Sets the {{ partName }}.\n *\n{% for param, desc in paramNames | items %} * @param {{ param }} the {{ desc }}\n{% endfor %} */";

const FIELD_TEMPLATE: &str = "/**\n * The {{ fieldName }}.\n */";

const CONSTANT_TEMPLATE: &str = "/**\n * The constant {{ name }}.\n */";

const CLASS_TEMPLATE: &str = "/**\n * The type {{ description | capitalize }}.\n */";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("method", METHOD_TEMPLATE),
    ("method.constructor", CONSTRUCTOR_TEMPLATE),
    ("method.getter", GETTER_TEMPLATE),
    ("method.setter", SETTER_TEMPLATE),
    ("field", FIELD_TEMPLATE),
    ("field.constant", CONSTANT_TEMPLATE),
    ("class", CLASS_TEMPLATE),
];

/// Holds the compiled templates for every element kind and shape variant.
///
/// Templates are registered up front; lookups after construction take
/// `&self` only, so concurrent reads across a batch are safe.
pub struct TemplateRepository {
    env: Environment<'static>,
}

impl TemplateRepository {
    /// Repository with no templates; the host registers every key itself
    pub fn empty() -> Self {
        let mut env = Environment::new();
        // Unresolved placeholders are rendering errors, not silent blanks
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }

    /// Repository pre-loaded with the built-in templates for every key
    pub fn with_defaults() -> Result<Self> {
        let mut repository = Self::empty();
        for (name, source) in BUILTIN_TEMPLATES {
            repository
                .env
                .add_template(name, source)
                .map_err(|e| DocGenError::InvalidTemplate {
                    name: (*name).to_string(),
                    source: e,
                })?;
        }
        Ok(repository)
    }

    /// Register (or replace) the template for a key.
    ///
    /// The source is compiled eagerly so malformed templates surface here
    /// rather than mid-batch.
    pub fn register(&mut self, key: &TemplateKey, source: impl Into<String>) -> Result<()> {
        let name = key.template_name();
        self.env
            .add_template_owned(name.clone(), source.into())
            .and_then(|_| self.env.get_template(&name).map(|_| ()))
            .map_err(|e| DocGenError::InvalidTemplate { name, source: e })
    }

    /// Look up the template for a key
    pub fn get(&self, key: &TemplateKey) -> Result<Template<'_, '_>> {
        let name = key.template_name();
        self.env.get_template(&name).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                DocGenError::MissingTemplate(*key)
            } else {
                DocGenError::InvalidTemplate { name, source: e }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_key() {
        let repository = TemplateRepository::with_defaults().unwrap();
        let keys = [
            TemplateKey::plain(Level::Method),
            TemplateKey::shaped(Level::Method, Shape::Constructor),
            TemplateKey::shaped(Level::Method, Shape::Getter),
            TemplateKey::shaped(Level::Method, Shape::Setter),
            TemplateKey::plain(Level::Field),
            TemplateKey::shaped(Level::Field, Shape::Constant),
            TemplateKey::plain(Level::Class),
        ];
        for key in keys {
            assert!(repository.get(&key).is_ok(), "missing builtin for {}", key);
        }
    }

    #[test]
    fn test_missing_template() {
        let repository = TemplateRepository::empty();
        let err = repository
            .get(&TemplateKey::plain(Level::Field))
            .unwrap_err();
        assert!(matches!(err, DocGenError::MissingTemplate(_)));
        assert!(err.to_string().contains("field"));
    }

    #[test]
    fn test_register_replaces_builtin() {
        let mut repository = TemplateRepository::with_defaults().unwrap();
        repository
            .register(&TemplateKey::plain(Level::Class), "/** {{ name }} */")
            .unwrap();
        let template = repository.get(&TemplateKey::plain(Level::Class)).unwrap();
        assert_eq!(template.name(), "class");
    }

    #[test]
    fn test_shaped_keys_are_level_scoped() {
        let mut repository = TemplateRepository::with_defaults().unwrap();
        repository
            .register(
                &TemplateKey::shaped(Level::Class, Shape::Constant),
                "/** marker */",
            )
            .unwrap();

        // Registering a shape under one kind leaves other kinds untouched
        let field_constant = repository
            .get(&TemplateKey::shaped(Level::Field, Shape::Constant))
            .unwrap();
        assert_eq!(field_constant.name(), "field.constant");

        let class_constant = repository
            .get(&TemplateKey::shaped(Level::Class, Shape::Constant))
            .unwrap();
        assert_eq!(class_constant.name(), "class.constant");
    }

    #[test]
    fn test_register_rejects_malformed_source() {
        let mut repository = TemplateRepository::empty();
        let err = repository
            .register(&TemplateKey::plain(Level::Class), "{% if %}")
            .unwrap_err();
        assert!(matches!(err, DocGenError::InvalidTemplate { .. }));
    }
}
