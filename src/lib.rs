//! doc-codegen: Generate doc comments for parsed source elements via configurable templates
//!
//! Given a read-only descriptor of a method, field or class supplied by the
//! host's structural model, this crate decides whether a doc comment should
//! be generated (level, override and modifier policies), maps the element's
//! structure into a named parameter mapping, merges it through a template
//! selected by element kind and shape, and emits a normalized
//! [`DocComment`] block ready for the host to attach.
//!
//! Parsing source text, resolving type hierarchies and inserting the
//! comment into a document are the host's job; this crate only consumes
//! descriptors and an injected [`HierarchyResolver`].
//!
//! # Usage
//!
//! ```rust
//! use doc_codegen::{
//!     DocGenerator, ElementDescriptor, FieldDescriptor, GenerationConfig, ModifierSet,
//!     NoHierarchy, TemplateRepository,
//! };
//!
//! # fn main() -> doc_codegen::Result<()> {
//! let config = GenerationConfig::default();
//! let templates = TemplateRepository::with_defaults()?;
//! let generator = DocGenerator::new(&config, &templates, &NoHierarchy);
//!
//! let field = ElementDescriptor::Field(FieldDescriptor {
//!     name: "userName".to_string(),
//!     type_name: "String".to_string(),
//!     modifiers: ModifierSet::default(),
//!     has_existing_doc: false,
//! });
//!
//! let comment = generator.generate(&field)?.expect("field level is enabled by default");
//! assert!(comment.text().contains("user name"));
//! # Ok(())
//! # }
//! ```
//!
//! # Custom templates
//!
//! Templates use minijinja syntax with named placeholders, conditionals and
//! iteration over the nested mappings (`paramNames`, `exceptionNames`):
//!
//! ```rust,ignore
//! let mut templates = TemplateRepository::with_defaults()?;
//! templates.register(
//!     &TemplateKey::plain(Level::Field),
//!     "/** {{ fieldName }} ({{ typeName }}) */",
//! )?;
//! ```
//!
//! Unresolved placeholders fail the render rather than being blanked, so
//! template/configuration mismatches surface immediately.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod template;

use tracing::info;

pub use config::{GenerateMode, GenerationConfig};
pub use descriptor::{
    ClassDescriptor, ElementDescriptor, FieldDescriptor, HierarchyResolver, Level,
    MethodDescriptor, MethodRef, ModifierSet, NoHierarchy, ParameterDescriptor, StaticHierarchy,
    TypeRef, Visibility,
};
pub use error::{DocGenError, Result};
pub use generator::{BatchOutcome, DocGenerator};
pub use template::{DocComment, ParamMap, ParamValue, Shape, TemplateKey, TemplateRepository};

/// Generate comments for a batch of elements with the built-in templates.
///
/// Convenience entry point; hosts that register custom templates build a
/// [`DocGenerator`] themselves.
pub fn generate_all(
    config: &GenerationConfig,
    elements: &[ElementDescriptor],
    hierarchy: &dyn HierarchyResolver,
) -> Result<Vec<BatchOutcome>> {
    config.validate()?;
    info!("Generating doc comments for {} elements", elements.len());
    let templates = TemplateRepository::with_defaults()?;
    let generator = DocGenerator::new(config, &templates, hierarchy);
    Ok(generator.generate_batch(elements))
}
