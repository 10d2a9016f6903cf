//! Comment generation module

pub mod class;
pub mod describe;
pub mod field;
pub mod method;

pub use describe::{describe, describe_partial};

use tracing::{debug, info};

use crate::config::{GenerateMode, GenerationConfig};
use crate::descriptor::{ElementDescriptor, HierarchyResolver, Level, ModifierSet};
use crate::error::{DocGenError, Result};
use crate::template::{
    render, to_doc_comment, DocComment, ParamMap, ParamValue, TemplateKey, TemplateRepository,
};

/// Parameters every kind contributes, shared across the variants
pub(crate) fn default_params(name: &str) -> ParamMap {
    let mut params = ParamMap::new();
    params.insert("name".to_string(), ParamValue::Text(name.to_string()));
    params.insert(
        "description".to_string(),
        ParamValue::Text(describe(name, false)),
    );
    params.insert(
        "shortDescription".to_string(),
        ParamValue::Text(describe(name, true)),
    );
    params.insert(
        "partName".to_string(),
        ParamValue::Text(describe_partial(name)),
    );
    params
}

/// Modifier gate shared by all kinds: synthetic elements are never
/// documented, and the visibility must be enabled.
pub(crate) fn allows_modifiers(modifiers: &ModifierSet, config: &GenerationConfig) -> bool {
    !modifiers.is_synthetic && config.visibilities.contains(&modifiers.visibility)
}

/// Per-element result of a batch run. Failures stay local to their element.
#[derive(Debug)]
pub enum BatchOutcome {
    Generated(DocComment),
    Skipped,
    Failed(DocGenError),
}

impl BatchOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, BatchOutcome::Generated(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, BatchOutcome::Skipped)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BatchOutcome::Failed(_))
    }

    /// The generated comment, if any
    pub fn comment(&self) -> Option<&DocComment> {
        match self {
            BatchOutcome::Generated(comment) => Some(comment),
            _ => None,
        }
    }
}

/// Orchestrates generation: dispatches on element kind, applies the
/// should-generate policy, builds parameters, renders, and normalizes.
///
/// Borrows its collaborators for the duration of a request; nothing is
/// mutated during generation, so a batch can be processed concurrently.
pub struct DocGenerator<'a> {
    config: &'a GenerationConfig,
    templates: &'a TemplateRepository,
    hierarchy: &'a dyn HierarchyResolver,
}

impl<'a> DocGenerator<'a> {
    pub fn new(
        config: &'a GenerationConfig,
        templates: &'a TemplateRepository,
        hierarchy: &'a dyn HierarchyResolver,
    ) -> Self {
        Self {
            config,
            templates,
            hierarchy,
        }
    }

    /// Generate a comment for one element.
    ///
    /// `Ok(None)` means the policy refused the element - a normal outcome,
    /// not a failure.
    pub fn generate(&self, element: &ElementDescriptor) -> Result<Option<DocComment>> {
        if !self.should_generate(element) {
            debug!("Skipping {} '{}'", element.kind(), element.name());
            return Ok(None);
        }

        let (params, key) = match element {
            ElementDescriptor::Method(m) => (
                method::build_params(m)?,
                TemplateKey {
                    level: Level::Method,
                    shape: method::shape_of(m),
                },
            ),
            ElementDescriptor::Field(f) => (
                field::build_params(f)?,
                TemplateKey {
                    level: Level::Field,
                    shape: field::shape_of(f),
                },
            ),
            ElementDescriptor::Class(c) => {
                (class::build_params(c)?, TemplateKey::plain(Level::Class))
            }
        };

        debug!(
            "Generating {} '{}' with template '{}'",
            element.kind(),
            element.name(),
            key
        );
        let template = self.templates.get(&key)?;
        let text = render(&template, &params)?;
        Ok(Some(to_doc_comment(&text)))
    }

    fn should_generate(&self, element: &ElementDescriptor) -> bool {
        if self.config.mode == GenerateMode::Keep && element.has_existing_doc() {
            return false;
        }
        match element {
            ElementDescriptor::Method(m) => {
                method::should_generate(m, self.config, self.hierarchy)
            }
            ElementDescriptor::Field(f) => field::should_generate(f, self.config),
            ElementDescriptor::Class(c) => class::should_generate(c, self.config),
        }
    }

    /// Generate over a batch of elements, isolating failures per element
    pub fn generate_batch(&self, elements: &[ElementDescriptor]) -> Vec<BatchOutcome> {
        let outcomes: Vec<BatchOutcome> = elements
            .iter()
            .map(|element| match self.generate(element) {
                Ok(Some(comment)) => BatchOutcome::Generated(comment),
                Ok(None) => BatchOutcome::Skipped,
                Err(err) => {
                    debug!("Generation failed for '{}': {}", element.name(), err);
                    BatchOutcome::Failed(err)
                }
            })
            .collect();

        info!(
            "Generated comments for {} of {} elements",
            outcomes.iter().filter(|o| o.is_generated()).count(),
            elements.len()
        );
        outcomes
    }
}
