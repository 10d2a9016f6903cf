//! Template rendering and doc-comment normalization

use indexmap::IndexMap;
use minijinja::Template;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DocGenError, Result};

/// One value in the parameter mapping handed to a template
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Flag(bool),
    /// Nested name -> description mapping, iterated in insertion order
    Map(IndexMap<String, String>),
}

/// Per-invocation placeholder name -> value mapping.
///
/// Built fresh for each element, discarded after the render. Insertion
/// order is preserved so iterated output tracks declaration order.
pub type ParamMap = IndexMap<String, ParamValue>;

/// Merge a template with a parameter mapping.
///
/// Every placeholder the template references must have a mapping entry;
/// missing ones fail the render with an error naming both the template and
/// the placeholder. The strict environment backs this up for lookups the
/// static check cannot see (nested map keys).
pub fn render(template: &Template<'_, '_>, params: &ParamMap) -> Result<String> {
    let mut missing: Vec<String> = template
        .undeclared_variables(false)
        .into_iter()
        .filter(|name| !params.contains_key(name))
        .collect();
    missing.sort();
    if !missing.is_empty() {
        return Err(DocGenError::Render {
            template: template.name().to_string(),
            source: minijinja::Error::new(
                minijinja::ErrorKind::UndefinedError,
                format!("unresolved placeholder '{}'", missing.join("', '")),
            ),
        });
    }

    template.render(params).map_err(|e| DocGenError::Render {
        template: template.name().to_string(),
        source: e,
    })
}

/// A normalized doc-comment block, ready to hand to the host's insertion
/// collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    lines: Vec<String>,
}

impl DocComment {
    /// Interior comment lines, without markers or the `* ` prefix
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The full comment block text
    pub fn text(&self) -> String {
        let mut out = String::from("/**\n");
        for line in &self.lines {
            if line.is_empty() {
                out.push_str(" *\n");
            } else {
                out.push_str(" * ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str(" */");
        out
    }
}

impl fmt::Display for DocComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Normalize rendered text into a well-formed comment block.
///
/// Strips open/close markers and leading asterisks, drops leading and
/// trailing blank lines, and collapses interior blank runs to a single
/// blank. Running the result through again is a fixpoint.
pub fn to_doc_comment(text: &str) -> DocComment {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.lines() {
        let mut line = raw.trim();
        if let Some(rest) = line.strip_prefix("/**") {
            line = rest.trim_start();
        }
        if let Some(rest) = line.strip_suffix("*/") {
            line = rest.trim_end();
        }
        if let Some(rest) = line.strip_prefix('*') {
            line = rest.trim_start();
        }

        if line.is_empty() {
            let last_blank = lines.last().is_some_and(|l| l.is_empty());
            if !lines.is_empty() && !last_blank {
                lines.push(String::new());
            }
        } else {
            lines.push(line.to_string());
        }
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    DocComment { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Level;
    use crate::template::{TemplateKey, TemplateRepository};

    #[test]
    fn test_to_doc_comment_normalizes() {
        let doc = to_doc_comment("/**\n * Saves.\n *\n *\n * @param id the id\n */");
        assert_eq!(doc.lines(), &["Saves.", "", "@param id the id"]);
        assert_eq!(
            doc.text(),
            "/**\n * Saves.\n *\n * @param id the id\n */"
        );
    }

    #[test]
    fn test_to_doc_comment_handles_bare_text() {
        let doc = to_doc_comment("Saves the user.\n\n\n@return the user");
        assert_eq!(doc.lines(), &["Saves the user.", "", "@return the user"]);
    }

    #[test]
    fn test_to_doc_comment_is_idempotent() {
        let doc = to_doc_comment("/**\n * The user name.\n */");
        let again = to_doc_comment(&doc.text());
        assert_eq!(doc, again);
        assert_eq!(doc.text(), again.text());
    }

    #[test]
    fn test_render_is_deterministic() {
        let repository = TemplateRepository::with_defaults().unwrap();
        let template = repository
            .get(&TemplateKey::shaped(Level::Field, crate::template::Shape::Constant))
            .unwrap();

        let mut params = ParamMap::new();
        params.insert("name".to_string(), ParamValue::Text("MAX_RETRIES".to_string()));

        let first = render(&template, &params).unwrap();
        let second = render(&template, &params).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("The constant MAX_RETRIES."));
    }

    #[test]
    fn test_render_unresolved_placeholder_fails() {
        let mut repository = TemplateRepository::empty();
        let key = TemplateKey::plain(Level::Field);
        repository
            .register(&key, "/** {{ nothingProvidesThis }} */")
            .unwrap();
        let template = repository.get(&key).unwrap();

        let err = render(&template, &ParamMap::new()).unwrap_err();
        match &err {
            DocGenError::Render { template, .. } => assert_eq!(template, "field"),
            other => panic!("expected render error, got {other:?}"),
        }
        // The error names the offending placeholder
        assert!(err.to_string().contains("nothingProvidesThis"));
    }
}
