//! Method generator - should-generate policy, parameter building, shape detection

use indexmap::IndexMap;

use super::describe::describe;
use super::{allows_modifiers, default_params};
use crate::config::GenerationConfig;
use crate::descriptor::{HierarchyResolver, Level, MethodDescriptor};
use crate::error::{DocGenError, Result};
use crate::template::{ParamMap, ParamValue, Shape};

/// Decide whether a method gets a generated comment.
///
/// The method level must be enabled; a method that overrides a super method
/// additionally requires `document_overridden_methods`; the modifier gate
/// must pass. A method with no super methods is not overriding, so only the
/// level and modifier gates apply.
pub fn should_generate(
    method: &MethodDescriptor,
    config: &GenerationConfig,
    hierarchy: &dyn HierarchyResolver,
) -> bool {
    if !config.is_level_enabled(Level::Method) {
        return false;
    }
    let super_methods = hierarchy.super_methods(method);
    if !super_methods.is_empty() && !config.document_overridden_methods {
        return false;
    }
    allows_modifiers(&method.modifiers, config)
}

/// Map a method's structural facts into template parameters.
///
/// `return`/`isNotVoid` are present only when a return type is declared;
/// a constructor descriptor produces neither key.
pub fn build_params(method: &MethodDescriptor) -> Result<ParamMap> {
    if method.name.trim().is_empty() {
        return Err(DocGenError::MalformedDescriptor(
            "method descriptor has an empty name".into(),
        ));
    }

    let mut params = default_params(&method.name);

    let mut param_names: IndexMap<String, String> = IndexMap::new();
    for parameter in &method.parameters {
        if parameter.name.trim().is_empty() {
            return Err(DocGenError::MalformedDescriptor(format!(
                "method '{}' declares a parameter with an empty name",
                method.name
            )));
        }
        param_names.insert(parameter.name.clone(), describe(&parameter.name, false));
    }

    let mut exception_names: IndexMap<String, String> = IndexMap::new();
    for exception in &method.throws {
        let simple = exception.simple_name();
        exception_names.insert(simple.to_string(), describe(simple, false));
    }

    if let Some(return_type) = &method.return_type {
        params.insert(
            "isNotVoid".to_string(),
            ParamValue::Flag(!return_type.is_void()),
        );
        params.insert(
            "return".to_string(),
            ParamValue::Text(describe(&return_type.name, false)),
        );
    }

    params.insert("paramNames".to_string(), ParamValue::Map(param_names));
    params.insert(
        "exceptionNames".to_string(),
        ParamValue::Map(exception_names),
    );
    params.insert(
        "fieldName".to_string(),
        ParamValue::Text(describe(&method.name, false)),
    );

    Ok(params)
}

/// Structural template selection: constructors have no declared return
/// type; accessors need a capitalized property name after their prefix.
pub fn shape_of(method: &MethodDescriptor) -> Option<Shape> {
    let return_type = match &method.return_type {
        None => return Some(Shape::Constructor),
        Some(t) => t,
    };
    let is_getter_name =
        has_property_prefix(&method.name, "get") || has_property_prefix(&method.name, "is");
    if is_getter_name && method.parameters.is_empty() && !return_type.is_void() {
        return Some(Shape::Getter);
    }
    if has_property_prefix(&method.name, "set") && method.parameters.len() == 1 {
        return Some(Shape::Setter);
    }
    None
}

fn has_property_prefix(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_uppercase())
}
