//! Field generator

use super::describe::describe;
use super::{allows_modifiers, default_params};
use crate::config::GenerationConfig;
use crate::descriptor::{FieldDescriptor, Level};
use crate::error::{DocGenError, Result};
use crate::template::{ParamMap, ParamValue, Shape};

/// Fields have no override concept; the level and modifier gates decide.
pub fn should_generate(field: &FieldDescriptor, config: &GenerationConfig) -> bool {
    config.is_level_enabled(Level::Field) && allows_modifiers(&field.modifiers, config)
}

pub fn build_params(field: &FieldDescriptor) -> Result<ParamMap> {
    if field.name.trim().is_empty() {
        return Err(DocGenError::MalformedDescriptor(
            "field descriptor has an empty name".into(),
        ));
    }

    let mut params = default_params(&field.name);
    params.insert(
        "fieldName".to_string(),
        ParamValue::Text(describe(&field.name, false)),
    );
    params.insert(
        "typeName".to_string(),
        ParamValue::Text(field.type_name.clone()),
    );
    Ok(params)
}

/// `static final` fields render through the constant template
pub fn shape_of(field: &FieldDescriptor) -> Option<Shape> {
    field.is_constant().then_some(Shape::Constant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ModifierSet, Visibility};

    fn make_field(name: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            type_name: "String".to_string(),
            modifiers: ModifierSet::default(),
            has_existing_doc: false,
        }
    }

    #[test]
    fn test_should_generate_gates() {
        let mut config = GenerationConfig::default();
        let field = make_field("userName");
        assert!(should_generate(&field, &config));

        config.enabled_levels.remove(&Level::Field);
        assert!(!should_generate(&field, &config));

        let config = GenerationConfig::default();
        let mut private_field = make_field("userName");
        private_field.modifiers.visibility = Visibility::Private;
        assert!(!should_generate(&private_field, &config));
    }

    #[test]
    fn test_build_params() {
        let params = build_params(&make_field("userName")).unwrap();
        assert_eq!(
            params["fieldName"],
            ParamValue::Text("user name".to_string())
        );
        assert_eq!(params["typeName"], ParamValue::Text("String".to_string()));
        assert_eq!(params["name"], ParamValue::Text("userName".to_string()));
    }

    #[test]
    fn test_constant_shape() {
        let mut field = make_field("MAX_RETRIES");
        assert_eq!(shape_of(&field), None);
        field.modifiers.is_static = true;
        field.modifiers.is_final = true;
        assert_eq!(shape_of(&field), Some(Shape::Constant));
    }
}
