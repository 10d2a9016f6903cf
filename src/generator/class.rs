//! Class generator

use super::describe::describe;
use super::{allows_modifiers, default_params};
use crate::config::GenerationConfig;
use crate::descriptor::{ClassDescriptor, Level};
use crate::error::{DocGenError, Result};
use crate::template::{ParamMap, ParamValue};

pub fn should_generate(class: &ClassDescriptor, config: &GenerationConfig) -> bool {
    config.is_level_enabled(Level::Class) && allows_modifiers(&class.modifiers, config)
}

pub fn build_params(class: &ClassDescriptor) -> Result<ParamMap> {
    if class.name.trim().is_empty() {
        return Err(DocGenError::MalformedDescriptor(
            "class descriptor has an empty name".into(),
        ));
    }

    let mut params = default_params(&class.name);
    params.insert(
        "fieldName".to_string(),
        ParamValue::Text(describe(&class.name, false)),
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ModifierSet;

    #[test]
    fn test_build_params_defaults() {
        let class = ClassDescriptor {
            name: "UserService".to_string(),
            modifiers: ModifierSet::default(),
            has_existing_doc: false,
        };
        let params = build_params(&class).unwrap();
        assert_eq!(
            params["description"],
            ParamValue::Text("user service".to_string())
        );
        assert_eq!(
            params["shortDescription"],
            ParamValue::Text("user".to_string())
        );
        // fieldName is set on every kind, for template flexibility
        assert_eq!(
            params["fieldName"],
            ParamValue::Text("user service".to_string())
        );
    }

    #[test]
    fn test_level_gate() {
        let mut config = GenerationConfig::default();
        config.enabled_levels.remove(&Level::Class);
        let class = ClassDescriptor {
            name: "UserService".to_string(),
            modifiers: ModifierSet::default(),
            has_existing_doc: false,
        };
        assert!(!should_generate(&class, &config));
    }
}
