//! Descriptor structures for parsed source elements
//!
//! These are read-only views produced by the host's structural model. The
//! generator never mutates them; it only maps their facts into template
//! parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element category eligible for comment generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Method,
    Field,
    Class,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Method => write!(f, "method"),
            Level::Field => write!(f, "field"),
            Level::Class => write!(f, "class"),
        }
    }
}

/// Declared visibility of an element
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

/// Modifier facts the generation policy inspects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSet {
    pub visibility: Visibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_final: bool,

    /// Compiler-generated elements are never documented
    #[serde(default)]
    pub is_synthetic: bool,
}

/// Textual reference to a declared type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Type text as declared, e.g. `void`, `int`, `List<Item>`, `java.io.IOException`
    pub name: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether this reference names the void type
    pub fn is_void(&self) -> bool {
        self.name == "void"
    }

    /// Last segment of a possibly qualified name
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(self.name.as_str())
    }
}

/// A declared method or constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_name: String,
}

/// Descriptor for a method or constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name (or the type name, for a constructor)
    pub name: String,

    /// Declared parameters, in declaration order
    pub parameters: Vec<ParameterDescriptor>,

    /// Declared thrown-exception references
    pub throws: Vec<TypeRef>,

    /// Declared return type. `None` means no return type is declared at all
    /// (a constructor), which is distinct from a declared `void`.
    pub return_type: Option<TypeRef>,

    pub modifiers: ModifierSet,

    /// Whether the element already carries a doc comment
    #[serde(default)]
    pub has_existing_doc: bool,
}

impl MethodDescriptor {
    /// Whether this descriptor represents a constructor
    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }
}

/// Descriptor for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_name: String,
    pub modifiers: ModifierSet,

    #[serde(default)]
    pub has_existing_doc: bool,
}

impl FieldDescriptor {
    /// Whether this field is a constant (`static final`)
    pub fn is_constant(&self) -> bool {
        self.modifiers.is_static && self.modifiers.is_final
    }
}

/// Descriptor for a class, interface or other type declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    pub modifiers: ModifierSet,

    #[serde(default)]
    pub has_existing_doc: bool,
}

/// Tagged union over all element kinds the generator understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementDescriptor {
    Method(MethodDescriptor),
    Field(FieldDescriptor),
    Class(ClassDescriptor),
}

impl ElementDescriptor {
    /// Kind discriminator used for level gating and template selection
    pub fn kind(&self) -> Level {
        match self {
            ElementDescriptor::Method(_) => Level::Method,
            ElementDescriptor::Field(_) => Level::Field,
            ElementDescriptor::Class(_) => Level::Class,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ElementDescriptor::Method(m) => &m.name,
            ElementDescriptor::Field(f) => &f.name,
            ElementDescriptor::Class(c) => &c.name,
        }
    }

    pub fn modifiers(&self) -> &ModifierSet {
        match self {
            ElementDescriptor::Method(m) => &m.modifiers,
            ElementDescriptor::Field(f) => &f.modifiers,
            ElementDescriptor::Class(c) => &c.modifiers,
        }
    }

    pub fn has_existing_doc(&self) -> bool {
        match self {
            ElementDescriptor::Method(m) => m.has_existing_doc,
            ElementDescriptor::Field(f) => f.has_existing_doc,
            ElementDescriptor::Class(c) => c.has_existing_doc,
        }
    }
}
