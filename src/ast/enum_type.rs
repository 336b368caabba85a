use crate::ast::DirectiveAnnotation;

/// Payload of an `enum` declaration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub values: Vec<EnumValue>,
}

/// A single declared enum value.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub description: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        EnumValue {
            name: name.into(),
            directives: vec![],
            description: None,
        }
    }
}
