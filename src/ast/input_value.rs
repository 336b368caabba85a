use crate::ast::DirectiveAnnotation;
use crate::ast::TypeRef;
use crate::ast::Value;

/// An argument definition or input-object field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValue {
    pub name: String,
    pub value_type: TypeRef,
    pub default: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
    pub description: Option<String>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, value_type: TypeRef) -> Self {
        InputValue {
            name: name.into(),
            value_type,
            default: None,
            directives: vec![],
            description: None,
        }
    }
}
