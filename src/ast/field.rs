use crate::ast::DirectiveAnnotation;
use crate::ast::InputValue;
use crate::ast::TypeRef;

/// A field of an object, interface, or schema declaration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub name: String,
    pub args: Vec<InputValue>,
    pub field_type: TypeRef,
    pub directives: Vec<DirectiveAnnotation>,
    pub description: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        Field {
            name: name.into(),
            args: vec![],
            field_type,
            directives: vec![],
            description: None,
        }
    }
}
