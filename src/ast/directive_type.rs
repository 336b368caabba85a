use crate::ast::DirectiveLocation;
use crate::ast::InputValue;

/// Payload of a `directive @name(...) on ...` declaration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveType {
    pub args: Vec<InputValue>,
    pub locations: Vec<DirectiveLocation>,
}
