use crate::ast::InputValue;

/// Payload of an `input` declaration.
///
/// Input fields are [`InputValue`]s, so they cannot carry argument lists.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputType {
    pub fields: Vec<InputValue>,
}
