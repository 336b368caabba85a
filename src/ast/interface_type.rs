use crate::ast::Field;

/// Payload of an `interface` declaration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType {
    pub fields: Vec<Field>,
}
