use crate::ast::Field;

/// Payload of a `type` declaration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    /// Names of the interfaces this object declares it implements.
    pub interfaces: Vec<String>,
    pub fields: Vec<Field>,
}
