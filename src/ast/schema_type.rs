use crate::ast::Field;

/// Payload of a `schema { ... }` declaration.
///
/// Root operations are modeled as fields named `query`, `mutation`, or
/// `subscription` whose type names the backing object type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaType {
    pub root_ops: Vec<Field>,
}
