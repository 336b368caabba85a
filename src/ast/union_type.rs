/// Payload of a `union` declaration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    /// Names of the member object types.
    pub members: Vec<String>,
}
