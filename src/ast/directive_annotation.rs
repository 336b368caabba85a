use crate::ast::Value;

/// A directive applied at some location (`@foo(bar: 1)`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub name: String,
    pub args: Vec<(String, Value)>,
}

impl DirectiveAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        DirectiveAnnotation {
            name: name.into(),
            args: vec![],
        }
    }
}
