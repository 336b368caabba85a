use crate::ast::DirectiveAnnotation;
use crate::ast::TypeDecl;

/// A single IDL document and everything declared in it.
///
/// The `imports` list and any `@import(paths: [...])` document directive are
/// two surfaces for the same information; import resolution consumes both.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    /// Name of the document (typically the source file path).
    pub name: String,

    /// Directives applied to the document itself.
    pub directives: Vec<DirectiveAnnotation>,

    /// Names of documents this document imports.
    pub imports: Vec<String>,

    /// All type declarations in the document, in source order.
    pub types: Vec<TypeDecl>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Document {
            name: name.into(),
            directives: vec![],
            imports: vec![],
            types: vec![],
        }
    }
}
