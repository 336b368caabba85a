use crate::ast::TypeSpec;

/// A top-level type declaration: either a definition or an `extend`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDecl {
    Definition(TypeSpec),
    Extension(TypeSpec),
}

impl TypeDecl {
    /// The name this declaration is keyed under in the IR.
    pub fn ir_name(&self) -> &str {
        self.spec().ir_name()
    }

    pub fn spec(&self) -> &TypeSpec {
        match self {
            TypeDecl::Definition(spec) => spec,
            TypeDecl::Extension(spec) => spec,
        }
    }

    pub fn spec_mut(&mut self) -> &mut TypeSpec {
        match self {
            TypeDecl::Definition(spec) => spec,
            TypeDecl::Extension(spec) => spec,
        }
    }

    pub fn as_definition(&self) -> Option<&TypeSpec> {
        match self {
            TypeDecl::Definition(spec) => Some(spec),
            TypeDecl::Extension(_) => None,
        }
    }

    pub fn is_extension(&self) -> bool {
        matches!(self, TypeDecl::Extension(_))
    }
}
