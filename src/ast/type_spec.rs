use crate::ast::DirectiveAnnotation;
use crate::ast::DirectiveType;
use crate::ast::EnumType;
use crate::ast::InputType;
use crate::ast::InterfaceType;
use crate::ast::ObjectType;
use crate::ast::SchemaType;
use crate::ast::UnionType;

/// IR key for the (anonymous) schema declaration of a document.
pub const SCHEMA_TYPE_NAME: &str = "schema";

/// The body shared by definitions and extensions: a name, a kind-specific
/// payload, and the directives applied at the declaration site.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeSpec {
    /// `None` only for schema declarations, which are anonymous.
    pub name: Option<String>,
    pub kind: TypeKind,
    pub directives: Vec<DirectiveAnnotation>,
    pub description: Option<String>,
}

impl TypeSpec {
    pub fn ir_name(&self) -> &str {
        self.name.as_deref().unwrap_or(SCHEMA_TYPE_NAME)
    }
}

/// Kind-specific payload of a type declaration.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeKind {
    Schema(SchemaType),
    #[default]
    Scalar,
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    Input(InputType),
    Directive(DirectiveType),
}

impl TypeKind {
    /// Human-readable kind keyword, as written in IDL source.
    pub fn name(&self) -> &'static str {
        match self {
            TypeKind::Schema(_) => "schema",
            TypeKind::Scalar => "scalar",
            TypeKind::Object(_) => "object",
            TypeKind::Interface(_) => "interface",
            TypeKind::Union(_) => "union",
            TypeKind::Enum(_) => "enum",
            TypeKind::Input(_) => "input",
            TypeKind::Directive(_) => "directive",
        }
    }
}
