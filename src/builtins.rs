//! Built-in scalar and directive declarations.

use crate::ast::DirectiveLocation;
use crate::ast::DirectiveType;
use crate::ast::Document;
use crate::ast::InputValue;
use crate::ast::TypeDecl;
use crate::ast::TypeKind;
use crate::ast::TypeRef;
use crate::ast::TypeSpec;
use crate::ast::Value;

/// The declarations available to every document during validation.
///
/// A fresh registry carries the spec-defined built-ins: the `Int`, `Float`,
/// `String`, `Boolean`, and `ID` scalars plus the `@skip`, `@include`, and
/// `@deprecated` directives. Callers register additional declarations per
/// session; registries are plain values and never shared implicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRegistry {
    types: Vec<TypeDecl>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        TypeRegistry {
            types: builtin_types(),
        }
    }

    /// Adds a declaration to the registry.
    pub fn register(&mut self, decl: TypeDecl) {
        self.types.push(decl);
    }

    pub fn declarations(&self) -> &[TypeDecl] {
        &self.types
    }

    /// Wraps the registry's declarations in a synthetic document so they
    /// can ride along in an [`Ir`](crate::Ir) during validation.
    pub(crate) fn to_document(&self) -> Document {
        let mut doc = Document::new("builtins");
        doc.types = self.types.clone();
        doc
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        TypeRegistry::new()
    }
}

fn builtin_types() -> Vec<TypeDecl> {
    let mut types: Vec<TypeDecl> = ["Int", "Float", "String", "Boolean", "ID"]
        .into_iter()
        .map(|name| {
            TypeDecl::Definition(TypeSpec {
                name: Some(name.to_string()),
                kind: TypeKind::Scalar,
                directives: vec![],
                description: None,
            })
        })
        .collect();

    let conditional_locations = vec![
        DirectiveLocation::Field,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
    ];
    for name in ["skip", "include"] {
        types.push(TypeDecl::Definition(TypeSpec {
            name: Some(name.to_string()),
            kind: TypeKind::Directive(DirectiveType {
                args: vec![InputValue::new(
                    "if",
                    TypeRef::non_null(TypeRef::named("Boolean")),
                )],
                locations: conditional_locations.clone(),
            }),
            directives: vec![],
            description: None,
        }));
    }

    let mut reason = InputValue::new("reason", TypeRef::named("String"));
    reason.default = Some(Value::string("No longer supported"));
    types.push(TypeDecl::Definition(TypeSpec {
        name: Some("deprecated".to_string()),
        kind: TypeKind::Directive(DirectiveType {
            args: vec![reason],
            locations: vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::EnumValue,
            ],
        }),
        directives: vec![],
        description: None,
    }));

    types
}
