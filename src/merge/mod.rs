//! Folds `extend` declarations into their base definitions.

use crate::ast::TypeDecl;
use crate::ast::TypeKind;
use crate::ast::TypeSpec;
use crate::ir::TypeMap;


type Result<T> = std::result::Result<T, MergeError>;

/// A structural error encountered while merging extensions.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MergeError {
    #[error("missing type definition for `{name}`")]
    MissingDefinition {
        name: String,
    },

    #[error("multiple definitions of type `{name}`")]
    MultipleDefinitions {
        name: String,
    },

    #[error(
        "extension of `{name}` is a {extension} but the definition \
        is a {definition}"
    )]
    KindMismatch {
        name: String,
        definition: &'static str,
        extension: &'static str,
    },

    #[error("{kind} `{name}` cannot be extended")]
    CannotExtend {
        name: String,
        kind: &'static str,
    },
}

/// Merges every declaration list in `types` down to a single definition.
///
/// After a successful merge each name maps to exactly one
/// [`TypeDecl::Definition`]. Single-element lists pass through untouched,
/// so the operation is idempotent. Extension payloads concatenate onto the
/// definition in encounter order; extension directives append to the
/// definition's directive list.
pub fn merge_extensions(types: TypeMap) -> Result<TypeMap> {
    types
        .into_iter()
        .map(|(name, decls)| {
            let decls = merge_decls(&name, decls)?;
            Ok((name, decls))
        })
        .collect()
}

fn merge_decls(name: &str, decls: Vec<TypeDecl>) -> Result<Vec<TypeDecl>> {
    if decls.len() < 2 {
        return Ok(decls);
    }

    let mut decls_iter = decls.into_iter();
    let mut def_spec = match decls_iter.next() {
        Some(TypeDecl::Definition(spec)) => spec,
        _ => {
            return Err(MergeError::MissingDefinition {
                name: name.to_string(),
            });
        },
    };

    for decl in decls_iter {
        match decl {
            TypeDecl::Definition(_) => {
                return Err(MergeError::MultipleDefinitions {
                    name: name.to_string(),
                });
            },

            TypeDecl::Extension(ext_spec) =>
                merge_spec(name, &mut def_spec, ext_spec)?,
        }
    }

    Ok(vec![TypeDecl::Definition(def_spec)])
}

fn merge_spec(
    name: &str,
    def: &mut TypeSpec,
    ext: TypeSpec,
) -> Result<()> {
    let TypeSpec {
        kind: ext_kind,
        directives: mut ext_directives,
        ..
    } = ext;

    match (&mut def.kind, ext_kind) {
        (TypeKind::Schema(def_schema), TypeKind::Schema(mut ext_schema)) =>
            def_schema.root_ops.append(&mut ext_schema.root_ops),

        (TypeKind::Scalar, TypeKind::Scalar) => {},

        (TypeKind::Object(def_object), TypeKind::Object(mut ext_object)) => {
            def_object.interfaces.append(&mut ext_object.interfaces);
            def_object.fields.append(&mut ext_object.fields);
        },

        (
            TypeKind::Interface(def_iface),
            TypeKind::Interface(mut ext_iface),
        ) =>
            def_iface.fields.append(&mut ext_iface.fields),

        (TypeKind::Union(def_union), TypeKind::Union(mut ext_union)) =>
            def_union.members.append(&mut ext_union.members),

        (TypeKind::Enum(def_enum), TypeKind::Enum(mut ext_enum)) =>
            def_enum.values.append(&mut ext_enum.values),

        (TypeKind::Input(def_input), TypeKind::Input(mut ext_input)) =>
            def_input.fields.append(&mut ext_input.fields),

        (TypeKind::Directive(_), _) => {
            return Err(MergeError::CannotExtend {
                name: name.to_string(),
                kind: "directive",
            });
        },

        (def_kind, ext_kind) => {
            return Err(MergeError::KindMismatch {
                name: name.to_string(),
                definition: def_kind.name(),
                extension: ext_kind.name(),
            });
        },
    }

    def.directives.append(&mut ext_directives);
    Ok(())
}
