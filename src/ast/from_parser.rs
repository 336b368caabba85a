use crate::ast::DirectiveAnnotation;
use crate::ast::DirectiveLocation;
use crate::ast::DirectiveType;
use crate::ast::Document;
use crate::ast::EnumType;
use crate::ast::EnumValue;
use crate::ast::Field;
use crate::ast::InputType;
use crate::ast::InputValue;
use crate::ast::InterfaceType;
use crate::ast::ObjectType;
use crate::ast::SchemaType;
use crate::ast::TypeDecl;
use crate::ast::TypeKind;
use crate::ast::TypeRef;
use crate::ast::TypeSpec;
use crate::ast::UnionType;
use crate::ast::Value;
use graphql_parser::schema as parser;

type AstDefinition = parser::Definition<'static, String>;
type AstDirective = graphql_parser::query::Directive<'static, String>;
type AstDirectiveDefinition = parser::DirectiveDefinition<'static, String>;
type AstEnumValue = parser::EnumValue<'static, String>;
type AstField = parser::Field<'static, String>;
type AstInputValue = parser::InputValue<'static, String>;
type AstSchemaDefinition = parser::SchemaDefinition<'static, String>;
type AstType = parser::Type<'static, String>;
type AstTypeDefinition = parser::TypeDefinition<'static, String>;
type AstTypeExtension = parser::TypeExtension<'static, String>;
type AstValue = graphql_parser::query::Value<'static, String>;

/// Error produced when IDL source fails to parse or convert.
#[derive(Debug, thiserror::Error)]
#[error("failure parsing document `{document}`: {message}")]
pub struct ParseError {
    pub document: String,
    pub message: String,
}

impl Document {
    /// Parses IDL source into a [`Document`] named `name`.
    pub fn parse(
        name: impl Into<String>,
        source: &str,
    ) -> Result<Document, ParseError> {
        let name = name.into();
        let ast_doc = parser::parse_schema::<String>(source)
            .map_err(|err| ParseError {
                document: name.to_string(),
                message: err.to_string(),
            })?
            .into_static();

        let mut doc = Document::new(name);
        for def in ast_doc.definitions {
            let decl = match def {
                AstDefinition::SchemaDefinition(schema_def) =>
                    from_schema_def(schema_def).map(TypeDecl::Definition),

                AstDefinition::TypeDefinition(type_def) =>
                    from_type_def(type_def).map(TypeDecl::Definition),

                AstDefinition::TypeExtension(type_ext) =>
                    from_type_ext(type_ext).map(TypeDecl::Extension),

                AstDefinition::DirectiveDefinition(dir_def) =>
                    from_directive_def(dir_def).map(TypeDecl::Definition),
            };
            match decl {
                Ok(decl) => doc.types.push(decl),
                Err(message) => {
                    return Err(ParseError {
                        document: doc.name,
                        message,
                    });
                },
            }
        }
        Ok(doc)
    }
}

fn from_schema_def(
    schema_def: AstSchemaDefinition,
) -> Result<TypeSpec, String> {
    let mut root_ops = vec![];
    let ops = [
        ("query", schema_def.query),
        ("mutation", schema_def.mutation),
        ("subscription", schema_def.subscription),
    ];
    for (op_name, type_name) in ops {
        if let Some(type_name) = type_name {
            root_ops.push(Field::new(op_name, TypeRef::Named(type_name)));
        }
    }
    Ok(TypeSpec {
        name: None,
        kind: TypeKind::Schema(SchemaType { root_ops }),
        directives: from_directives(schema_def.directives)?,
        description: None,
    })
}

fn from_type_def(type_def: AstTypeDefinition) -> Result<TypeSpec, String> {
    Ok(match type_def {
        AstTypeDefinition::Scalar(def) => TypeSpec {
            name: Some(def.name),
            kind: TypeKind::Scalar,
            directives: from_directives(def.directives)?,
            description: def.description,
        },

        AstTypeDefinition::Object(def) => TypeSpec {
            name: Some(def.name),
            kind: TypeKind::Object(ObjectType {
                interfaces: def.implements_interfaces,
                fields: from_fields(def.fields)?,
            }),
            directives: from_directives(def.directives)?,
            description: def.description,
        },

        AstTypeDefinition::Interface(def) => TypeSpec {
            name: Some(def.name),
            kind: TypeKind::Interface(InterfaceType {
                fields: from_fields(def.fields)?,
            }),
            directives: from_directives(def.directives)?,
            description: def.description,
        },

        AstTypeDefinition::Union(def) => TypeSpec {
            name: Some(def.name),
            kind: TypeKind::Union(UnionType { members: def.types }),
            directives: from_directives(def.directives)?,
            description: def.description,
        },

        AstTypeDefinition::Enum(def) => TypeSpec {
            name: Some(def.name),
            kind: TypeKind::Enum(EnumType {
                values: from_enum_values(def.values)?,
            }),
            directives: from_directives(def.directives)?,
            description: def.description,
        },

        AstTypeDefinition::InputObject(def) => TypeSpec {
            name: Some(def.name),
            kind: TypeKind::Input(InputType {
                fields: from_input_values(def.fields)?,
            }),
            directives: from_directives(def.directives)?,
            description: def.description,
        },
    })
}

fn from_type_ext(type_ext: AstTypeExtension) -> Result<TypeSpec, String> {
    Ok(match type_ext {
        AstTypeExtension::Scalar(ext) => TypeSpec {
            name: Some(ext.name),
            kind: TypeKind::Scalar,
            directives: from_directives(ext.directives)?,
            description: None,
        },

        AstTypeExtension::Object(ext) => TypeSpec {
            name: Some(ext.name),
            kind: TypeKind::Object(ObjectType {
                interfaces: ext.implements_interfaces,
                fields: from_fields(ext.fields)?,
            }),
            directives: from_directives(ext.directives)?,
            description: None,
        },

        AstTypeExtension::Interface(ext) => TypeSpec {
            name: Some(ext.name),
            kind: TypeKind::Interface(InterfaceType {
                fields: from_fields(ext.fields)?,
            }),
            directives: from_directives(ext.directives)?,
            description: None,
        },

        AstTypeExtension::Union(ext) => TypeSpec {
            name: Some(ext.name),
            kind: TypeKind::Union(UnionType { members: ext.types }),
            directives: from_directives(ext.directives)?,
            description: None,
        },

        AstTypeExtension::Enum(ext) => TypeSpec {
            name: Some(ext.name),
            kind: TypeKind::Enum(EnumType {
                values: from_enum_values(ext.values)?,
            }),
            directives: from_directives(ext.directives)?,
            description: None,
        },

        AstTypeExtension::InputObject(ext) => TypeSpec {
            name: Some(ext.name),
            kind: TypeKind::Input(InputType {
                fields: from_input_values(ext.fields)?,
            }),
            directives: from_directives(ext.directives)?,
            description: None,
        },
    })
}

fn from_directive_def(
    dir_def: AstDirectiveDefinition,
) -> Result<TypeSpec, String> {
    Ok(TypeSpec {
        name: Some(dir_def.name),
        kind: TypeKind::Directive(DirectiveType {
            args: from_input_values(dir_def.arguments)?,
            locations: dir_def.locations
                .into_iter()
                .map(from_directive_location)
                .collect(),
        }),
        directives: vec![],
        description: dir_def.description,
    })
}

fn from_enum_values(
    values: Vec<AstEnumValue>,
) -> Result<Vec<EnumValue>, String> {
    values
        .into_iter()
        .map(|value| {
            Ok(EnumValue {
                name: value.name,
                directives: from_directives(value.directives)?,
                description: value.description,
            })
        })
        .collect()
}

fn from_fields(fields: Vec<AstField>) -> Result<Vec<Field>, String> {
    fields
        .into_iter()
        .map(|field| {
            Ok(Field {
                name: field.name,
                args: from_input_values(field.arguments)?,
                field_type: from_type(field.field_type),
                directives: from_directives(field.directives)?,
                description: field.description,
            })
        })
        .collect()
}

fn from_input_values(
    input_values: Vec<AstInputValue>,
) -> Result<Vec<InputValue>, String> {
    input_values
        .into_iter()
        .map(|input_value| {
            Ok(InputValue {
                name: input_value.name,
                value_type: from_type(input_value.value_type),
                default: input_value.default_value.map(from_value).transpose()?,
                directives: from_directives(input_value.directives)?,
                description: input_value.description,
            })
        })
        .collect()
}

fn from_type(ast_type: AstType) -> TypeRef {
    match ast_type {
        AstType::NamedType(name) => TypeRef::Named(name),
        AstType::ListType(inner) => TypeRef::list(from_type(*inner)),
        AstType::NonNullType(inner) => TypeRef::non_null(from_type(*inner)),
    }
}

fn from_directives(
    directives: Vec<AstDirective>,
) -> Result<Vec<DirectiveAnnotation>, String> {
    directives
        .into_iter()
        .map(|directive| {
            let args = directive.arguments
                .into_iter()
                .map(|(arg_name, arg_value)| {
                    Ok((arg_name, from_value(arg_value)?))
                })
                .collect::<Result<Vec<_>, String>>()?;
            Ok(DirectiveAnnotation {
                name: directive.name,
                args,
            })
        })
        .collect()
}

fn from_value(ast_value: AstValue) -> Result<Value, String> {
    Ok(match ast_value {
        AstValue::Variable(name) => Value::ident(name),

        AstValue::Int(num) => {
            let int = num
                .as_i64()
                .ok_or_else(|| "integer literal out of range".to_string())?;
            Value::int(int.to_string())
        },

        AstValue::Float(num) => Value::float(format_float(num)),
        AstValue::String(text) => Value::string(text),
        AstValue::Boolean(flag) => Value::boolean(flag),
        AstValue::Null => Value::null(),
        AstValue::Enum(name) => Value::ident(name),

        AstValue::List(items) => Value::List(
            items
                .into_iter()
                .map(from_value)
                .collect::<Result<Vec<_>, String>>()?,
        ),

        AstValue::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, entry_value)| Ok((key, from_value(entry_value)?)))
                .collect::<Result<Vec<_>, String>>()?,
        ),
    })
}

// Keeps a trailing fraction so the lexical kind stays recognizably FLOAT.
fn format_float(num: f64) -> String {
    let text = num.to_string();
    if text.contains(['.', 'e', 'E']) {
        text
    } else {
        format!("{text}.0")
    }
}

fn from_directive_location(
    loc: parser::DirectiveLocation,
) -> DirectiveLocation {
    match loc {
        parser::DirectiveLocation::Query => DirectiveLocation::Query,
        parser::DirectiveLocation::Mutation => DirectiveLocation::Mutation,
        parser::DirectiveLocation::Subscription => DirectiveLocation::Subscription,
        parser::DirectiveLocation::Field => DirectiveLocation::Field,
        parser::DirectiveLocation::FragmentDefinition => DirectiveLocation::FragmentDefinition,
        parser::DirectiveLocation::FragmentSpread => DirectiveLocation::FragmentSpread,
        parser::DirectiveLocation::InlineFragment => DirectiveLocation::InlineFragment,
        parser::DirectiveLocation::VariableDefinition => DirectiveLocation::VariableDefinition,
        parser::DirectiveLocation::Schema => DirectiveLocation::Schema,
        parser::DirectiveLocation::Scalar => DirectiveLocation::Scalar,
        parser::DirectiveLocation::Object => DirectiveLocation::Object,
        parser::DirectiveLocation::FieldDefinition => DirectiveLocation::FieldDefinition,
        parser::DirectiveLocation::ArgumentDefinition => DirectiveLocation::ArgumentDefinition,
        parser::DirectiveLocation::Interface => DirectiveLocation::Interface,
        parser::DirectiveLocation::Union => DirectiveLocation::Union,
        parser::DirectiveLocation::Enum => DirectiveLocation::Enum,
        parser::DirectiveLocation::EnumValue => DirectiveLocation::EnumValue,
        parser::DirectiveLocation::InputObject => DirectiveLocation::InputObject,
        parser::DirectiveLocation::InputFieldDefinition => DirectiveLocation::InputFieldDefinition,
    }
}
