use crate::ast::DirectiveLocation;

/// A type-system diagnostic, attributed to the document it was found in.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeError {
    pub document: Option<String>,
    pub kind: TypeErrorKind,
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.document {
            Some(document) => write!(f, "{document}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for TypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Every rule the validator can report, as a closed enum.
///
/// Message text lives only in the `Display` impl; callers match on the
/// variant, never on the rendered string.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TypeErrorKind {
    #[error("missing type declaration for `{name}`")]
    MissingTypeDeclaration { name: String },

    #[error("type `{name}` is defined more than once")]
    DuplicateTypeDefinition { name: String },

    #[error("{kind} name `{name}` must not begin with \"__\"")]
    InvalidTypeName { name: String, kind: &'static str },

    #[error("schema must declare at least one root operation")]
    EmptySchema,

    #[error("schema must declare the query root operation")]
    MissingQueryOperation,

    #[error("root operation `{op}` must be a named type, not a list")]
    ListRootOperationType { op: String },

    #[error("root operation `{op}` must be a nullable named type")]
    NonNullRootOperationType { op: String },

    #[error("root operation `{op}` references undefined type `{type_name}`")]
    UnknownRootOperationType { op: String, type_name: String },

    #[error("root operation `{op}` must be an object type, `{type_name}` is not")]
    NonObjectRootOperationType { op: String, type_name: String },

    #[error("enum `{name}` must declare at least one value")]
    EmptyEnum { name: String },

    #[error("enum `{enum_name}` declares value `{value}` more than once")]
    DuplicateEnumValue { enum_name: String, value: String },

    #[error("union `{name}` must declare at least one member")]
    EmptyUnion { name: String },

    #[error("union `{union_name}` member `{member}` is undefined")]
    UndefinedUnionMember { union_name: String, member: String },

    #[error("union `{union_name}` member `{member}` must be an object type")]
    NonObjectUnionMember { union_name: String, member: String },

    #[error("union `{union_name}` declares member `{member}` more than once")]
    DuplicateUnionMember { union_name: String, member: String },

    #[error("interface `{name}` must declare at least one field")]
    EmptyInterface { name: String },

    #[error("input `{name}` must declare at least one field")]
    EmptyInput { name: String },

    #[error("object `{name}` must declare at least one field")]
    EmptyObject { name: String },

    #[error("`{host}` declares field `{field}` more than once")]
    DuplicateField { host: String, field: String },

    #[error("field name `{host}.{field}` must not begin with \"__\"")]
    InvalidFieldName { host: String, field: String },

    #[error("field `{host}.{field}` must have an output type, `{type_name}` is not")]
    NonOutputFieldType {
        host: String,
        field: String,
        type_name: String,
    },

    #[error("field `{host}.{field}` references undefined type `{type_name}`")]
    UndefinedReturnType {
        host: String,
        field: String,
        type_name: String,
    },

    #[error("`{host}` declares argument `{arg}` more than once")]
    DuplicateArgument { host: String, arg: String },

    #[error("argument name `{host}({arg})` must not begin with \"__\"")]
    InvalidArgumentName { host: String, arg: String },

    #[error("argument `{host}({arg})` must have an input type, `{type_name}` is not")]
    NonInputArgumentType {
        host: String,
        arg: String,
        type_name: String,
    },

    #[error("`{host}` implements undefined interface `{interface}`")]
    UndefinedInterface { host: String, interface: String },

    #[error("`{host}` implements `{interface}`, which is not an interface")]
    NonInterfaceType { host: String, interface: String },

    #[error("object `{object}` is missing field `{field}` of interface `{interface}`")]
    MissingInterfaceField {
        object: String,
        interface: String,
        field: String,
    },

    #[error(
        "field `{object}.{field}` is not a subtype of the `{interface}` \
        field it implements"
    )]
    IncompatibleFieldType {
        object: String,
        interface: String,
        field: String,
    },

    #[error(
        "field `{object}.{field}` declares no arguments but interface \
        `{interface}` requires them"
    )]
    MissingInterfaceFieldArguments {
        object: String,
        interface: String,
        field: String,
    },

    #[error(
        "field `{object}.{field}` is missing argument `{arg}` of interface \
        `{interface}`"
    )]
    MissingInterfaceFieldArgument {
        object: String,
        interface: String,
        field: String,
        arg: String,
    },

    #[error(
        "argument `{object}.{field}({arg})` differs in type from interface \
        `{interface}`"
    )]
    IncompatibleArgumentType {
        object: String,
        interface: String,
        field: String,
        arg: String,
    },

    #[error(
        "argument `{object}.{field}({arg})` is required but interface \
        `{interface}` does not declare it"
    )]
    RequiredAdditionalArgument {
        object: String,
        interface: String,
        field: String,
        arg: String,
    },

    #[error("extension of `{name}` must be a {kind}")]
    ExtensionKindMismatch { name: String, kind: &'static str },

    #[error("{kind} `{name}` cannot be extended")]
    UnsupportedExtension { name: String, kind: &'static str },

    #[error("extension of `{name}` redeclares field `{field}`")]
    ExtensionFieldExists { name: String, field: String },

    #[error("extension of `{name}` redeclares union member `{member}`")]
    ExtensionUnionMemberExists { name: String, member: String },

    #[error("extension of `{name}` redeclares enum value `{value}`")]
    ExtensionEnumValueExists { name: String, value: String },

    #[error("extension of `{name}` reapplies directive `@{directive}`")]
    ExtensionDirectiveExists { name: String, directive: String },

    #[error("directive `@{name}` references itself")]
    SelfReferentialDirective { name: String },

    #[error("`{host}` applies undefined directive `@{directive}`")]
    UndefinedDirective { host: String, directive: String },

    #[error("`{host}` applies `@{name}`, which is not a directive")]
    NotADirective { host: String, name: String },

    #[error("`{host}` applies `@{directive}`, which is not valid at {location}")]
    InvalidDirectiveLocation {
        host: String,
        directive: String,
        location: DirectiveLocation,
    },

    #[error("`{host}` applies directive `@{directive}` more than once")]
    RepeatedDirective { host: String, directive: String },

    #[error("`{host}` supplies argument `{arg}` more than once")]
    NonUniqueArgument { host: String, arg: String },

    #[error("`{host}` is missing required argument `{arg}`")]
    MissingRequiredArgument { host: String, arg: String },

    #[error("`{host}` supplies undeclared argument `{arg}`")]
    UndefinedArgument { host: String, arg: String },

    #[error("`{host}` value for `{name}`: {value_kind} is not coercible to `{type_name}`")]
    NotCoercible {
        host: String,
        name: String,
        value_kind: &'static str,
        type_name: String,
    },

    #[error("`{host}` value for `{name}`: `{value}` is not a value of enum `{enum_name}`")]
    UndefinedEnumValue {
        host: String,
        name: String,
        enum_name: String,
        value: String,
    },

    #[error("`{host}` value for `{name}` must be an input object literal of `{type_name}`")]
    InputObjectRequired {
        host: String,
        name: String,
        type_name: String,
    },

    #[error("`{host}` supplies an object literal of undefined type `{type_name}`")]
    UndefinedInputObject { host: String, type_name: String },

    #[error("`{host}` supplies an object literal but `{type_name}` is not an input type")]
    NotAnInputObject { host: String, type_name: String },

    #[error("`{host}` literal sets field `{field}` more than once")]
    DuplicateLiteralField { host: String, field: String },

    #[error("`{host}` literal is missing required field `{field}`")]
    MissingRequiredField { host: String, field: String },

    #[error("`{host}` literal sets undeclared field `{field}`")]
    UndefinedLiteralField { host: String, field: String },

    #[error("`{host}` supplies null for non-null `{name}`")]
    NullValueForNonNull { host: String, name: String },
}
