//! The declaration tree for GraphQL IDL documents.
//!
//! These types model type-system definition language only (type
//! declarations, extensions, directives, and const values); executable
//! documents are out of scope. A [`Document`] can be assembled by hand or
//! parsed from IDL source with [`Document::parse`].

mod directive_annotation;
mod directive_location;
mod directive_type;
mod document;
mod enum_type;
mod field;
mod from_parser;
mod input_type;
mod input_value;
mod interface_type;
mod object_type;
mod schema_type;
mod type_decl;
mod type_ref;
mod type_spec;
mod union_type;
mod value;

#[cfg(test)]
mod tests;

pub use directive_annotation::DirectiveAnnotation;
pub use directive_location::DirectiveLocation;
pub use directive_type::DirectiveType;
pub use document::Document;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use from_parser::ParseError;
pub use input_type::InputType;
pub use input_value::InputValue;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use schema_type::SchemaType;
pub use type_decl::TypeDecl;
pub use type_ref::TypeRef;
pub use type_spec::SCHEMA_TYPE_NAME;
pub use type_spec::TypeKind;
pub use type_spec::TypeSpec;
pub use union_type::UnionType;
pub use value::ScalarKind;
pub use value::ScalarValue;
pub use value::Value;
