//! A semantic front-end for GraphQL IDL documents.
//!
//! This crate takes parsed IDL documents and turns them into a small set of
//! self-contained, validated units:
//!
//! * [`reduce_imports`] resolves cross-document `@import` edges, copying the
//!   types each root document depends on into that document.
//! * [`merge_extensions`] folds `extend` declarations into their base
//!   definitions so every type name maps to a single declaration.
//! * [`validate`] / [`check_types`] run the GraphQL type-system rules over
//!   the result, coercing literal values in place and reporting structured
//!   [`TypeError`]s.
//!
//! Documents can be built directly from the [`ast`] types or parsed from IDL
//! source via [`Document::parse`](ast::Document::parse).

pub mod ast;
pub mod builtins;
pub mod codegen;
mod imports;
mod ir;
mod merge;
mod validate;

pub use imports::IMPORT_DIRECTIVE;
pub use imports::ImportError;
pub use imports::reduce_imports;
pub use ir::Ir;
pub use ir::IrEntry;
pub use ir::TypeMap;
pub use merge::MergeError;
pub use merge::merge_extensions;
pub use validate::TypeChecker;
pub use validate::TypeError;
pub use validate::TypeErrorKind;
pub use validate::check_types;
pub use validate::validate;
