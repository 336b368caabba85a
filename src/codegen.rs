//! The seam between the front-end and code generators.
//!
//! No generator lives in this crate; consumers implement [`CodeGenerator`]
//! against resolved, merged, validated [`Document`]s and receive output
//! streams from a [`GeneratorContext`].

use crate::ast::Document;
use std::io;
use std::io::Write;

/// Supplies output streams to a generator.
pub trait GeneratorContext {
    /// Opens the named output file for writing.
    fn open(&mut self, filename: &str) -> io::Result<Box<dyn Write>>;
}

/// An error reported by a code generator.
#[derive(Debug, thiserror::Error)]
#[error("generator `{gen_name}` failed on document `{doc_name}`: {msg}")]
pub struct GenError {
    pub doc_name: String,
    pub gen_name: String,
    pub msg: String,
}

/// Produces output from validated IDL documents.
pub trait CodeGenerator {
    /// Generates output for a single document. `options_json` carries
    /// generator-specific options as a JSON object literal.
    fn generate(
        &mut self,
        ctx: &mut dyn GeneratorContext,
        doc: &Document,
        options_json: &str,
    ) -> Result<(), GenError>;

    /// Generates output for each document in turn.
    fn generate_all(
        &mut self,
        ctx: &mut dyn GeneratorContext,
        docs: &[Document],
        options_json: &str,
    ) -> Result<(), GenError> {
        for doc in docs {
            self.generate(ctx, doc, options_json)?;
        }
        Ok(())
    }
}
