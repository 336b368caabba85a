use crate::ast::Document;
use crate::ast::TypeDecl;
use indexmap::IndexMap;

/// Declarations of one document, grouped by type name in first-seen order.
pub type TypeMap = IndexMap<String, Vec<TypeDecl>>;

/// The intermediate representation the engines operate on: one entry per
/// document, each pairing the document with its grouped declarations.
///
/// Entry order is the order documents were supplied in, which makes every
/// downstream traversal deterministic.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Ir {
    entries: Vec<IrEntry>,
}

/// One document's slot in the IR.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IrEntry {
    pub document: Document,
    pub types: TypeMap,
}

impl Ir {
    /// Groups each document's declarations by IR name. Schema declarations
    /// are keyed under `"schema"`. The documents' own `types` lists are
    /// drained into the maps.
    pub fn from_documents(docs: Vec<Document>) -> Self {
        let entries = docs
            .into_iter()
            .map(|mut doc| {
                let mut types = TypeMap::new();
                for decl in doc.types.drain(..) {
                    types
                        .entry(decl.ir_name().to_string())
                        .or_default()
                        .push(decl);
                }
                IrEntry { document: doc, types }
            })
            .collect();
        Ir { entries }
    }

    /// Flattens the IR back into documents, restoring each document's
    /// `types` list in map order.
    pub fn into_documents(self) -> Vec<Document> {
        self.entries
            .into_iter()
            .map(|entry| {
                let IrEntry { mut document, types } = entry;
                for (_, decls) in types {
                    document.types.extend(decls);
                }
                document
            })
            .collect()
    }

    pub fn from_entries(entries: Vec<IrEntry>) -> Self {
        Ir { entries }
    }

    pub fn into_entries(self) -> Vec<IrEntry> {
        self.entries
    }

    /// Finds `name` in entry order, returning the owning document and the
    /// declaration list.
    pub fn lookup(&self, name: &str) -> Option<(&Document, &[TypeDecl])> {
        self.entries.iter().find_map(|entry| {
            entry
                .types
                .get(name)
                .map(|decls| (&entry.document, decls.as_slice()))
        })
    }

    pub fn entries(&self) -> &[IrEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<IrEntry> {
        &mut self.entries
    }

    pub(crate) fn push_entry(&mut self, entry: IrEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn pop_entry(&mut self) -> Option<IrEntry> {
        self.entries.pop()
    }
}
