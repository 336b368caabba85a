//! Resolves cross-document import edges.
//!
//! Documents declare imports through either surface accepted here: an
//! `@import(paths: [...])` document directive, or the document's `imports`
//! list. Resolution copies every declaration a root document transitively
//! depends on into that document and drops the imported documents from the
//! output.

use crate::ast::DirectiveAnnotation;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::InputValue;
use crate::ast::ScalarKind;
use crate::ast::TypeDecl;
use crate::ast::TypeKind;
use crate::ast::Value;
use crate::ir::Ir;
use crate::ir::IrEntry;
use crate::ir::TypeMap;
use indexmap::IndexMap;
use std::collections::VecDeque;

#[cfg(test)]
mod tests;

type Result<T> = std::result::Result<T, ImportError>;

/// Name of the document directive that declares imports.
pub const IMPORT_DIRECTIVE: &str = "import";

/// Scalar names that are always available and never travel through imports.
const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// An error encountered while resolving imports.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ImportError {
    #[error("document `{document}` imports unknown document `{path}`")]
    UnknownImport {
        document: String,
        path: String,
    },

    #[error("circular imports: {}", .path.join(" -> "))]
    CircularImports {
        path: Vec<String>,
    },
}

struct Node {
    document: Document,
    types: TypeMap,
    children: Vec<usize>,
    imported: bool,
}

/// Resolves all imports in `ir`, returning one entry per root document.
///
/// A root is any document no other document imports. Each root's type map is
/// completed with the declarations it transitively depends on; names that
/// resolve nowhere are left as empty entries for the validator to diagnose.
/// Import directives and `imports` lists are consumed. Documents that are
/// only ever imported do not appear in the output.
pub fn reduce_imports(ir: Ir) -> Result<Ir> {
    let mut nodes: Vec<Node> = ir
        .into_entries()
        .into_iter()
        .map(|entry| Node {
            document: entry.document,
            types: entry.types,
            children: vec![],
            imported: false,
        })
        .collect();

    let index_by_name: IndexMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.document.name.as_str(), idx))
        .collect();

    let mut edges: Vec<Vec<usize>> = Vec::with_capacity(nodes.len());
    for node in &nodes {
        let mut children = vec![];
        for path in import_paths(&node.document) {
            let Some(&child) = index_by_name.get(path.as_str()) else {
                return Err(ImportError::UnknownImport {
                    document: node.document.name.to_string(),
                    path,
                });
            };
            children.push(child);
        }
        edges.push(children);
    }
    for (idx, children) in edges.into_iter().enumerate() {
        for &child in &children {
            nodes[child].imported = true;
        }
        nodes[idx].children = children;
    }

    // Both import surfaces are consumed here; they must not leak into the
    // resolved documents.
    for node in &mut nodes {
        node.document
            .directives
            .retain(|directive| directive.name != IMPORT_DIRECTIVE);
        node.document.imports.clear();
    }

    detect_cycles(&nodes)?;

    let roots: Vec<usize> =
        (0..nodes.len()).filter(|&idx| !nodes[idx].imported).collect();
    log::debug!(
        "import forest: {} documents, {} roots",
        nodes.len(),
        roots.len(),
    );

    let mut entries = Vec::with_capacity(roots.len());
    for root in roots {
        let (types, directives) = resolve(&nodes, root);
        let mut document = std::mem::take(&mut nodes[root].document);
        document.directives = directives;
        entries.push(IrEntry { document, types });
    }
    Ok(Ir::from_entries(entries))
}

fn import_paths(document: &Document) -> Vec<String> {
    let mut paths = vec![];
    for directive in &document.directives {
        if directive.name != IMPORT_DIRECTIVE {
            continue;
        }
        for (arg_name, arg_value) in &directive.args {
            if arg_name != "paths" {
                continue;
            }
            let Value::List(items) = arg_value else {
                continue;
            };
            for item in items {
                if let Value::Scalar(scalar) = item
                    && scalar.kind == ScalarKind::Str
                {
                    paths.push(scalar.text.to_string());
                }
            }
        }
    }
    paths.extend(document.imports.iter().cloned());
    paths
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Grey,
    Black,
}

fn detect_cycles(nodes: &[Node]) -> Result<()> {
    let mut colors = vec![Color::White; nodes.len()];
    let mut path = vec![];
    for start in 0..nodes.len() {
        if colors[start] == Color::White {
            visit(nodes, start, &mut colors, &mut path)?;
        }
    }
    Ok(())
}

fn visit(
    nodes: &[Node],
    idx: usize,
    colors: &mut [Color],
    path: &mut Vec<usize>,
) -> Result<()> {
    colors[idx] = Color::Grey;
    path.push(idx);
    for &child in &nodes[idx].children {
        match colors[child] {
            Color::White => visit(nodes, child, colors, path)?,

            Color::Grey => {
                // Every node from the child's position on lies on the cycle.
                let start = path
                    .iter()
                    .position(|&node| node == child)
                    .unwrap_or(0);
                let mut cycle: Vec<String> = path[start..]
                    .iter()
                    .map(|&node| nodes[node].document.name.to_string())
                    .collect();
                cycle.push(nodes[child].document.name.to_string());
                return Err(ImportError::CircularImports { path: cycle });
            },

            Color::Black => {},
        }
    }
    path.pop();
    colors[idx] = Color::Black;
    Ok(())
}

fn resolve(
    nodes: &[Node],
    root: usize,
) -> (TypeMap, Vec<DirectiveAnnotation>) {
    let mut resolver = Resolver {
        types: TypeMap::new(),
    };
    let mut directives: IndexMap<String, DirectiveAnnotation> =
        IndexMap::new();
    for directive in &nodes[root].document.directives {
        directives
            .entry(directive.name.to_string())
            .or_insert_with(|| directive.clone());
    }

    // The root's own declarations win every name they occupy; everything
    // they reference starts out pending (an empty list).
    for (name, decls) in &nodes[root].types {
        resolver.types.insert(name.to_string(), decls.clone());
    }
    for decls in nodes[root].types.values() {
        for decl in decls {
            resolver.seed_deps(decl);
        }
    }

    let mut visited = vec![false; nodes.len()];
    visited[root] = true;
    let mut queue: VecDeque<usize> = nodes[root].children.iter().copied().collect();
    while let Some(idx) = queue.pop_front() {
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        log::debug!(
            "resolving `{}` against `{}`",
            nodes[root].document.name,
            nodes[idx].document.name,
        );

        for directive in &nodes[idx].document.directives {
            directives
                .entry(directive.name.to_string())
                .or_insert_with(|| directive.clone());
        }
        resolver.add_types(&nodes[idx]);
        queue.extend(nodes[idx].children.iter().copied());
    }

    for name in BUILTIN_SCALARS {
        resolver.types.shift_remove(name);
    }
    (resolver.types, directives.into_values().collect())
}

struct Resolver {
    types: TypeMap,
}

impl Resolver {
    /// Copies whatever this node supplies for pending names, then appends
    /// the node's extensions of names some earlier document already filled.
    fn add_types(&mut self, node: &Node) {
        let mut filled = vec![];
        loop {
            let pending: Vec<String> = self
                .types
                .iter()
                .filter(|(name, decls)| {
                    decls.is_empty() && node.types.contains_key(name.as_str())
                })
                .map(|(name, _)| name.to_string())
                .collect();
            if pending.is_empty() {
                break;
            }
            for name in pending {
                let Some(decls) = node.types.get(&name) else {
                    continue;
                };
                if let Some(slot) = self.types.get_mut(&name) {
                    *slot = decls.clone();
                }
                for decl in decls {
                    self.seed_deps(decl);
                }
                filled.push(name);
            }
        }

        let mut peer_exts: Vec<(String, TypeDecl)> = vec![];
        for (name, decls) in &node.types {
            let Some(existing) = self.types.get(name) else {
                continue;
            };
            if existing.is_empty() || filled.contains(name) {
                continue;
            }
            // First writer won the definition; only this node's extensions
            // of the name carry over.
            for decl in decls {
                if decl.is_extension() {
                    peer_exts.push((name.to_string(), decl.clone()));
                }
            }
        }
        for (name, ext) in peer_exts {
            self.seed_deps(&ext);
            if let Some(decls) = self.types.get_mut(&name) {
                decls.push(ext);
            }
        }
    }

    /// Marks every name `decl` references as pending unless it is already
    /// known or a built-in scalar.
    fn seed_deps(&mut self, decl: &TypeDecl) {
        let spec = decl.spec();
        self.seed_annotations(&spec.directives);
        match &spec.kind {
            TypeKind::Schema(schema) => self.seed_fields(&schema.root_ops),

            TypeKind::Scalar => {},

            TypeKind::Object(object) => {
                for interface in &object.interfaces {
                    self.seed(interface);
                }
                self.seed_fields(&object.fields);
            },

            TypeKind::Interface(interface) =>
                self.seed_fields(&interface.fields),

            TypeKind::Union(union_type) => {
                for member in &union_type.members {
                    self.seed(member);
                }
            },

            TypeKind::Enum(enum_type) => {
                for value in &enum_type.values {
                    self.seed_annotations(&value.directives);
                }
            },

            TypeKind::Input(input) => self.seed_input_values(&input.fields),

            TypeKind::Directive(directive) =>
                self.seed_input_values(&directive.args),
        }
    }

    fn seed_fields(&mut self, fields: &[Field]) {
        for field in fields {
            self.seed(field.field_type.innermost_name());
            self.seed_input_values(&field.args);
            self.seed_annotations(&field.directives);
        }
    }

    fn seed_input_values(&mut self, input_values: &[InputValue]) {
        for input_value in input_values {
            self.seed(input_value.value_type.innermost_name());
            self.seed_annotations(&input_value.directives);
        }
    }

    fn seed_annotations(&mut self, directives: &[DirectiveAnnotation]) {
        for directive in directives {
            self.seed(&directive.name);
        }
    }

    fn seed(&mut self, name: &str) {
        if BUILTIN_SCALARS.contains(&name) || self.types.contains_key(name) {
            return;
        }
        self.types.insert(name.to_string(), vec![]);
    }
}
