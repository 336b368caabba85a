use crate::ast::DirectiveAnnotation;
use crate::ast::Document;
use crate::ast::TypeDecl;
use crate::ast::Value;
use crate::imports::IMPORT_DIRECTIVE;
use crate::imports::ImportError;
use crate::imports::reduce_imports;
use crate::ir::Ir;

fn doc(name: &str, src: &str) -> Document {
    Document::parse(name, src).unwrap()
}

fn doc_importing(name: &str, src: &str, imports: &[&str]) -> Document {
    let mut doc = doc(name, src);
    doc.imports = imports.iter().map(|path| path.to_string()).collect();
    doc
}

fn reduce(docs: Vec<Document>) -> Result<Ir, ImportError> {
    reduce_imports(Ir::from_documents(docs))
}

#[test]
fn unknown_import_errors() {
    let err = reduce(vec![doc_importing("a", "scalar A", &["missing"])]);
    assert_eq!(
        err,
        Err(ImportError::UnknownImport {
            document: "a".to_string(),
            path: "missing".to_string(),
        }),
    );
}

#[test]
fn mutual_imports_error() {
    let err = reduce(vec![
        doc_importing("a", "scalar A", &["b"]),
        doc_importing("b", "scalar B", &["a"]),
    ]);
    assert_eq!(
        err,
        Err(ImportError::CircularImports {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        }),
    );
}

#[test]
fn longer_cycles_are_detected() {
    let err = reduce(vec![
        doc_importing("a", "scalar A", &["b"]),
        doc_importing("b", "scalar B", &["c"]),
        doc_importing("c", "scalar C", &["a"]),
    ]);
    assert_eq!(
        err,
        Err(ImportError::CircularImports {
            path: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "a".to_string(),
            ],
        }),
    );
}

#[test]
fn only_unimported_documents_are_roots() {
    let resolved = reduce(vec![
        doc_importing("a", "scalar A", &["e", "f"]),
        doc("b", "scalar B"),
        doc_importing("c", "scalar C", &["g", "h"]),
        doc_importing("d", "scalar D", &["h"]),
        doc("e", "scalar E"),
        doc("f", "scalar F"),
        doc_importing("g", "scalar G", &["e", "f"]),
        doc("h", "scalar H"),
    ])
    .unwrap();

    let names: Vec<&str> = resolved
        .entries()
        .iter()
        .map(|entry| entry.document.name.as_str())
        .collect();
    assert_eq!(names, ["a", "b", "c", "d"]);
}

#[test]
fn transitive_dependencies_are_copied() {
    let resolved = reduce(vec![
        doc_importing("a", "type A { e: E }", &["b"]),
        doc_importing("b", "type E { f: F }", &["c"]),
        doc("c", "scalar F"),
    ])
    .unwrap();

    assert_eq!(resolved.entries().len(), 1);
    let types = &resolved.entries()[0].types;
    assert!(types.get("A").is_some_and(|decls| !decls.is_empty()));
    assert!(types.get("E").is_some_and(|decls| !decls.is_empty()));
    assert!(types.get("F").is_some_and(|decls| !decls.is_empty()));
}

#[test]
fn builtin_scalars_never_travel() {
    let resolved = reduce(vec![
        doc_importing("a", "type A { x: Int s: String }", &["b"]),
        doc("b", "scalar B"),
    ])
    .unwrap();

    let types = &resolved.entries()[0].types;
    assert!(types.get("Int").is_none());
    assert!(types.get("String").is_none());
}

#[test]
fn unresolved_names_stay_pending() {
    let resolved = reduce(vec![
        doc_importing("a", "type A { g: Ghost }", &["b"]),
        doc("b", "scalar B"),
    ])
    .unwrap();

    let types = &resolved.entries()[0].types;
    assert_eq!(types.get("Ghost"), Some(&vec![]));
}

#[test]
fn import_surfaces_are_consumed() {
    let mut root = doc("a", "type A { e: E }");
    let mut import = DirectiveAnnotation::new(IMPORT_DIRECTIVE);
    import.args.push((
        "paths".to_string(),
        Value::List(vec![Value::string("b")]),
    ));
    root.directives.push(import);
    root.imports.push("c".to_string());

    let mut tagged = doc("b", "scalar E");
    tagged.directives.push(DirectiveAnnotation::new("tag"));

    let resolved = reduce(vec![root, tagged, doc("c", "scalar C")]).unwrap();

    assert_eq!(resolved.entries().len(), 1);
    let document = &resolved.entries()[0].document;
    assert!(document.imports.is_empty());
    assert!(
        !document
            .directives
            .iter()
            .any(|directive| directive.name == IMPORT_DIRECTIVE)
    );
    // Directives of visited documents collect onto the root.
    assert!(
        document
            .directives
            .iter()
            .any(|directive| directive.name == "tag")
    );
}

#[test]
fn diamond_imports_use_the_shallowest_definition() {
    let resolved = reduce(vec![
        doc_importing("a", "type A { x: X }", &["b", "c"]),
        doc("b", "scalar X @shallow"),
        doc_importing("c", "scalar C", &["d"]),
        doc("d", "scalar X @deep"),
    ])
    .unwrap();

    let types = &resolved.entries()[0].types;
    let decls = types.get("X").unwrap();
    assert_eq!(decls.len(), 1);
    let spec = decls[0].as_definition().unwrap();
    assert_eq!(spec.directives, vec![DirectiveAnnotation::new("shallow")]);
}

#[test]
fn peer_extensions_append_to_first_definition() {
    let resolved = reduce(vec![
        doc_importing("a", "type A { x: X }", &["b", "c"]),
        doc("b", "scalar X"),
        doc("c", "extend scalar X @tag"),
    ])
    .unwrap();

    let types = &resolved.entries()[0].types;
    let decls = types.get("X").unwrap();
    assert_eq!(decls.len(), 2);
    assert!(decls[0].as_definition().is_some());
    assert!(decls[1].is_extension());
}
