use crate::ast::Document;
use crate::ast::TypeDecl;
use crate::ast::Value;

#[test]
fn literal_arguments_keep_their_lexical_kind() {
    let doc = Document::parse(
        "doc",
        "scalar S @d(i: 4, f: 4.5, w: 4e0, s: \"x\", b: true, n: null, e: RED)",
    )
    .unwrap();
    let TypeDecl::Definition(spec) = &doc.types[0] else {
        panic!("expected a definition");
    };
    let values: Vec<&Value> =
        spec.directives[0].args.iter().map(|(_, value)| value).collect();
    assert_eq!(
        values,
        [
            &Value::int("4"),
            &Value::float("4.5"),
            &Value::float("4.0"),
            &Value::string("x"),
            &Value::boolean(true),
            &Value::null(),
            &Value::ident("RED"),
        ],
    );
}

#[test]
fn bad_source_is_a_parse_error() {
    let err = Document::parse("doc", "type {").unwrap_err();
    assert_eq!(err.document, "doc");
}

#[test]
fn out_of_range_int_literals_do_not_parse() {
    let result = Document::parse("doc", "scalar S @d(x: 99999999999999999999)");
    assert!(result.is_err());
}
