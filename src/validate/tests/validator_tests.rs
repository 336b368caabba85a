use crate::ast::Document;
use crate::ast::Field;
use crate::ast::SchemaType;
use crate::ast::TypeDecl;
use crate::ast::TypeKind;
use crate::ast::TypeRef;
use crate::ast::TypeSpec;
use crate::builtins::TypeRegistry;
use crate::ir::Ir;
use crate::validate::TypeErrorKind;
use crate::validate::tests::check;
use crate::validate::tests::check_docs;
use crate::validate::tests::check_ir;
use crate::validate::validator::TypeIndex;
use crate::validate::validator::compare_types;

fn schema_doc(root_ops: Vec<Field>) -> Document {
    let mut doc = Document::new("doc");
    doc.types.push(TypeDecl::Definition(TypeSpec {
        name: None,
        kind: TypeKind::Schema(SchemaType { root_ops }),
        ..Default::default()
    }));
    doc
}

#[test]
fn redeclaring_a_builtin_scalar_is_clean() {
    assert_eq!(check("scalar Int"), []);
}

#[test]
fn dunder_type_names_are_invalid() {
    assert_eq!(
        check("scalar __Int"),
        [TypeErrorKind::InvalidTypeName {
            name: "__Int".to_string(),
            kind: "scalar",
        }],
    );
}

#[test]
fn valueless_enum_is_invalid() {
    assert_eq!(
        check("enum A"),
        [TypeErrorKind::EmptyEnum {
            name: "A".to_string(),
        }],
    );
}

#[test]
fn duplicate_enum_values_are_reported_once() {
    assert_eq!(
        check("enum A { X X }"),
        [TypeErrorKind::DuplicateEnumValue {
            enum_name: "A".to_string(),
            value: "X".to_string(),
        }],
    );
}

#[test]
fn schema_without_query_is_invalid() {
    assert_eq!(
        check("
            schema { mutation: M }
            type M { a: Int }
        "),
        [TypeErrorKind::MissingQueryOperation],
    );
}

#[test]
fn root_operation_type_must_exist() {
    assert_eq!(
        check("schema { query: Q }"),
        [TypeErrorKind::UnknownRootOperationType {
            op: "query".to_string(),
            type_name: "Q".to_string(),
        }],
    );
}

#[test]
fn root_operation_type_must_be_an_object() {
    assert_eq!(
        check("
            schema { query: Q }
            scalar Q
        "),
        [TypeErrorKind::NonObjectRootOperationType {
            op: "query".to_string(),
            type_name: "Q".to_string(),
        }],
    );
}

#[test]
fn schema_without_root_ops_is_invalid() {
    let mut ir = Ir::from_documents(vec![schema_doc(vec![])]);
    assert_eq!(
        check_ir(&mut ir, &TypeRegistry::new()),
        [TypeErrorKind::EmptySchema],
    );
}

#[test]
fn list_root_operations_are_invalid() {
    let mut ir = Ir::from_documents(vec![schema_doc(vec![Field::new(
        "query",
        TypeRef::list(TypeRef::named("Q")),
    )])]);
    assert_eq!(
        check_ir(&mut ir, &TypeRegistry::new()),
        [TypeErrorKind::ListRootOperationType {
            op: "query".to_string(),
        }],
    );
}

#[test]
fn union_member_rules() {
    assert_eq!(
        check("
            union U = A | B | A
            type A { x: Int }
        "),
        [
            TypeErrorKind::UndefinedUnionMember {
                union_name: "U".to_string(),
                member: "B".to_string(),
            },
            TypeErrorKind::DuplicateUnionMember {
                union_name: "U".to_string(),
                member: "A".to_string(),
            },
        ],
    );

    assert_eq!(
        check("
            union V = E
            enum E { X }
        "),
        [TypeErrorKind::NonObjectUnionMember {
            union_name: "V".to_string(),
            member: "E".to_string(),
        }],
    );
}

#[test]
fn memberless_union_is_invalid() {
    assert_eq!(
        check("union U"),
        [TypeErrorKind::EmptyUnion {
            name: "U".to_string(),
        }],
    );
}

#[test]
fn fieldless_object_is_invalid() {
    assert_eq!(
        check("type T"),
        [TypeErrorKind::EmptyObject {
            name: "T".to_string(),
        }],
    );
}

#[test]
fn satisfied_interface_is_clean() {
    assert_eq!(
        check("
            interface Pet { name: String }
            type Dog implements Pet { name: String barks: Boolean }
        "),
        [],
    );
}

#[test]
fn missing_interface_field() {
    assert_eq!(
        check("
            interface Pet { name: String }
            type Dog implements Pet { barks: Boolean }
        "),
        [TypeErrorKind::MissingInterfaceField {
            object: "Dog".to_string(),
            interface: "Pet".to_string(),
            field: "name".to_string(),
        }],
    );
}

#[test]
fn incompatible_interface_field_type() {
    assert_eq!(
        check("
            interface Pet { name: String }
            type Dog implements Pet { name: Int }
        "),
        [TypeErrorKind::IncompatibleFieldType {
            object: "Dog".to_string(),
            interface: "Pet".to_string(),
            field: "name".to_string(),
        }],
    );
}

#[test]
fn field_types_are_covariant_through_interfaces() {
    assert_eq!(
        check("
            interface Pet { name: String }
            type Dog implements Pet { name: String }
            interface HasPet { pet: Pet }
            type Owner implements HasPet { pet: Dog }
        "),
        [],
    );
}

#[test]
fn field_types_are_covariant_through_union_membership() {
    assert_eq!(
        check("
            type Dog { name: String }
            union Pets = Dog
            interface HasPet { pet: Pets }
            type Owner implements HasPet { pet: Dog }
        "),
        [],
    );
}

#[test]
fn implemented_type_must_be_an_interface() {
    assert_eq!(
        check("
            type B { y: Int }
            type A implements B { x: Int }
        "),
        [TypeErrorKind::NonInterfaceType {
            host: "A".to_string(),
            interface: "B".to_string(),
        }],
    );
}

#[test]
fn interface_argument_rules() {
    assert_eq!(
        check("
            interface I { f(a: Int): Int }
            type T implements I { f: Int }
        "),
        [TypeErrorKind::MissingInterfaceFieldArguments {
            object: "T".to_string(),
            interface: "I".to_string(),
            field: "f".to_string(),
        }],
    );

    assert_eq!(
        check("
            interface I { f(a: Int): Int }
            type T implements I { f(b: Int): Int }
        "),
        [TypeErrorKind::MissingInterfaceFieldArgument {
            object: "T".to_string(),
            interface: "I".to_string(),
            field: "f".to_string(),
            arg: "a".to_string(),
        }],
    );

    assert_eq!(
        check("
            interface I { f(a: Int): Int }
            type T implements I { f(a: String): Int }
        "),
        [TypeErrorKind::IncompatibleArgumentType {
            object: "T".to_string(),
            interface: "I".to_string(),
            field: "f".to_string(),
            arg: "a".to_string(),
        }],
    );

    assert_eq!(
        check("
            interface I { f(a: Int): Int }
            type T implements I { f(a: Int, extra: Int!): Int }
        "),
        [TypeErrorKind::RequiredAdditionalArgument {
            object: "T".to_string(),
            interface: "I".to_string(),
            field: "f".to_string(),
            arg: "extra".to_string(),
        }],
    );
}

#[test]
fn field_return_types_must_be_output_types() {
    assert_eq!(
        check("
            input In { a: Int }
            type T { x: In }
        "),
        [TypeErrorKind::NonOutputFieldType {
            host: "T".to_string(),
            field: "x".to_string(),
            type_name: "In".to_string(),
        }],
    );
}

#[test]
fn argument_types_must_be_input_types() {
    assert_eq!(
        check("type T { f(a: T): Int }"),
        [TypeErrorKind::NonInputArgumentType {
            host: "T.f".to_string(),
            arg: "a".to_string(),
            type_name: "T".to_string(),
        }],
    );
}

#[test]
fn extension_may_not_redeclare_a_field() {
    assert_eq!(
        check("
            type T { a: Int }
            extend type T { a: Int }
        "),
        [TypeErrorKind::ExtensionFieldExists {
            name: "T".to_string(),
            field: "a".to_string(),
        }],
    );
}

#[test]
fn extension_kind_must_match_definition() {
    assert_eq!(
        check("
            type T { a: Int }
            extend interface T { b: Int }
        "),
        [TypeErrorKind::ExtensionKindMismatch {
            name: "T".to_string(),
            kind: "object",
        }],
    );
}

#[test]
fn extension_without_definition_is_reported() {
    assert_eq!(
        check("extend type T { a: Int }"),
        [TypeErrorKind::MissingTypeDeclaration {
            name: "T".to_string(),
        }],
    );
}

#[test]
fn extension_may_not_reapply_a_directive() {
    assert_eq!(
        check("
            directive @tag on SCALAR
            scalar S @tag
            extend scalar S @tag
        "),
        [TypeErrorKind::ExtensionDirectiveExists {
            name: "S".to_string(),
            directive: "tag".to_string(),
        }],
    );
}

#[test]
fn applied_directives_must_be_declared() {
    assert_eq!(
        check("scalar S @nope"),
        [TypeErrorKind::UndefinedDirective {
            host: "S".to_string(),
            directive: "nope".to_string(),
        }],
    );
}

#[test]
fn applied_name_must_be_a_directive() {
    assert_eq!(
        check("scalar S @Int"),
        [TypeErrorKind::NotADirective {
            host: "S".to_string(),
            name: "Int".to_string(),
        }],
    );
}

#[test]
fn directive_location_is_enforced() {
    assert_eq!(
        check("scalar S @skip(if: true)"),
        [TypeErrorKind::InvalidDirectiveLocation {
            host: "S".to_string(),
            directive: "skip".to_string(),
            location: crate::ast::DirectiveLocation::Scalar,
        }],
    );

    // @skip is an executable directive; FIELD is not FIELD_DEFINITION.
    assert_eq!(
        check("type T { f: Int @skip(if: true) }"),
        [TypeErrorKind::InvalidDirectiveLocation {
            host: "T.f".to_string(),
            directive: "skip".to_string(),
            location: crate::ast::DirectiveLocation::FieldDefinition,
        }],
    );
}

#[test]
fn repeated_directives_are_reported_once() {
    assert_eq!(
        check("type T { f: Int @deprecated @deprecated }"),
        [TypeErrorKind::RepeatedDirective {
            host: "T.f".to_string(),
            directive: "deprecated".to_string(),
        }],
    );
}

#[test]
fn deprecated_with_reason_is_clean() {
    assert_eq!(
        check("enum E { OLD @deprecated(reason: \"use NEW\") NEW }"),
        [],
    );
}

#[test]
fn variable_definition_is_a_declarable_location() {
    assert_eq!(check("directive @v(a: Int) on VARIABLE_DEFINITION"), []);
}

#[test]
fn directives_may_not_reference_themselves() {
    assert_eq!(
        check("directive @f(a: Int @f) on ARGUMENT_DEFINITION"),
        [TypeErrorKind::SelfReferentialDirective {
            name: "f".to_string(),
        }],
    );
}

#[test]
fn duplicate_definitions_in_one_document() {
    assert_eq!(
        check("
            type T { a: Int }
            type T { b: Int }
        "),
        [TypeErrorKind::DuplicateTypeDefinition {
            name: "T".to_string(),
        }],
    );
}

#[test]
fn documents_see_each_others_types() {
    assert_eq!(
        check_docs(&[
            ("one", "
                schema { query: Query }
                type Query { other: Other }
            "),
            ("two", "type Other { x: Int }"),
        ]),
        [],
    );
}

#[test]
fn type_compatibility_rules() {
    let doc = Document::parse("doc", "
        interface Pet { name: String }
        type Dog implements Pet { name: String }
        union Pets = Dog
    ")
    .unwrap();
    let ir = Ir::from_documents(vec![doc]);
    let index = TypeIndex::build(&ir, 0);
    let named = |name: &str| TypeRef::named(name);

    assert!(compare_types(&index, &named("Dog"), &named("Dog")));
    assert!(compare_types(&index, &named("Dog"), &named("Pet")));
    assert!(!compare_types(&index, &named("Pet"), &named("Dog")));
    assert!(compare_types(&index, &named("Dog"), &named("Pets")));
    assert!(compare_types(
        &index,
        &TypeRef::list(named("Dog")),
        &TypeRef::list(named("Pet")),
    ));
    assert!(!compare_types(&index, &TypeRef::list(named("Dog")), &named("Pet")));
    assert!(compare_types(
        &index,
        &TypeRef::non_null(named("Dog")),
        &named("Pet"),
    ));
    assert!(!compare_types(
        &index,
        &named("Dog"),
        &TypeRef::non_null(named("Dog")),
    ));
}

#[test]
fn registered_types_are_in_scope() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDecl::Definition(TypeSpec {
        name: Some("Msg".to_string()),
        kind: TypeKind::Scalar,
        ..Default::default()
    }));

    let doc = Document::parse("doc", "type T { m: Msg }").unwrap();
    let mut ir = Ir::from_documents(vec![doc]);
    assert_eq!(check_ir(&mut ir, &registry), []);
}
