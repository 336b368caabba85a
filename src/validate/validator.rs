use crate::ast::DirectiveAnnotation;
use crate::ast::DirectiveLocation;
use crate::ast::DirectiveType;
use crate::ast::EnumType;
use crate::ast::Field;
use crate::ast::InputType;
use crate::ast::InputValue;
use crate::ast::InterfaceType;
use crate::ast::ObjectType;
use crate::ast::ScalarKind;
use crate::ast::SchemaType;
use crate::ast::TypeDecl;
use crate::ast::TypeKind;
use crate::ast::TypeRef;
use crate::ast::TypeSpec;
use crate::ast::UnionType;
use crate::ast::Value;
use crate::ir::Ir;
use crate::validate::TypeError;
use crate::validate::TypeErrorKind;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Runs the type-system rules over every document in `ir`.
///
/// Literal values are normalized in place as they validate (integer
/// literals coerce to floats, bare values wrap into lists), which is why
/// the IR is borrowed exclusively. The IR itself is otherwise left intact.
pub fn validate(ir: &mut Ir) -> Vec<TypeError> {
    let mut all_errors = vec![];

    for idx in 0..ir.entries().len() {
        let index = TypeIndex::build(ir, idx);
        let mut entry = std::mem::take(&mut ir.entries_mut()[idx]);
        let doc_name = entry.document.name.to_string();

        let mut validator = Validator {
            index: &index,
            errors: vec![],
        };

        // Kinds validate in dependency order (a union's members should
        // already have been visited when the union is checked, and so on),
        // with ties broken by declaration order.
        let mut order: Vec<(u8, String)> = entry
            .types
            .iter()
            .map(|(name, decls)| (decl_priority(decls), name.to_string()))
            .collect();
        order.sort_by_key(|(priority, _)| *priority);
        for (_, name) in order {
            if let Some(decls) = entry.types.get_mut(&name) {
                validator.validate_decls(&name, decls);
            }
        }

        validator.validate_directives(
            &doc_name,
            &mut entry.document.directives,
            DirectiveLocation::Document,
        );

        all_errors.extend(validator.errors.into_iter().map(|kind| TypeError {
            document: Some(doc_name.to_string()),
            kind,
        }));
        ir.entries_mut()[idx] = entry;
    }

    all_errors
}

fn decl_priority(decls: &[TypeDecl]) -> u8 {
    match decls.first().map(|decl| &decl.spec().kind) {
        Some(TypeKind::Schema(_)) => 0,
        Some(TypeKind::Scalar) => 1,
        Some(TypeKind::Enum(_)) => 2,
        Some(TypeKind::Union(_)) => 3,
        Some(TypeKind::Interface(_)) => 4,
        Some(TypeKind::Input(_)) => 5,
        Some(TypeKind::Object(_)) => 6,
        Some(TypeKind::Directive(_)) => 7,
        None => u8::MAX,
    }
}

/// A name-resolution snapshot taken before a document is validated.
///
/// Holds the first declaration of every name across the IR, with the
/// document under validation shadowing all others. Cloning up front keeps
/// lookups independent of the entry being mutated.
pub(crate) struct TypeIndex {
    types: IndexMap<String, TypeDecl>,
}

impl TypeIndex {
    pub(crate) fn build(ir: &Ir, local_idx: usize) -> Self {
        let mut types = IndexMap::new();
        if let Some(local) = ir.entries().get(local_idx) {
            for (name, decls) in &local.types {
                if let Some(first) = decls.first() {
                    types.insert(name.to_string(), first.clone());
                }
            }
        }
        for (idx, entry) in ir.entries().iter().enumerate() {
            if idx == local_idx {
                continue;
            }
            for (name, decls) in &entry.types {
                if types.contains_key(name) {
                    continue;
                }
                if let Some(first) = decls.first() {
                    types.insert(name.to_string(), first.clone());
                }
            }
        }
        TypeIndex { types }
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    pub(crate) fn definition(&self, name: &str) -> Option<&TypeSpec> {
        self.types.get(name).and_then(TypeDecl::as_definition)
    }
}

/// `a` is usable where `b` is expected.
///
/// Reflexive on names; an object passes for an interface it implements or
/// a union it belongs to; list and non-null wrappers must match, except
/// that non-null is accepted where nullable is expected.
pub(crate) fn compare_types(
    index: &TypeIndex,
    a: &TypeRef,
    b: &TypeRef,
) -> bool {
    match (a, b) {
        (TypeRef::Named(a_name), TypeRef::Named(b_name)) => {
            if a_name == b_name {
                return true;
            }
            match (index.definition(a_name), index.definition(b_name)) {
                (Some(a_spec), Some(b_spec)) =>
                    match (&a_spec.kind, &b_spec.kind) {
                        (TypeKind::Object(object), TypeKind::Interface(_)) =>
                            object
                                .interfaces
                                .iter()
                                .any(|interface| interface == b_name),

                        (TypeKind::Object(_), TypeKind::Union(union_type)) =>
                            union_type
                                .members
                                .iter()
                                .any(|member| member == a_name),

                        _ => false,
                    },

                _ => false,
            }
        },

        (TypeRef::List(a_inner), TypeRef::List(b_inner)) =>
            compare_types(index, a_inner, b_inner),

        (TypeRef::NonNull(a_inner), TypeRef::NonNull(b_inner)) =>
            compare_types(index, a_inner, b_inner),

        (TypeRef::NonNull(a_inner), _) => compare_types(index, a_inner, b),

        _ => false,
    }
}

fn field_map(fields: &[Field]) -> IndexMap<String, Field> {
    fields
        .iter()
        .map(|field| (field.name.to_string(), field.clone()))
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Scalar(scalar) => scalar.kind.name(),
        Value::List(_) => "LIST",
        Value::Object(_) => "OBJECT",
    }
}

fn is_output_kind(kind: &TypeKind) -> bool {
    matches!(
        kind,
        TypeKind::Scalar
            | TypeKind::Object(_)
            | TypeKind::Interface(_)
            | TypeKind::Union(_)
            | TypeKind::Enum(_)
    )
}

fn is_input_kind(kind: &TypeKind) -> bool {
    matches!(kind, TypeKind::Scalar | TypeKind::Enum(_) | TypeKind::Input(_))
}

fn declaration_location(kind: &TypeKind) -> Option<DirectiveLocation> {
    match kind {
        TypeKind::Schema(_) => Some(DirectiveLocation::Schema),
        TypeKind::Scalar => Some(DirectiveLocation::Scalar),
        TypeKind::Object(_) => Some(DirectiveLocation::Object),
        TypeKind::Interface(_) => Some(DirectiveLocation::Interface),
        TypeKind::Union(_) => Some(DirectiveLocation::Union),
        TypeKind::Enum(_) => Some(DirectiveLocation::Enum),
        TypeKind::Input(_) => Some(DirectiveLocation::InputObject),
        TypeKind::Directive(_) => None,
    }
}

struct Validator<'a> {
    index: &'a TypeIndex,
    errors: Vec<TypeErrorKind>,
}

impl<'a> Validator<'a> {
    fn validate_decls(&mut self, name: &str, decls: &mut [TypeDecl]) {
        let index = self.index;
        let Some((first, extensions)) = decls.split_first_mut() else {
            // A dependency seeded during import resolution that no document
            // (and no built-in) ever supplied.
            if index.lookup(name).is_none() {
                self.errors.push(TypeErrorKind::MissingTypeDeclaration {
                    name: name.to_string(),
                });
            }
            return;
        };

        if first.is_extension() {
            self.errors.push(TypeErrorKind::MissingTypeDeclaration {
                name: name.to_string(),
            });
            return;
        }

        self.validate_type_spec(name, first.spec_mut());

        for decl in extensions {
            match decl {
                TypeDecl::Definition(_) =>
                    self.errors.push(TypeErrorKind::DuplicateTypeDefinition {
                        name: name.to_string(),
                    }),

                TypeDecl::Extension(ext_spec) =>
                    self.validate_extension(name, first.spec(), ext_spec),
            }
        }
    }

    fn validate_type_spec(&mut self, name: &str, spec: &mut TypeSpec) {
        match &mut spec.kind {
            TypeKind::Schema(schema) => self.validate_schema(schema),
            TypeKind::Scalar => {},
            TypeKind::Object(object) => self.validate_object(name, object),
            TypeKind::Interface(interface) =>
                self.validate_interface(name, interface),
            TypeKind::Union(union_type) =>
                self.validate_union(name, union_type),
            TypeKind::Enum(enum_type) => self.validate_enum(name, enum_type),
            TypeKind::Input(input) => self.validate_input(name, input),
            TypeKind::Directive(directive) =>
                self.validate_directive_decl(name, directive),
        }

        if !matches!(spec.kind, TypeKind::Schema(_)) && name.starts_with("__") {
            self.errors.push(TypeErrorKind::InvalidTypeName {
                name: name.to_string(),
                kind: spec.kind.name(),
            });
        }

        if let Some(location) = declaration_location(&spec.kind) {
            self.validate_directives(name, &mut spec.directives, location);
        }
    }

    fn validate_schema(&mut self, schema: &SchemaType) {
        if schema.root_ops.is_empty() {
            self.errors.push(TypeErrorKind::EmptySchema);
            return;
        }
        self.validate_root_ops(&schema.root_ops);
        if !schema.root_ops.iter().any(|op| op.name == "query") {
            self.errors.push(TypeErrorKind::MissingQueryOperation);
        }
    }

    fn validate_root_ops(&mut self, root_ops: &[Field]) {
        let index = self.index;
        for op in root_ops {
            match &op.field_type {
                TypeRef::Named(type_name) => match index.definition(type_name)
                {
                    None =>
                        self.errors.push(
                            TypeErrorKind::UnknownRootOperationType {
                                op: op.name.to_string(),
                                type_name: type_name.to_string(),
                            },
                        ),

                    Some(spec) if !matches!(spec.kind, TypeKind::Object(_)) =>
                        self.errors.push(
                            TypeErrorKind::NonObjectRootOperationType {
                                op: op.name.to_string(),
                                type_name: type_name.to_string(),
                            },
                        ),

                    Some(_) => {},
                },

                TypeRef::List(_) =>
                    self.errors.push(TypeErrorKind::ListRootOperationType {
                        op: op.name.to_string(),
                    }),

                TypeRef::NonNull(_) =>
                    self.errors.push(
                        TypeErrorKind::NonNullRootOperationType {
                            op: op.name.to_string(),
                        },
                    ),
            }
        }
    }

    fn validate_enum(&mut self, name: &str, enum_type: &mut EnumType) {
        if enum_type.values.is_empty() {
            self.errors.push(TypeErrorKind::EmptyEnum {
                name: name.to_string(),
            });
            return;
        }

        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in &enum_type.values {
            *counts.entry(value.name.to_string()).or_insert(0) += 1;
        }
        for (value_name, count) in &counts {
            if *count > 1 {
                self.errors.push(TypeErrorKind::DuplicateEnumValue {
                    enum_name: name.to_string(),
                    value: value_name.to_string(),
                });
            }
        }

        for value in &mut enum_type.values {
            self.validate_directives(
                name,
                &mut value.directives,
                DirectiveLocation::EnumValue,
            );
        }
    }

    fn validate_union(&mut self, name: &str, union_type: &UnionType) {
        if union_type.members.is_empty() {
            self.errors.push(TypeErrorKind::EmptyUnion {
                name: name.to_string(),
            });
            return;
        }
        self.validate_union_members(name, &union_type.members);
    }

    fn validate_union_members(&mut self, union_name: &str, members: &[String]) {
        let index = self.index;
        let mut seen: IndexSet<&str> = IndexSet::new();
        for member in members {
            match index.definition(member) {
                None => self.errors.push(TypeErrorKind::UndefinedUnionMember {
                    union_name: union_name.to_string(),
                    member: member.to_string(),
                }),

                Some(spec) => {
                    if !matches!(spec.kind, TypeKind::Object(_)) {
                        self.errors.push(
                            TypeErrorKind::NonObjectUnionMember {
                                union_name: union_name.to_string(),
                                member: member.to_string(),
                            },
                        );
                    }
                    if !seen.insert(member.as_str()) {
                        self.errors.push(
                            TypeErrorKind::DuplicateUnionMember {
                                union_name: union_name.to_string(),
                                member: member.to_string(),
                            },
                        );
                    }
                },
            }
        }
    }

    fn validate_interface(
        &mut self,
        name: &str,
        interface: &mut InterfaceType,
    ) {
        if interface.fields.is_empty() {
            self.errors.push(TypeErrorKind::EmptyInterface {
                name: name.to_string(),
            });
            return;
        }
        self.validate_fields(name, &mut interface.fields);
    }

    fn validate_input(&mut self, name: &str, input: &mut InputType) {
        if input.fields.is_empty() {
            self.errors.push(TypeErrorKind::EmptyInput {
                name: name.to_string(),
            });
            return;
        }
        self.validate_arg_defs(
            name,
            &mut input.fields,
            DirectiveLocation::InputFieldDefinition,
        );
    }

    fn validate_object(&mut self, name: &str, object: &mut ObjectType) {
        if object.fields.is_empty() {
            self.errors.push(TypeErrorKind::EmptyObject {
                name: name.to_string(),
            });
        }
        let fields = self.validate_fields(name, &mut object.fields);
        self.validate_interface_impls(name, &object.interfaces, &fields);
    }

    /// Validates `fields` and returns the first occurrence of each name,
    /// for interface-satisfaction checks over the validated shapes.
    fn validate_fields(
        &mut self,
        host: &str,
        fields: &mut [Field],
    ) -> IndexMap<String, Field> {
        let index = self.index;

        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for field in fields.iter() {
            *counts.entry(field.name.to_string()).or_insert(0) += 1;
        }

        let mut validated: IndexMap<String, Field> = IndexMap::new();
        for field in fields.iter_mut() {
            if validated.contains_key(&field.name) {
                continue;
            }

            if field.name.starts_with("__") {
                self.errors.push(TypeErrorKind::InvalidFieldName {
                    host: host.to_string(),
                    field: field.name.to_string(),
                });
            }

            let arg_host = format!("{host}.{}", field.name);
            self.validate_arg_defs(
                &arg_host,
                &mut field.args,
                DirectiveLocation::ArgumentDefinition,
            );

            let type_name = field.field_type.innermost_name().to_string();
            match index.definition(&type_name) {
                None => self.errors.push(TypeErrorKind::UndefinedReturnType {
                    host: host.to_string(),
                    field: field.name.to_string(),
                    type_name,
                }),

                Some(spec) if !is_output_kind(&spec.kind) =>
                    self.errors.push(TypeErrorKind::NonOutputFieldType {
                        host: host.to_string(),
                        field: field.name.to_string(),
                        type_name,
                    }),

                Some(_) => {},
            }

            self.validate_directives(
                &arg_host,
                &mut field.directives,
                DirectiveLocation::FieldDefinition,
            );

            validated.insert(field.name.to_string(), field.clone());
        }

        for (field_name, count) in &counts {
            if *count > 1 {
                self.errors.push(TypeErrorKind::DuplicateField {
                    host: host.to_string(),
                    field: field_name.to_string(),
                });
            }
        }

        validated
    }

    /// Shared by argument definitions and input-object fields; only the
    /// directive location differs between the two.
    fn validate_arg_defs(
        &mut self,
        host: &str,
        args: &mut [InputValue],
        location: DirectiveLocation,
    ) {
        let index = self.index;

        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for arg in args.iter() {
            *counts.entry(arg.name.to_string()).or_insert(0) += 1;
        }

        let mut seen: IndexSet<String> = IndexSet::new();
        for arg in args.iter_mut() {
            if !seen.insert(arg.name.to_string()) {
                continue;
            }

            if arg.name.starts_with("__") {
                self.errors.push(TypeErrorKind::InvalidArgumentName {
                    host: host.to_string(),
                    arg: arg.name.to_string(),
                });
            }

            let type_name = arg.value_type.innermost_name().to_string();
            let input_ok = match index.definition(&type_name) {
                Some(spec) => is_input_kind(&spec.kind),
                None => false,
            };
            if !input_ok {
                self.errors.push(TypeErrorKind::NonInputArgumentType {
                    host: host.to_string(),
                    arg: arg.name.to_string(),
                    type_name,
                });
            }

            let value_type = arg.value_type.clone();
            let arg_name = arg.name.to_string();
            if let Some(default) = &mut arg.default {
                self.validate_value(host, &arg_name, default, &value_type);
            }

            self.validate_directives(host, &mut arg.directives, location);
        }

        for (arg_name, count) in &counts {
            if *count > 1 {
                self.errors.push(TypeErrorKind::DuplicateArgument {
                    host: host.to_string(),
                    arg: arg_name.to_string(),
                });
            }
        }
    }

    fn validate_interface_impls(
        &mut self,
        object: &str,
        interfaces: &[String],
        fields: &IndexMap<String, Field>,
    ) {
        let index = self.index;
        for interface_name in interfaces {
            match index.definition(interface_name) {
                None => self.errors.push(TypeErrorKind::UndefinedInterface {
                    host: object.to_string(),
                    interface: interface_name.to_string(),
                }),

                Some(spec) => match &spec.kind {
                    TypeKind::Interface(interface) => self
                        .validate_interface_fields(
                            object,
                            interface_name,
                            &interface.fields,
                            fields,
                        ),

                    _ => self.errors.push(TypeErrorKind::NonInterfaceType {
                        host: object.to_string(),
                        interface: interface_name.to_string(),
                    }),
                },
            }
        }
    }

    fn validate_interface_fields(
        &mut self,
        object: &str,
        interface: &str,
        interface_fields: &[Field],
        object_fields: &IndexMap<String, Field>,
    ) {
        let index = self.index;
        for iface_field in interface_fields {
            let Some(object_field) = object_fields.get(&iface_field.name)
            else {
                self.errors.push(TypeErrorKind::MissingInterfaceField {
                    object: object.to_string(),
                    interface: interface.to_string(),
                    field: iface_field.name.to_string(),
                });
                continue;
            };

            // Subtyping is meaningless while either side is unresolved;
            // the unresolved side has its own diagnostic already.
            let object_type = object_field.field_type.innermost_name();
            let iface_type = iface_field.field_type.innermost_name();
            if index.lookup(object_type).is_none()
                || index.lookup(iface_type).is_none()
            {
                continue;
            }

            if !compare_types(
                index,
                &object_field.field_type,
                &iface_field.field_type,
            ) {
                self.errors.push(TypeErrorKind::IncompatibleFieldType {
                    object: object.to_string(),
                    interface: interface.to_string(),
                    field: iface_field.name.to_string(),
                });
            }

            if !iface_field.args.is_empty() && object_field.args.is_empty() {
                self.errors.push(
                    TypeErrorKind::MissingInterfaceFieldArguments {
                        object: object.to_string(),
                        interface: interface.to_string(),
                        field: iface_field.name.to_string(),
                    },
                );
                continue;
            }

            let mut object_args: IndexMap<&str, &InputValue> = object_field
                .args
                .iter()
                .map(|arg| (arg.name.as_str(), arg))
                .collect();
            for iface_arg in &iface_field.args {
                let Some(object_arg) =
                    object_args.shift_remove(iface_arg.name.as_str())
                else {
                    self.errors.push(
                        TypeErrorKind::MissingInterfaceFieldArgument {
                            object: object.to_string(),
                            interface: interface.to_string(),
                            field: iface_field.name.to_string(),
                            arg: iface_arg.name.to_string(),
                        },
                    );
                    continue;
                };

                // Argument types are invariant.
                let compatible = compare_types(
                    index,
                    &object_arg.value_type,
                    &iface_arg.value_type,
                ) && compare_types(
                    index,
                    &iface_arg.value_type,
                    &object_arg.value_type,
                );
                if !compatible {
                    self.errors.push(
                        TypeErrorKind::IncompatibleArgumentType {
                            object: object.to_string(),
                            interface: interface.to_string(),
                            field: iface_field.name.to_string(),
                            arg: iface_arg.name.to_string(),
                        },
                    );
                }
            }

            for (arg_name, object_arg) in object_args {
                if matches!(object_arg.value_type, TypeRef::NonNull(_)) {
                    self.errors.push(
                        TypeErrorKind::RequiredAdditionalArgument {
                            object: object.to_string(),
                            interface: interface.to_string(),
                            field: iface_field.name.to_string(),
                            arg: arg_name.to_string(),
                        },
                    );
                }
            }
        }
    }

    fn validate_extension(
        &mut self,
        name: &str,
        base: &TypeSpec,
        ext: &mut TypeSpec,
    ) {
        match (&base.kind, &mut ext.kind) {
            (TypeKind::Schema(_), TypeKind::Schema(ext_schema)) => {
                if !ext_schema.root_ops.is_empty() {
                    self.validate_root_ops(&ext_schema.root_ops);
                }
            },

            (TypeKind::Scalar, TypeKind::Scalar) => {},

            (TypeKind::Object(base_object), TypeKind::Object(ext_object)) => {
                let ext_fields =
                    self.validate_fields(name, &mut ext_object.fields);
                for field in &base_object.fields {
                    if ext_fields.contains_key(&field.name) {
                        self.errors.push(TypeErrorKind::ExtensionFieldExists {
                            name: name.to_string(),
                            field: field.name.to_string(),
                        });
                    }
                }
                if !ext_object.interfaces.is_empty() {
                    // An interface added by the extension may be satisfied
                    // by base and extension fields together.
                    let mut combined = field_map(&base_object.fields);
                    combined.extend(ext_fields);
                    self.validate_interface_impls(
                        name,
                        &ext_object.interfaces,
                        &combined,
                    );
                }
            },

            (
                TypeKind::Interface(base_iface),
                TypeKind::Interface(ext_iface),
            ) => {
                let ext_fields =
                    self.validate_fields(name, &mut ext_iface.fields);
                for field in &base_iface.fields {
                    if ext_fields.contains_key(&field.name) {
                        self.errors.push(TypeErrorKind::ExtensionFieldExists {
                            name: name.to_string(),
                            field: field.name.to_string(),
                        });
                    }
                }
            },

            (TypeKind::Union(base_union), TypeKind::Union(ext_union)) => {
                if !ext_union.members.is_empty() {
                    self.validate_union_members(name, &ext_union.members);
                    for member in &ext_union.members {
                        if base_union.members.contains(member) {
                            self.errors.push(
                                TypeErrorKind::ExtensionUnionMemberExists {
                                    name: name.to_string(),
                                    member: member.to_string(),
                                },
                            );
                        }
                    }
                }
            },

            (TypeKind::Enum(base_enum), TypeKind::Enum(ext_enum)) => {
                for value in &mut ext_enum.values {
                    self.validate_directives(
                        name,
                        &mut value.directives,
                        DirectiveLocation::EnumValue,
                    );
                }
                for value in &ext_enum.values {
                    if base_enum
                        .values
                        .iter()
                        .any(|base_value| base_value.name == value.name)
                    {
                        self.errors.push(
                            TypeErrorKind::ExtensionEnumValueExists {
                                name: name.to_string(),
                                value: value.name.to_string(),
                            },
                        );
                    }
                }
            },

            (TypeKind::Input(base_input), TypeKind::Input(ext_input)) => {
                self.validate_arg_defs(
                    name,
                    &mut ext_input.fields,
                    DirectiveLocation::InputFieldDefinition,
                );
                for field in &ext_input.fields {
                    if base_input
                        .fields
                        .iter()
                        .any(|base_field| base_field.name == field.name)
                    {
                        self.errors.push(TypeErrorKind::ExtensionFieldExists {
                            name: name.to_string(),
                            field: field.name.to_string(),
                        });
                    }
                }
            },

            (TypeKind::Directive(_), _) => {
                self.errors.push(TypeErrorKind::UnsupportedExtension {
                    name: name.to_string(),
                    kind: "directive",
                });
                return;
            },

            _ => {
                self.errors.push(TypeErrorKind::ExtensionKindMismatch {
                    name: name.to_string(),
                    kind: base.kind.name(),
                });
                return;
            },
        }

        if let Some(location) = declaration_location(&base.kind) {
            self.validate_directives(name, &mut ext.directives, location);
        }
        for directive in &ext.directives {
            if base
                .directives
                .iter()
                .any(|base_directive| base_directive.name == directive.name)
            {
                self.errors.push(TypeErrorKind::ExtensionDirectiveExists {
                    name: name.to_string(),
                    directive: directive.name.to_string(),
                });
            }
        }
    }

    fn validate_directive_decl(
        &mut self,
        name: &str,
        directive: &mut DirectiveType,
    ) {
        for arg in &directive.args {
            for applied in &arg.directives {
                if applied.name == name {
                    self.errors.push(
                        TypeErrorKind::SelfReferentialDirective {
                            name: name.to_string(),
                        },
                    );
                }
            }
        }

        let host = format!("@{name}");
        self.validate_arg_defs(
            &host,
            &mut directive.args,
            DirectiveLocation::ArgumentDefinition,
        );
    }

    fn validate_directives(
        &mut self,
        host: &str,
        directives: &mut [DirectiveAnnotation],
        location: DirectiveLocation,
    ) {
        let index = self.index;

        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for directive in directives.iter() {
            *counts.entry(directive.name.to_string()).or_insert(0) += 1;
        }

        let mut seen: IndexSet<String> = IndexSet::new();
        for directive in directives.iter_mut() {
            let first = seen.insert(directive.name.to_string());

            let Some(decl) = index.lookup(&directive.name) else {
                if first {
                    self.errors.push(TypeErrorKind::UndefinedDirective {
                        host: host.to_string(),
                        directive: directive.name.to_string(),
                    });
                }
                continue;
            };
            let Some(spec) = decl.as_definition() else {
                continue;
            };
            let TypeKind::Directive(directive_type) = &spec.kind else {
                if first {
                    self.errors.push(TypeErrorKind::NotADirective {
                        host: host.to_string(),
                        name: directive.name.to_string(),
                    });
                }
                continue;
            };

            if first && counts.get(&directive.name).copied().unwrap_or(0) > 1 {
                self.errors.push(TypeErrorKind::RepeatedDirective {
                    host: host.to_string(),
                    directive: directive.name.to_string(),
                });
            }

            if !directive_type.locations.contains(&location) {
                if first {
                    self.errors.push(
                        TypeErrorKind::InvalidDirectiveLocation {
                            host: host.to_string(),
                            directive: directive.name.to_string(),
                            location,
                        },
                    );
                }
                continue;
            }

            let directive_host = format!("{host}:@{}", directive.name);
            self.validate_args(
                &directive_host,
                &directive_type.args,
                &mut directive.args,
            );
        }
    }

    /// Checks supplied arguments against their declarations, validating
    /// each value against its declared type.
    fn validate_args(
        &mut self,
        host: &str,
        arg_defs: &[InputValue],
        args: &mut [(String, Value)],
    ) {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for (arg_name, _) in args.iter() {
            *counts.entry(arg_name.to_string()).or_insert(0) += 1;
        }
        for (arg_name, count) in &counts {
            if *count > 1 {
                self.errors.push(TypeErrorKind::NonUniqueArgument {
                    host: host.to_string(),
                    arg: arg_name.to_string(),
                });
            }
        }

        for def in arg_defs {
            let supplied = args
                .iter_mut()
                .find(|(arg_name, _)| arg_name == &def.name);
            match supplied {
                Some((_, value)) =>
                    self.validate_value(host, &def.name, value, &def.value_type),

                None => {
                    let required = matches!(
                        def.value_type,
                        TypeRef::NonNull(_)
                    ) && def.default.is_none();
                    if required {
                        self.errors.push(
                            TypeErrorKind::MissingRequiredArgument {
                                host: host.to_string(),
                                arg: def.name.to_string(),
                            },
                        );
                    }
                },
            }
        }

        for arg_name in counts.keys() {
            if !arg_defs.iter().any(|def| &def.name == arg_name) {
                self.errors.push(TypeErrorKind::UndefinedArgument {
                    host: host.to_string(),
                    arg: arg_name.to_string(),
                });
            }
        }
    }

    /// Validates `value` against `expected`, rewriting it where the rules
    /// call for coercion.
    fn validate_value(
        &mut self,
        host: &str,
        name: &str,
        value: &mut Value,
        expected: &TypeRef,
    ) {
        match expected {
            TypeRef::Named(type_name) =>
                self.validate_named_value(host, name, value, type_name),

            TypeRef::List(inner) => match value {
                Value::List(items) => {
                    for item in items {
                        self.validate_value(host, name, item, inner);
                    }
                },

                _ => {
                    // A bare value where a list is expected validates
                    // against the element type, then wraps.
                    self.validate_value(host, name, value, inner);
                    let single =
                        std::mem::replace(value, Value::List(vec![]));
                    *value = Value::List(vec![single]);
                },
            },

            TypeRef::NonNull(inner) => {
                if let Value::Scalar(scalar) = &*value
                    && scalar.kind == ScalarKind::Null
                {
                    self.errors.push(TypeErrorKind::NullValueForNonNull {
                        host: host.to_string(),
                        name: name.to_string(),
                    });
                    return;
                }
                self.validate_value(host, name, value, inner);
            },
        }
    }

    fn validate_named_value(
        &mut self,
        host: &str,
        name: &str,
        value: &mut Value,
        type_name: &str,
    ) {
        // Null is fine against any nullable type.
        if let Value::Scalar(scalar) = &*value
            && scalar.kind == ScalarKind::Null
        {
            return;
        }

        match type_name {
            "Int" | "Float" | "String" | "Boolean" | "ID" =>
                self.validate_builtin_scalar_value(host, name, value, type_name),

            _ => {
                let index = self.index;
                let Some(spec) = index.definition(type_name) else {
                    if matches!(value, Value::Object(_)) {
                        self.errors.push(TypeErrorKind::UndefinedInputObject {
                            host: host.to_string(),
                            type_name: type_name.to_string(),
                        });
                    }
                    return;
                };

                match &spec.kind {
                    // Custom scalars accept any literal.
                    TypeKind::Scalar => {},

                    TypeKind::Enum(enum_type) => match &*value {
                        Value::Scalar(scalar)
                            if scalar.kind == ScalarKind::Ident =>
                        {
                            let declared = enum_type
                                .values
                                .iter()
                                .any(|v| v.name == scalar.text);
                            if !declared {
                                self.errors.push(
                                    TypeErrorKind::UndefinedEnumValue {
                                        host: host.to_string(),
                                        name: name.to_string(),
                                        enum_name: type_name.to_string(),
                                        value: scalar.text.to_string(),
                                    },
                                );
                            }
                        },

                        other =>
                            self.errors.push(TypeErrorKind::NotCoercible {
                                host: host.to_string(),
                                name: name.to_string(),
                                value_kind: value_kind(other),
                                type_name: type_name.to_string(),
                            }),
                    },

                    TypeKind::Input(input) => match value {
                        Value::Object(pairs) => self.validate_object_literal(
                            host,
                            name,
                            &input.fields,
                            pairs,
                        ),

                        _ => self.errors.push(
                            TypeErrorKind::InputObjectRequired {
                                host: host.to_string(),
                                name: name.to_string(),
                                type_name: type_name.to_string(),
                            },
                        ),
                    },

                    _ => match &*value {
                        Value::Object(_) =>
                            self.errors.push(TypeErrorKind::NotAnInputObject {
                                host: host.to_string(),
                                type_name: type_name.to_string(),
                            }),

                        other =>
                            self.errors.push(TypeErrorKind::NotCoercible {
                                host: host.to_string(),
                                name: name.to_string(),
                                value_kind: value_kind(other),
                                type_name: type_name.to_string(),
                            }),
                    },
                }
            },
        }
    }

    fn validate_builtin_scalar_value(
        &mut self,
        host: &str,
        name: &str,
        value: &mut Value,
        type_name: &str,
    ) {
        let scalar = match value {
            Value::Scalar(scalar) => scalar,
            other => {
                let kind = value_kind(other);
                self.errors.push(TypeErrorKind::NotCoercible {
                    host: host.to_string(),
                    name: name.to_string(),
                    value_kind: kind,
                    type_name: type_name.to_string(),
                });
                return;
            },
        };

        let ok = match (type_name, scalar.kind) {
            ("Int", ScalarKind::Int) => true,
            ("Float", ScalarKind::Float) => true,
            ("Float", ScalarKind::Int) => {
                // Int literals coerce to Float.
                scalar.kind = ScalarKind::Float;
                scalar.text.push_str(".0");
                true
            },
            ("String", ScalarKind::Str) => true,
            ("Boolean", ScalarKind::Bool) => true,
            ("ID", ScalarKind::Str | ScalarKind::Int) => true,
            _ => false,
        };
        if !ok {
            self.errors.push(TypeErrorKind::NotCoercible {
                host: host.to_string(),
                name: name.to_string(),
                value_kind: scalar.kind.name(),
                type_name: type_name.to_string(),
            });
        }
    }

    fn validate_object_literal(
        &mut self,
        host: &str,
        name: &str,
        fields: &[InputValue],
        pairs: &mut [(String, Value)],
    ) {
        let literal_host = format!("{host}:{name}");

        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for (field_name, _) in pairs.iter() {
            *counts.entry(field_name.to_string()).or_insert(0) += 1;
        }
        for (field_name, count) in &counts {
            if *count > 1 {
                self.errors.push(TypeErrorKind::DuplicateLiteralField {
                    host: literal_host.to_string(),
                    field: field_name.to_string(),
                });
            }
        }

        for def in fields {
            let supplied = pairs
                .iter_mut()
                .find(|(field_name, _)| field_name == &def.name);
            match supplied {
                Some((_, value)) => self.validate_value(
                    &literal_host,
                    &def.name,
                    value,
                    &def.value_type,
                ),

                None => {
                    let required = matches!(
                        def.value_type,
                        TypeRef::NonNull(_)
                    ) && def.default.is_none();
                    if required {
                        self.errors.push(
                            TypeErrorKind::MissingRequiredField {
                                host: literal_host.to_string(),
                                field: def.name.to_string(),
                            },
                        );
                    }
                },
            }
        }

        for field_name in counts.keys() {
            if !fields.iter().any(|def| &def.name == field_name) {
                self.errors.push(TypeErrorKind::UndefinedLiteralField {
                    host: literal_host.to_string(),
                    field: field_name.to_string(),
                });
            }
        }
    }
}
