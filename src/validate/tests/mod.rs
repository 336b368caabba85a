use crate::ast::Document;
use crate::builtins::TypeRegistry;
use crate::ir::Ir;
use crate::validate::TypeChecker;
use crate::validate::TypeErrorKind;
use crate::validate::check_types;
use crate::validate::validate;

mod validator_tests;

fn check_ir(ir: &mut Ir, registry: &TypeRegistry) -> Vec<TypeErrorKind> {
    let checkers: [&dyn TypeChecker; 1] = [&validate];
    check_types(ir, registry, &checkers)
        .into_iter()
        .map(|error| error.kind)
        .collect()
}

fn check_docs(docs: &[(&str, &str)]) -> Vec<TypeErrorKind> {
    let docs = docs
        .iter()
        .map(|(name, src)| Document::parse(*name, src).unwrap())
        .collect();
    let mut ir = Ir::from_documents(docs);
    check_ir(&mut ir, &TypeRegistry::new())
}

fn check(src: &str) -> Vec<TypeErrorKind> {
    check_docs(&[("doc", src)])
}
