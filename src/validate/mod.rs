//! Type-system validation.

mod type_error;
mod validator;

#[cfg(test)]
mod tests;

pub use type_error::TypeError;
pub use type_error::TypeErrorKind;
pub use validator::validate;

use crate::builtins::TypeRegistry;
use crate::ir::Ir;

/// A validation pass over an [`Ir`].
///
/// The exclusive borrow lets a checker normalize documents in place (the
/// stock [`validate`] coerces literal values as it goes).
pub trait TypeChecker {
    fn check(&self, ir: &mut Ir) -> Vec<TypeError>;
}

impl<F> TypeChecker for F
where
    F: Fn(&mut Ir) -> Vec<TypeError>,
{
    fn check(&self, ir: &mut Ir) -> Vec<TypeError> {
        self(ir)
    }
}

/// Runs each checker over `ir` with the registry's declarations in scope.
///
/// The registry rides along as a synthetic trailing document, so a user
/// declaration of the same name shadows a built-in during lookup. The
/// synthetic document is removed again before returning.
pub fn check_types(
    ir: &mut Ir,
    registry: &TypeRegistry,
    checkers: &[&dyn TypeChecker],
) -> Vec<TypeError> {
    let mut builtins = Ir::from_documents(vec![registry.to_document()]);
    if let Some(entry) = builtins.pop_entry() {
        ir.push_entry(entry);
    }

    let mut errors = vec![];
    for checker in checkers {
        errors.extend(checker.check(ir));
    }

    let _ = ir.pop_entry();
    errors
}
