use {
    quickcheck::{Gen, QuickCheck, TestResult},
    quote::ToTokens,
    std::collections::HashSet,
    tuplet_compiler::{CompileError, Declaration, MAX_ARITY},
};

fn declaration_roundtrip_property(declaration: Declaration) -> TestResult {
    let tokens = declaration.to_token_stream();
    let parsed = match syn::parse2::<Declaration>(tokens.clone()) {
        Ok(parsed) => parsed,
        Err(error) => {
            return TestResult::error(format!(
                "failed w/ parse string {}, error: {}",
                tokens, error
            ))
        }
    };
    if parsed.names != declaration.names {
        return TestResult::error(format!("names changed after parsing {}", tokens));
    }

    let distinct = declaration
        .names
        .iter()
        .map(|name| name.to_string())
        .collect::<HashSet<_>>()
        .len();
    let valid = !declaration.names.is_empty()
        && declaration.names.len() <= MAX_ARITY
        && distinct == declaration.names.len();

    match parsed.to_family() {
        Ok(family) => {
            let emitted = syn::parse2::<syn::File>(family.into_token_stream());
            TestResult::from_bool(valid && emitted.is_ok())
        }
        Err(errors) => TestResult::from_bool(
            !valid
                && errors.iter().all(|(_, error)| match error {
                    CompileError::Empty => declaration.names.is_empty(),
                    CompileError::TooManySlots { arity, .. } => *arity > MAX_ARITY,
                    CompileError::DuplicateName(_) => distinct < declaration.names.len(),
                    CompileError::SlotCount { .. } => false,
                }),
        ),
    }
}

#[test]
fn declaration_roundtrip() {
    QuickCheck::new()
        .gen(Gen::new(13))
        .quickcheck(declaration_roundtrip_property as fn(_) -> TestResult)
}
