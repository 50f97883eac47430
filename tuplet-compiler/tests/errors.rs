use tuplet_compiler::{to_syn_error, CompileError, Declaration, SlotCount};

fn errors_of(declaration: &str) -> Vec<CompileError> {
    syn::parse_str::<Declaration>(declaration)
        .unwrap()
        .to_family()
        .unwrap_err()
        .into_iter()
        .map(|(_, error)| error)
        .collect()
}

#[test]
fn empty_declaration() {
    assert_eq!(errors_of(""), vec![CompileError::Empty]);
}

#[test]
fn duplicate_name() {
    assert_eq!(
        errors_of("Single, Pair, Pair"),
        vec![CompileError::DuplicateName("Pair".to_owned())]
    );
}

#[test]
fn too_many_slots() {
    assert_eq!(
        errors_of("A1, A2, A3, A4, A5, A6, A7, A8, A9, A10"),
        vec![CompileError::TooManySlots {
            name: "A10".to_owned(),
            arity: 10,
            max: 9,
        }]
    );
}

#[test]
fn every_error_is_reported() {
    let errors = syn::parse_str::<Declaration>("A, A, B, C, D, E, F, G, H, I")
        .unwrap()
        .to_family()
        .unwrap_err();
    assert_eq!(errors.len(), 2);
    let combined = to_syn_error(errors).into_iter().count();
    assert_eq!(combined, 2);
}

#[test]
fn trailing_comma_is_accepted() {
    let family = syn::parse_str::<Declaration>("Single, Pair,")
        .unwrap()
        .to_family()
        .unwrap();
    assert_eq!(family.arities.len(), 2);
}

#[test]
fn non_identifiers_are_rejected() {
    assert!(syn::parse_str::<Declaration>("Single, 2").is_err());
    assert!(syn::parse_str::<SlotCount>("nine").is_err());
}
