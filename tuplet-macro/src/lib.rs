//! Procedural macros used by the [`tuplet`](https://docs.rs/tuplet) crate to generate its family of
//! fixed-arity tuple types. The code generation itself lives in `tuplet-compiler`; these macros
//! only parse their input and report errors.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    quote::ToTokens,
    syn::parse_macro_input,
    tuplet_compiler::{Declaration, SlotCount},
};

/// Generate one tuple type per name, the k-th name receiving arity k, along with its mutable alias
/// and all of its structural trait implementations.
///
/// ```ignore
/// tuplet_macro::impl_tuples!(Single, Pair, Triple);
/// ```
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let declaration = parse_macro_input!(input as Declaration);
    match declaration.to_family() {
        Ok(family) => family.into_token_stream().into(),
        Err(errors) => tuplet_compiler::to_syn_error(errors)
            .to_compile_error()
            .into(),
    }
}

/// Generate the slot accessor traits `First`, `Second`, ... up to the given count (at most nine).
///
/// ```ignore
/// tuplet_macro::impl_slots!(9);
/// ```
#[proc_macro]
pub fn impl_slots(input: TokenStream) -> TokenStream {
    let count = parse_macro_input!(input as SlotCount);
    tuplet_compiler::slot_traits(count).into()
}
