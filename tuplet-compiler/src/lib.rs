//! The code generator behind the `impl_tuples!` and `impl_slots!` macros of the `tuplet` crate.
//!
//! A [`Declaration`] is the parsed body of an `impl_tuples!` invocation: a comma-separated list of
//! type names, where the k-th name receives arity k. Checking a declaration produces a [`Family`],
//! which emits every tuple type in the family (and all of their trait implementations) through
//! [`ToTokens`](quote::ToTokens). A [`SlotCount`] is the parsed body of `impl_slots!`, and emits
//! the per-slot accessor traits which the generated tuples implement.
//!
//! Generated code refers to the runtime library by `crate::` paths, so the macros are only meant
//! to be invoked from within `tuplet` itself.

use {
    proc_macro2::{Span, TokenStream},
    quote::{quote, ToTokens},
    std::collections::HashSet,
    syn::{
        parse::{Parse, ParseStream, Result},
        punctuated::Punctuated,
        Error, Ident, LitInt, Token,
    },
};

mod emit;
pub mod ordinal;

pub use emit::slot_traits;
pub use ordinal::{Ordinal, MAX_ARITY};

/// An error in the declaration of a tuple family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CompileError {
    /// The declaration names no tuple types at all.
    #[error("at least one tuple type must be declared")]
    Empty,
    /// The declaration names more tuple types than there are ordinal slot names.
    #[error("`{name}` would have arity {arity}, but at most {max} slots are supported")]
    TooManySlots {
        /// The offending type name.
        name: String,
        /// The arity it would have received.
        arity: usize,
        /// The largest supported arity.
        max: usize,
    },
    /// The same type name appears twice.
    #[error("`{0}` is declared more than once")]
    DuplicateName(String),
    /// An `impl_slots!` count outside of `1..=MAX_ARITY`.
    #[error("slot count must be between 1 and {max}, found {count}")]
    SlotCount {
        /// The requested count.
        count: usize,
        /// The largest supported count.
        max: usize,
    },
}

/// The parsed body of an `impl_tuples!` invocation.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// The declared type names, in order of increasing arity.
    pub names: Vec<Ident>,
}

impl Parse for Declaration {
    fn parse(input: ParseStream) -> Result<Self> {
        let names = Punctuated::<Ident, Token![,]>::parse_terminated(input)?;
        Ok(Declaration {
            names: names.into_iter().collect(),
        })
    }
}

impl ToTokens for Declaration {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let names = &self.names;
        quote!(#(#names),*).to_tokens(tokens)
    }
}

#[cfg(feature = "quickcheck")]
impl quickcheck::Arbitrary for Declaration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Both over-long declarations and repeated names are generated
        let count = <usize as quickcheck::Arbitrary>::arbitrary(g) % (MAX_ARITY + 3);
        let names = (0..count)
            .map(|_| {
                let suffix = <u8 as quickcheck::Arbitrary>::arbitrary(g) % 16;
                Ident::new(&format!("Tuple{}", suffix), Span::call_site())
            })
            .collect();
        Declaration { names }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let names = self.names.clone();
        Box::new((0..names.len()).rev().map(move |len| Declaration {
            names: names[..len].to_vec(),
        }))
    }
}

impl Declaration {
    /// Check the declaration, producing the [`Family`] it describes, or every problem found with
    /// it (each attached to the span of the offending name).
    pub fn to_family(&self) -> std::result::Result<Family, Vec<(Span, CompileError)>> {
        if self.names.is_empty() {
            return Err(vec![(Span::call_site(), CompileError::Empty)]);
        }

        let mut errors = Vec::new();
        let mut seen = HashSet::new();
        let mut arities = Vec::with_capacity(self.names.len());

        for (index, name) in self.names.iter().enumerate() {
            if !seen.insert(name.to_string()) {
                errors.push((name.span(), CompileError::DuplicateName(name.to_string())));
            }
            match Ordinal::upto(index + 1) {
                Some(slots) => arities.push(Arity {
                    name: name.clone(),
                    slots,
                }),
                None => errors.push((
                    name.span(),
                    CompileError::TooManySlots {
                        name: name.to_string(),
                        arity: index + 1,
                        max: MAX_ARITY,
                    },
                )),
            }
        }

        if errors.is_empty() {
            Ok(Family { arities })
        } else {
            Err(errors)
        }
    }
}

/// Collapse a list of spanned errors into a single [`syn::Error`], suitable for reporting from a
/// procedural macro.
pub fn to_syn_error(errors: Vec<(Span, CompileError)>) -> Error {
    let mut errors = errors
        .into_iter()
        .map(|(span, error)| Error::new(span, error));
    // `to_family` never fails with an empty list of errors
    let mut combined = match errors.next() {
        Some(first) => first,
        None => return Error::new(Span::call_site(), CompileError::Empty),
    };
    for error in errors {
        combined.combine(error);
    }
    combined
}

/// A checked family of tuple types, one per declared arity.
#[derive(Debug, Clone)]
pub struct Family {
    /// The tuple types, in order of increasing arity.
    pub arities: Vec<Arity>,
}

/// A single tuple type: its name and its ordered slots.
#[derive(Debug, Clone)]
pub struct Arity {
    /// The type name, e.g. `Pair`.
    pub name: Ident,
    /// The slots of the type, from [`Ordinal::FIRST`] onwards.
    pub slots: Vec<Ordinal>,
}

impl Arity {
    /// The number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: every declared tuple type has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The name of the mutable type alias, e.g. `MutablePair`.
    pub fn mutable_alias(&self) -> Ident {
        Ident::new(&format!("Mutable{}", self.name), self.name.span())
    }

    /// The canonical rendering template for this arity: formatting a tuple with it reproduces the
    /// tuple's `Display` output.
    pub fn canonical_format(&self) -> String {
        canonical_format(self.len())
    }
}

/// The canonical rendering template for tuples of the given arity, e.g. `"(%1$s, %2$s)"`.
pub fn canonical_format(arity: usize) -> String {
    let placeholders = (1..=arity)
        .map(|position| format!("%{}$s", position))
        .collect::<Vec<_>>();
    format!("({})", placeholders.join(", "))
}

/// The parsed body of an `impl_slots!` invocation: how many slot traits to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotCount(pub usize);

impl Parse for SlotCount {
    fn parse(input: ParseStream) -> Result<Self> {
        let literal = input.parse::<LitInt>()?;
        let count = literal.base10_parse::<usize>()?;
        if count == 0 || count > MAX_ARITY {
            return Err(Error::new(
                literal.span(),
                CompileError::SlotCount {
                    count,
                    max: MAX_ARITY,
                },
            ));
        }
        Ok(SlotCount(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arities_follow_declaration_order() {
        let declaration = syn::parse_str::<Declaration>("Single, Pair, Triple").unwrap();
        let family = declaration.to_family().unwrap();
        let shape = family
            .arities
            .iter()
            .map(|arity| (arity.name.to_string(), arity.len()))
            .collect::<Vec<_>>();
        assert_eq!(
            shape,
            vec![
                ("Single".to_owned(), 1),
                ("Pair".to_owned(), 2),
                ("Triple".to_owned(), 3)
            ]
        );
    }

    #[test]
    fn canonical_formats() {
        assert_eq!(canonical_format(1), "(%1$s)");
        assert_eq!(canonical_format(3), "(%1$s, %2$s, %3$s)");
    }

    #[test]
    fn mutable_alias_name() {
        let declaration = syn::parse_str::<Declaration>("Single, Pair").unwrap();
        let family = declaration.to_family().unwrap();
        assert_eq!(family.arities[1].mutable_alias().to_string(), "MutablePair");
    }

    #[test]
    fn slot_count_bounds() {
        assert_eq!(syn::parse_str::<SlotCount>("9").unwrap(), SlotCount(9));
        assert!(syn::parse_str::<SlotCount>("0").is_err());
        assert!(syn::parse_str::<SlotCount>("10").is_err());
    }
}
