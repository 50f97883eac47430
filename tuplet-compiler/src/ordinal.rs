//! Ordinal slot positions and the identifiers derived from them.

use {proc_macro2::Span, syn::Ident};

/// The names of the slots, in order. The length of this table bounds the largest arity.
pub const ORDINALS: [&str; 9] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
];

/// The largest supported arity.
pub const MAX_ARITY: usize = ORDINALS.len();

/// A zero-based slot position, always strictly less than [`MAX_ARITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal {
    index: usize,
}

impl Ordinal {
    /// The first slot.
    pub const FIRST: Ordinal = Ordinal { index: 0 };

    /// The slot at the zero-based `index`, if there is one.
    pub fn new(index: usize) -> Option<Self> {
        if index < MAX_ARITY {
            Some(Ordinal { index })
        } else {
            None
        }
    }

    /// The first `arity` slots, or `None` if `arity` exceeds [`MAX_ARITY`].
    pub fn upto(arity: usize) -> Option<Vec<Self>> {
        if arity > MAX_ARITY {
            return None;
        }
        Some((0..arity).map(|index| Ordinal { index }).collect())
    }

    /// The zero-based index.
    pub fn index(self) -> usize {
        self.index
    }

    /// The one-based position, as used in rendering templates (`%1$s`).
    pub fn position(self) -> usize {
        self.index + 1
    }

    /// The lower-case name: `first`, `second`, ...
    pub fn name(self) -> &'static str {
        ORDINALS[self.index]
    }

    /// The field and getter name.
    pub fn field(self) -> Ident {
        ident(self.name())
    }

    /// The slot trait (and its associated type) name: `First`, `Second`, ...
    pub fn trait_name(self) -> Ident {
        let name = self.name();
        let mut capitalized = name[..1].to_uppercase();
        capitalized.push_str(&name[1..]);
        ident(&capitalized)
    }

    /// The generic type parameter for this slot: `A`, `B`, ...
    pub fn type_param(self) -> Ident {
        let letter = (b'A' + self.index as u8) as char;
        ident(&letter.to_string())
    }

    /// The setter name: `set_first`, ...
    pub fn setter(self) -> Ident {
        ident(&format!("set_{}", self.name()))
    }

    /// The name of the setter which returns the previous value: `replace_first`, ...
    pub fn replacer(self) -> Ident {
        ident(&format!("replace_{}", self.name()))
    }

    /// The name of the mutable accessor: `first_mut`, ...
    pub fn accessor_mut(self) -> Ident {
        ident(&format!("{}_mut", self.name()))
    }
}

fn ident(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
}
