//! Per-slot accessor traits.
//!
//! A tuple of arity N implements the first N of these traits, so code which only needs, say, the
//! second slot of a tuple can accept any tuple of arity two or more:
//!
//! ```
//! use tuplet::{slot::Second, Pair, Triple};
//!
//! fn second_len<T: Second<Second = &'static str>>(tuple: &T) -> usize {
//!     tuple.second().len()
//! }
//!
//! assert_eq!(second_len(&Pair::of(1, "two")), 3);
//! assert_eq!(second_len(&Triple::of_mutable('a', "bee", 3.0)), 3);
//! ```
//!
//! The associated type shares its trait's name, so a bound can pin down the slot type as in
//! `T: Second<Second = &str>`. Getters never fail and have no side effects.

tuplet_macro::impl_slots!(9);
