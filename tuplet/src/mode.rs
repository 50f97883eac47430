//! The two capability profiles of a tuple: [`Fixed`] (read-only) and [`Mutable`] (read-write).
//!
//! Every tuple type in this crate carries its mode as a type parameter, so the same data type
//! serves both profiles and the profile is checked at compile time: setters only exist on the
//! [`Mutable`] profile.
//!
//! # Examples
//!
//! ```
//! use tuplet::{Pair, Tuple};
//!
//! let fixed = Pair::of(1, 2);
//! let mut mutable = fixed.into_mutable();
//! mutable.set_first(10);
//! assert!(mutable.is_mutable());
//! assert_eq!(mutable.freeze(), Pair::of(10, 2));
//! ```

use std::{fmt::Debug, hash::Hash};

use static_assertions::assert_impl_all;

/// A capability profile for tuples. This trait is sealed: [`Fixed`] and [`Mutable`] are its only
/// implementations.
pub trait Mode:
    sealed::Mode + Debug + Clone + Copy + Default + PartialEq + Eq + Ord + Hash + Send + Sync + 'static
{
    /// Whether values of this mode may have their slots replaced.
    const MUTABLE: bool;

    /// A human-readable name for the mode.
    const NAME: &'static str;
}

/// The immutable profile: slots are fixed at construction. This is the default mode of every tuple
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed;

/// The mutable profile: any slot can be replaced at any time through `&mut` access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Mutable;

impl Mode for Fixed {
    const MUTABLE: bool = false;
    const NAME: &'static str = "fixed";
}

impl Mode for Mutable {
    const MUTABLE: bool = true;
    const NAME: &'static str = "mutable";
}

assert_impl_all!(Fixed: Mode, Send, Sync);
assert_impl_all!(Mutable: Mode, Send, Sync);

mod sealed {
    pub trait Mode {}
    impl Mode for super::Fixed {}
    impl Mode for super::Mutable {}
}
