/*!
![license: MIT](https://img.shields.io/github/license/boltlabs-inc/tuplet)
[![crates.io](https://img.shields.io/crates/v/tuplet)](https://crates.io/crates/tuplet)
[![docs.rs documentation](https://docs.rs/tuplet/badge.svg)](https://docs.rs/tuplet)

> **tuplet (noun):** A group of notes played in the time of a different number of notes.
>
> **tuplet (crate):** Named, fixed-arity tuples with structural equality, ordering, hashing and
> formatting, in immutable and mutable flavors.

This crate provides a family of tuple types, from [`Single`] (one slot) through [`Pair`],
[`Triple`], [`Quad`], [`Quint`], [`Sext`], [`Sept`] and [`Octet`] up to [`Nona`] (nine slots),
along with [`Generic`], a tuple of any number of slots of a single type.

Every fixed-arity tuple:

- exposes its slots by ordinal name (`first()`, `second()`, ...), and through the per-slot traits
  in the [`slot`] module;
- compares **lexicographically**, slot by slot, with the first differing slot deciding the order;
- is **equal** to another exactly when every pair of corresponding slots is equal, and **hashes**
  consistently with that equality;
- **renders** as `(v1, v2, ..., vN)`, or through a [template](mod@format) such as `"%2$s=%1$s"`.

All of these behaviors are implemented once, in the [`structural`] module, and shared by every
arity.

## Immutable and mutable tuples

Every tuple type has a capability profile, its [`Mode`], as its last type parameter. By default
this is [`Fixed`]: the slots are set at construction and never change. A tuple in the [`Mutable`]
mode (named by an alias such as [`MutablePair`]) additionally has setters for each slot:

```
use tuplet::{MutablePair, Pair};

let fixed = Pair::of("key", 1);
assert_eq!(fixed.to_string(), "(key, 1)");

let mut mutable = MutablePair::of_mutable("key", 1);
mutable.set_second(2);
assert_eq!(mutable.freeze(), Pair::of("key", 2));
```

Calling a setter on a fixed tuple is a compile error rather than a runtime failure. The one
runtime check is [`Entry::set_value`], which is available on both profiles of [`Pair`] and fails
with [`TupleError::UnsupportedOperation`] on a fixed one.

## Absent values

A slot may hold an absent value by having an [`Option`] type. `None` orders before every `Some`,
two `None`s are equal, and `None` renders as `null`:

```
use tuplet::Triple;

assert!(Triple::of(None, 'z', 9) < Triple::of(Some(0), 'a', 0));
assert_eq!(Triple::of(None::<u8>, 'z', 9).to_string(), "(null, z, 9)");
```

Slots render through the [`Render`](structural::Render) trait rather than directly through
[`Display`](std::fmt::Display), since `Option` has no `Display`. Other displayable types can be
wrapped in [`Shown`](structural::Shown).

## Comparing against nothing

For callers holding an optional tuple, [`Pair::compare_to`] and [`Pair::equals`] (and their
counterparts on every other type) take an `Option<&Self>`. Nothing is equal to `None`, and
comparing against `None` yields [`i32::MAX`].

## Sharing between threads

Fixed-arity tuples need `&mut` access to be written, so they are shared between threads like any
other value. A mutable [`Generic`] instead synchronizes internally and can be written through a
shared reference.

## Features

- `serde`: implements `Serialize` and `Deserialize` for every tuple type. A tuple is represented
  exactly like the standard-library tuple of its slots, and a [`Generic`] like a sequence. The
  mode is not part of the representation.
*/

#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

#[cfg(feature = "serde")]
extern crate serde_crate as serde;

pub mod format;
pub mod slot;
pub mod structural;

mod error;
mod generic;
mod mode;
mod tuple;

pub use error::{FormatError, TupleError};
pub use generic::{Generic, MutableGeneric, View, ViewMut};
pub use mode::{Fixed, Mode, Mutable};
pub use tuple::{
    Entry, MutableNona, MutableOctet, MutablePair, MutableQuad, MutableQuint, MutableSept,
    MutableSext, MutableSingle, MutableTriple, Nona, Octet, Pair, Quad, Quint, Sept, Sext, Single,
    Triple, Tuple,
};

/// The prelude module for quickly getting started with `tuplet`.
///
/// This module is designed to be imported as `use tuplet::prelude::*;`, which brings into scope the
/// traits needed to use tuples generically, along with the most common tuple types.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{Entry, Fixed, Generic, Mode, Mutable, Pair, Single, Triple, Tuple};
}
