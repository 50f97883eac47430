//! The fixed-arity tuple family, from [`Single`] (one slot) up to [`Nona`] (nine slots).
//!
//! Each type is generated by the same code generator, so every arity behaves identically: slots
//! are compared lexicographically, checked for equality and hashed in slot order, and rendered as
//! `(v1, v2, ..., vN)`. The [`Tuple`] trait exposes what all arities have in common.

use crate::{Fixed, Mode, Mutable, TupleError};

/// Functionality common to every fixed-arity tuple type.
pub trait Tuple: Sized {
    /// The number of slots, which never changes.
    const ARITY: usize;

    /// The canonical rendering template: `"(%1$s, %2$s)"` for a [`Pair`], and so on. Rendering a
    /// tuple with it through `to_string_with` reproduces the tuple's `Display` output.
    const FORMAT: &'static str;

    /// The capability profile of the tuple, either [`Fixed`] or [`Mutable`].
    type Mode: Mode;

    /// The standard-library tuple with the same slot types, e.g. `(A, B)` for `Pair<A, B>`.
    type Inner;

    /// Consume the tuple, returning its slots as a standard-library tuple.
    fn into_inner(self) -> Self::Inner;

    /// Construct a tuple from a standard-library tuple of its slots.
    fn from_inner(inner: Self::Inner) -> Self;

    /// The number of slots, the same as [`Tuple::ARITY`].
    fn arity(&self) -> usize {
        Self::ARITY
    }

    /// Whether the slots of this tuple can be replaced.
    fn is_mutable(&self) -> bool {
        <Self::Mode as Mode>::MUTABLE
    }
}

tuplet_macro::impl_tuples!(Single, Pair, Triple, Quad, Quint, Sext, Sept, Octet, Nona);

/// A key/value association, as provided by a [`Pair`]: the key is the first slot and the value
/// the second.
///
/// # Examples
///
/// ```
/// use tuplet::{Entry, MutablePair, Pair, TupleError};
///
/// let mut fixed = Pair::of("key", "value");
/// assert_eq!(*fixed.key(), "key");
/// assert_eq!(
///     fixed.set_value("other"),
///     Err(TupleError::UnsupportedOperation { operation: "set_value" })
/// );
///
/// let mut mutable = MutablePair::of_mutable("key", "value");
/// assert_eq!(mutable.set_value("other"), Ok("value"));
/// assert_eq!(*mutable.value(), "other");
/// ```
pub trait Entry {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// The key of the association.
    fn key(&self) -> &Self::Key;

    /// The value of the association.
    fn value(&self) -> &Self::Value;

    /// Replace the value, returning the previous one.
    ///
    /// # Errors
    ///
    /// Fails with [`TupleError::UnsupportedOperation`] if the entry is immutable; the value is
    /// left as it was.
    fn set_value(&mut self, value: Self::Value) -> Result<Self::Value, TupleError>;
}

impl<A, B, M: Mode> Pair<A, B, M> {
    /// The first slot, viewed as the key of an [`Entry`].
    pub fn key(&self) -> &A {
        self.first()
    }

    /// The second slot, viewed as the value of an [`Entry`].
    pub fn value(&self) -> &B {
        self.second()
    }
}

impl<A, B> Entry for Pair<A, B, Fixed> {
    type Key = A;
    type Value = B;

    fn key(&self) -> &A {
        self.first()
    }

    fn value(&self) -> &B {
        self.second()
    }

    fn set_value(&mut self, _value: B) -> Result<B, TupleError> {
        Err(TupleError::UnsupportedOperation {
            operation: "set_value",
        })
    }
}

impl<A, B> Entry for Pair<A, B, Mutable> {
    type Key = A;
    type Value = B;

    fn key(&self) -> &A {
        self.first()
    }

    fn value(&self) -> &B {
        self.second()
    }

    fn set_value(&mut self, value: B) -> Result<B, TupleError> {
        Ok(self.replace_second(value))
    }
}

impl<T, M: Mode> Single<T, M> {
    /// The only slot.
    pub fn get(&self) -> &T {
        self.first()
    }
}

impl<T> Single<T, Mutable> {
    /// Replace the only slot.
    pub fn set(&mut self, value: T) {
        self.set_first(value)
    }
}

impl<T> Single<Option<T>, Mutable> {
    /// Replace the present value of the slot with the result of applying `f` to it.
    ///
    /// # Errors
    ///
    /// Fails with [`TupleError::NullArgument`] if the slot is empty, in which case `f` is not
    /// called and the slot stays empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplet::{MutableSingle, TupleError};
    ///
    /// let mut single = MutableSingle::of_mutable(Some("a".to_string()));
    /// single.update(|s| s.to_uppercase()).unwrap();
    /// assert_eq!(single.get().as_deref(), Some("A"));
    ///
    /// let mut empty = MutableSingle::<Option<String>>::of_mutable(None);
    /// assert_eq!(
    ///     empty.update(|s| s.to_uppercase()),
    ///     Err(TupleError::NullArgument { argument: "first" })
    /// );
    /// ```
    pub fn update<F: FnOnce(&T) -> T>(&mut self, f: F) -> Result<(), TupleError> {
        match self.first_mut() {
            Some(value) => {
                *value = f(&*value);
                Ok(())
            }
            None => Err(TupleError::NullArgument { argument: "first" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn pair_as_entry() {
        let pair = Pair::of("key", "value");
        assert_eq!(*pair.key(), "key");
        assert_eq!(*pair.value(), "value");
        assert_eq!(pair.to_string(), "(key, value)");
    }

    #[test]
    fn fixed_entry_rejects_writes() {
        let mut pair = Pair::of(1, 2);
        assert_eq!(
            Entry::set_value(&mut pair, 3),
            Err(TupleError::UnsupportedOperation {
                operation: "set_value"
            })
        );
        assert_eq!(pair, Pair::of(1, 2));
    }

    #[test]
    fn mutable_entry_accepts_writes() {
        let mut pair = MutablePair::of_mutable(1, 2);
        assert_eq!(Entry::set_value(&mut pair, 3), Ok(2));
        assert_eq!(pair.into_inner(), (1, 3));
    }

    #[test]
    fn quad_compares_lexicographically() {
        let lesser = Quad::of(1, 2, 3, 4);
        let greater = Quad::of(1, 2, 3, 5);
        assert!(lesser < greater);
        assert_eq!(lesser.compare_to(Some(&greater)), -1);
        assert_eq!(greater.compare_to(Some(&lesser)), 1);
        assert_eq!(lesser.compare_to(Some(&lesser)), 0);
        assert_eq!(lesser.compare_to(None), i32::MAX);
    }

    #[test]
    fn earlier_slots_dominate() {
        assert!(Triple::of(0, 9, 9) < Triple::of(1, 0, 0));
        assert!(Pair::of("b", 0) > Pair::of("a", 100));
    }

    #[test]
    fn none_orders_first() {
        assert!(Pair::of(None, 9) < Pair::of(Some(0), 0));
        assert_eq!(
            Pair::of(None::<u8>, 1).compare_to(Some(&Pair::of(None, 1))),
            0
        );
        assert!(Pair::of(None::<u8>, 1).equals(Some(&Pair::of(None, 1))));
    }

    #[test]
    fn equals_and_hash() {
        let a = Sext::of(1, 'b', "c", 4u8, 5i64, Some(6));
        let b = Sext::of(1, 'b', "c", 4u8, 5i64, Some(6));
        assert!(a.equals(Some(&a)));
        assert!(a.equals(Some(&b)));
        assert!(!a.equals(None));
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(&a));
    }

    #[test]
    fn hash_is_order_sensitive() {
        assert_ne!(hash_of(&Pair::of(1, 2)), hash_of(&Pair::of(2, 1)));
    }

    #[test]
    fn incomparable_slots() {
        let nan = Pair::of(1.0, f64::NAN);
        assert_eq!(nan.partial_cmp(&nan), None);
        assert!(Pair::of(0.0, f64::NAN) < Pair::of(1.0, f64::NAN));
    }

    #[test]
    fn setters_are_isolated() {
        let mut nona = MutableNona::of_mutable(1, 2, 3, 4, 5, 6, 7, 8, 9);
        nona.set_fifth(50);
        assert_eq!(nona.into_inner(), (1, 2, 3, 4, 50, 6, 7, 8, 9));
        assert_eq!(nona.replace_ninth(90), 9);
        *nona.first_mut() += 10;
        assert_eq!(nona.freeze(), Nona::of(11, 2, 3, 4, 50, 6, 7, 8, 90));
    }

    #[test]
    fn default_mutable_is_all_default() {
        let triple = MutableTriple::<Option<u8>, Option<&str>, i32>::default();
        assert_eq!(triple.into_inner(), (None, None, 0));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(Single::of(1).to_string(), "(1)");
        assert_eq!(
            Octet::of(1, 2, 3, 4, 5, 6, 7, 8).to_string(),
            "(1, 2, 3, 4, 5, 6, 7, 8)"
        );
        assert_eq!(format!("{:?}", Pair::of(1, "a")), "Pair(1, \"a\")");
        assert_eq!(
            format!("{:?}", MutablePair::of_mutable(1, "a")),
            "MutablePair(1, \"a\")"
        );
    }

    #[test]
    fn canonical_format_matches_display() {
        let sept = Sept::of(1, "two", 3.5, 'f', true, -6, "seven");
        assert_eq!(
            <Sept<i32, &str, f64, char, bool, i32, &str>>::FORMAT,
            "(%1$s, %2$s, %3$s, %4$s, %5$s, %6$s, %7$s)"
        );
        assert_eq!(
            sept.to_string_with(<Sept<i32, &str, f64, char, bool, i32, &str>>::FORMAT)
                .unwrap(),
            sept.to_string()
        );
    }

    #[test]
    fn absent_slots_render_as_null() {
        assert_eq!(Pair::of(None::<&str>, "v").to_string(), "(null, v)");
        assert_eq!(
            Pair::of(None::<&str>, "v").to_string_with("%1$s").unwrap(),
            "null"
        );
        type Nested = MutableTriple<Option<i32>, Option<char>, Single<Option<u8>>>;
        let triple: Nested = MutableTriple::of_mutable(Some(1), None, Single::of(None));
        assert_eq!(triple.to_string(), "(1, null, (null))");
        assert_eq!(
            triple.to_string_with(Nested::FORMAT).unwrap(),
            triple.to_string()
        );
    }

    #[test]
    fn template_beyond_arity_fails() {
        assert_eq!(
            Pair::of(1, 2).to_string_with("%3$s"),
            Err(TupleError::Format(crate::FormatError::MissingArgument {
                position: 3,
                arity: 2,
                offset: 0,
            }))
        );
    }

    #[test]
    fn tuple_trait() {
        let quint = Quint::of(1, 2, 3, 4, 5);
        assert_eq!(quint.arity(), 5);
        assert!(!quint.is_mutable());
        assert!(quint.into_mutable().is_mutable());
        let inner = Tuple::into_inner(quint);
        assert_eq!(<Quint<_, _, _, _, _>>::from_inner(inner), quint);
        assert_eq!(Quint::from((1, 2, 3, 4, 5)), quint);
        let back: (i32, i32, i32, i32, i32) = quint.into();
        assert_eq!(back, (1, 2, 3, 4, 5));
    }

    #[test]
    fn single_accessors() {
        let mut single = MutableSingle::of_mutable(3);
        assert_eq!(*single.get(), 3);
        single.set(4);
        assert_eq!(*single.get(), 4);
    }

    #[test]
    fn update_on_empty_single_leaves_it_empty() {
        let mut single = MutableSingle::<Option<i32>>::of_mutable(None);
        let mut called = false;
        assert_eq!(
            single.update(|x| {
                called = true;
                x + 1
            }),
            Err(TupleError::NullArgument { argument: "first" })
        );
        assert!(!called);
        assert_eq!(*single.get(), None);
    }
}
