//! A tuple of any number of slots, all of one type, safe to share between threads.
//!
//! Every operation on a [`Generic`] holds its internal lock for exactly the duration of that
//! operation. Sequences of operations which must observe a consistent state take a guard with
//! [`lock`](Generic::lock) (or [`lock_mut`](Generic::lock_mut) for mutable tuples) and work
//! through it.
//!
//! # Examples
//!
//! ```
//! use std::{sync::Arc, thread};
//! use tuplet::MutableGeneric;
//!
//! let shared = Arc::new(MutableGeneric::of_mutable(vec![0; 4]));
//! let handles = (0..4)
//!     .map(|index| {
//!         let shared = shared.clone();
//!         thread::spawn(move || shared.set(index, index * 10))
//!     })
//!     .collect::<Vec<_>>();
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), Ok(0));
//! }
//! assert_eq!(shared.to_vec(), vec![0, 10, 20, 30]);
//! ```

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    iter::FromIterator,
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
    ptr,
    sync::{LockResult, Mutex, MutexGuard, PoisonError},
};

use crate::{
    format,
    structural::{self, Render},
    Fixed, Mode, Mutable, TupleError,
};

/// An ordered sequence of slots of one type, whose length is fixed at construction.
///
/// Unlike the fixed-arity tuples, a `Generic` synchronizes internally: a mutable `Generic` can be
/// written through a shared reference, so it can be shared between threads behind an
/// [`Arc`](std::sync::Arc) without further locking.
///
/// Two `Generic`s of different lengths are never equal, and are ordered by length alone: see
/// [`compare_to`](Generic::compare_to).
#[derive(Derivative)]
#[derivative(Default(bound = ""))]
pub struct Generic<T, M = Fixed> {
    slots: Mutex<Vec<T>>,
    mode: PhantomData<fn() -> M>,
}

/// A [`Generic`] whose slots can be replaced after construction.
pub type MutableGeneric<T> = Generic<T, Mutable>;

/// A read-only view of all the slots of a [`Generic`], holding its lock until dropped.
#[derive(Derivative)]
#[derivative(Debug(bound = "T: Debug"))]
pub struct View<'a, T> {
    guard: MutexGuard<'a, Vec<T>>,
}

/// A read-write view of all the slots of a [`MutableGeneric`], holding its lock until dropped.
///
/// Slots can be replaced in place through the view, but the number of slots cannot change.
#[derive(Derivative)]
#[derivative(Debug(bound = "T: Debug"))]
pub struct ViewMut<'a, T> {
    guard: MutexGuard<'a, Vec<T>>,
}

impl<'a, T> Deref for View<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.guard
    }
}

impl<'a, T> Deref for ViewMut<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.guard
    }
}

impl<'a, T> DerefMut for ViewMut<'a, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.guard
    }
}

/// Recover the data behind a poisoned lock. No invariant spans more than one slot.
fn recover<G>(result: LockResult<G>) -> G {
    result.unwrap_or_else(|poisoned: PoisonError<G>| {
        tracing::warn!("recovering the slots of a poisoned Generic tuple");
        poisoned.into_inner()
    })
}

impl<T> Generic<T> {
    /// Construct an immutable `Generic` holding the given values, in order.
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        values.into_iter().collect()
    }

    /// Construct an immutable `Generic` with no slots.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl<T> Generic<T, Mutable> {
    /// Construct a [`MutableGeneric`] holding the given values, in order.
    pub fn of_mutable(values: impl IntoIterator<Item = T>) -> Self {
        values.into_iter().collect()
    }

    /// Replace the slot at `index`, returning its previous value.
    ///
    /// # Errors
    ///
    /// Fails with [`TupleError::IndexOutOfBounds`] if there is no slot at `index`.
    pub fn set(&self, index: usize, value: T) -> Result<T, TupleError> {
        let mut slots = self.guard();
        let len = slots.len();
        let slot = slots
            .get_mut(index)
            .ok_or(TupleError::IndexOutOfBounds { index, len })?;
        Ok(mem::replace(slot, value))
    }

    /// Lock the tuple for a sequence of reads and writes.
    ///
    /// Every other operation on this tuple blocks until the returned view is dropped, including
    /// operations on the same thread: the lock is not reentrant, so while holding the view, work
    /// only through it. Calling `len`, `get`, `==` or any other method of this tuple meanwhile
    /// deadlocks.
    pub fn lock_mut(&self) -> ViewMut<'_, T> {
        ViewMut {
            guard: self.guard(),
        }
    }
}

impl<T, M: Mode> Generic<T, M> {
    fn guard(&self) -> MutexGuard<'_, Vec<T>> {
        recover(self.slots.lock())
    }

    /// Run `f` with the slots of both `self` and `other`, holding both locks.
    ///
    /// Locks are always taken in address order, so concurrent calls with the arguments swapped
    /// cannot deadlock; `self` and `other` being the same tuple locks it once.
    fn with_both<R>(&self, other: &Self, f: impl FnOnce(&[T], &[T]) -> R) -> R {
        if ptr::eq(self, other) {
            let slots = self.guard();
            return f(slots.as_slice(), slots.as_slice());
        }
        let (mine, theirs) = if (self as *const Self) < (other as *const Self) {
            let mine = self.guard();
            (mine, other.guard())
        } else {
            let theirs = other.guard();
            (self.guard(), theirs)
        };
        f(mine.as_slice(), theirs.as_slice())
    }

    /// The number of slots, fixed at construction.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Whether there are no slots at all.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Whether the slots of this tuple can be replaced.
    pub fn is_mutable(&self) -> bool {
        M::MUTABLE
    }

    /// A copy of the value at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`TupleError::IndexOutOfBounds`] if there is no slot at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplet::{Generic, TupleError};
    ///
    /// let generic = Generic::of(["x", "y", "z"]);
    /// assert_eq!(generic.get(2), Ok("z"));
    /// assert_eq!(
    ///     generic.get(3),
    ///     Err(TupleError::IndexOutOfBounds { index: 3, len: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<T, TupleError>
    where
        T: Clone,
    {
        self.with(index, T::clone)
    }

    /// Apply `f` to the value at `index` while holding the lock, without copying the value.
    ///
    /// # Errors
    ///
    /// Fails with [`TupleError::IndexOutOfBounds`] if there is no slot at `index`, in which case
    /// `f` is not called.
    pub fn with<R>(&self, index: usize, f: impl FnOnce(&T) -> R) -> Result<R, TupleError> {
        let slots = self.guard();
        slots.get(index).map(f).ok_or(TupleError::IndexOutOfBounds {
            index,
            len: slots.len(),
        })
    }

    /// Lock the tuple for a sequence of reads which must observe the same state.
    ///
    /// Every other operation on this tuple blocks until the returned view is dropped, including
    /// operations on the same thread: the lock is not reentrant, so while holding the view, work
    /// only through it. Calling `len`, `get`, `==` or any other method of this tuple meanwhile
    /// deadlocks.
    ///
    /// ```
    /// use tuplet::Generic;
    ///
    /// let generic = Generic::of(vec![3, 1, 2]);
    /// let view = generic.lock();
    /// assert_eq!((view.len(), view.iter().max()), (3, Some(&3)));
    /// drop(view);
    /// assert_eq!(generic.len(), 3);
    /// ```
    pub fn lock(&self) -> View<'_, T> {
        View {
            guard: self.guard(),
        }
    }

    /// A copy of every slot, in order, taken atomically.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.guard().clone()
    }

    /// Consume the tuple, returning its slots.
    pub fn into_inner(self) -> Vec<T> {
        recover(self.slots.into_inner())
    }

    /// Convert into the immutable profile, keeping every slot.
    pub fn freeze(self) -> Generic<T> {
        Generic {
            slots: self.slots,
            mode: PhantomData,
        }
    }

    /// Convert into the mutable profile, keeping every slot.
    pub fn into_mutable(self) -> MutableGeneric<T> {
        Generic {
            slots: self.slots,
            mode: PhantomData,
        }
    }

    /// Compare against another `Generic` of the same type.
    ///
    /// Returns [`i32::MAX`] when `other` is `None` or has fewer slots, and [`i32::MIN`] when
    /// `other` has more slots. Tuples of the same length are compared slot by slot, returning
    /// `-1`, `0` or `1` at the first difference.
    ///
    /// # Errors
    ///
    /// Fails with [`TupleError::Incomparable`] if the first two slots which are not equal have no
    /// ordering relative to each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplet::Generic;
    ///
    /// let short = Generic::of([1, 2]);
    /// let long = Generic::of([0, 0, 0]);
    /// assert_eq!(short.compare_to(Some(&long)), Ok(i32::MIN));
    /// assert_eq!(long.compare_to(Some(&short)), Ok(i32::MAX));
    /// assert_eq!(short.compare_to(None), Ok(i32::MAX));
    /// assert_eq!(short.compare_to(Some(&Generic::of([1, 3]))), Ok(-1));
    /// ```
    pub fn compare_to(&self, other: Option<&Self>) -> Result<i32, TupleError>
    where
        T: PartialOrd,
    {
        match other {
            None => Ok(structural::NONE_SENTINEL),
            Some(other) => self.with_both(other, structural::compare_sequences),
        }
    }

    /// Slot-wise equality against another `Generic` of the same type. Nothing is equal to `None`.
    pub fn equals(&self, other: Option<&Self>) -> bool
    where
        T: PartialEq,
    {
        structural::equals(self, other)
    }

    /// Render the slots through a template. See [`format`](crate::format) for the template
    /// language.
    ///
    /// # Errors
    ///
    /// Fails with [`TupleError::Format`] if the template is malformed or refers to a slot past
    /// the end.
    pub fn to_string_with(&self, template: &str) -> Result<String, TupleError>
    where
        T: Render,
    {
        let slots = self.guard();
        let slots = slots.iter().map(|slot| slot as &dyn Render).collect::<Vec<_>>();
        format::render(template, &slots)
    }
}

impl<T, M: Mode> From<Vec<T>> for Generic<T, M> {
    fn from(slots: Vec<T>) -> Self {
        Generic {
            slots: Mutex::new(slots),
            mode: PhantomData,
        }
    }
}

impl<T, M: Mode> From<Generic<T, M>> for Vec<T> {
    fn from(generic: Generic<T, M>) -> Self {
        generic.into_inner()
    }
}

impl<T, M: Mode> FromIterator<T> for Generic<T, M> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Generic::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone, M: Mode> Clone for Generic<T, M> {
    fn clone(&self) -> Self {
        Generic::from(self.to_vec())
    }
}

impl<T: PartialEq, M: Mode> PartialEq for Generic<T, M> {
    fn eq(&self, other: &Self) -> bool {
        self.with_both(other, |mine, theirs| mine == theirs)
    }
}

impl<T: Eq, M: Mode> Eq for Generic<T, M> {}

impl<T: PartialOrd, M: Mode> PartialOrd for Generic<T, M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(Some(other))
            .ok()
            .map(|outcome| outcome.cmp(&0))
    }
}

impl<T: Ord, M: Mode> Ord for Generic<T, M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.with_both(other, |mine, theirs| {
            mine.len()
                .cmp(&theirs.len())
                .then_with(|| mine.cmp(theirs))
        })
    }
}

impl<T: Hash, M: Mode> Hash for Generic<T, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.guard().as_slice().hash(state)
    }
}

impl<T: Debug, M: Mode> Debug for Generic<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if M::MUTABLE {
            "MutableGeneric"
        } else {
            "Generic"
        };
        let slots = self.guard();
        f.debug_tuple(name).field(&slots.as_slice()).finish()
    }
}

impl<T: Render, M: Mode> Display for Generic<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.guard();
        let slots = slots.iter().map(|slot| slot as &dyn Render).collect::<Vec<_>>();
        structural::write_slots(f, &slots)
    }
}

impl<T: Render, M: Mode> Render for Generic<T, M> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, M: Mode> serde::Serialize for Generic<T, M> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(self.guard().as_slice(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>, M: Mode> serde::Deserialize<'de> for Generic<T, M> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Generic::from)
    }
}
