//! The structural algorithms shared by every tuple type: lexicographic comparison, slot-wise
//! equality, and rendering.
//!
//! Tuple types do not implement these themselves. Each fixed-arity tuple hands its slots, in order,
//! to the functions here (as lazily evaluated per-slot outcomes for comparison and equality, and as
//! `&dyn Render` for rendering), and [`Generic`](crate::Generic) hands over its slices. That keeps
//! the behavior identical across arities.
//!
//! # Ordering of absent values
//!
//! A slot of type `Option<T>` is "nullable": `None` orders strictly before any `Some`, and two
//! `None`s are equal. This is exactly the standard ordering of [`Option`], so nullable slots need no
//! special treatment here.
//!
//! ```
//! use tuplet::Pair;
//!
//! assert!(Pair::of(None, 5) < Pair::of(Some(0), 0));
//! assert_eq!(Pair::of(None::<i32>, 1), Pair::of(None, 1));
//! ```
//!
//! When rendered, an absent value is written as [`NULL`]:
//!
//! ```
//! use tuplet::Pair;
//!
//! assert_eq!(Pair::of(None::<&str>, "v").to_string(), "(null, v)");
//! assert_eq!(Pair::of(Some("k"), "v").to_string(), "(k, v)");
//! ```

use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt::{self, Display},
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    num::{
        NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
    },
    rc::Rc,
    sync::Arc,
};

use crate::TupleError;

/// How an absent value renders.
pub const NULL: &str = "null";

/// The result of [`compare_to`] when there is nothing to compare against.
pub const NONE_SENTINEL: i32 = i32::MAX;

/// The result of comparing a sequence against a strictly shorter one.
pub const SHORTER_SENTINEL: i32 = i32::MAX;

/// The result of comparing a sequence against a strictly longer one.
pub const LONGER_SENTINEL: i32 = i32::MIN;

/// Fold per-slot comparisons left to right: the first outcome which is not
/// [`Equal`](Ordering::Equal) wins, and later slots are never compared.
pub fn lexicographic(comparisons: &[&dyn Fn() -> Ordering]) -> Ordering {
    for compare in comparisons {
        match compare() {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    Ordering::Equal
}

/// Like [`lexicographic`], but for partial orders: an incomparable slot makes the whole comparison
/// incomparable, unless an earlier slot already decided it.
pub fn partial_lexicographic(comparisons: &[&dyn Fn() -> Option<Ordering>]) -> Option<Ordering> {
    for compare in comparisons {
        match compare() {
            Some(Ordering::Equal) => continue,
            decided => return decided,
        }
    }
    Some(Ordering::Equal)
}

/// Slot-wise equality: every check must pass, and checking stops at the first failure.
pub fn all_equal(checks: &[&dyn Fn() -> bool]) -> bool {
    checks.iter().all(|check| check())
}

/// Convert an [`Ordering`] into the conventional `-1`/`0`/`1` integer form.
pub fn ordering_to_i32(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Compare against an optional other value, in integer form. `None` yields [`NONE_SENTINEL`]
/// regardless of `this`.
///
/// Note the asymmetry with [`equals`]: a tuple is never equal to `None`, yet it is not "less" than
/// it either.
pub fn compare_to<T: Ord + ?Sized>(this: &T, other: Option<&T>) -> i32 {
    match other {
        None => NONE_SENTINEL,
        Some(other) => ordering_to_i32(this.cmp(other)),
    }
}

/// Equality against an optional other value. Nothing is equal to `None`.
pub fn equals<T: PartialEq + ?Sized>(this: &T, other: Option<&T>) -> bool {
    match other {
        None => false,
        Some(other) => this == other,
    }
}

/// Compare two sequences in integer form.
///
/// Sequences of different lengths are not compared element-wise: against a shorter sequence the
/// result is [`SHORTER_SENTINEL`], and against a longer one [`LONGER_SENTINEL`]. Sequences of the
/// same length compare lexicographically, failing with [`TupleError::Incomparable`] at the first
/// position whose elements have no ordering.
pub fn compare_sequences<T: PartialOrd>(this: &[T], other: &[T]) -> Result<i32, TupleError> {
    match this.len().cmp(&other.len()) {
        Ordering::Greater => return Ok(SHORTER_SENTINEL),
        Ordering::Less => return Ok(LONGER_SENTINEL),
        Ordering::Equal => {}
    }
    for (index, (mine, theirs)) in this.iter().zip(other).enumerate() {
        match mine.partial_cmp(theirs) {
            Some(Ordering::Equal) => continue,
            Some(decided) => return Ok(ordering_to_i32(decided)),
            None => return Err(TupleError::Incomparable { index }),
        }
    }
    Ok(0)
}

/// A value which can fill a slot of a rendered tuple.
///
/// This is [`Display`] extended to absent values: `None` renders as [`NULL`], and `Some(value)` as
/// `value`. It is implemented for the standard library's displayable scalars and strings, for
/// references and smart pointers to renderable values, and for every tuple type. Any other
/// [`Display`] type renders through the [`Shown`] wrapper.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use tuplet::{structural::Shown, Triple};
///
/// let triple = Triple::of(Shown(Ipv4Addr::LOCALHOST), None::<u16>, Some(Shown('x')));
/// assert_eq!(triple.to_string(), "(127.0.0.1, null, x)");
/// ```
pub trait Render {
    /// Write the rendering of `self`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Renders any [`Display`] value exactly as its [`Display`] implementation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Shown<T>(pub T);

impl<T: Display> Render for Shown<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Display> Display for Shown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str(NULL),
        }
    }
}

macro_rules! render_as_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    Display::fmt(self, f)
                }
            }
        )*
    };
}

render_as_display!(
    bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64, NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, IpAddr, Ipv4Addr, Ipv6Addr,
    SocketAddr, SocketAddrV4, SocketAddrV6,
);

macro_rules! render_through_pointer {
    ($($pointer:ident),* $(,)?) => {
        $(
            impl<T: Render + ?Sized> Render for $pointer<T> {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).render(f)
                }
            }
        )*
    };
}

render_through_pointer!(Box, Rc, Arc);

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<B: Render + ToOwned + ?Sized> Render for Cow<'_, B> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

/// A [`Render`] value viewed through [`Display`].
#[derive(Clone, Copy)]
pub(crate) struct Rendered<'a>(pub(crate) &'a dyn Render);

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

/// Write slots in the default rendering, `(v1, v2, ..., vN)`, using each slot's own [`Render`].
pub fn write_slots(f: &mut fmt::Formatter<'_>, slots: &[&dyn Render]) -> fmt::Result {
    f.write_str("(")?;
    for (index, slot) in slots.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        slot.render(f)?;
    }
    f.write_str(")")
}
