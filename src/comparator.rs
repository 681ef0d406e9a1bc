use std::cmp::Ordering;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

/// A strict total order over values of type `T`.
///
/// Implementations must be antisymmetric, transitive and total. This is not
/// checked: a comparator breaking these rules makes [`crate::Relation::NoRel`]
/// reachable and silently corrupts tree ordering.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use closed_interval_tree::Interval;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// let interval = Interval::new_by("abcd", "ab", &by_len);
/// assert_eq!(interval.low_endpoint(), &"ab");
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns whichever of `a` and `b` is greater, preferring `a` on ties.
    fn max_of<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        match self.compare(b, a) {
            Ordering::Greater => b,
            _ => a,
        }
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The comparator given by `T`'s [`Ord`] implementation.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order of the wrapped comparator.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder<C>(pub C);

impl<T: ?Sized, C> Comparator<T> for ReverseOrder<C>
where
    C: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
