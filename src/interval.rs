use crate::comparator::{Comparator, NaturalOrder};
use crate::relation::Relation;
use std::cmp::Ordering;
use std::fmt;
#[cfg(feature="serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// A closed range `[lo, hi]`, with `lo <= hi` under the comparator the
/// interval was built with.
///
/// Intervals built with [`Interval::new_by`] must be related and compared with
/// the same comparator. For types implementing [`Ord`], the comparator-free
/// methods use [`NaturalOrder`].
///
/// `==` and [`Hash`] compare the endpoints structurally. An
/// [`IntervalTree`](crate::IntervalTree) keys intervals with
/// [`Interval::cmp_by`] instead, so under a custom comparator two intervals
/// can be `!=` yet be the same tree key.
///
/// With the `serde` feature, deserializing requires `T: Ord` and swaps the
/// endpoints when they arrive out of order.
#[cfg_attr(feature="serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lo: T,
    hi: T,
}

impl<T> Interval<T> {
    /// Creates the interval spanning `a` and `b` in either order.
    ///
    /// ```
    /// use closed_interval_tree::Interval;
    ///
    /// let interval = Interval::new(4, 1);
    /// assert_eq!((interval.low_endpoint(), interval.high_endpoint()), (&1, &4));
    /// ```
    pub fn new(a: T, b: T) -> Interval<T>
    where
        T: Ord,
    {
        Interval::new_by(a, b, &NaturalOrder)
    }

    /// Creates the interval spanning `a` and `b`, swapping them if `cmp` puts
    /// `a` after `b`.
    pub fn new_by<C>(a: T, b: T, cmp: &C) -> Interval<T>
    where
        C: Comparator<T> + ?Sized,
    {
        match cmp.compare(&a, &b) {
            Ordering::Greater => Interval { lo: b, hi: a },
            _ => Interval { lo: a, hi: b },
        }
    }

    pub fn low_endpoint(&self) -> &T {
        &self.lo
    }

    pub fn high_endpoint(&self) -> &T {
        &self.hi
    }

    pub fn into_endpoints(self) -> (T, T) {
        (self.lo, self.hi)
    }

    /// Whether the interval is a single point, i.e. `lo == hi`. A closed
    /// interval always holds at least one point, so this never means "no
    /// points".
    pub fn is_empty(&self) -> bool
    where
        T: Ord,
    {
        self.is_empty_by(&NaturalOrder)
    }

    pub fn is_empty_by<C>(&self, cmp: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        cmp.compare(&self.lo, &self.hi) == Ordering::Equal
    }

    /// Relation of `self` to `other`.
    ///
    /// ```
    /// use closed_interval_tree::{Interval, Relation};
    ///
    /// let x = Interval::new(1, 5);
    /// let y = Interval::new(5, 10);
    /// assert_eq!(x.relate(&y), Relation::Meets);
    /// assert_eq!(y.relate(&x), Relation::MetBy);
    /// ```
    pub fn relate(&self, other: &Interval<T>) -> Relation
    where
        T: Ord,
    {
        self.relate_by(other, &NaturalOrder)
    }

    pub fn relate_by<C>(&self, other: &Interval<T>, cmp: &C) -> Relation
    where
        C: Comparator<T> + ?Sized,
    {
        let aa = cmp.compare(&self.lo, &other.lo);
        let bb = cmp.compare(&self.hi, &other.hi);
        let ba = cmp.compare(&self.hi, &other.lo);
        let ab = cmp.compare(&self.lo, &other.hi);

        Relation::classify(aa, bb, ba, ab)
    }

    /// Whether the intervals share a point. Touching endpoints overlap.
    pub fn overlaps(&self, other: &Interval<T>) -> bool
    where
        T: Ord,
    {
        self.overlaps_by(other, &NaturalOrder)
    }

    pub fn overlaps_by<C>(&self, other: &Interval<T>, cmp: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        self.relate_by(other, cmp).is_overlap()
    }

    /// Lexicographic comparison by `(lo, hi)`.
    pub fn cmp_by<C>(&self, other: &Interval<T>, cmp: &C) -> Ordering
    where
        C: Comparator<T> + ?Sized,
    {
        cmp.compare(&self.lo, &other.lo)
            .then_with(|| cmp.compare(&self.hi, &other.hi))
    }
}

impl<T: Ord> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Interval<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by(other, &NaturalOrder)
    }
}

/// Wire form of an [`Interval`], before its endpoints are ordered.
#[cfg(feature="serde")]
#[derive(Deserialize)]
#[serde(rename = "Interval")]
pub(crate) struct RawInterval<T> {
    pub lo: T,
    pub hi: T,
}

#[cfg(feature="serde")]
impl<'de, T> Deserialize<'de> for Interval<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawInterval { lo, hi } = RawInterval::deserialize(deserializer)?;
        Ok(Interval::new(lo, hi))
    }
}

impl<T> fmt::Display for Interval<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::ReverseOrder;
    use std::time::{Duration, SystemTime};

    #[test]
    fn new_orders_endpoints() {
        let ints = Interval::new(1, 4);
        assert_eq!(ints.into_endpoints(), (1, 4));
        let ints = Interval::new(4, 1);
        assert_eq!(ints.into_endpoints(), (1, 4));

        let strings = Interval::new("defg", "abc");
        assert_eq!(strings.low_endpoint(), &"abc");
        assert_eq!(strings.high_endpoint(), &"defg");

        let yesterday = SystemTime::now() - Duration::from_secs(86_400);
        let today = SystemTime::now();
        let dates = Interval::new(today, yesterday);
        assert_eq!(dates.into_endpoints(), (yesterday, today));
    }

    #[test]
    fn new_by_uses_one_comparison() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let counting = |a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        };
        let interval = Interval::new_by(9, 2, &counting);
        assert_eq!(interval.into_endpoints(), (2, 9));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn new_by_respects_comparator() {
        let interval = Interval::new_by(1, 4, &ReverseOrder(NaturalOrder));
        assert_eq!(interval.into_endpoints(), (4, 1));
    }

    #[test]
    fn new_keeps_both_values() {
        for (a, b) in [(0, 0), (-3, 8), (8, -3), (i64::MIN, i64::MAX)] {
            let (lo, hi) = Interval::new(a, b).into_endpoints();
            assert!(lo <= hi);
            assert!((lo, hi) == (a, b) || (lo, hi) == (b, a));
        }
    }

    #[test]
    fn point_intervals_are_empty() {
        assert!(Interval::new(5, 5).is_empty());
        assert!(!Interval::new(5, 6).is_empty());
        assert!(Interval::new("a", "a").is_empty());

        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert!(Interval::new_by("ab", "cd", &by_len).is_empty_by(&by_len));
    }

    #[test]
    fn relations_against_fixed_interval() {
        let fixed = Interval::new(5, 10);
        let cases = [
            ((1, 3), Relation::Before),
            ((1, 5), Relation::Meets),
            ((1, 7), Relation::Overlaps),
            ((1, 10), Relation::FinishedBy),
            ((1, 15), Relation::Contains),
            ((5, 7), Relation::Starts),
            ((5, 10), Relation::Equal),
            ((5, 15), Relation::StartedBy),
            ((7, 9), Relation::During),
            ((7, 10), Relation::Finishes),
            ((8, 15), Relation::OverlappedBy),
            ((10, 15), Relation::MetBy),
            ((13, 17), Relation::After),
        ];

        for ((lo, hi), expected) in cases {
            let x = Interval::new(lo, hi);
            assert_eq!(x.relate(&fixed), expected, "{} vs {}", x, fixed);
            assert_eq!(fixed.relate(&x), expected.inverse(), "{} vs {}", fixed, x);
        }
    }

    #[test]
    fn relations_with_strings() {
        let x = Interval::new("apple", "melon");
        let y = Interval::new("kiwi", "zucchini");
        assert_eq!(x.relate(&y), Relation::Overlaps);
        assert_eq!(y.relate(&x), Relation::OverlappedBy);
    }

    #[test]
    fn degenerate_boundary_points_overlap() {
        let span = Interval::new(3, 7);
        let left = Interval::new(3, 3);
        let right = Interval::new(7, 7);

        assert_eq!(left.relate(&span), Relation::Overlaps);
        assert_eq!(right.relate(&span), Relation::OverlappedBy);
        assert_eq!(span.relate(&left), Relation::OverlappedBy);
        assert_eq!(span.relate(&right), Relation::Overlaps);
        assert_eq!(left.relate(&left), Relation::Overlaps);
    }

    #[test]
    fn relate_to_self_is_equal() {
        for (lo, hi) in [(0, 1), (-5, 5), (2, 40)] {
            let x = Interval::new(lo, hi);
            assert_eq!(x.relate(&x), Relation::Equal);
        }
    }

    #[test]
    fn relate_is_inverted_by_swapping() {
        let points = [0, 2, 4, 6];
        for &a in &points {
            for &b in &points {
                for &c in &points {
                    for &d in &points {
                        let x = Interval::new(a, b);
                        let y = Interval::new(c, d);
                        // A point against itself is Overlaps both ways.
                        if x == y && x.is_empty() {
                            continue;
                        }
                        assert_eq!(y.relate(&x), x.relate(&y).inverse(), "{} vs {}", x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn overlap_includes_meeting() {
        let x = Interval::new(1, 5);
        assert!(x.overlaps(&Interval::new(5, 9)));
        assert!(x.overlaps(&Interval::new(0, 1)));
        assert!(!x.overlaps(&Interval::new(6, 9)));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut intervals = vec![
            Interval::new(5, 8),
            Interval::new(0, 3),
            Interval::new(5, 6),
            Interval::new(2, 9),
        ];
        intervals.sort();
        assert_eq!(
            intervals,
            vec![
                Interval::new(0, 3),
                Interval::new(2, 9),
                Interval::new(5, 6),
                Interval::new(5, 8),
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Interval::new(7, 2).to_string(), "[2,7]");
    }

    #[test]
    fn equality_is_structural() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let x = Interval::new_by("ab", "cd", &by_len);
        let y = Interval::new_by("ef", "gh", &by_len);

        assert_eq!(x.cmp_by(&y, &by_len), Ordering::Equal);
        assert_ne!(x, y);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_orders_endpoints() {
        let interval: Interval<i32> = serde_json::from_str(r#"{"lo":10,"hi":2}"#).unwrap();
        assert_eq!(interval.into_endpoints(), (2, 10));

        let json = serde_json::to_string(&Interval::new(4, 9)).unwrap();
        assert_eq!(json, r#"{"lo":4,"hi":9}"#);
        let back: Interval<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Interval::new(4, 9));
    }
}
