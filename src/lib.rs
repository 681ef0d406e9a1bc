//! Closed intervals (`[lo, hi]`) over any totally ordered type, the thirteen
//! relations of Allen's interval algebra between two of them
//! ([`Relation`]), and an augmented interval tree ([`IntervalTree`]) that
//! answers "which stored intervals overlap this one?".
//!
//! The order on the endpoints is supplied by a [`Comparator`]. Types
//! implementing [`Ord`] can use the comparator-free constructors and methods,
//! which go through [`NaturalOrder`]; any closure `Fn(&T, &T) -> Ordering` works
//! as a comparator for everything else.
//!
//! ```
//! use closed_interval_tree::{Interval, IntervalTree, Relation};
//!
//! let x = Interval::new(1, 7);
//! let y = Interval::new(10, 5);
//! assert_eq!(x.relate(&y), Relation::Overlaps);
//!
//! let mut tree = IntervalTree::new(y);
//! tree.insert(x);
//! tree.insert(Interval::new(12, 14));
//! assert_eq!(tree.search_overlaps(&Interval::new(6, 9)), vec![x, y]);
//! ```
//!
//! The tree is an unbalanced binary search tree ordered by `(lo, hi)`, in the
//! spirit of Cormen et al. (2009, Section 14.3: Interval trees). It never
//! removes intervals.

/// Caller-supplied orderings.
pub mod comparator;
/// Closed intervals and the relation classifier.
pub mod interval;
/// An interval tree implemented with a binary search tree.
pub mod interval_tree;
mod node;
/// Allen's interval relations.
pub mod relation;

pub use comparator::{Comparator, NaturalOrder, ReverseOrder};
pub use interval::Interval;
pub use interval_tree::IntervalTree;
pub use relation::Relation;
