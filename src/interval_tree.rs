use crate::comparator::{Comparator, NaturalOrder};
use crate::interval::Interval;
use crate::node::{refresh_max, Node, NodeId, Subtree};
use log::trace;
use std::cmp::Ordering;
use std::fmt;

// Nodes never move and the tree is never rebalanced, so the first node stays the root.
const ROOT: NodeId = 0;

/// An augmented binary search tree of closed intervals.
///
/// Intervals are ordered by `(low, high)` and stored at most once. Every node
/// also records the largest high endpoint found in its subtree, which lets
/// [`IntervalTree::search_overlaps`] skip subtrees lying entirely below the
/// query.
///
/// The tree is not balanced: its shape, and therefore its height, depends on
/// the insertion order. A tree always holds at least the interval it was
/// created with.
///
/// ```
/// use closed_interval_tree::{Interval, IntervalTree};
///
/// let mut tree = IntervalTree::new(Interval::new(16, 21));
/// tree.insert(Interval::new(8, 9));
/// tree.insert(Interval::new(5, 8));
/// tree.insert(Interval::new(25, 30));
///
/// assert_eq!(
///     tree.search_overlaps(&Interval::new(4, 10)),
///     vec![Interval::new(5, 8), Interval::new(8, 9)]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct IntervalTree<T, C = NaturalOrder> {
    nodes: Vec<Node<T>>,
    cmp: C,
}

impl<T> IntervalTree<T, NaturalOrder>
where
    T: Ord + Clone,
{
    /// Creates a tree holding `initial`, ordered by `T`'s [`Ord`] implementation.
    pub fn new(initial: Interval<T>) -> IntervalTree<T, NaturalOrder> {
        IntervalTree::with_comparator(initial, NaturalOrder)
    }
}

impl<T, C> IntervalTree<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    /// Creates a tree holding `initial`, ordered by `cmp`. Every interval
    /// inserted into or searched for in this tree must have been built with
    /// the same ordering.
    pub fn with_comparator(initial: Interval<T>, cmp: C) -> IntervalTree<T, C> {
        IntervalTree {
            nodes: vec![Node::new(initial, None)],
            cmp,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Number of intervals stored, at least 1.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its initial interval.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Largest high endpoint stored in the tree.
    pub fn max_endpoint(&self) -> &T {
        &self.nodes[ROOT].max
    }

    /// Inserts `interval` unless an interval with the same endpoints is
    /// already stored. Returns whether a node was created.
    ///
    /// The subtree maxima of every ancestor of the new node are recomputed.
    pub fn insert(&mut self, interval: Interval<T>) -> bool {
        let mut current = ROOT;
        let mut depth = 0;

        let (parent, side) = loop {
            let node = &self.nodes[current];
            let side = interval.cmp_by(&node.key, &self.cmp);
            let next = match side {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    trace!("interval tree: duplicate of node {} ignored", current);
                    return false;
                }
            };

            match next {
                Some(child) => {
                    current = child;
                    depth += 1;
                }
                None => break (current, side),
            }
        };

        let id = self.nodes.len();
        self.nodes.push(Node::new(interval, Some(parent)));
        if side == Ordering::Less {
            self.nodes[parent].left = Some(id);
        } else {
            self.nodes[parent].right = Some(id);
        }
        trace!("interval tree: node {} attached at depth {}", id, depth + 1);

        let mut ancestor = Some(parent);
        while let Some(ancestor_id) = ancestor {
            refresh_max(&mut self.nodes, ancestor_id, &self.cmp);
            ancestor = self.nodes[ancestor_id].parent;
        }

        true
    }

    /// Whether an interval with exactly these endpoints is stored.
    pub fn contains(&self, interval: &Interval<T>) -> bool {
        let mut current = Some(ROOT);
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match interval.cmp_by(&node.key, &self.cmp) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Returns the stored intervals overlapping `query`, in ascending
    /// `(low, high)` order. Touching endpoints count as overlapping.
    ///
    /// A subtree is skipped when its largest high endpoint lies below
    /// `query`. A node's right subtree is also skipped when `query` ends
    /// before the largest high endpoint of the node's own subtree; when the
    /// query reaches the tree's [`max_endpoint`](Self::max_endpoint), the
    /// search is exhaustive.
    pub fn search_overlaps(&self, query: &Interval<T>) -> Vec<Interval<T>> {
        let mut hits = Vec::new();
        let mut visited = 0;
        self.search_overlaps_at(ROOT, query, &mut hits, &mut visited);
        trace!(
            "interval tree: search visited {} of {} nodes, {} overlapping",
            visited,
            self.nodes.len(),
            hits.len()
        );

        hits
    }

    fn search_overlaps_at(
        &self,
        id: NodeId,
        query: &Interval<T>,
        hits: &mut Vec<Interval<T>>,
        visited: &mut usize,
    ) {
        let node = &self.nodes[id];
        if self.cmp.compare(query.low_endpoint(), &node.max) == Ordering::Greater {
            return;
        }
        *visited += 1;

        if let Some(left) = node.left {
            self.search_overlaps_at(left, query, hits, visited);
        }

        if node.key.overlaps_by(query, &self.cmp) {
            hits.push(node.key.clone());
        }

        if self.cmp.compare(query.high_endpoint(), &node.max) == Ordering::Less {
            return;
        }

        if let Some(right) = node.right {
            self.search_overlaps_at(right, query, hits, visited);
        }
    }
}

impl<T, C> IntervalTree<T, C> {
    /// Iterates over the stored intervals in ascending `(low, high)` order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(Some(ROOT));

        iter
    }

    /// Iterates in pre-order: every interval comes before its descendants, so
    /// inserting them in this order rebuilds the same tree shape.
    pub fn iter_preorder(&self) -> impl Iterator<Item = &Interval<T>> + '_ {
        let mut stack = vec![ROOT];
        std::iter::from_fn(move || {
            let node = &self.nodes[stack.pop()?];
            stack.extend(node.right);
            stack.extend(node.left);
            Some(&node.key)
        })
    }
}

impl<'a, T, C> IntoIterator for &'a IntervalTree<T, C> {
    type Item = &'a Interval<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// In-order iterator over an [`IntervalTree`].
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    stack: Vec<NodeId>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.nodes[id].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Interval<T>;

    fn next(&mut self) -> Option<&'a Interval<T>> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        self.push_left_spine(nodes[id].right);

        Some(&nodes[id].key)
    }
}

impl<T, C> fmt::Display for IntervalTree<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let root = Subtree {
            nodes: &self.nodes,
            id: ROOT,
        };
        fmt::Display::fmt(&root, f)
    }
}

#[cfg(feature="serde")]
mod serde_impl {
    use super::IntervalTree;
    use crate::comparator::Comparator;
    use crate::interval::{Interval, RawInterval};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialized as its intervals in pre-order, which re-inserted in sequence
    /// give back the same shape.
    impl<T, C> Serialize for IntervalTree<T, C>
    where
        T: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter_preorder())
        }
    }

    /// Endpoints are re-ordered under `C::default()`, the comparator the
    /// rebuilt tree uses.
    impl<'de, T, C> Deserialize<'de> for IntervalTree<T, C>
    where
        T: Deserialize<'de> + Clone,
        C: Comparator<T> + Default,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let mut intervals = Vec::<RawInterval<T>>::deserialize(deserializer)?.into_iter();
            let RawInterval { lo, hi } = intervals
                .next()
                .ok_or_else(|| D::Error::invalid_length(0, &"at least one interval"))?;

            let cmp = C::default();
            let initial = Interval::new_by(lo, hi, &cmp);
            let mut tree = IntervalTree::with_comparator(initial, cmp);
            for RawInterval { lo, hi } in intervals {
                let interval = Interval::new_by(lo, hi, tree.comparator());
                tree.insert(interval);
            }

            Ok(tree)
        }
    }
}
