use crate::comparator::Comparator;
use crate::interval::Interval;
use std::fmt;

/// Index of a node in the tree's arena.
pub(crate) type NodeId = usize;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<T> {
    pub key: Interval<T>,
    pub max: T, // Max high endpoint in this subtree.
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    // Lookup link only; the arena owns every node.
    pub parent: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(key: Interval<T>, parent: Option<NodeId>) -> Node<T>
    where
        T: Clone,
    {
        let max = key.high_endpoint().clone();

        Node {
            key,
            max,
            left: None,
            right: None,
            parent,
        }
    }

    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        self.left.into_iter().chain(self.right)
    }
}

/// Recomputes `nodes[id].max` from its own high endpoint and the maxima
/// already stored in its children.
pub(crate) fn refresh_max<T, C>(nodes: &mut [Node<T>], id: NodeId, cmp: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let node = &nodes[id];
    let mut max = node.key.high_endpoint();
    for child in node.children() {
        max = cmp.max_of(max, &nodes[child].max);
    }
    let max = max.clone();

    nodes[id].max = max;
}

/// Displays the subtree rooted at `id`.
pub(crate) struct Subtree<'a, T> {
    pub nodes: &'a [Node<T>],
    pub id: NodeId,
}

impl<T> fmt::Display for Subtree<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let node = &self.nodes[self.id];
        let child = |id| Subtree {
            nodes: self.nodes,
            id,
        };

        match (node.left, node.right) {
            (None, None) => write!(f, " {{ {} ({}) }} ", node.key, node.max),
            (None, Some(right)) => write!(
                f,
                " {{ {} ({}) right:{}}} ",
                node.key,
                node.max,
                child(right)
            ),
            (Some(left), None) => write!(
                f,
                " {{ {} ({}) left:{}}} ",
                node.key,
                node.max,
                child(left)
            ),
            (Some(left), Some(right)) => write!(
                f,
                " {{ {} ({}) left:{}right:{}}} ",
                node.key,
                node.max,
                child(left),
                child(right)
            ),
        }
    }
}
