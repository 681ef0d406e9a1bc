use std::cmp::Ordering;
use std::fmt;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

/// The relation between an interval `x` and an interval `y`, following
/// Allen's interval algebra.
///
/// The diagrams show `x` on the top line and `y` below it.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Unreachable with a valid total order.
    NoRel,
    /// ```text
    /// [x]
    ///     [y]
    /// ```
    Before,
    /// ```text
    /// [x]
    ///   [y]
    /// ```
    Meets,
    /// ```text
    /// [ x ]
    ///   [ y ]
    /// ```
    Overlaps,
    /// ```text
    /// [  x  ]
    ///   [ y ]
    /// ```
    FinishedBy,
    /// ```text
    /// [   x   ]
    ///   [ y ]
    /// ```
    Contains,
    /// ```text
    /// [ x ]
    /// [   y   ]
    /// ```
    Starts,
    /// ```text
    /// [ x ]
    /// [ y ]
    /// ```
    Equal,
    /// ```text
    /// [   x   ]
    /// [ y ]
    /// ```
    StartedBy,
    /// ```text
    ///   [ x ]
    /// [   y   ]
    /// ```
    During,
    /// ```text
    ///     [ x ]
    /// [   y   ]
    /// ```
    Finishes,
    /// ```text
    ///   [ x ]
    /// [ y ]
    /// ```
    OverlappedBy,
    /// ```text
    ///   [x]
    /// [y]
    /// ```
    MetBy,
    /// ```text
    ///     [x]
    /// [y]
    /// ```
    After,
}

impl Relation {
    /// The thirteen proper relations, in declaration order.
    pub const ALL: [Relation; 13] = [
        Relation::Before,
        Relation::Meets,
        Relation::Overlaps,
        Relation::FinishedBy,
        Relation::Contains,
        Relation::Starts,
        Relation::Equal,
        Relation::StartedBy,
        Relation::During,
        Relation::Finishes,
        Relation::OverlappedBy,
        Relation::MetBy,
        Relation::After,
    ];

    /// Classifies `x` against `y` from the four endpoint comparisons
    /// `aa = x.lo ? y.lo`, `bb = x.hi ? y.hi`, `ba = x.hi ? y.lo` and
    /// `ab = x.lo ? y.hi`.
    ///
    /// A point interval sitting on a boundary of the other interval is
    /// reported as `Overlaps`/`OverlappedBy` rather than as meeting it.
    pub(crate) fn classify(aa: Ordering, bb: Ordering, ba: Ordering, ab: Ordering) -> Relation {
        use std::cmp::Ordering::*;

        match (aa, bb, ba, ab) {
            (_, _, Less, _) => Relation::Before,
            (Less, Less, Equal, _) => Relation::Meets,
            (_, _, Equal, _) => Relation::Overlaps,
            (Greater, Greater, _, Equal) => Relation::MetBy,
            (_, _, _, Equal) => Relation::OverlappedBy,
            (_, _, _, Greater) => Relation::After,
            (Less, Less, _, _) => Relation::Overlaps,
            (Less, Equal, _, _) => Relation::FinishedBy,
            (Less, Greater, _, _) => Relation::Contains,
            (Equal, Less, _, _) => Relation::Starts,
            (Equal, Equal, _, _) => Relation::Equal,
            (Equal, Greater, _, _) => Relation::StartedBy,
            (Greater, Less, _, _) => Relation::During,
            (Greater, Equal, _, _) => Relation::Finishes,
            (Greater, Greater, _, _) => Relation::OverlappedBy,
        }
    }

    /// The relation of `y` to `x` when `self` is the relation of `x` to `y`.
    pub fn inverse(self) -> Relation {
        use Relation::*;

        match self {
            NoRel => NoRel,
            Before => After,
            Meets => MetBy,
            Overlaps => OverlappedBy,
            FinishedBy => Finishes,
            Contains => During,
            Starts => StartedBy,
            Equal => Equal,
            StartedBy => Starts,
            During => Contains,
            Finishes => FinishedBy,
            OverlappedBy => Overlaps,
            MetBy => Meets,
            After => Before,
        }
    }

    /// Whether the two intervals share at least one point. `Meets` and
    /// `MetBy` count as overlapping.
    pub fn is_overlap(self) -> bool {
        !matches!(self, Relation::NoRel | Relation::Before | Relation::After)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Relation::*;

        let name = match self {
            NoRel => "no relation",
            Before => "before",
            Meets => "meets",
            Overlaps => "overlaps",
            FinishedBy => "finished by",
            Contains => "contains",
            Starts => "starts",
            Equal => "equal",
            StartedBy => "started by",
            During => "during",
            Finishes => "finishes",
            OverlappedBy => "overlapped by",
            MetBy => "met by",
            After => "after",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering::{Equal, Greater, Less};

    #[test]
    fn inverse_is_an_involution() {
        for rel in Relation::ALL {
            assert_eq!(rel.inverse().inverse(), rel);
        }
        assert_eq!(Relation::NoRel.inverse(), Relation::NoRel);
        assert_eq!(Relation::Equal.inverse(), Relation::Equal);
        assert_eq!(Relation::Contains.inverse(), Relation::During);
    }

    #[test]
    fn overlap_excludes_disjoint_relations() {
        let disjoint: Vec<_> = Relation::ALL
            .into_iter()
            .filter(|rel| !rel.is_overlap())
            .collect();
        assert_eq!(disjoint, vec![Relation::Before, Relation::After]);
        assert!(!Relation::NoRel.is_overlap());
        assert!(Relation::Meets.is_overlap());
        assert!(Relation::MetBy.is_overlap());
    }

    #[test]
    fn boundary_point_is_not_meets() {
        // [3,3] against [3,7]
        assert_eq!(
            Relation::classify(Equal, Less, Equal, Less),
            Relation::Overlaps
        );
        // [7,7] against [3,7]
        assert_eq!(
            Relation::classify(Greater, Equal, Greater, Equal),
            Relation::OverlappedBy
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(Relation::FinishedBy.to_string(), "finished by");
        assert_eq!(Relation::NoRel.to_string(), "no relation");
    }
}
