use crate::{BoundNode, Node};

/// A fully bound triple of the virtual graph.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Triple {
    pub subject: BoundNode,
    pub predicate: BoundNode,
    pub object: BoundNode,
}

impl Triple {
    pub fn new(
        subject: impl Into<BoundNode>,
        predicate: impl Into<BoundNode>,
        object: impl Into<BoundNode>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// A triple in which any position may be [`Node::Unbound`].
#[derive(Clone, PartialEq, Debug)]
pub struct TriplePattern {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
}

impl TriplePattern {
    pub fn new(
        subject: impl Into<Node>,
        predicate: impl Into<Node>,
        object: impl Into<Node>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// The pattern that matches every triple.
    pub fn any() -> Self {
        Self::new(Node::Unbound, Node::Unbound, Node::Unbound)
    }

    /// Returns which positions of the pattern are bound.
    pub fn shape(&self) -> PatternShape {
        PatternShape {
            subject: self.subject.is_bound(),
            predicate: self.predicate.is_bound(),
            object: self.object.is_bound(),
        }
    }

    /// Returns whether `triple` is an instance of this pattern.
    pub fn matches(&self, triple: &Triple) -> bool {
        fn position_matches(pattern: &Node, node: &BoundNode) -> bool {
            match pattern {
                Node::Unbound => true,
                Node::Bound(bound) => bound == node,
            }
        }

        position_matches(&self.subject, &triple.subject)
            && position_matches(&self.predicate, &triple.predicate)
            && position_matches(&self.object, &triple.object)
    }
}

impl From<Triple> for TriplePattern {
    fn from(value: Triple) -> Self {
        Self::new(value.subject, value.predicate, value.object)
    }
}

/// The bound/unbound combination of a [`TriplePattern`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct PatternShape {
    pub subject: bool,
    pub predicate: bool,
    pub object: bool,
}

impl std::fmt::Display for PatternShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = |bound: bool, name: &'static str| if bound { name } else { "?" };
        write!(
            f,
            "{} {} {}",
            position(self.subject, "s"),
            position(self.predicate, "p"),
            position(self.object, "o")
        )
    }
}
