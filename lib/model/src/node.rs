use crate::{AttributeId, ClassId, Datatype, Instance, Literal, Vocabulary};

/// A bound RDF term of the virtual graph.
///
/// Schema entities are referenced by id, so a bound node is only meaningful together with the
/// schema it was produced from. Two bound nodes are equal iff they are the same variant and
/// denote the same entity; instances compare by IRI and literals by value (see [`Literal`]).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum BoundNode {
    Vocabulary(Vocabulary),
    Class(ClassId),
    Datatype(Datatype),
    Attribute(AttributeId),
    Instance(Instance),
    Literal(Literal),
}

impl BoundNode {
    pub fn as_class(&self) -> Option<ClassId> {
        match self {
            BoundNode::Class(class) => Some(*class),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<AttributeId> {
        match self {
            BoundNode::Attribute(attribute) => Some(*attribute),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            BoundNode::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, BoundNode::Class(_))
    }

    pub fn is_attribute(&self) -> bool {
        matches!(self, BoundNode::Attribute(_))
    }

    pub fn is_instance(&self) -> bool {
        matches!(self, BoundNode::Instance(_))
    }
}

impl From<Vocabulary> for BoundNode {
    fn from(value: Vocabulary) -> Self {
        BoundNode::Vocabulary(value)
    }
}

impl From<ClassId> for BoundNode {
    fn from(value: ClassId) -> Self {
        BoundNode::Class(value)
    }
}

impl From<Datatype> for BoundNode {
    fn from(value: Datatype) -> Self {
        BoundNode::Datatype(value)
    }
}

impl From<AttributeId> for BoundNode {
    fn from(value: AttributeId) -> Self {
        BoundNode::Attribute(value)
    }
}

impl From<Instance> for BoundNode {
    fn from(value: Instance) -> Self {
        BoundNode::Instance(value)
    }
}

impl From<Literal> for BoundNode {
    fn from(value: Literal) -> Self {
        BoundNode::Literal(value)
    }
}

/// A position of a [`TriplePattern`](crate::TriplePattern): either a wildcard or a bound term.
///
/// [`Node::Unbound`] is never equal to anything, not even to another unbound node.
#[derive(Clone, Debug)]
pub enum Node {
    Unbound,
    Bound(BoundNode),
}

impl Node {
    pub fn is_bound(&self) -> bool {
        matches!(self, Node::Bound(_))
    }

    pub fn as_bound(&self) -> Option<&BoundNode> {
        match self {
            Node::Unbound => None,
            Node::Bound(node) => Some(node),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Bound(lhs), Node::Bound(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

macro_rules! bound_node_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Node {
                fn from(value: $t) -> Self {
                    Node::Bound(value.into())
                }
            }
        )*
    };
}

bound_node_from!(BoundNode, Vocabulary, ClassId, Datatype, AttributeId, Instance, Literal);

impl From<Option<BoundNode>> for Node {
    fn from(value: Option<BoundNode>) -> Self {
        value.map_or(Node::Unbound, Node::Bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_is_never_equal() {
        assert_ne!(Node::Unbound, Node::Unbound);
        assert_ne!(Node::Unbound, Node::from(Vocabulary::RdfType));
    }

    #[test]
    fn test_variants_do_not_mix() {
        assert_ne!(
            BoundNode::Class(ClassId::new(0)),
            BoundNode::Attribute(AttributeId::new(0))
        );
        assert_eq!(
            Node::from(ClassId::new(1)),
            Node::Bound(BoundNode::Class(ClassId::new(1)))
        );
    }
}
