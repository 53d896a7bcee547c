use vgraph_model::{BoundNode, ClassId, Datatype};

/// A reference to a type of the schema: either a class or one of the primitive datatypes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeRef {
    Class(ClassId),
    Datatype(Datatype),
}

impl TypeRef {
    /// Returns the type a bound node denotes, if it denotes one.
    pub fn from_node(node: &BoundNode) -> Option<Self> {
        match node {
            BoundNode::Class(class) => Some(TypeRef::Class(*class)),
            BoundNode::Datatype(datatype) => Some(TypeRef::Datatype(*datatype)),
            _ => None,
        }
    }

    pub fn as_class(self) -> Option<ClassId> {
        match self {
            TypeRef::Class(class) => Some(class),
            TypeRef::Datatype(_) => None,
        }
    }
}

impl From<ClassId> for TypeRef {
    fn from(value: ClassId) -> Self {
        TypeRef::Class(value)
    }
}

impl From<Datatype> for TypeRef {
    fn from(value: Datatype) -> Self {
        TypeRef::Datatype(value)
    }
}

impl From<TypeRef> for BoundNode {
    fn from(value: TypeRef) -> Self {
        match value {
            TypeRef::Class(class) => BoundNode::Class(class),
            TypeRef::Datatype(datatype) => BoundNode::Datatype(datatype),
        }
    }
}
