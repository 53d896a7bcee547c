use crate::{ClassId, HostObject};
use oxrdf::{NamedNode, NamedNodeRef};
use std::hash::{Hash, Hasher};

/// A live host object exposed as an RDF resource.
///
/// Instances are created per query and never cached. Two instances are the same resource iff
/// their IRIs are equal; the class and the host handle do not take part in comparisons.
#[derive(Clone, Debug)]
pub struct Instance {
    iri: NamedNode,
    class: ClassId,
    object: HostObject,
}

impl Instance {
    pub fn new(iri: NamedNode, class: ClassId, object: HostObject) -> Self {
        Self { iri, class, object }
    }

    pub fn iri(&self) -> NamedNodeRef<'_> {
        self.iri.as_ref()
    }

    /// Returns the most specific declared class of this instance.
    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn object(&self) -> &HostObject {
        &self.object
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.iri == other.iri
    }
}

impl Eq for Instance {}

impl Hash for Instance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iri.hash(state);
    }
}
