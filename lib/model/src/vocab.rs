//! The fixed RDF(S) vocabulary exposed by the virtual graph.

use oxrdf::NamedNodeRef;

pub use oxrdf::vocab::{rdf, rdfs, xsd};

/// One of the seven vocabulary terms the triple templates are built from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Vocabulary {
    /// `rdf:type`
    RdfType,
    /// `rdf:Property`
    RdfProperty,
    /// `rdfs:subClassOf`
    RdfsSubClassOf,
    /// `rdfs:domain`
    RdfsDomain,
    /// `rdfs:range`
    RdfsRange,
    /// `rdfs:Class`
    RdfsClass,
    /// `rdfs:Resource`
    RdfsResource,
}

impl Vocabulary {
    /// All vocabulary terms in lookup order.
    pub const ALL: [Vocabulary; 7] = [
        Vocabulary::RdfType,
        Vocabulary::RdfProperty,
        Vocabulary::RdfsSubClassOf,
        Vocabulary::RdfsDomain,
        Vocabulary::RdfsRange,
        Vocabulary::RdfsClass,
        Vocabulary::RdfsResource,
    ];

    /// Returns the IRI of this term.
    pub fn iri(self) -> NamedNodeRef<'static> {
        match self {
            Vocabulary::RdfType => rdf::TYPE,
            Vocabulary::RdfProperty => rdf::PROPERTY,
            Vocabulary::RdfsSubClassOf => rdfs::SUB_CLASS_OF,
            Vocabulary::RdfsDomain => rdfs::DOMAIN,
            Vocabulary::RdfsRange => rdfs::RANGE,
            Vocabulary::RdfsClass => rdfs::CLASS,
            Vocabulary::RdfsResource => rdfs::RESOURCE,
        }
    }

    /// Returns the vocabulary term with the given IRI, if there is one.
    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|term| term.iri().as_str() == iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iris_are_bit_exact() {
        assert_eq!(
            Vocabulary::RdfType.iri().as_str(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
        );
        assert_eq!(
            Vocabulary::RdfProperty.iri().as_str(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property"
        );
        assert_eq!(
            Vocabulary::RdfsSubClassOf.iri().as_str(),
            "http://www.w3.org/2000/01/rdf-schema#subClassOf"
        );
        assert_eq!(
            Vocabulary::RdfsDomain.iri().as_str(),
            "http://www.w3.org/2000/01/rdf-schema#domain"
        );
        assert_eq!(
            Vocabulary::RdfsRange.iri().as_str(),
            "http://www.w3.org/2000/01/rdf-schema#range"
        );
        assert_eq!(
            Vocabulary::RdfsClass.iri().as_str(),
            "http://www.w3.org/2000/01/rdf-schema#Class"
        );
        assert_eq!(
            Vocabulary::RdfsResource.iri().as_str(),
            "http://www.w3.org/2000/01/rdf-schema#Resource"
        );
    }

    #[test]
    fn test_from_iri() {
        for term in Vocabulary::ALL {
            assert_eq!(Vocabulary::from_iri(term.iri().as_str()), Some(term));
        }
        assert_eq!(Vocabulary::from_iri("http://example.com/type"), None);
    }
}
