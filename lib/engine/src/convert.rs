//! Conversions between the node model and [`oxrdf`] terms.

use crate::HostBridge;
use oxrdf::{Subject, Term, TermRef};
use vgraph_model::{BoundNode, Literal, Node, RdfTriple, Triple, TriplePattern};
use vgraph_schema::Schema;

/// Resolves an oxrdf term to a bound node.
///
/// IRIs go through [`HostBridge::lookup`]; literals are matched against the datatype table.
/// Blank nodes, unsupported datatypes and unknown IRIs yield [`None`].
pub fn node_from_term(host: HostBridge<'_>, term: TermRef<'_>) -> Option<BoundNode> {
    match term {
        TermRef::NamedNode(iri) => host.lookup(iri.as_str()),
        TermRef::Literal(literal) => Literal::from_rdf(literal).ok().map(BoundNode::Literal),
        _ => None,
    }
}

/// Builds a pattern from optional terms, [`None`] standing for an unbound position.
///
/// Returns [`None`] if a bound term does not resolve: such a pattern matches nothing.
pub fn pattern_from_terms(
    host: HostBridge<'_>,
    subject: Option<TermRef<'_>>,
    predicate: Option<TermRef<'_>>,
    object: Option<TermRef<'_>>,
) -> Option<TriplePattern> {
    let position = |term: Option<TermRef<'_>>| -> Option<Node> {
        match term {
            None => Some(Node::Unbound),
            Some(term) => node_from_term(host, term).map(Node::Bound),
        }
    };
    Some(TriplePattern::new(
        position(subject)?,
        position(predicate)?,
        position(object)?,
    ))
}

pub fn term_from_node(schema: &Schema, node: &BoundNode) -> Term {
    match node {
        BoundNode::Vocabulary(term) => term.iri().into_owned().into(),
        BoundNode::Class(class) => schema.class_iri(*class).into_owned().into(),
        BoundNode::Datatype(datatype) => datatype.iri().into_owned().into(),
        BoundNode::Attribute(attribute) => schema.attribute_iri(*attribute).into_owned().into(),
        BoundNode::Instance(instance) => instance.iri().into_owned().into(),
        BoundNode::Literal(literal) => literal.to_rdf().into(),
    }
}

/// Converts a triple of the virtual graph into an oxrdf triple.
///
/// Returns [`None`] if the subject is a literal or the predicate is not an IRI, which no
/// template produces.
pub fn rdf_triple(schema: &Schema, triple: &Triple) -> Option<RdfTriple> {
    let subject = match term_from_node(schema, &triple.subject) {
        Term::NamedNode(iri) => Subject::NamedNode(iri),
        _ => return None,
    };
    let Term::NamedNode(predicate) = term_from_node(schema, &triple.predicate) else {
        return None;
    };
    Some(RdfTriple::new(
        subject,
        predicate,
        term_from_node(schema, &triple.object),
    ))
}

/// Resolves an oxrdf triple into a triple of the virtual graph.
///
/// Returns [`None`] if one of its terms does not resolve.
pub fn triple_from_rdf(host: HostBridge<'_>, triple: &RdfTriple) -> Option<Triple> {
    let Subject::NamedNode(subject) = &triple.subject else {
        return None;
    };
    Some(Triple::new(
        host.lookup(subject.as_str())?,
        host.lookup(triple.predicate.as_str())?,
        node_from_term(host, triple.object.as_ref())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture_graph, iri};
    use oxrdf::{LiteralRef, NamedNodeRef};
    use vgraph_model::{Datatype, Vocabulary};

    #[test]
    fn test_literal_terms_use_the_datatype_table() {
        let graph = fixture_graph();
        let host = graph.host();
        assert_eq!(
            node_from_term(host, LiteralRef::new_simple_literal("x").into()),
            Some(BoundNode::Literal(Literal::from("x")))
        );
        let decimal = LiteralRef::new_typed_literal(
            "1",
            NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#decimal"),
        );
        assert_eq!(node_from_term(host, decimal.into()), None);
        let tagged = LiteralRef::new_language_tagged_literal_unchecked("x", "en");
        assert_eq!(node_from_term(host, tagged.into()), None);
    }

    #[test]
    fn test_unresolvable_terms_make_the_pattern_empty() {
        let graph = fixture_graph();
        let unknown = NamedNodeRef::new_unchecked("http://example.com/unknown");
        assert_eq!(
            pattern_from_terms(graph.host(), Some(unknown.into()), None, None),
            None
        );
        let pattern =
            pattern_from_terms(graph.host(), None, Some(Vocabulary::RdfType.iri().into()), None);
        assert_eq!(
            pattern.map(|pattern| pattern.shape().to_string()),
            Some("? p ?".to_owned())
        );
    }

    #[test]
    fn test_nodes_convert_back_to_terms() {
        let graph = fixture_graph();
        assert_eq!(
            term_from_node(graph.schema(), &Datatype::String.into()),
            Term::from(Datatype::String.iri().into_owned())
        );
        assert_eq!(
            term_from_node(graph.schema(), &Literal::from(true).into()),
            Term::from(oxrdf::Literal::from(true))
        );
    }

    #[test]
    fn test_triples_survive_the_rdf_form() {
        let graph = fixture_graph();
        let instance = graph.lookup(iri::I1).unwrap();
        let has_name = graph.lookup(iri::HAS_NAME).unwrap();
        let mut triples = graph.resolve(&TriplePattern::any());
        for literal in [
            Literal::from(""),
            Literal::from("Grüße, 世界"),
            Literal::from(true),
            Literal::from(false),
            Literal::from(0.0),
            Literal::from(-2.5e300),
            Literal::from(1.0 + 0.9e-7),
            Literal::from(i64::MIN),
            Literal::from(i64::MAX),
        ] {
            triples.push(Triple::new(instance.clone(), has_name.clone(), literal));
        }

        for triple in &triples {
            let rdf = rdf_triple(graph.schema(), triple).unwrap();
            assert_eq!(
                triple_from_rdf(graph.host(), &rdf).as_ref(),
                Some(triple),
                "{rdf}"
            );
        }
        assert!(triples
            .iter()
            .any(|triple| matches!(triple.subject, BoundNode::Instance(_))));
        assert!(triples
            .iter()
            .any(|triple| matches!(triple.object, BoundNode::Datatype(_))));
    }

    #[test]
    fn test_doubles_keep_their_tolerance_in_the_rdf_form() {
        let graph = fixture_graph();
        let term = term_from_node(graph.schema(), &Literal::from(1.0).into());
        let node = node_from_term(graph.host(), term.as_ref()).unwrap();
        assert_eq!(node, Literal::from(1.0 + 0.5e-7).into());
        assert_ne!(node, Literal::from(1.0 + 2e-7).into());
    }
}
