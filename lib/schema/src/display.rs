use crate::phase::Phase;
use crate::Schema;
use std::fmt;
use vgraph_model::{BoundNode, Node, Triple, TriplePattern};

impl<P: Phase> Schema<P> {
    /// Formats a node: IRIs as `<iri>`, unbound nodes as `<?>` and literals as
    /// `"lexical"^^<datatype>`.
    pub fn display_node<'a>(&'a self, node: &'a Node) -> impl fmt::Display + 'a {
        DisplayNode { schema: self, node }
    }

    /// Formats a pattern as `[subject-predicate-object]`.
    pub fn display_pattern<'a>(&'a self, pattern: &'a TriplePattern) -> impl fmt::Display + 'a {
        DisplayPattern {
            schema: self,
            pattern,
        }
    }

    /// Formats a triple as `[subject-predicate-object]`.
    pub fn display_triple<'a>(&'a self, triple: &'a Triple) -> impl fmt::Display + 'a {
        DisplayTriple {
            schema: self,
            triple,
        }
    }

    fn fmt_bound(&self, node: &BoundNode, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match node {
            BoundNode::Literal(literal) => fmt::Display::fmt(literal, f),
            node => match self.node_iri(node) {
                Some(iri) => fmt::Display::fmt(&iri, f),
                None => f.write_str("<?>"),
            },
        }
    }
}

struct DisplayNode<'a, P: Phase> {
    schema: &'a Schema<P>,
    node: &'a Node,
}

impl<P: Phase> fmt::Display for DisplayNode<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Node::Unbound => f.write_str("<?>"),
            Node::Bound(node) => self.schema.fmt_bound(node, f),
        }
    }
}

struct DisplayPattern<'a, P: Phase> {
    schema: &'a Schema<P>,
    pattern: &'a TriplePattern,
}

impl<P: Phase> fmt::Display for DisplayPattern<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}-{}-{}]",
            self.schema.display_node(&self.pattern.subject),
            self.schema.display_node(&self.pattern.predicate),
            self.schema.display_node(&self.pattern.object)
        )
    }
}

struct DisplayTriple<'a, P: Phase> {
    schema: &'a Schema<P>,
    triple: &'a Triple,
}

impl<P: Phase> fmt::Display for DisplayTriple<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        self.schema.fmt_bound(&self.triple.subject, f)?;
        f.write_str("-")?;
        self.schema.fmt_bound(&self.triple.predicate, f)?;
        f.write_str("-")?;
        self.schema.fmt_bound(&self.triple.object, f)?;
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use crate::{ClassDecl, Schema};
    use vgraph_model::{ClassId, HostType, Literal, Node, TriplePattern, Vocabulary};

    #[test]
    fn test_display_pattern() {
        let schema = Schema::build(
            [ClassDecl::new("http://e/A", HostType::new("a", |_| false))],
            [],
        )
        .unwrap();
        let pattern = TriplePattern::new(ClassId::new(0), Vocabulary::RdfType, Node::Unbound);
        assert_eq!(
            schema.display_pattern(&pattern).to_string(),
            "[<http://e/A>-<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>-<?>]"
        );
        assert_eq!(
            schema.display_node(&Literal::from(3_i64).into()).to_string(),
            "\"3\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }
}
