use crate::convert::{pattern_from_terms, term_from_node};
use crate::error::GraphError;
use crate::{CancellationFlag, VirtualGraph};
use oxrdf::Term;
use spareval::{InternalQuad, QueryableDataset};
use std::iter::once;

/// A [`VirtualGraph`] seen as a SPARQL dataset.
///
/// The virtual graph is the default graph. The dataset has no named graphs.
#[derive(Clone)]
pub struct GraphDataset {
    graph: VirtualGraph,
    cancel: CancellationFlag,
}

impl GraphDataset {
    pub fn new(graph: VirtualGraph, cancel: CancellationFlag) -> Self {
        Self { graph, cancel }
    }

    fn default_graph_quads(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<Vec<InternalQuad<Self>>, GraphError> {
        let Some(pattern) = pattern_from_terms(
            self.graph.host(),
            subject.map(Term::as_ref),
            predicate.map(Term::as_ref),
            object.map(Term::as_ref),
        ) else {
            return Ok(Vec::new());
        };
        let schema = self.graph.schema();
        Ok(self
            .graph
            .resolve_with_cancellation(&pattern, &self.cancel)?
            .into_iter()
            .map(|triple| InternalQuad {
                subject: term_from_node(schema, &triple.subject),
                predicate: term_from_node(schema, &triple.predicate),
                object: term_from_node(schema, &triple.object),
                graph_name: None,
            })
            .collect())
    }
}

impl QueryableDataset for GraphDataset {
    type InternalTerm = Term;
    type Error = GraphError;

    fn internal_quads_for_pattern(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph_name: Option<Option<&Term>>,
    ) -> Box<dyn Iterator<Item = Result<InternalQuad<Self>, GraphError>>> {
        if graph_name != Some(None) {
            return Box::new(std::iter::empty());
        }
        match self.default_graph_quads(subject, predicate, object) {
            Ok(quads) => Box::new(quads.into_iter().map(Ok)),
            Err(error) => Box::new(once(Err(error))),
        }
    }

    fn internal_named_graphs(&self) -> Box<dyn Iterator<Item = Result<Term, GraphError>>> {
        Box::new(std::iter::empty())
    }

    fn contains_internal_graph_name(&self, _graph_name: &Term) -> Result<bool, GraphError> {
        Ok(false)
    }

    fn internalize_term(&self, term: Term) -> Result<Term, GraphError> {
        Ok(term)
    }

    fn externalize_term(&self, term: Term) -> Result<Term, GraphError> {
        Ok(term)
    }
}
