use crate::dataset::GraphDataset;
use crate::error::SparqlError;
use crate::{CancellationFlag, VirtualGraph};
use spareval::{QueryEvaluator, QueryResults};
use spargebra::Query;

/// Parses and evaluates a SPARQL query against the virtual graph.
///
/// The returned results are lazy: the graph is probed while they are consumed, and consuming
/// them after `cancel` is raised yields an error.
pub fn evaluate_sparql(
    graph: &VirtualGraph,
    query: &str,
    cancel: &CancellationFlag,
) -> Result<QueryResults, SparqlError> {
    let query = Query::parse(query, None)?;
    evaluate_sparql_query(graph, &query, cancel)
}

/// Evaluates an already parsed SPARQL query against the virtual graph.
pub fn evaluate_sparql_query(
    graph: &VirtualGraph,
    query: &Query,
    cancel: &CancellationFlag,
) -> Result<QueryResults, SparqlError> {
    let dataset = GraphDataset::new(graph.clone(), cancel.clone());
    Ok(QueryEvaluator::new().execute(dataset, query)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture_graph, iri};
    use oxrdf::{Literal, NamedNode, Term, Variable};

    fn solutions(query: &str) -> Vec<Vec<Option<Term>>> {
        let graph = fixture_graph();
        let QueryResults::Solutions(solutions) =
            evaluate_sparql(&graph, query, &CancellationFlag::new()).unwrap()
        else {
            panic!("expected solutions");
        };
        let variables: Vec<Variable> = solutions.variables().to_vec();
        solutions
            .map(|solution| {
                let solution = solution.unwrap();
                variables
                    .iter()
                    .map(|variable| solution.get(variable).cloned())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_select_instances_by_type() {
        let rows = solutions(&format!("SELECT ?s WHERE {{ ?s a <{}> }}", iri::A));
        assert_eq!(rows, vec![vec![Some(NamedNode::new_unchecked(iri::I1).into())]]);
    }

    #[test]
    fn test_select_attribute_values() {
        let rows = solutions(&format!(
            "SELECT ?name WHERE {{ <{}> <{}> ?name }}",
            iri::I1,
            iri::HAS_NAME
        ));
        assert_eq!(rows, vec![vec![Some(Literal::new_simple_literal("x").into())]]);
    }

    #[test]
    fn test_ask() {
        let graph = fixture_graph();
        let query = format!(
            "ASK {{ <{}> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <{}> }}",
            iri::B,
            iri::A
        );
        let results = evaluate_sparql(&graph, &query, &CancellationFlag::new()).unwrap();
        assert!(matches!(results, QueryResults::Boolean(true)));
    }

    #[test]
    fn test_named_graphs_are_empty() {
        let rows = solutions("SELECT ?s WHERE { GRAPH ?g { ?s ?p ?o } }");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_syntax_error() {
        let graph = fixture_graph();
        assert!(matches!(
            evaluate_sparql(&graph, "SELECT WHERE", &CancellationFlag::new()),
            Err(SparqlError::Syntax(_))
        ));
    }

    #[test]
    fn test_cancelled_query_fails() {
        let graph = fixture_graph();
        let cancel = CancellationFlag::new();
        cancel.cancel();
        let QueryResults::Solutions(mut solutions) =
            evaluate_sparql(&graph, "SELECT * WHERE { ?s ?p ?o }", &cancel).unwrap()
        else {
            panic!("expected solutions");
        };
        assert!(solutions.any(|solution| solution.is_err()));
    }
}
