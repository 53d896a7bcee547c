use spareval::QueryEvaluationError;
use spargebra::SparqlSyntaxError;

/// The caller abandoned a query before it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the query has been cancelled")]
pub struct Cancelled;

/// An error returned by the [`VirtualGraph`](crate::VirtualGraph) when it is evaluated as a
/// SPARQL dataset.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

/// An error raised while answering a SPARQL query.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SparqlError {
    /// The query is not valid SPARQL.
    #[error(transparent)]
    Syntax(#[from] SparqlSyntaxError),
    /// The query could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] QueryEvaluationError),
}
