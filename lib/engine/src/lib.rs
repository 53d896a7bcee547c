//! The vgraph triple engine.
//!
//! A [`VirtualGraph`] exposes the schema and the live objects of a host application as an RDF(S)
//! graph without materializing it. Triple patterns are answered by the twelve
//! [triple templates](templates) of the schema, which reach the host through a [`HostAdapter`].
//! The graph can also be queried with SPARQL through [`evaluate_sparql`].

mod adapter;
mod bridge;
mod cancel;
pub mod convert;
mod dataset;
mod error;
mod graph;
mod resolver;
mod sparql;
pub mod templates;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use adapter::HostAdapter;
pub use bridge::HostBridge;
pub use cancel::{CancelOnDrop, CancellationFlag};
pub use dataset::GraphDataset;
pub use error::{Cancelled, GraphError, SparqlError};
pub use graph::VirtualGraph;
pub use sparql::{evaluate_sparql, evaluate_sparql_query};

// Re-export the query results of the SPARQL evaluator.
pub use spareval::{QueryResults, QuerySolution, QuerySolutionIter, QueryTripleIter};
