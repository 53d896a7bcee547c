use crate::error::Cancelled;
use crate::resolver::Resolver;
use crate::templates::{Catalog, TemplateContext};
use crate::{CancellationFlag, HostAdapter, HostBridge};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use vgraph_model::{BoundNode, Triple, TriplePattern};
use vgraph_schema::Schema;

/// The virtual RDF graph of a host application.
///
/// A graph binds a built [`Schema`] to the [`HostAdapter`] that reaches the host's live
/// objects. Nothing is materialized: every query re-enumerates the templates of the schema and
/// asks the host for the current instances and attribute values.
///
/// Cloning a graph is cheap and clones share the same schema and adapter.
///
/// Usage example:
/// ```
/// use vgraph_engine::testing::fixture_graph;
/// use vgraph_model::{Node, TriplePattern, Vocabulary};
///
/// let graph = fixture_graph();
/// let classes = graph.resolve(&TriplePattern::new(
///     Node::Unbound,
///     Vocabulary::RdfType,
///     Vocabulary::RdfsClass,
/// ));
/// assert_eq!(classes.len(), 2);
/// ```
#[derive(Clone)]
pub struct VirtualGraph {
    inner: Arc<GraphInner>,
}

struct GraphInner {
    schema: Schema,
    adapter: Arc<dyn HostAdapter>,
    catalog: Catalog,
}

impl VirtualGraph {
    pub fn new(schema: Schema, adapter: impl HostAdapter + 'static) -> Self {
        Self::from_arc(schema, Arc::new(adapter))
    }

    pub fn from_arc(schema: Schema, adapter: Arc<dyn HostAdapter>) -> Self {
        let catalog = Catalog::new(&schema);
        Self {
            inner: Arc::new(GraphInner {
                schema,
                adapter,
                catalog,
            }),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.inner.schema
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// The guarded access to the host this graph is bound to.
    pub fn host(&self) -> HostBridge<'_> {
        HostBridge::new(&self.inner.schema, self.inner.adapter.as_ref())
    }

    /// Resolves an IRI to a vocabulary term, a schema entity or a live instance.
    pub fn lookup(&self, iri: &str) -> Option<BoundNode> {
        self.host().lookup(iri)
    }

    /// Returns the deduplicated triples matching `pattern`.
    pub fn resolve(&self, pattern: &TriplePattern) -> Vec<Triple> {
        // A flag nobody else holds is never raised.
        self.resolve_with_cancellation(pattern, &CancellationFlag::new())
            .unwrap_or_default()
    }

    /// Returns the deduplicated triples matching `pattern`, or [`Cancelled`] if `cancel` is
    /// raised before resolution finishes.
    pub fn resolve_with_cancellation(
        &self,
        pattern: &TriplePattern,
        cancel: &CancellationFlag,
    ) -> Result<Vec<Triple>, Cancelled> {
        let cx = TemplateContext {
            host: self.host(),
            cancel,
        };
        let triples = Resolver::new(&self.inner.catalog, cx).resolve(pattern)?;
        debug!(
            pattern = %self.schema().display_pattern(pattern),
            shape = %pattern.shape(),
            count = triples.len(),
            "resolved triple pattern"
        );
        Ok(triples)
    }
}

impl fmt::Debug for VirtualGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualGraph")
            .field("schema", &self.inner.schema)
            .field("catalog", &self.inner.catalog)
            .finish_non_exhaustive()
    }
}
