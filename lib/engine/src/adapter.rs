use vgraph_model::{AdapterError, ClassId, HostObject};
use vgraph_schema::Schema;

/// The interface through which the engine reaches the live state of the host application.
///
/// Implementations are called concurrently from many queries and must not have observable
/// side effects within a query. Every method may fail or even panic: the engine treats both as
/// "no result" and logs the failure.
pub trait HostAdapter: Send + Sync {
    /// Returns the host objects of `class`.
    ///
    /// Whether the result also contains the objects of subclasses is declared through
    /// [`indirect_instances_included`](Self::indirect_instances_included).
    fn enumerate_instances(
        &self,
        schema: &Schema,
        class: ClassId,
    ) -> Result<Vec<HostObject>, AdapterError>;

    /// Returns whether [`enumerate_instances`](Self::enumerate_instances) already returns the
    /// objects of all subclasses of `class`. If not, the engine enumerates every indirect
    /// subclass itself.
    fn indirect_instances_included(&self, schema: &Schema, class: ClassId) -> bool {
        let _ = (schema, class);
        false
    }

    /// Computes the IRI of a host object of `class`.
    fn mint_instance_iri(
        &self,
        schema: &Schema,
        class: ClassId,
        object: &HostObject,
    ) -> Result<String, AdapterError>;

    /// Returns the host object an instance IRI denotes, if any.
    fn find_instance_by_iri(
        &self,
        schema: &Schema,
        iri: &str,
    ) -> Result<Option<HostObject>, AdapterError>;

    /// Returns the most specific class of a host object.
    ///
    /// Every instance the engine produces is of the class returned here, whether it was
    /// enumerated, read from an attribute or looked up by IRI. Defaults to [`Schema::classify`].
    fn classify_object(&self, schema: &Schema, object: &HostObject) -> Option<ClassId> {
        schema.classify(object)
    }
}
