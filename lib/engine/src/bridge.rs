use crate::HostAdapter;
use itertools::Itertools;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::warn;
use vgraph_model::{
    AdapterError, AttributeId, BoundNode, ClassId, HostObject, HostValue, Instance, NamedNode,
};
use vgraph_schema::{Schema, TypeRef};

/// Runs a host callback, turning errors and panics into [`None`].
fn guarded<T>(operation: &str, callback: impl FnOnce() -> Result<T, AdapterError>) -> Option<T> {
    match catch_unwind(AssertUnwindSafe(callback)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(error)) => {
            warn!(operation, %error, "host callback failed");
            None
        }
        Err(_) => {
            warn!(operation, "host callback panicked");
            None
        }
    }
}

/// The only path from the engine into host code.
///
/// Every call into the [`HostAdapter`], into attribute accessors and into host type tests is
/// guarded: failures yield empty results and never reach the query caller.
#[derive(Clone, Copy)]
pub struct HostBridge<'a> {
    schema: &'a Schema,
    adapter: &'a dyn HostAdapter,
}

impl<'a> HostBridge<'a> {
    pub fn new(schema: &'a Schema, adapter: &'a dyn HostAdapter) -> Self {
        Self { schema, adapter }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Returns the instances of `class`, including those of its indirect subclasses.
    ///
    /// Each enumerated object becomes an instance of the class the host classifies it to, which
    /// is the class [`lookup`](Self::lookup) gives it as well. Objects the host classifies
    /// outside of `class` and its subclasses, or not at all, are dropped.
    pub fn implementing_instances(&self, class: ClassId) -> Vec<Instance> {
        let included = guarded("indirect_instances_included", || {
            Ok(self.adapter.indirect_instances_included(self.schema, class))
        })
        .unwrap_or(false);

        let enumerated = if included {
            vec![class]
        } else {
            self.schema.indirect_subclasses_and_self(class).to_vec()
        };
        enumerated
            .into_iter()
            .flat_map(|enumerated| {
                guarded("enumerate_instances", || {
                    self.adapter.enumerate_instances(self.schema, enumerated)
                })
                .unwrap_or_default()
            })
            .filter_map(|object| {
                let class = self.classify_within(&object, class)?;
                self.instance(object, class)
            })
            .unique()
            .collect()
    }

    /// Returns the instances of every top class, deduplicated by IRI.
    pub fn all_instances(&self) -> Vec<Instance> {
        self.schema
            .top_classes()
            .flat_map(|class| self.implementing_instances(class))
            .unique()
            .collect()
    }

    /// Evaluates `attribute` on `instance`.
    ///
    /// Null entries and values outside the attribute's target types are dropped. Host objects
    /// become instances of the class the host classifies them to and are dropped unless that
    /// class is the target class or one of its subclasses. Primitive values become literals.
    pub fn evaluate(&self, attribute: AttributeId, instance: &Instance) -> Vec<BoundNode> {
        let values = guarded("read_attribute", || {
            self.schema.read_attribute(attribute, instance.object())
        })
        .unwrap_or_default();

        let target = self.schema.attribute_target(attribute);
        values
            .into_iter()
            .filter_map(|value| match (target, value) {
                (_, HostValue::Null) => None,
                (TypeRef::Class(class), HostValue::Object(object)) => {
                    if !self.accepts(class, &object) {
                        return None;
                    }
                    let class = self.classify_within(&object, class)?;
                    self.instance(object, class).map(BoundNode::Instance)
                }
                (TypeRef::Class(_), _) => None,
                (TypeRef::Datatype(datatype), value) => datatype.project(&value).map(Into::into),
            })
            .unique()
            .collect()
    }

    /// Resolves an IRI to a vocabulary term, a schema entity or a live instance.
    pub fn lookup(&self, iri: &str) -> Option<BoundNode> {
        if let Some(entity) = self.schema.lookup_entity(iri) {
            return Some(entity);
        }
        let object = guarded("find_instance_by_iri", || {
            self.adapter.find_instance_by_iri(self.schema, iri)
        })??;
        let class = self.classify(&object)?;
        self.instance(object, class).map(BoundNode::Instance)
    }

    fn classify(&self, object: &HostObject) -> Option<ClassId> {
        guarded("classify_object", || {
            Ok(self.adapter.classify_object(self.schema, object))
        })
        .flatten()
    }

    /// Classifies `object` through the host, keeping the class only if it is `root` or one of
    /// its indirect subclasses.
    fn classify_within(&self, object: &HostObject, root: ClassId) -> Option<ClassId> {
        self.classify(object).filter(|class| self.schema.is_subclass_of(*class, root))
    }

    fn accepts(&self, class: ClassId, object: &HostObject) -> bool {
        guarded("host_type", || {
            Ok(self.schema.host_type(class).is_instance(object))
        })
        .unwrap_or(false)
    }

    fn instance(&self, object: HostObject, class: ClassId) -> Option<Instance> {
        let iri = guarded("mint_instance_iri", || {
            self.adapter.mint_instance_iri(self.schema, class, &object)
        })?;
        match NamedNode::new(iri) {
            Ok(iri) => Some(Instance::new(iri, class, object)),
            Err(error) => {
                warn!(%error, "host minted an invalid instance IRI");
                None
            }
        }
    }
}
