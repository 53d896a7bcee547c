//! The triple templates.
//!
//! Every triple of the virtual graph is produced by exactly one family of triples sharing a
//! predicate, a [`TripleTemplate`]. Eleven templates describe the schema and the typing of
//! instances; the twelfth is instantiated once per attribute and exposes attribute values.
//!
//! | Template                  | Triples                           |
//! |---------------------------|-----------------------------------|
//! | [`ClassTypeClass`]        | `C rdf:type rdfs:Class`           |
//! | [`ClassTypeResource`]     | `C rdf:type rdfs:Resource`        |
//! | [`AttributeTypeProperty`] | `A rdf:type rdf:Property`         |
//! | [`AttributeTypeResource`] | `A rdf:type rdfs:Resource`        |
//! | [`ClassSubclassResource`] | `C rdfs:subClassOf rdfs:Resource` |
//! | [`ClassSubclassSelf`]     | `C rdfs:subClassOf C`             |
//! | [`ClassSubclassClass`]    | `C1 rdfs:subClassOf C2`           |
//! | [`AttributeDomainClass`]  | `A rdfs:domain C`                 |
//! | [`AttributeRangeType`]    | `A rdfs:range T`                  |
//! | [`InstanceTypeResource`]  | `I rdf:type rdfs:Resource`        |
//! | [`InstanceTypeClass`]     | `I rdf:type C`                    |
//! | [`InstanceAttributeValue`]| `I a E`                           |

mod attribute;
mod attribute_value;
mod catalog;
mod class;
mod instance;

use crate::{CancellationFlag, HostBridge};
use vgraph_model::BoundNode;
use vgraph_schema::Schema;

pub use attribute::{
    AttributeDomainClass, AttributeRangeType, AttributeTypeProperty, AttributeTypeResource,
};
pub use attribute_value::InstanceAttributeValue;
pub use catalog::Catalog;
pub use class::{
    ClassSubclassClass, ClassSubclassResource, ClassSubclassSelf, ClassTypeClass,
    ClassTypeResource,
};
pub use instance::{InstanceTypeClass, InstanceTypeResource};

/// What a template needs to enumerate its triples.
#[derive(Clone, Copy)]
pub struct TemplateContext<'a> {
    pub host: HostBridge<'a>,
    pub cancel: &'a CancellationFlag,
}

impl<'a> TemplateContext<'a> {
    pub fn schema(&self) -> &'a Schema {
        self.host.schema()
    }
}

/// A generator of a family of triples sharing one predicate.
///
/// The `*_for_*` methods assume that the template applies to their argument; use the
/// [`Catalog`] to call them with an applicability check.
pub trait TripleTemplate: Send + Sync {
    fn predicate(&self) -> BoundNode;

    fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode>;

    fn all_subjects_for_object(
        &self,
        cx: TemplateContext<'_>,
        object: &BoundNode,
    ) -> Vec<BoundNode>;

    fn all_objects_for_subject(
        &self,
        cx: TemplateContext<'_>,
        subject: &BoundNode,
    ) -> Vec<BoundNode>;

    fn applies_to_subject(&self, cx: TemplateContext<'_>, subject: &BoundNode) -> bool;

    fn applies_to_object(&self, cx: TemplateContext<'_>, object: &BoundNode) -> bool;
}
