use crate::templates::{TemplateContext, TripleTemplate};
use vgraph_model::{AttributeId, BoundNode, Instance};
use vgraph_schema::TypeRef;

/// `I a E`: the values of one attribute `a` on the instances of its source class.
///
/// Applicability only looks at the schema: a subject applies if its class is in the closure of
/// the attribute's source class, and an object applies if its class or datatype is among the
/// attribute's indirect target types. Evaluation additionally asks the host, so a subject that
/// applies may still have no objects. This happens when the accessor returns objects the
/// target class' host type rejects, or that the host classifies outside the target class.
#[derive(Debug)]
pub struct InstanceAttributeValue {
    attribute: AttributeId,
}

impl InstanceAttributeValue {
    pub fn new(attribute: AttributeId) -> Self {
        Self { attribute }
    }

    pub fn attribute(&self) -> AttributeId {
        self.attribute
    }

    fn subjects(&self, cx: TemplateContext<'_>) -> Vec<Instance> {
        cx.host
            .implementing_instances(cx.schema().attribute_source(self.attribute))
    }
}

impl TripleTemplate for InstanceAttributeValue {
    fn predicate(&self) -> BoundNode {
        BoundNode::Attribute(self.attribute)
    }

    fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode> {
        self.subjects(cx)
            .into_iter()
            .map(BoundNode::Instance)
            .collect()
    }

    fn all_subjects_for_object(
        &self,
        cx: TemplateContext<'_>,
        object: &BoundNode,
    ) -> Vec<BoundNode> {
        self.subjects(cx)
            .into_iter()
            .take_while(|_| !cx.cancel.is_cancelled())
            .filter(|subject| cx.host.evaluate(self.attribute, subject).contains(object))
            .map(BoundNode::Instance)
            .collect()
    }

    fn all_objects_for_subject(
        &self,
        cx: TemplateContext<'_>,
        subject: &BoundNode,
    ) -> Vec<BoundNode> {
        subject.as_instance().map_or_else(Vec::new, |instance| {
            cx.host.evaluate(self.attribute, instance)
        })
    }

    fn applies_to_subject(&self, cx: TemplateContext<'_>, subject: &BoundNode) -> bool {
        let Some(instance) = subject.as_instance() else {
            return false;
        };
        let sources = cx.schema().indirect_source_classes(self.attribute);
        cx.schema()
            .indirect_superclasses_and_self(instance.class())
            .iter()
            .any(|class| sources.contains(class))
    }

    fn applies_to_object(&self, cx: TemplateContext<'_>, object: &BoundNode) -> bool {
        let targets = cx.schema().indirect_target_types(self.attribute);
        match object {
            BoundNode::Instance(instance) => cx
                .schema()
                .indirect_superclasses_and_self(instance.class())
                .iter()
                .any(|class| targets.contains(&TypeRef::Class(*class))),
            BoundNode::Literal(literal) => targets.contains(&TypeRef::Datatype(literal.datatype())),
            _ => false,
        }
    }
}
