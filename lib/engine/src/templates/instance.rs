use crate::templates::{TemplateContext, TripleTemplate};
use vgraph_model::{BoundNode, Vocabulary};

fn all_instances(cx: TemplateContext<'_>) -> Vec<BoundNode> {
    cx.host
        .all_instances()
        .into_iter()
        .map(BoundNode::Instance)
        .collect()
}

/// `I rdf:type rdfs:Resource`
#[derive(Debug, Default)]
pub struct InstanceTypeResource;

impl TripleTemplate for InstanceTypeResource {
    fn predicate(&self) -> BoundNode {
        Vocabulary::RdfType.into()
    }

    fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode> {
        all_instances(cx)
    }

    fn all_subjects_for_object(
        &self,
        cx: TemplateContext<'_>,
        _object: &BoundNode,
    ) -> Vec<BoundNode> {
        all_instances(cx)
    }

    fn all_objects_for_subject(
        &self,
        _cx: TemplateContext<'_>,
        _subject: &BoundNode,
    ) -> Vec<BoundNode> {
        vec![Vocabulary::RdfsResource.into()]
    }

    fn applies_to_subject(&self, _cx: TemplateContext<'_>, subject: &BoundNode) -> bool {
        subject.is_instance()
    }

    fn applies_to_object(&self, _cx: TemplateContext<'_>, object: &BoundNode) -> bool {
        *object == BoundNode::Vocabulary(Vocabulary::RdfsResource)
    }
}

/// `I rdf:type C` for the class of `I` and each of its indirect superclasses.
#[derive(Debug, Default)]
pub struct InstanceTypeClass;

impl TripleTemplate for InstanceTypeClass {
    fn predicate(&self) -> BoundNode {
        Vocabulary::RdfType.into()
    }

    fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode> {
        all_instances(cx)
    }

    fn all_subjects_for_object(
        &self,
        cx: TemplateContext<'_>,
        object: &BoundNode,
    ) -> Vec<BoundNode> {
        object.as_class().map_or_else(Vec::new, |class| {
            cx.host
                .implementing_instances(class)
                .into_iter()
                .map(BoundNode::Instance)
                .collect()
        })
    }

    fn all_objects_for_subject(
        &self,
        cx: TemplateContext<'_>,
        subject: &BoundNode,
    ) -> Vec<BoundNode> {
        subject.as_instance().map_or_else(Vec::new, |instance| {
            cx.schema()
                .indirect_superclasses_and_self(instance.class())
                .iter()
                .copied()
                .map(BoundNode::Class)
                .collect()
        })
    }

    fn applies_to_subject(&self, _cx: TemplateContext<'_>, subject: &BoundNode) -> bool {
        subject.is_instance()
    }

    fn applies_to_object(&self, _cx: TemplateContext<'_>, object: &BoundNode) -> bool {
        object.is_class()
    }
}
