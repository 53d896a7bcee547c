use crate::templates::{TemplateContext, TripleTemplate};
use vgraph_model::{BoundNode, Vocabulary};

fn all_classes(cx: TemplateContext<'_>) -> Vec<BoundNode> {
    cx.schema().classes().map(BoundNode::Class).collect()
}

/// A template whose subjects are all classes and whose only object is a fixed vocabulary term.
macro_rules! class_to_constant_template {
    ($(#[$meta:meta])* $name:ident, $predicate:expr, $object:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name;

        impl TripleTemplate for $name {
            fn predicate(&self) -> BoundNode {
                $predicate.into()
            }

            fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode> {
                all_classes(cx)
            }

            fn all_subjects_for_object(
                &self,
                cx: TemplateContext<'_>,
                _object: &BoundNode,
            ) -> Vec<BoundNode> {
                all_classes(cx)
            }

            fn all_objects_for_subject(
                &self,
                _cx: TemplateContext<'_>,
                _subject: &BoundNode,
            ) -> Vec<BoundNode> {
                vec![$object.into()]
            }

            fn applies_to_subject(&self, _cx: TemplateContext<'_>, subject: &BoundNode) -> bool {
                subject.is_class()
            }

            fn applies_to_object(&self, _cx: TemplateContext<'_>, object: &BoundNode) -> bool {
                *object == BoundNode::from($object)
            }
        }
    };
}

class_to_constant_template!(
    /// `C rdf:type rdfs:Class`
    ClassTypeClass,
    Vocabulary::RdfType,
    Vocabulary::RdfsClass
);

class_to_constant_template!(
    /// `C rdf:type rdfs:Resource`
    ClassTypeResource,
    Vocabulary::RdfType,
    Vocabulary::RdfsResource
);

class_to_constant_template!(
    /// `C rdfs:subClassOf rdfs:Resource`
    ClassSubclassResource,
    Vocabulary::RdfsSubClassOf,
    Vocabulary::RdfsResource
);

/// `C rdfs:subClassOf C`, the reflexive part of `rdfs:subClassOf`.
#[derive(Debug, Default)]
pub struct ClassSubclassSelf;

impl TripleTemplate for ClassSubclassSelf {
    fn predicate(&self) -> BoundNode {
        Vocabulary::RdfsSubClassOf.into()
    }

    fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode> {
        all_classes(cx)
    }

    fn all_subjects_for_object(
        &self,
        _cx: TemplateContext<'_>,
        object: &BoundNode,
    ) -> Vec<BoundNode> {
        vec![object.clone()]
    }

    fn all_objects_for_subject(
        &self,
        _cx: TemplateContext<'_>,
        subject: &BoundNode,
    ) -> Vec<BoundNode> {
        vec![subject.clone()]
    }

    fn applies_to_subject(&self, _cx: TemplateContext<'_>, subject: &BoundNode) -> bool {
        subject.is_class()
    }

    fn applies_to_object(&self, _cx: TemplateContext<'_>, object: &BoundNode) -> bool {
        object.is_class()
    }
}

/// `C1 rdfs:subClassOf C2` for every indirect superclass `C2` of `C1`.
#[derive(Debug, Default)]
pub struct ClassSubclassClass;

impl TripleTemplate for ClassSubclassClass {
    fn predicate(&self) -> BoundNode {
        Vocabulary::RdfsSubClassOf.into()
    }

    fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode> {
        all_classes(cx)
    }

    fn all_subjects_for_object(
        &self,
        cx: TemplateContext<'_>,
        object: &BoundNode,
    ) -> Vec<BoundNode> {
        object.as_class().map_or_else(Vec::new, |class| {
            cx.schema()
                .indirect_subclasses(class)
                .iter()
                .copied()
                .map(BoundNode::Class)
                .collect()
        })
    }

    fn all_objects_for_subject(
        &self,
        cx: TemplateContext<'_>,
        subject: &BoundNode,
    ) -> Vec<BoundNode> {
        subject.as_class().map_or_else(Vec::new, |class| {
            cx.schema()
                .indirect_superclasses(class)
                .iter()
                .copied()
                .map(BoundNode::Class)
                .collect()
        })
    }

    fn applies_to_subject(&self, _cx: TemplateContext<'_>, subject: &BoundNode) -> bool {
        subject.is_class()
    }

    fn applies_to_object(&self, _cx: TemplateContext<'_>, object: &BoundNode) -> bool {
        object.is_class()
    }
}
