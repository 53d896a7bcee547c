use crate::templates::{TemplateContext, TripleTemplate};
use vgraph_model::{BoundNode, Vocabulary};
use vgraph_schema::TypeRef;

fn all_attributes(cx: TemplateContext<'_>) -> Vec<BoundNode> {
    cx.schema().attributes().map(BoundNode::Attribute).collect()
}

macro_rules! attribute_to_constant_template {
    ($(#[$meta:meta])* $name:ident, $object:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name;

        impl TripleTemplate for $name {
            fn predicate(&self) -> BoundNode {
                Vocabulary::RdfType.into()
            }

            fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode> {
                all_attributes(cx)
            }

            fn all_subjects_for_object(
                &self,
                cx: TemplateContext<'_>,
                _object: &BoundNode,
            ) -> Vec<BoundNode> {
                all_attributes(cx)
            }

            fn all_objects_for_subject(
                &self,
                _cx: TemplateContext<'_>,
                _subject: &BoundNode,
            ) -> Vec<BoundNode> {
                vec![$object.into()]
            }

            fn applies_to_subject(&self, _cx: TemplateContext<'_>, subject: &BoundNode) -> bool {
                subject.is_attribute()
            }

            fn applies_to_object(&self, _cx: TemplateContext<'_>, object: &BoundNode) -> bool {
                *object == BoundNode::from($object)
            }
        }
    };
}

attribute_to_constant_template!(
    /// `A rdf:type rdf:Property`
    AttributeTypeProperty,
    Vocabulary::RdfProperty
);

attribute_to_constant_template!(
    /// `A rdf:type rdfs:Resource`
    AttributeTypeResource,
    Vocabulary::RdfsResource
);

/// `A rdfs:domain C` for the source class of `A` and each of its indirect subclasses.
#[derive(Debug, Default)]
pub struct AttributeDomainClass;

impl TripleTemplate for AttributeDomainClass {
    fn predicate(&self) -> BoundNode {
        Vocabulary::RdfsDomain.into()
    }

    fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode> {
        all_attributes(cx)
    }

    fn all_subjects_for_object(
        &self,
        cx: TemplateContext<'_>,
        object: &BoundNode,
    ) -> Vec<BoundNode> {
        object.as_class().map_or_else(Vec::new, |class| {
            cx.schema()
                .source_attributes(class)
                .iter()
                .copied()
                .map(BoundNode::Attribute)
                .collect()
        })
    }

    fn all_objects_for_subject(
        &self,
        cx: TemplateContext<'_>,
        subject: &BoundNode,
    ) -> Vec<BoundNode> {
        subject.as_attribute().map_or_else(Vec::new, |attribute| {
            cx.schema()
                .indirect_source_classes(attribute)
                .iter()
                .copied()
                .map(BoundNode::Class)
                .collect()
        })
    }

    fn applies_to_subject(&self, _cx: TemplateContext<'_>, subject: &BoundNode) -> bool {
        subject.is_attribute()
    }

    fn applies_to_object(&self, _cx: TemplateContext<'_>, object: &BoundNode) -> bool {
        object.is_class()
    }
}

/// `A rdfs:range T` for the target type of `A` and, for class targets, each of its indirect
/// subclasses.
#[derive(Debug, Default)]
pub struct AttributeRangeType;

impl TripleTemplate for AttributeRangeType {
    fn predicate(&self) -> BoundNode {
        Vocabulary::RdfsRange.into()
    }

    fn all_subjects(&self, cx: TemplateContext<'_>) -> Vec<BoundNode> {
        all_attributes(cx)
    }

    fn all_subjects_for_object(
        &self,
        cx: TemplateContext<'_>,
        object: &BoundNode,
    ) -> Vec<BoundNode> {
        TypeRef::from_node(object).map_or_else(Vec::new, |ty| {
            cx.schema()
                .target_attributes(ty)
                .iter()
                .copied()
                .map(BoundNode::Attribute)
                .collect()
        })
    }

    fn all_objects_for_subject(
        &self,
        cx: TemplateContext<'_>,
        subject: &BoundNode,
    ) -> Vec<BoundNode> {
        subject.as_attribute().map_or_else(Vec::new, |attribute| {
            cx.schema()
                .indirect_target_types(attribute)
                .iter()
                .copied()
                .map(BoundNode::from)
                .collect()
        })
    }

    fn applies_to_subject(&self, _cx: TemplateContext<'_>, subject: &BoundNode) -> bool {
        subject.is_attribute()
    }

    fn applies_to_object(&self, _cx: TemplateContext<'_>, object: &BoundNode) -> bool {
        TypeRef::from_node(object).is_some()
    }
}
