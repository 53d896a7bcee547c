use crate::templates::{
    AttributeDomainClass, AttributeRangeType, AttributeTypeProperty, AttributeTypeResource,
    ClassSubclassClass, ClassSubclassResource, ClassSubclassSelf, ClassTypeClass,
    ClassTypeResource, InstanceAttributeValue, InstanceTypeClass, InstanceTypeResource,
    TemplateContext, TripleTemplate,
};
use std::fmt;
use vgraph_model::BoundNode;
use vgraph_schema::Schema;

/// The templates of a schema: the eleven schema-independent templates followed by one
/// [`InstanceAttributeValue`] per attribute.
pub struct Catalog {
    templates: Vec<Box<dyn TripleTemplate>>,
}

impl Catalog {
    pub fn new(schema: &Schema) -> Self {
        let mut templates: Vec<Box<dyn TripleTemplate>> = vec![
            Box::new(ClassTypeClass),
            Box::new(ClassTypeResource),
            Box::new(AttributeTypeProperty),
            Box::new(AttributeTypeResource),
            Box::new(ClassSubclassResource),
            Box::new(ClassSubclassSelf),
            Box::new(ClassSubclassClass),
            Box::new(AttributeDomainClass),
            Box::new(AttributeRangeType),
            Box::new(InstanceTypeResource),
            Box::new(InstanceTypeClass),
        ];
        for attribute in schema.attributes() {
            templates.push(Box::new(InstanceAttributeValue::new(attribute)));
        }
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> impl Iterator<Item = &dyn TripleTemplate> + '_ {
        self.templates.iter().map(AsRef::as_ref)
    }

    /// Returns the templates whose predicate is `predicate`.
    pub fn with_predicate<'a>(
        &'a self,
        predicate: &'a BoundNode,
    ) -> impl Iterator<Item = &'a dyn TripleTemplate> + 'a {
        self.templates()
            .filter(move |template| template.predicate() == *predicate)
    }

    /// Returns the subjects `template` relates to `object`, or nothing if the template does not
    /// apply to `object`.
    pub fn subjects_for_object(
        template: &dyn TripleTemplate,
        cx: TemplateContext<'_>,
        object: &BoundNode,
    ) -> Vec<BoundNode> {
        if template.applies_to_object(cx, object) {
            template.all_subjects_for_object(cx, object)
        } else {
            Vec::new()
        }
    }

    /// Returns the objects `template` relates to `subject`, or nothing if the template does not
    /// apply to `subject`.
    pub fn objects_for_subject(
        template: &dyn TripleTemplate,
        cx: TemplateContext<'_>,
        subject: &BoundNode,
    ) -> Vec<BoundNode> {
        if template.applies_to_subject(cx, subject) {
            template.all_objects_for_subject(cx, subject)
        } else {
            Vec::new()
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("templates", &self.templates.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture_attributes, fixture_classes, fixture_schema};
    use vgraph_model::{Datatype, Vocabulary};
    use vgraph_schema::AttributeDecl;

    #[test]
    fn test_one_value_template_per_attribute() {
        let catalog = Catalog::new(&fixture_schema());
        assert_eq!(catalog.len(), 12);

        let mut attributes = fixture_attributes();
        attributes.push(AttributeDecl::new(
            "http://example.com/age",
            "http://example.com/A",
            Datatype::Integer,
            |_| Ok(Vec::new()),
        ));
        let schema = Schema::build(fixture_classes(), attributes).unwrap();
        let catalog = Catalog::new(&schema);
        assert_eq!(catalog.len(), 13);
        assert_eq!(
            catalog
                .templates()
                .filter(|template| template.predicate().is_attribute())
                .count(),
            2
        );
        assert_eq!(catalog.with_predicate(&Vocabulary::RdfType.into()).count(), 6);
    }
}
