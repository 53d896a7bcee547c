use crate::error::Cancelled;
use crate::templates::{Catalog, TemplateContext, TripleTemplate};
use itertools::Itertools;
use vgraph_model::{BoundNode, Triple, TriplePattern};

/// Answers triple patterns by dispatching on their shape into a [`Catalog`].
///
/// The cancellation flag of the context is checked before each template and before each
/// subject. Triples are deduplicated before they are returned.
pub(crate) struct Resolver<'a> {
    catalog: &'a Catalog,
    cx: TemplateContext<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog, cx: TemplateContext<'a>) -> Self {
        Self { catalog, cx }
    }

    pub fn resolve(&self, pattern: &TriplePattern) -> Result<Vec<Triple>, Cancelled> {
        let mut triples = Vec::new();
        match (
            pattern.subject.as_bound(),
            pattern.predicate.as_bound(),
            pattern.object.as_bound(),
        ) {
            (None, None, None) => {
                for template in self.catalog.templates() {
                    self.all_triples(template, &mut triples)?;
                }
            }
            (None, None, Some(object)) => {
                for template in self.catalog.templates() {
                    self.triples_for_object(template, object, &mut triples)?;
                }
            }
            (None, Some(predicate), None) => {
                for template in self.catalog.with_predicate(predicate) {
                    self.all_triples(template, &mut triples)?;
                }
            }
            (None, Some(predicate), Some(object)) => {
                for template in self.catalog.with_predicate(predicate) {
                    self.triples_for_object(template, object, &mut triples)?;
                }
            }
            (Some(subject), None, None) => {
                for template in self.catalog.templates() {
                    self.triples_for_subject(template, subject, None, &mut triples)?;
                }
            }
            (Some(subject), None, Some(object)) => {
                for template in self.catalog.templates() {
                    if template.applies_to_object(self.cx, object) {
                        self.triples_for_subject(template, subject, Some(object), &mut triples)?;
                    }
                }
            }
            (Some(subject), Some(predicate), None) => {
                for template in self.catalog.with_predicate(predicate) {
                    self.triples_for_subject(template, subject, None, &mut triples)?;
                }
            }
            (Some(subject), Some(predicate), Some(object)) => {
                for template in self.catalog.with_predicate(predicate) {
                    self.triples_for_subject(template, subject, Some(object), &mut triples)?;
                }
            }
        }
        Ok(triples.into_iter().unique().collect())
    }

    fn all_triples(
        &self,
        template: &dyn TripleTemplate,
        triples: &mut Vec<Triple>,
    ) -> Result<(), Cancelled> {
        self.cx.cancel.check()?;
        let predicate = template.predicate();
        for subject in template.all_subjects(self.cx) {
            self.cx.cancel.check()?;
            for object in Catalog::objects_for_subject(template, self.cx, &subject) {
                triples.push(Triple::new(subject.clone(), predicate.clone(), object));
            }
        }
        Ok(())
    }

    fn triples_for_object(
        &self,
        template: &dyn TripleTemplate,
        object: &BoundNode,
        triples: &mut Vec<Triple>,
    ) -> Result<(), Cancelled> {
        self.cx.cancel.check()?;
        let predicate = template.predicate();
        let subjects = Catalog::subjects_for_object(template, self.cx, object);
        // Evaluating the subjects of an attribute value may stop early on cancellation.
        self.cx.cancel.check()?;
        triples.extend(
            subjects
                .into_iter()
                .map(|subject| Triple::new(subject, predicate.clone(), object.clone())),
        );
        Ok(())
    }

    /// Emits the triples of `template` with subject `subject`, restricted to `object` if given.
    fn triples_for_subject(
        &self,
        template: &dyn TripleTemplate,
        subject: &BoundNode,
        object: Option<&BoundNode>,
        triples: &mut Vec<Triple>,
    ) -> Result<(), Cancelled> {
        self.cx.cancel.check()?;
        let predicate = template.predicate();
        let objects = Catalog::objects_for_subject(template, self.cx, subject);
        match object {
            Some(object) => {
                if objects.contains(object) {
                    triples.push(Triple::new(subject.clone(), predicate, object.clone()));
                }
            }
            None => triples.extend(
                objects
                    .into_iter()
                    .map(|object| Triple::new(subject.clone(), predicate.clone(), object)),
            ),
        }
        Ok(())
    }
}
