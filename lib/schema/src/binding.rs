use crate::phase::{AttributeClosure, Bindings, Built, Closed};
use crate::{Schema, TypeRef};
use vgraph_model::{AttributeId, ClassId, Datatype};

impl Schema<Closed> {
    /// Binds every attribute to the closures of its source and target types and indexes the
    /// incoming and outgoing attributes of every type. The resulting schema is frozen.
    pub fn bind_attributes(self) -> Schema<Built> {
        let attributes = self
            .attributes()
            .map(|attribute| {
                let source = self.attribute_source(attribute);
                let source_classes = self.indirect_subclasses_and_self(source).to_vec();
                let target_types = match self.attribute_target(attribute) {
                    TypeRef::Class(target) => self
                        .indirect_subclasses_and_self(target)
                        .iter()
                        .copied()
                        .map(TypeRef::Class)
                        .collect(),
                    datatype @ TypeRef::Datatype(_) => vec![datatype],
                };
                AttributeClosure {
                    source_classes,
                    target_types,
                }
            })
            .collect::<Vec<_>>();

        let attributes_where = |include: &dyn Fn(&AttributeClosure) -> bool| {
            attributes
                .iter()
                .enumerate()
                .filter(|(_, closure)| include(closure))
                .map(|(index, _)| AttributeId::new(index))
                .collect::<Vec<_>>()
        };
        let class_source_attributes = self
            .classes()
            .map(|class| attributes_where(&|closure| closure.source_classes.contains(&class)))
            .collect();
        let class_target_attributes = self
            .classes()
            .map(|class| {
                attributes_where(&|closure| closure.target_types.contains(&TypeRef::Class(class)))
            })
            .collect();
        let datatype_target_attributes = Datatype::ALL.map(|datatype| {
            attributes_where(&|closure| {
                closure.target_types.contains(&TypeRef::Datatype(datatype))
            })
        });

        let bindings = Bindings {
            class_source_attributes,
            class_target_attributes,
            datatype_target_attributes,
            attributes,
        };
        self.map_phase(|closed| Built { closed, bindings })
    }
}

impl Schema<Built> {
    /// Returns the source class of `attribute` followed by its indirect subclasses.
    pub fn indirect_source_classes(&self, attribute: AttributeId) -> &[ClassId] {
        &self.bindings().attributes[attribute.index()].source_classes
    }

    /// Returns the target type of `attribute`, followed by its indirect subclasses if the target
    /// is a class.
    pub fn indirect_target_types(&self, attribute: AttributeId) -> &[TypeRef] {
        &self.bindings().attributes[attribute.index()].target_types
    }

    /// Returns the attributes whose indirect source classes contain `class`.
    pub fn source_attributes(&self, class: ClassId) -> &[AttributeId] {
        &self.bindings().class_source_attributes[class.index()]
    }

    /// Returns the attributes whose indirect target types contain `ty`.
    pub fn target_attributes(&self, ty: TypeRef) -> &[AttributeId] {
        match ty {
            TypeRef::Class(class) => &self.bindings().class_target_attributes[class.index()],
            TypeRef::Datatype(datatype) => {
                &self.bindings().datatype_target_attributes[datatype.index()]
            }
        }
    }

    fn bindings(&self) -> &Bindings {
        &self.phase.bindings
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributeDecl, ClassDecl, Schema, TypeRef};
    use vgraph_model::{Datatype, HostType};

    fn schema() -> Schema {
        let class = |iri: &str| ClassDecl::new(iri, HostType::new(iri, |_| false));
        let attribute = |iri: &str, source: &str, target: crate::TargetDecl| {
            AttributeDecl::new(iri, source, target, |_| Ok(Vec::new()))
        };
        Schema::build(
            [
                class("http://e/Person"),
                class("http://e/Author").with_superclass("http://e/Person"),
                class("http://e/Book"),
            ],
            [
                attribute("http://e/name", "http://e/Person", Datatype::String.into()),
                attribute("http://e/wrote", "http://e/Author", "http://e/Book".into()),
                attribute("http://e/knows", "http://e/Person", "http://e/Person".into()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_attribute_closures() {
        let schema = schema();
        let person = schema.class_by_iri("http://e/Person").unwrap();
        let author = schema.class_by_iri("http://e/Author").unwrap();
        let name = schema.attribute_by_iri("http://e/name").unwrap();
        let knows = schema.attribute_by_iri("http://e/knows").unwrap();

        assert_eq!(schema.indirect_source_classes(name), &[person, author]);
        assert_eq!(
            schema.indirect_target_types(name),
            &[TypeRef::Datatype(Datatype::String)]
        );
        assert_eq!(
            schema.indirect_target_types(knows),
            &[TypeRef::Class(person), TypeRef::Class(author)]
        );
    }

    #[test]
    fn test_type_indexes() {
        let schema = schema();
        let person = schema.class_by_iri("http://e/Person").unwrap();
        let author = schema.class_by_iri("http://e/Author").unwrap();
        let book = schema.class_by_iri("http://e/Book").unwrap();
        let name = schema.attribute_by_iri("http://e/name").unwrap();
        let wrote = schema.attribute_by_iri("http://e/wrote").unwrap();
        let knows = schema.attribute_by_iri("http://e/knows").unwrap();

        assert_eq!(schema.source_attributes(person), &[name, knows]);
        assert_eq!(schema.source_attributes(author), &[name, wrote, knows]);
        assert!(schema.source_attributes(book).is_empty());
        assert_eq!(schema.target_attributes(book.into()), &[wrote]);
        assert_eq!(schema.target_attributes(author.into()), &[knows]);
        assert_eq!(
            schema.target_attributes(Datatype::String.into()),
            &[name]
        );
        assert!(schema.target_attributes(Datatype::Double.into()).is_empty());
    }

    #[test]
    fn test_every_type_is_in_the_range_of_its_target_attributes() {
        let schema = schema();
        let types = schema
            .classes()
            .map(TypeRef::Class)
            .chain(Datatype::ALL.map(TypeRef::Datatype))
            .collect::<Vec<_>>();
        for ty in types {
            for attribute in schema.target_attributes(ty) {
                assert!(schema.indirect_target_types(*attribute).contains(&ty));
            }
        }
        for attribute in schema.attributes() {
            let source = schema.attribute_source(attribute);
            assert!(schema.indirect_source_classes(attribute).contains(&source));
        }
    }
}
