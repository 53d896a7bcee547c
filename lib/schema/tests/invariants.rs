#![cfg(test)]

use vgraph_model::{Datatype, HostType};
use vgraph_schema::{AttributeDecl, ClassDecl, Schema, TargetDecl, TypeRef};

const BASE: &str = "http://example.com/zoo#";

fn iri(name: &str) -> String {
    format!("{BASE}{name}")
}

fn class(name: &str, superclasses: &[&str]) -> ClassDecl {
    superclasses.iter().fold(
        ClassDecl::new(iri(name), HostType::new(name, |_| false)),
        |decl, superclass| decl.with_superclass(iri(superclass)),
    )
}

fn attribute(name: &str, source: &str, target: impl Into<TargetDecl>) -> AttributeDecl {
    AttributeDecl::new(iri(name), iri(source), target, |_| Ok(Vec::new()))
}

fn zoo() -> Schema {
    Schema::build(
        [
            class("Thing", &[]),
            class("Animal", &["Thing"]),
            class("Mammal", &["Animal"]),
            class("Bird", &["Animal"]),
            class("Bat", &["Mammal"]),
            class("Flyer", &[]),
            class("FlyingBat", &["Bat", "Flyer"]),
            class("Enclosure", &["Thing"]),
        ],
        [
            attribute("name", "Thing", Datatype::String),
            attribute("wingspan", "Flyer", Datatype::Double),
            attribute("livesIn", "Animal", TargetDecl::Class(iri("Enclosure"))),
            attribute("eats", "Animal", TargetDecl::Class(iri("Animal"))),
        ],
    )
    .unwrap()
}

#[test]
fn test_every_class_is_in_its_own_closures() {
    let schema = zoo();
    for class in schema.classes() {
        assert!(schema.indirect_subclasses_and_self(class).contains(&class));
        assert!(schema.indirect_superclasses_and_self(class).contains(&class));
        assert!(!schema.indirect_subclasses(class).contains(&class));
        assert!(!schema.indirect_superclasses(class).contains(&class));
    }
}

#[test]
fn test_super_and_subclass_closures_are_inverse() {
    let schema = zoo();
    for class in schema.classes() {
        for superclass in schema.indirect_superclasses(class) {
            assert!(schema.indirect_subclasses(*superclass).contains(&class));
        }
        for subclass in schema.indirect_subclasses(class) {
            assert!(schema.indirect_superclasses(*subclass).contains(&class));
        }
    }
}

#[test]
fn test_multiple_inheritance() {
    let schema = zoo();
    let flying_bat = schema.class_by_iri(&iri("FlyingBat")).unwrap();
    let mut superclasses = schema
        .indirect_superclasses(flying_bat)
        .iter()
        .map(|class| schema.class_iri(*class).as_str().to_owned())
        .collect::<Vec<_>>();
    superclasses.sort();
    let mut expected = ["Animal", "Bat", "Flyer", "Mammal", "Thing"].map(iri);
    expected.sort();
    assert_eq!(superclasses, expected);

    let mut tops = schema.top_classes().collect::<Vec<_>>();
    tops.sort();
    assert_eq!(
        tops,
        vec![
            schema.class_by_iri(&iri("Thing")).unwrap(),
            schema.class_by_iri(&iri("Flyer")).unwrap()
        ]
    );
}

#[test]
fn test_attribute_indexes_agree_with_closures() {
    let schema = zoo();
    for attribute in schema.attributes() {
        assert!(schema
            .indirect_source_classes(attribute)
            .contains(&schema.attribute_source(attribute)));
        assert!(schema
            .indirect_target_types(attribute)
            .contains(&schema.attribute_target(attribute)));
        for class in schema.indirect_source_classes(attribute) {
            assert!(schema.source_attributes(*class).contains(&attribute));
        }
        for ty in schema.indirect_target_types(attribute) {
            assert!(schema.target_attributes(*ty).contains(&attribute));
        }
    }

    let flying_bat = schema.class_by_iri(&iri("FlyingBat")).unwrap();
    assert_eq!(schema.source_attributes(flying_bat).len(), 4);
    assert_eq!(
        schema.target_attributes(TypeRef::Datatype(Datatype::Double)),
        &[schema.attribute_by_iri(&iri("wingspan")).unwrap()]
    );
}

#[test]
fn test_empty_schema() {
    let schema = Schema::build([], []).unwrap();
    assert_eq!(schema.classes().len(), 0);
    assert_eq!(schema.attributes().len(), 0);
    assert!(schema.target_attributes(Datatype::String.into()).is_empty());
}
