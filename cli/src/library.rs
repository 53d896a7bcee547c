//! A small in-memory library exposed as a virtual graph.

use vgraph_engine::{HostAdapter, VirtualGraph};
use vgraph_model::{AdapterError, ClassId, Datatype, HostObject, HostType, HostValue};
use vgraph_schema::{AttributeDecl, ClassDecl, Schema};

pub mod iri {
    pub const AUTHOR: &str = "http://example.com/library#Author";
    pub const BOOK: &str = "http://example.com/library#Book";
    pub const EBOOK: &str = "http://example.com/library#EBook";
    pub const NAME: &str = "http://example.com/library#name";
    pub const TITLE: &str = "http://example.com/library#title";
    pub const YEAR: &str = "http://example.com/library#year";
    pub const WRITTEN_BY: &str = "http://example.com/library#writtenBy";
    pub const AVAILABLE: &str = "http://example.com/library#available";
    pub const PRICE: &str = "http://example.com/library#price";
    pub const FILE_SIZE: &str = "http://example.com/library#fileSizeKb";

    pub const AUTHORS: &str = "http://example.com/library/authors/";
    pub const BOOKS: &str = "http://example.com/library/books/";
}

struct Author {
    id: &'static str,
    name: &'static str,
}

struct Book {
    id: &'static str,
    title: &'static str,
    year: Option<i64>,
    authors: Vec<HostObject>,
    available: bool,
    price: f64,
    /// Only e-books have a file.
    file_size_kb: Option<i64>,
}

fn book(object: &HostObject) -> Result<&Book, AdapterError> {
    object
        .downcast_ref::<Book>()
        .ok_or_else(|| AdapterError::new("not a book"))
}

fn author(object: &HostObject) -> Result<&Author, AdapterError> {
    object
        .downcast_ref::<Author>()
        .ok_or_else(|| AdapterError::new("not an author"))
}

fn schema() -> anyhow::Result<Schema> {
    let classes = [
        ClassDecl::new(iri::AUTHOR, HostType::of::<Author>())
            .with_instance_iri_prefix(iri::AUTHORS),
        ClassDecl::new(iri::BOOK, HostType::of::<Book>()).with_instance_iri_prefix(iri::BOOKS),
        ClassDecl::new(
            iri::EBOOK,
            HostType::new("EBook", |object: &HostObject| {
                object
                    .downcast_ref::<Book>()
                    .is_some_and(|book| book.file_size_kb.is_some())
            }),
        )
        .with_superclass(iri::BOOK)
        .with_instance_iri_prefix(iri::BOOKS),
    ];
    let attributes = [
        AttributeDecl::new(iri::NAME, iri::AUTHOR, Datatype::String, |object| {
            Ok(vec![author(object)?.name.into()])
        }),
        AttributeDecl::new(iri::TITLE, iri::BOOK, Datatype::String, |object| {
            Ok(vec![book(object)?.title.into()])
        }),
        AttributeDecl::new(iri::YEAR, iri::BOOK, Datatype::Integer, |object| {
            Ok(vec![book(object)?.year.into()])
        }),
        AttributeDecl::new(iri::WRITTEN_BY, iri::BOOK, iri::AUTHOR, |object| {
            Ok(book(object)?
                .authors
                .iter()
                .cloned()
                .map(HostValue::Object)
                .collect())
        }),
        AttributeDecl::new(iri::AVAILABLE, iri::BOOK, Datatype::Boolean, |object| {
            Ok(vec![book(object)?.available.into()])
        }),
        AttributeDecl::new(iri::PRICE, iri::BOOK, Datatype::Double, |object| {
            Ok(vec![book(object)?.price.into()])
        }),
        AttributeDecl::new(iri::FILE_SIZE, iri::EBOOK, Datatype::Integer, |object| {
            Ok(vec![book(object)?.file_size_kb.into()])
        }),
    ];
    Ok(Schema::build(classes, attributes)?)
}

/// The host side of the library: a fixed list of authors and books.
pub struct Library {
    authors: Vec<HostObject>,
    books: Vec<HostObject>,
}

impl Library {
    pub fn new() -> Self {
        let le_guin = HostObject::new(Author {
            id: "le-guin",
            name: "Ursula K. Le Guin",
        });
        let pratchett = HostObject::new(Author {
            id: "pratchett",
            name: "Terry Pratchett",
        });
        let gaiman = HostObject::new(Author {
            id: "gaiman",
            name: "Neil Gaiman",
        });
        let books = vec![
            HostObject::new(Book {
                id: "earthsea",
                title: "A Wizard of Earthsea",
                year: Some(1968),
                authors: vec![le_guin.clone()],
                available: true,
                price: 9.99,
                file_size_kb: None,
            }),
            HostObject::new(Book {
                id: "dispossessed",
                title: "The Dispossessed",
                year: Some(1974),
                authors: vec![le_guin.clone()],
                available: false,
                price: 12.5,
                file_size_kb: Some(812),
            }),
            HostObject::new(Book {
                id: "good-omens",
                title: "Good Omens",
                year: Some(1990),
                authors: vec![pratchett.clone(), gaiman.clone()],
                available: true,
                price: 8.75,
                file_size_kb: Some(1024),
            }),
            HostObject::new(Book {
                id: "untitled",
                title: "Untitled Manuscript",
                year: None,
                authors: vec![pratchett.clone()],
                available: false,
                price: 0.0,
                file_size_kb: None,
            }),
        ];
        Self {
            authors: vec![le_guin, pratchett, gaiman],
            books,
        }
    }

    fn objects(&self) -> impl Iterator<Item = &HostObject> {
        self.authors.iter().chain(&self.books)
    }
}

impl HostAdapter for Library {
    fn enumerate_instances(
        &self,
        schema: &Schema,
        class: ClassId,
    ) -> Result<Vec<HostObject>, AdapterError> {
        let host_type = schema.host_type(class);
        Ok(self
            .objects()
            .filter(|object| host_type.is_instance(object))
            .cloned()
            .collect())
    }

    fn indirect_instances_included(&self, _schema: &Schema, _class: ClassId) -> bool {
        true
    }

    fn mint_instance_iri(
        &self,
        schema: &Schema,
        class: ClassId,
        object: &HostObject,
    ) -> Result<String, AdapterError> {
        let id = match book(object) {
            Ok(book) => book.id,
            Err(_) => author(object)?.id,
        };
        Ok(format!("{}{id}", schema.instance_iri_prefix(class)))
    }

    fn find_instance_by_iri(
        &self,
        _schema: &Schema,
        iri: &str,
    ) -> Result<Option<HostObject>, AdapterError> {
        if let Some(id) = iri.strip_prefix(iri::AUTHORS) {
            return Ok(self
                .authors
                .iter()
                .find(|object| author(object).is_ok_and(|author| author.id == id))
                .cloned());
        }
        if let Some(id) = iri.strip_prefix(iri::BOOKS) {
            return Ok(self
                .books
                .iter()
                .find(|object| book(object).is_ok_and(|book| book.id == id))
                .cloned());
        }
        Ok(None)
    }
}

/// The demo library as a virtual graph.
pub fn graph() -> anyhow::Result<VirtualGraph> {
    Ok(VirtualGraph::new(schema()?, Library::new()))
}
