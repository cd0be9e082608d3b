use std::collections::HashMap;
use crate::core::library::{LibraryResult, PaginatedResult};

pub trait Repository<Entity>: Sync + Send {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, the stored version must match
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<usize>;

    // find by attributes, in insertion order
    fn query(&self, predicate: &HashMap::<String, String>,
             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Entity>>;
}

// Filterable exposes named attributes for query predicates
pub trait Filterable {
    fn field(&self, name: &str) -> Option<String>;
}
