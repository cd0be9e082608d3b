use std::collections::HashMap;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::memory::MemoryTable;

#[derive(Debug)]
pub struct MemoryBookRepository {
    table: MemoryTable<BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table: MemoryTable::new(table_name),
        }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        self.table.create(entity)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        self.table.update(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.table.get(id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        self.table.delete(id)
    }

    fn query(&self, predicate: &HashMap<String, String>,
             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        self.table.query(predicate, page, page_size)
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_title(&self, title: &str) -> LibraryResult<Option<BookEntity>> {
        let predicate = HashMap::from([
            ("title".to_string(), title.to_string()),
        ]);
        let res = self.query(&predicate, None, 1)?;
        Ok(res.records.into_iter().next())
    }

    fn find_by_status(&self, status: &str, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let predicate = HashMap::from([
            ("book_status".to_string(), status.to_string()),
        ]);
        self.query(&predicate, page, page_size)
    }

    fn count(&self) -> usize {
        self.table.len()
    }
}
