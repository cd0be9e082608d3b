use std::collections::HashMap;

use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;
use crate::utils::memory::MemoryTable;

#[derive(Debug)]
pub struct MemoryUserRepository {
    table: MemoryTable<UserEntity>,
}

impl MemoryUserRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table: MemoryTable::new(table_name),
        }
    }
}

impl Repository<UserEntity> for MemoryUserRepository {
    fn create(&mut self, entity: &UserEntity) -> LibraryResult<usize> {
        self.table.create(entity)
    }

    fn update(&mut self, entity: &UserEntity) -> LibraryResult<usize> {
        self.table.update(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<UserEntity> {
        self.table.get(id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        self.table.delete(id)
    }

    fn query(&self, predicate: &HashMap<String, String>,
             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<UserEntity>> {
        self.table.query(predicate, page, page_size)
    }
}

impl UserRepository for MemoryUserRepository {
    fn find_by_name(&self, name: &str) -> LibraryResult<Option<UserEntity>> {
        let predicate = HashMap::from([
            ("name".to_string(), name.to_string()),
        ]);
        let res = self.query(&predicate, None, 1)?;
        Ok(res.records.into_iter().next())
    }

    fn find_by_borrowed(&self, book_id: &str) -> LibraryResult<Vec<UserEntity>> {
        let res = self.query(&HashMap::new(), None, self.table.len())?;
        Ok(res.records.into_iter().filter(|user| user.holds(book_id)).collect())
    }
}
