use std::collections::HashMap;
use tracing::debug;
use crate::core::domain::Versioned;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Filterable;

// MemoryTable keeps rows in insertion order, which is also the scan order of queries.
#[derive(Debug, Clone)]
pub(crate) struct MemoryTable<E> {
    table_name: String,
    rows: Vec<E>,
}

impl<E: Versioned + Filterable + Clone> MemoryTable<E> {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            rows: vec![],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn create(&mut self, entity: &E) -> LibraryResult<usize> {
        let id = entity.id();
        if self.position(id.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("{} already has {}", self.table_name, id).as_str()));
        }
        self.rows.push(entity.clone());
        debug!(table = self.table_name.as_str(), id = id.as_str(), "created row");
        Ok(1)
    }

    pub(crate) fn update(&mut self, entity: &E) -> LibraryResult<usize> {
        let id = entity.id();
        let pos = self.position(id.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("{} has no {}", self.table_name, id).as_str()))?;
        let stored = self.rows.get_mut(pos).ok_or_else(|| LibraryError::not_found(
            format!("{} has no {}", self.table_name, id).as_str()))?;
        if stored.version() != entity.version() {
            return Err(LibraryError::database(
                format!("stale version {} for {} in {}, stored version is {}",
                        entity.version(), id, self.table_name, stored.version()).as_str(),
                Some("409".to_string()), true));
        }
        let mut updated = entity.clone();
        updated.advance();
        *stored = updated;
        debug!(table = self.table_name.as_str(), id = id.as_str(), "updated row");
        Ok(1)
    }

    pub(crate) fn get(&self, id: &str) -> LibraryResult<E> {
        self.rows.iter().find(|row| row.id() == id).cloned().ok_or_else(||
            LibraryError::not_found(format!("{} item not found for {}", self.table_name, id).as_str()))
    }

    pub(crate) fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        let pos = self.position(id).ok_or_else(|| LibraryError::not_found(
            format!("{} has no {}", self.table_name, id).as_str()))?;
        self.rows.remove(pos);
        debug!(table = self.table_name.as_str(), id, "deleted row");
        Ok(1)
    }

    // Rows match when every predicate entry equals the named field; the page token is a row offset.
    pub(crate) fn query(&self, predicate: &HashMap<String, String>,
                        page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<E>> {
        let offset = parse_page(page)?;
        let mut matched = self.rows.iter()
            .filter(|row| predicate.iter().all(|(k, v)| row.field(k.as_str()).as_deref() == Some(v.as_str())))
            .skip(offset);
        let records: Vec<E> = matched.by_ref().take(page_size).cloned().collect();
        let next_page = if matched.next().is_some() {
            Some(offset.saturating_add(records.len()).to_string())
        } else {
            None
        };
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }
}

fn parse_page(page: Option<&str>) -> LibraryResult<usize> {
    match page {
        Some(token) => token.parse::<usize>().map_err(|err| LibraryError::validation(
            format!("invalid page token {} {}", token, err).as_str(), Some("400".to_string()))),
        None => Ok(0),
    }
}
