use crate::core::domain::Identifiable;
use crate::core::library::Role;

pub mod domain;
pub mod factory;
pub mod librarian;
pub mod repository;

pub trait User: Identifiable {
    fn name(&self) -> &str;
    fn is_librarian(&self) -> bool;
    fn is_role(&self, match_role: Role) -> bool;
    fn is_regular(&self) -> bool;
}
