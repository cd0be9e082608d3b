use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn year(&self) -> i32;
    fn status(&self) -> BookStatus;
    fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }
    // no precondition, callers check availability first
    fn mark_as_taken(&mut self);
    fn mark_as_returned(&mut self);
    fn describe(&self) -> String;
}
