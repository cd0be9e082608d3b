use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

pub trait EventPublisher: Sync + Send {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;

    // events kept by the publisher, empty for publishers that only forward
    fn published(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        Ok(vec![])
    }
}
