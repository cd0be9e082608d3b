use std::sync::{Arc, Mutex};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher buffers events; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.lock().map_err(|err|
            LibraryError::runtime(format!("event buffer poisoned {:?}", err).as_str(), None))?;
        events.push(event.clone());
        Ok(())
    }

    fn published(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        let events = self.events.lock().map_err(|err|
            LibraryError::runtime(format!("event buffer poisoned {:?}", err).as_str(), None))?;
        Ok(events.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_publish_to_memory() {
        let event = DomainEvent::added("users", "users", "key", "Anna registered.", &"Anna").expect("build event");
        let publisher = MemoryPublisher::new();
        let handle = publisher.clone();
        publisher.publish(&event).expect("should publish");
        let events = handle.published().expect("should list");
        assert_eq!(1, events.len());
        assert_eq!(event.event_id, events[0].event_id);
    }
}
