use tracing::{debug, info};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher forwards events to the tracing subscriber and keeps nothing.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(event = event.name.as_str(), group = event.group.as_str(), key = event.key.as_str(),
            kind = ?event.kind, "{}", event.notification().unwrap_or_default());
        debug!(event = event.name.as_str(), "{}", json);
        Ok(())
    }
}
