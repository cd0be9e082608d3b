use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

pub const NOTIFICATION: &str = "notification";
pub const BRANCH: &str = "branch";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent records one successful change to the catalog or the registry
// along with the notification shown for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, notification: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(DomainEventType::Added, name, group, key, notification, data)
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, notification: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(DomainEventType::Updated, name, group, key, notification, data)
    }

    pub fn deleted<T: Serialize>(name: &str, group: &str, key: &str, notification: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(DomainEventType::Deleted, name, group, key, notification, data)
    }

    pub fn with_metadata(mut self, name: &str, value: &str) -> Self {
        self.metadata.insert(name.to_string(), value.to_string());
        self
    }

    pub fn notification(&self) -> Option<&str> {
        self.metadata.get(NOTIFICATION).map(String::as_str)
    }

    fn build<T: Serialize>(kind: DomainEventType, name: &str, group: &str, key: &str,
                           notification: &str, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: HashMap::from([(NOTIFICATION.to_string(), notification.to_string())]),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::{DomainEvent, DomainEventType, BRANCH};

    #[test]
    fn test_should_carry_notification() {
        let event = DomainEvent::added("books", "books", "id-1", "War and Peace added to the catalog.", &1)
            .expect("build event");
        assert_eq!("books", event.name.as_str());
        assert_eq!("id-1", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert_eq!(Some("War and Peace added to the catalog."), event.notification());
    }

    #[test]
    fn test_should_tag_kind() {
        let updated = DomainEvent::updated("book_borrowed", "books", "id-1", "Anna borrowed War and Peace.", &1)
            .expect("build event");
        assert_eq!(DomainEventType::Updated, updated.kind);
        let deleted = DomainEvent::deleted("books", "books", "id-1", "removed.", &"War and Peace")
            .expect("build event");
        assert_eq!(DomainEventType::Deleted, deleted.kind);
        assert_eq!("\"War and Peace\"", deleted.json_data.as_str());
    }

    #[test]
    fn test_should_add_metadata() {
        let event = DomainEvent::added("users", "users", "id-2", "Anna registered.", &1)
            .expect("build event")
            .with_metadata(BRANCH, "main");
        assert_eq!(Some(&"main".to_string()), event.metadata.get(BRANCH));
        assert_eq!(Some("Anna registered."), event.notification());
    }

    #[test]
    fn test_should_serialize_event() {
        let event = DomainEvent::added("users", "users", "id-2", "Anna registered.", &1).expect("build event");
        let json = serde_json::to_string(&event).expect("should serialize");
        let loaded: DomainEvent = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(event.event_id, loaded.event_id);
        assert_eq!(event.metadata, loaded.metadata);
    }
}
