use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// Versioned lets a repository advance the version and update time after a write
pub trait Versioned : Identifiable {
    fn advance(&mut self);
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub publisher: GatewayPublisherVia,
    pub page_size: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            publisher: GatewayPublisherVia::Log,
            page_size: 100,
        }
    }

    pub fn with_publisher(mut self, publisher: GatewayPublisherVia) -> Self {
        self.publisher = publisher;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(GatewayPublisherVia::Log, config.publisher);
        assert_eq!(100, config.page_size);
    }

    #[test]
    fn test_should_override_publisher() {
        let config = Configuration::new("test").with_publisher(GatewayPublisherVia::Memory);
        assert_eq!(GatewayPublisherVia::Memory, config.publisher);
    }
}
