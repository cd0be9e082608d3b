use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    Log,
    Memory,
}

impl From<String> for GatewayPublisherVia {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "memory" => GatewayPublisherVia::Memory,
            _ => GatewayPublisherVia::Log,
        }
    }
}

impl Display for GatewayPublisherVia {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            GatewayPublisherVia::Log => write!(f, "log"),
            GatewayPublisherVia::Memory => write!(f, "memory"),
        }
    }
}
