use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICES: [&str; 3] = ["Consultoría", "Desarrollo de Software", "Soporte Técnico"];

/// Body of the services endpoint. Order is significant and preserved end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub services: Vec<String>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<String>) -> Self {
        Self { services }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect())
    }
}

/// Reply for any POST request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAck {
    pub message: String,
}

impl Default for PostAck {
    fn default() -> Self {
        Self {
            message: "POST request handled".to_string(),
        }
    }
}

/// A rendered heading plus list, ready to replace a container's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub html: String,
    pub item_count: usize,
}
