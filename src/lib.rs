pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
#[cfg(feature = "cli")]
pub use config::FetchConfig;
pub use config::ServerSettings;

pub use core::{engine::RenderEngine, pipeline::ServicesPipeline};
pub use utils::error::{PortalError, Result};
