pub mod engine;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod services;
pub mod static_files;

pub use crate::domain::model::{PostAck, RenderedList, ServiceCatalog};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
