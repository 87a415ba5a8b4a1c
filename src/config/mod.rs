#[cfg(feature = "cli")]
pub mod cli;
pub mod server_config;

#[cfg(feature = "cli")]
pub use cli::FetchConfig;
pub use server_config::ServerSettings;
