use crate::core::render::DEFAULT_HEADING;
use crate::core::services::DEFAULT_SERVICES_FIELD;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fetch_services")]
#[command(about = "Fetch the service list and render it as an HTML fragment")]
pub struct FetchConfig {
    #[arg(long, default_value = "http://localhost:8080/api/services")]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_SERVICES_FIELD, help = "JSON field holding the service names")]
    pub field: String,

    #[arg(long, default_value = DEFAULT_HEADING)]
    pub heading: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "services.html", help = "Container file replaced on every fetch")]
    pub output_file: String,

    #[arg(long, help = "Request timeout; no timeout when omitted")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for FetchConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn services_field(&self) -> &str {
        &self.field
    }

    fn heading(&self) -> &str {
        &self.heading
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for FetchConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("field", &self.field)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("output_file", &self.output_file)?;
        Ok(())
    }
}
