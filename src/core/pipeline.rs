use crate::core::render::render_service_list;
use crate::core::services::extract_services;
use crate::core::{ConfigProvider, Pipeline, RenderedList, ServiceCatalog, Storage};
use crate::utils::error::{PortalError, Result};
use reqwest::Client;

/// Fetches the service list, renders it, and replaces the container file.
pub struct ServicesPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ServicesPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            storage,
            config,
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ServicesPipeline<S, C> {
    async fn extract(&self) -> Result<ServiceCatalog> {
        let endpoint = self.config.endpoint();
        tracing::debug!("Making API request to: {}", endpoint);

        let response = self.client.get(endpoint).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(PortalError::UnexpectedStatus {
                url: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        // 解析失敗屬於資料錯誤，不是網路錯誤
        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        extract_services(&body, self.config.services_field())
    }

    async fn transform(&self, catalog: ServiceCatalog) -> Result<RenderedList> {
        Ok(render_service_list(self.config.heading(), &catalog.services))
    }

    async fn load(&self, rendered: RenderedList) -> Result<String> {
        let output_file = self.config.output_file();

        // 每次都整個覆寫容器內容
        tracing::debug!(
            "Writing {} list items ({} bytes) to {}",
            rendered.item_count,
            rendered.html.len(),
            output_file
        );
        self.storage
            .write_file(output_file, rendered.html.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.config.output_path(), output_file))
    }
}
