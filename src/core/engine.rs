use crate::core::Pipeline;
use crate::utils::error::{PortalError, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// Drives one fetch-render-replace cycle per `run` call.
///
/// At most one run is in flight per engine; an overlapping call fails fast with
/// [`PortalError::FetchInFlight`] and leaves the container untouched.
pub struct RenderEngine<P: Pipeline> {
    pipeline: P,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<P: Pipeline> RenderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn run(&self) -> Result<String> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Fetch requested while another is still pending");
            return Err(PortalError::FetchInFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        tracing::info!("Fetching services...");
        let catalog = self.pipeline.extract().await?;
        tracing::info!("Fetched {} services", catalog.len());

        let rendered = self.pipeline.transform(catalog).await?;
        tracing::debug!("Rendered {} list items", rendered.item_count);

        let location = self.pipeline.load(rendered).await?;
        tracing::info!("Container updated: {}", location);

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RenderedList, ServiceCatalog};
    use crate::core::render::render_service_list;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    struct GatedPipeline {
        gate: Notify,
        loads: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Pipeline for GatedPipeline {
        async fn extract(&self) -> Result<ServiceCatalog> {
            self.gate.notified().await;
            Ok(ServiceCatalog::new(vec!["Consultoría".to_string()]))
        }

        async fn transform(&self, catalog: ServiceCatalog) -> Result<RenderedList> {
            Ok(render_service_list("h", &catalog.services))
        }

        async fn load(&self, rendered: RenderedList) -> Result<String> {
            self.loads.lock().unwrap().push(rendered.html);
            Ok("container".to_string())
        }
    }

    #[tokio::test]
    async fn test_overlapping_run_is_rejected() {
        let engine = RenderEngine::new(GatedPipeline {
            gate: Notify::new(),
            loads: Mutex::new(Vec::new()),
        });

        let first = engine.run();
        let second = async {
            let result = engine.run().await;
            engine.pipeline.gate.notify_one();
            result
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first.unwrap(), "container");
        assert!(matches!(second, Err(PortalError::FetchInFlight)));
        assert_eq!(engine.pipeline.loads.lock().unwrap().len(), 1);
        assert!(!engine.is_in_flight());
    }

    #[tokio::test]
    async fn test_guard_released_after_failure() {
        struct FailingPipeline;

        #[async_trait]
        impl Pipeline for FailingPipeline {
            async fn extract(&self) -> Result<ServiceCatalog> {
                Err(PortalError::MissingField {
                    field: "services".to_string(),
                })
            }

            async fn transform(&self, _catalog: ServiceCatalog) -> Result<RenderedList> {
                unreachable!()
            }

            async fn load(&self, _rendered: RenderedList) -> Result<String> {
                unreachable!()
            }
        }

        let engine = RenderEngine::new(FailingPipeline);
        assert!(engine.run().await.is_err());
        assert!(!engine.is_in_flight());
        assert!(matches!(
            engine.run().await,
            Err(PortalError::MissingField { .. })
        ));
    }
}
