use tracing::{error, info, instrument};
use crate::actors::StoreService;
use crate::app_system::StoreConfig;
use crate::clients::StoreClient;
use crate::domain::{Product, Store};
use crate::error::StoreResult;

/// Owns the running store service and hands out its client.
///
/// Responsible for starting the service and for shutting it down in order.
pub struct StoreSystem {
    pub store_client: StoreClient,
    handle: tokio::task::JoinHandle<()>,
}

impl StoreSystem {
    /// Starts the store service with the given catalog.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(name = "store_system", skip(config, products), fields(catalog_size = products.len()))]
    pub fn new(config: &StoreConfig, products: Vec<Product>) -> Self {
        info!("Starting store system");

        let store = Store::new(products).with_validation(config.order_validation);
        let (service, store_client) = StoreService::new(config.channel_capacity, store);
        let handle = tokio::spawn(service.run());

        info!("Store system started successfully");

        Self { store_client, handle }
    }

    /// Stops the service and waits for its task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system");

        if let Err(e) = self.store_client.shutdown().await {
            // Already stopped; the handle still has to be joined
            error!(error = %e, "Shutdown request not delivered");
        }

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Store service task failed");
            return Err(format!("Store service task failed: {:?}", e));
        }

        info!("Store system shutdown complete");
        Ok(())
    }
}

/// The catalog the store opens with.
pub fn seed_catalog() -> StoreResult<Vec<Product>> {
    Ok(vec![
        Product::new("MacBook Air M2", 1450.0, 100)?,
        Product::new("Bose QuietComfort Earbuds", 250.0, 500)?,
        Product::new("Google Pixel 7", 500.0, 250)?,
    ])
}
