use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use crate::clients::StoreClient;
use crate::domain::{OrderLine, Product, ProductId, ProductView, Store};
use crate::error::{StoreError, StoreResult};
use crate::messages::{ServiceResponse, StoreRequest};

// =============================================================================
// STORE SERVICE
// =============================================================================

/// Owns one [`Store`] and handles requests one at a time.
///
/// An order arrives as a single message, so nothing else can touch the
/// catalog between its validation and commit passes.
pub struct StoreService {
    receiver: mpsc::Receiver<StoreRequest>,
    store: Store,
}

impl StoreService {
    pub fn new(buffer_size: usize, store: Store) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = StoreClient::new(sender);
        (service, client)
    }

    #[instrument(name = "store_service", skip(self))]
    pub async fn run(mut self) {
        info!(products = self.store.len(), validation = ?self.store.validation(), "StoreService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::AddProduct { product, respond_to } => {
                    self.handle_add_product(product, respond_to);
                }
                StoreRequest::RemoveProduct { id, respond_to } => {
                    self.handle_remove_product(id, respond_to);
                }
                StoreRequest::GetProduct { id, respond_to } => {
                    self.handle_get_product(id, respond_to);
                }
                StoreRequest::ListProducts { respond_to } => {
                    self.handle_list_products(respond_to);
                }
                StoreRequest::TotalQuantity { respond_to } => {
                    self.handle_total_quantity(respond_to);
                }
                StoreRequest::Order { lines, respond_to } => {
                    self.handle_order(lines, respond_to);
                }
                StoreRequest::SetQuantity { id, quantity, respond_to } => {
                    self.handle_set_quantity(id, quantity, respond_to);
                }
                StoreRequest::Activate { id, respond_to } => {
                    let result = self.update_product(id, |p| {
                        p.activate();
                        Ok(())
                    });
                    let _ = respond_to.send(result);
                }
                StoreRequest::Deactivate { id, respond_to } => {
                    let result = self.update_product(id, |p| {
                        p.deactivate();
                        Ok(())
                    });
                    let _ = respond_to.send(result);
                }
                StoreRequest::Shutdown => {
                    info!("StoreService shutting down");
                    break;
                }
                #[cfg(test)]
                StoreRequest::ProductCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!("StoreService stopped");
    }

    #[instrument(fields(product_name = %product.name()), skip(self, product, respond_to))]
    fn handle_add_product(&mut self, product: Product, respond_to: ServiceResponse<ProductId, StoreError>) {
        debug!("Processing add_product request");
        let id = self.store.add_product(product);
        info!(product_id = %id, "Product added");
        let _ = respond_to.send(Ok(id));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_remove_product(&mut self, id: ProductId, respond_to: ServiceResponse<ProductView, StoreError>) {
        debug!("Processing remove_product request");
        let result = self.store.remove_product(id).map(|p| p.view());
        match &result {
            Ok(view) => info!(product_name = %view.name, "Product removed"),
            Err(e) => warn!(error = %e, "Product removal failed"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_get_product(&self, id: ProductId, respond_to: ServiceResponse<Option<ProductView>, StoreError>) {
        debug!("Processing get_product request");
        let product = self.store.product(id).map(Product::view);
        match &product {
            Some(product) => debug!(product_name = %product.name, quantity = product.quantity, "Product found"),
            None => debug!("Product not found"),
        }
        let _ = respond_to.send(Ok(product));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_products(&self, respond_to: ServiceResponse<Vec<ProductView>, StoreError>) {
        debug!("Processing list_products request");
        let products = self.store.all_products();
        debug!(active = products.len(), "Listed active products");
        let _ = respond_to.send(Ok(products));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_total_quantity(&self, respond_to: ServiceResponse<u64, StoreError>) {
        debug!("Processing total_quantity request");
        let _ = respond_to.send(Ok(self.store.total_quantity()));
    }

    #[instrument(fields(lines = lines.len()), skip(self, lines, respond_to))]
    fn handle_order(&mut self, lines: Vec<OrderLine>, respond_to: ServiceResponse<f64, StoreError>) {
        info!("Processing order request");
        let result = self.store.order(&lines);
        match &result {
            Ok(total) => info!(total = %total, "Order placed successfully"),
            Err(e) => error!(error = %e, "Order rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id, quantity = %quantity), skip(self, respond_to))]
    fn handle_set_quantity(&mut self, id: ProductId, quantity: u32, respond_to: ServiceResponse<ProductView, StoreError>) {
        debug!("Processing set_quantity request");
        let result = self.update_product(id, |p| p.set_quantity(quantity));
        if let Ok(view) = &result {
            info!(active = view.active, "Stock level set");
        }
        let _ = respond_to.send(result);
    }

    fn update_product(
        &mut self,
        id: ProductId,
        f: impl FnOnce(&mut Product) -> StoreResult<()>,
    ) -> StoreResult<ProductView> {
        let product = self
            .store
            .product_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        f(product)?;
        Ok(product.view())
    }
}
