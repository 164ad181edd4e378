use tokio::sync::mpsc;
use crate::domain::{OrderLine, Product, ProductId, ProductView};
use crate::error::{StoreError, StoreResult};
use crate::messages::StoreRequest;

/// Client for interacting with the store service.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    pub async fn shutdown(&self) -> StoreResult<()> {
        self.sender
            .send(StoreRequest::Shutdown)
            .await
            .map_err(|_| StoreError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(StoreClient => fn add_product(product: Product) -> ProductId as StoreRequest::AddProduct);
client_method!(StoreClient => fn remove_product(id: ProductId) -> ProductView as StoreRequest::RemoveProduct);
client_method!(StoreClient => fn get_product(id: ProductId) -> Option<ProductView> as StoreRequest::GetProduct);
client_method!(StoreClient => fn list_products() -> Vec<ProductView> as StoreRequest::ListProducts);
client_method!(StoreClient => fn total_quantity() -> u64 as StoreRequest::TotalQuantity);
client_method!(StoreClient => fn order(lines: Vec<OrderLine>) -> f64 as StoreRequest::Order);
client_method!(StoreClient => fn set_quantity(id: ProductId, quantity: u32) -> ProductView as StoreRequest::SetQuantity);
client_method!(StoreClient => fn activate(id: ProductId) -> ProductView as StoreRequest::Activate);
client_method!(StoreClient => fn deactivate(id: ProductId) -> ProductView as StoreRequest::Deactivate);

// Test-only method for inspecting service state
#[cfg(test)]
client_method!(StoreClient => fn product_count() -> usize as StoreRequest::ProductCount);
