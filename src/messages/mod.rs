use tokio::sync::oneshot;
use crate::domain::{OrderLine, Product, ProductId, ProductView};
use crate::error::StoreError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the store service. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum StoreRequest {
    AddProduct {
        product: Product,
        respond_to: ServiceResponse<ProductId, StoreError>,
    },
    RemoveProduct {
        id: ProductId,
        respond_to: ServiceResponse<ProductView, StoreError>,
    },
    GetProduct {
        id: ProductId,
        respond_to: ServiceResponse<Option<ProductView>, StoreError>,
    },
    ListProducts {
        respond_to: ServiceResponse<Vec<ProductView>, StoreError>,
    },
    TotalQuantity {
        respond_to: ServiceResponse<u64, StoreError>,
    },
    Order {
        lines: Vec<OrderLine>,
        respond_to: ServiceResponse<f64, StoreError>,
    },
    SetQuantity {
        id: ProductId,
        quantity: u32,
        respond_to: ServiceResponse<ProductView, StoreError>,
    },
    Activate {
        id: ProductId,
        respond_to: ServiceResponse<ProductView, StoreError>,
    },
    Deactivate {
        id: ProductId,
        respond_to: ServiceResponse<ProductView, StoreError>,
    },
    Shutdown,
    #[cfg(test)]
    ProductCount {
        respond_to: ServiceResponse<usize, StoreError>,
    },
}
