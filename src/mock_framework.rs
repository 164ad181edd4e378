//! # Mock Framework
//!
//! Utilities for testing code that talks to the store service without
//! running one.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then use helpers like [`expect_order`] to inspect each request
//! and answer it by hand.

use tokio::sync::mpsc;
use crate::clients::StoreClient;
use crate::domain::{OrderLine, ProductView};
use crate::error::StoreError;
use crate::messages::{ServiceResponse, StoreRequest};

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a ListProducts request
pub async fn expect_list_products(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<ServiceResponse<Vec<ProductView>, StoreError>> {
    match receiver.recv().await {
        Some(StoreRequest::ListProducts { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a TotalQuantity request
pub async fn expect_total_quantity(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<ServiceResponse<u64, StoreError>> {
    match receiver.recv().await {
        Some(StoreRequest::TotalQuantity { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Order request
pub async fn expect_order(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(Vec<OrderLine>, ServiceResponse<f64, StoreError>)> {
    match receiver.recv().await {
        Some(StoreRequest::Order { lines, respond_to }) => Some((lines, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let total_task = tokio::spawn(async move { client.total_quantity().await });

        let responder = expect_total_quantity(&mut receiver).await.expect("Expected TotalQuantity request");
        responder.send(Ok(42)).unwrap();

        let result = total_task.await.unwrap();
        assert_eq!(result, Ok(42));
    }

    #[tokio::test]
    async fn test_unexpected_request_is_none() {
        let (client, mut receiver) = create_mock_client(10);

        let list_task = tokio::spawn(async move { client.list_products().await });

        assert!(expect_order(&mut receiver).await.is_none());
        // The responder was dropped with the unmatched request
        assert!(matches!(list_task.await.unwrap(), Err(StoreError::ActorCommunicationError(_))));
    }
}
