#[cfg(test)]
mod tests {
    use crate::app_system::{seed_catalog, StoreConfig, StoreSystem};
    use crate::domain::{OrderLine, OrderValidation, Product, ProductView};
    use crate::error::StoreError;

    fn find<'a>(products: &'a [ProductView], name: &str) -> &'a ProductView {
        products.iter().find(|p| p.name == name).expect("product listed")
    }

    #[tokio::test]
    async fn test_order_flow_through_system() {
        let system = StoreSystem::new(&StoreConfig::default(), seed_catalog().unwrap());
        let client = system.store_client.clone();

        let products = client.list_products().await.unwrap();
        let mac = find(&products, "MacBook Air M2").id;
        let bose = find(&products, "Bose QuietComfort Earbuds").id;

        let total = client.order(vec![OrderLine::new(mac, 1), OrderLine::new(bose, 2)]).await.unwrap();
        assert_eq!(total, 1950.0);

        let products = client.list_products().await.unwrap();
        assert_eq!(find(&products, "MacBook Air M2").quantity, 99);
        assert_eq!(find(&products, "Bose QuietComfort Earbuds").quantity, 498);

        // Rejected orders leave stock alone
        let err = client.order(vec![OrderLine::new(mac, 200)]).await.unwrap_err();
        assert!(matches!(err, StoreError::InsufficientStock { .. }));
        assert_eq!(client.get_product(mac).await.unwrap().unwrap().quantity, 99);

        client.deactivate(bose).await.unwrap();
        let err = client.order(vec![OrderLine::new(mac, 1), OrderLine::new(bose, 1)]).await.unwrap_err();
        assert_eq!(err, StoreError::InactiveProduct("Bose QuietComfort Earbuds".to_string()));
        assert_eq!(client.get_product(mac).await.unwrap().unwrap().quantity, 99);
        assert_eq!(client.get_product(bose).await.unwrap().unwrap().quantity, 498);

        // Inactive stock still counts toward the total
        assert_eq!(client.total_quantity().await.unwrap(), 99 + 498 + 250);
        assert_eq!(client.list_products().await.unwrap().len(), 2);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_repeated_lines_partially_commit_by_default() {
        let system = StoreSystem::new(&StoreConfig::default(), seed_catalog().unwrap());
        let client = system.store_client.clone();
        let mac = find(&client.list_products().await.unwrap(), "MacBook Air M2").id;

        let err = client.order(vec![OrderLine::new(mac, 60), OrderLine::new(mac, 60)]).await.unwrap_err();

        assert!(matches!(err, StoreError::InsufficientStock { requested: 60, available: 40, .. }));
        assert_eq!(client.get_product(mac).await.unwrap().unwrap().quantity, 40);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_aggregate_validation_through_config() {
        let config = StoreConfig {
            order_validation: OrderValidation::Aggregate,
            ..StoreConfig::default()
        };
        let system = StoreSystem::new(&config, seed_catalog().unwrap());
        let client = system.store_client.clone();
        let mac = find(&client.list_products().await.unwrap(), "MacBook Air M2").id;

        let err = client.order(vec![OrderLine::new(mac, 60), OrderLine::new(mac, 60)]).await.unwrap_err();

        assert!(matches!(err, StoreError::InsufficientStock { requested: 120, available: 100, .. }));
        assert_eq!(client.get_product(mac).await.unwrap().unwrap().quantity, 100);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_catalog_changes_through_system() {
        let system = StoreSystem::new(&StoreConfig::default(), Vec::new());
        let client = system.store_client.clone();

        assert_eq!(client.order(Vec::new()).await, Ok(0.0));

        let first = client.add_product(Product::new("Google Pixel 7", 500.0, 2).unwrap()).await.unwrap();
        let second = client.add_product(Product::new("Google Pixel 7", 500.0, 2).unwrap()).await.unwrap();
        assert_ne!(first, second);

        assert_eq!(client.order(vec![OrderLine::new(first, 2)]).await, Ok(1000.0));
        let listed: Vec<_> = client.list_products().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(listed, vec![second]);

        client.remove_product(first).await.unwrap();
        let err = client.order(vec![OrderLine::new(first, 1)]).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound(first.to_string()));
        assert_eq!(client.total_quantity().await.unwrap(), 2);

        system.shutdown().await.unwrap();
    }
}
