use std::collections::HashMap;

use tracing::{debug, error};

use super::order::{OrderLine, OrderValidation};
use super::product::{Product, ProductId, ProductView};
use crate::error::{StoreError, StoreResult};

/// Registry of products and the authority for catalog queries and orders.
///
/// Products keep their insertion order. Membership is by [`ProductId`].
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
    validation: OrderValidation,
}

impl Store {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            validation: OrderValidation::default(),
        }
    }

    pub fn with_validation(mut self, validation: OrderValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn validation(&self) -> OrderValidation {
        self.validation
    }

    /// Appends a product. Duplicates are not checked.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.push(product);
        id
    }

    /// Removes the product with the given id and hands it back.
    pub fn remove_product(&mut self, id: ProductId) -> StoreResult<Product> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.products.remove(index))
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// Sum of stock over every registered product, inactive ones included.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity())).sum()
    }

    /// Snapshots of the active products, in registry order.
    pub fn all_products(&self) -> Vec<ProductView> {
        self.products
            .iter()
            .filter(|p| p.is_active())
            .map(Product::view)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Processes a multi-line order and returns its total price.
    ///
    /// Every line is validated before any product is touched; the lines are
    /// then bought in order. With [`OrderValidation::PerLine`] two lines for
    /// the same product are checked separately, so the commit pass can still
    /// run out of stock part way through. That failure is returned as-is and
    /// the lines already bought stay bought.
    pub fn order(&mut self, lines: &[OrderLine]) -> StoreResult<f64> {
        self.validate(lines)?;

        let mut total = 0.0;
        for line in lines {
            let product = self
                .product_mut(line.product)
                .ok_or_else(|| StoreError::NotFound(line.product.to_string()))?;
            match product.buy(line.quantity) {
                Ok(line_total) => total += line_total,
                Err(e) => {
                    error!(product_id = %line.product, error = %e, "Order failed after validation, earlier lines remain committed");
                    return Err(e);
                }
            }
        }

        debug!(lines = lines.len(), total, "Order committed");
        Ok(total)
    }

    fn validate(&self, lines: &[OrderLine]) -> StoreResult<()> {
        let mut demand: HashMap<ProductId, u64> = HashMap::new();

        for line in lines {
            let product = self
                .product(line.product)
                .ok_or_else(|| StoreError::NotFound(line.product.to_string()))?;
            if !product.is_active() {
                return Err(StoreError::InactiveProduct(product.name().to_string()));
            }

            let requested = match self.validation {
                OrderValidation::PerLine => u64::from(line.quantity),
                OrderValidation::Aggregate => {
                    let total = demand.entry(line.product).or_insert(0);
                    *total += u64::from(line.quantity);
                    *total
                }
            };
            if requested > u64::from(product.quantity()) {
                return Err(StoreError::InsufficientStock {
                    product: product.name().to_string(),
                    requested,
                    available: product.quantity(),
                });
            }
        }
        Ok(())
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}
