use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{StoreError, StoreResult};

static NEXT_PRODUCT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a product. Two products with identical attributes still
/// have different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl ProductId {
    fn next() -> Self {
        Self(NEXT_PRODUCT_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product in the inventory.
///
/// Not `Clone`: a product is a live entity, and a copy would carry the same
/// id with diverging stock. Use [`Product::view`] for a snapshot.
#[derive(Debug)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    quantity: u32,
    active: bool,
}

/// Read-only snapshot of a product, handed out by store queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub active: bool,
}

impl Product {
    /// Creates a new, active product.
    ///
    /// # Errors
    /// `InvalidArgument` when the name is blank or the price is negative or
    /// not a finite number.
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> StoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::InvalidArgument("Product name cannot be empty".to_string()));
        }
        if !price.is_finite() {
            return Err(StoreError::InvalidArgument(format!("Price must be a number, got {}", price)));
        }
        if price < 0.0 {
            return Err(StoreError::InvalidArgument(format!("Price cannot be negative, got {}", price)));
        }

        Ok(Self {
            id: ProductId::next(),
            name,
            price,
            quantity,
            active: true,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Sets the stock level (not a delta).
    ///
    /// Dropping to zero deactivates the product. A positive quantity never
    /// reactivates it; that takes an explicit [`Product::activate`].
    pub fn set_quantity(&mut self, quantity: u32) -> StoreResult<()> {
        self.quantity = quantity;
        if self.quantity == 0 {
            self.deactivate();
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Buys `quantity` units and returns the line total.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `InactiveProduct` if the product is deactivated
    /// - `InvalidArgument` if `quantity` is zero
    /// - `InsufficientStock` if `quantity` exceeds the stock on hand
    pub fn buy(&mut self, quantity: u32) -> StoreResult<f64> {
        if !self.active {
            return Err(StoreError::InactiveProduct(self.name.clone()));
        }
        if quantity == 0 {
            return Err(StoreError::InvalidArgument("Quantity to buy must be positive".to_string()));
        }
        if quantity > self.quantity {
            return Err(StoreError::InsufficientStock {
                product: self.name.clone(),
                requested: u64::from(quantity),
                available: self.quantity,
            });
        }

        let total = self.price * f64::from(quantity);
        self.quantity -= quantity;
        if self.quantity == 0 {
            self.deactivate();
        }
        Ok(total)
    }

    pub fn view(&self) -> ProductView {
        ProductView {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
            active: self.active,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Price: {}, Quantity: {}", self.name, self.price, self.quantity)
    }
}

impl fmt::Display for ProductView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Price: {}, Quantity: {}", self.name, self.price, self.quantity)
    }
}
