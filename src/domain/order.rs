use std::str::FromStr;

use super::product::ProductId;

/// One line of an order: which product, and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product: ProductId, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

impl From<(ProductId, u32)> for OrderLine {
    fn from((product, quantity): (ProductId, u32)) -> Self {
        Self { product, quantity }
    }
}

/// How the validation pass of [`Store::order`](super::Store::order) checks stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderValidation {
    /// Every line is checked on its own against the pre-order stock.
    /// Repeated lines for one product can pass validation and still
    /// overcommit during the commit pass.
    #[default]
    PerLine,
    /// Demand is summed per product across the whole order before the
    /// stock check, so overcommitting orders are rejected up front.
    Aggregate,
}

impl FromStr for OrderValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-line" | "per_line" | "perline" => Ok(Self::PerLine),
            "aggregate" => Ok(Self::Aggregate),
            other => Err(format!("unknown order validation mode: {}", other)),
        }
    }
}
