//! 订单行

use serde::{Deserialize, Serialize};
use shop_errors::{AppError, AppResult};

/// 订单行，归属于订单，没有独立身份
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    /// 数量（正整数）
    pub quantity: i32,
    /// 单价（非负）
    pub price: f64,
}

impl OrderItem {
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i32,
        price: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            price,
        }
    }

    /// 行金额 = 单价 × 数量
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn validate(&self, index: usize) -> AppResult<()> {
        if self.quantity <= 0 {
            return Err(AppError::validation(format!(
                "items[{}].quantity must be positive",
                index
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::validation(format!(
                "items[{}].price must be a non-negative number",
                index
            )));
        }
        Ok(())
    }
}
