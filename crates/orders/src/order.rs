use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{
    find_by_id, find_by_id_mut, DomainError, DomainResult, Entity, Money, OrderId, ProductId, UserId,
};

/// Sales tax applied on top of the order subtotal.
pub const TAX_PERCENT: u32 = 15;

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Completed and cancelled orders can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Order line: variant, quantity, unit price at purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub variant_sku: String,
    pub quantity: u32,
    pub price: Money,
}

impl OrderItem {
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    /// Amount charged, as recorded at checkout.
    pub total: Money,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn items_total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary::new(self.total)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.items.is_empty() {
            return Err(DomainError::validation(format!("order {} has no items", self.id)));
        }
        if self.items.iter().any(|i| i.quantity == 0) {
            return Err(DomainError::validation(format!(
                "order {} has a zero-quantity line",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Subtotal, tax and grand total of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    pub fn new(subtotal: Money) -> Self {
        let tax = subtotal.percent(TAX_PERCENT);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        find_by_id(&self.orders, id)
    }

    pub fn by_customer(&self, customer_id: &UserId) -> Vec<&Order> {
        self.orders.iter().filter(|o| &o.customer_id == customer_id).collect()
    }

    pub fn add_order(&mut self, order: Order) -> DomainResult<()> {
        order.validate()?;
        if self.order(&order.id).is_some() {
            return Err(DomainError::conflict(format!("order {} already exists", order.id)));
        }
        tracing::info!(order_id = %order.id, total = %order.total, "order added");
        self.orders.push(order);
        Ok(())
    }

    pub fn update_status(&mut self, id: &OrderId, status: OrderStatus) -> DomainResult<()> {
        let order = find_by_id_mut(&mut self.orders, id)
            .ok_or_else(|| DomainError::not_found(format!("order {id}")))?;
        if order.status.is_final() && order.status != status {
            return Err(DomainError::invariant(format!(
                "order {id} is {:?} and cannot change status",
                order.status
            )));
        }
        order.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(id).unwrap(),
            customer_id: UserId::new("CUST-001").unwrap(),
            date: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
            status,
            total: Money::from_minor(8997),
            items: vec![
                OrderItem {
                    product_id: ProductId::new("1").unwrap(),
                    variant_sku: "CT-S-WHT".to_string(),
                    quantity: 2,
                    price: Money::from_minor(1999),
                },
                OrderItem {
                    product_id: ProductId::new("2").unwrap(),
                    variant_sku: "SFJ-30-BLU".to_string(),
                    quantity: 1,
                    price: Money::from_minor(4999),
                },
            ],
        }
    }

    #[test]
    fn summary_adds_fifteen_percent_tax() {
        let summary = OrderSummary::new(Money::from_minor(10000));
        assert_eq!(summary.tax, Money::from_minor(1500));
        assert_eq!(summary.total, Money::from_minor(11500));

        let rounded = order("ORD-001", OrderStatus::Completed).summary();
        // 89.97 * 0.15 = 13.4955
        assert_eq!(rounded.tax, Money::from_minor(1350));
        assert_eq!(rounded.total, Money::from_minor(10347));
    }

    #[test]
    fn items_total_sums_lines() {
        assert_eq!(order("ORD-001", OrderStatus::Completed).items_total(), Money::from_minor(8997));
    }

    #[test]
    fn duplicate_order_id_is_a_conflict() {
        let mut book = OrderBook::new();
        book.add_order(order("ORD-001", OrderStatus::Processing)).unwrap();
        match book.add_order(order("ORD-001", OrderStatus::Processing)) {
            Err(DomainError::Conflict(_)) => {}
            other => panic!("Expected Conflict error, got {other:?}"),
        }
        assert_eq!(book.orders().len(), 1);
    }

    #[test]
    fn empty_order_is_rejected() {
        let mut empty = order("ORD-009", OrderStatus::Processing);
        empty.items.clear();
        let mut book = OrderBook::new();
        assert!(matches!(book.add_order(empty), Err(DomainError::Validation(_))));
    }

    #[test]
    fn final_orders_cannot_change_status() {
        let mut book = OrderBook::with_orders(vec![
            order("ORD-001", OrderStatus::Processing),
            order("ORD-002", OrderStatus::Cancelled),
        ]);
        let open = OrderId::new("ORD-001").unwrap();
        book.update_status(&open, OrderStatus::Shipped).unwrap();
        book.update_status(&open, OrderStatus::Completed).unwrap();
        assert!(book.update_status(&open, OrderStatus::Processing).is_err());

        let cancelled = OrderId::new("ORD-002").unwrap();
        match book.update_status(&cancelled, OrderStatus::Shipped) {
            Err(DomainError::InvariantViolation(_)) => {}
            other => panic!("Expected InvariantViolation error, got {other:?}"),
        }
    }

    #[test]
    fn orders_by_customer() {
        let mut other = order("ORD-002", OrderStatus::Shipped);
        other.customer_id = UserId::new("CUST-002").unwrap();
        let book = OrderBook::with_orders(vec![order("ORD-001", OrderStatus::Completed), other]);
        let mine = book.by_customer(&UserId::new("CUST-001").unwrap());
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id.as_str(), "ORD-001");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn summary_total_is_subtotal_plus_rounded_tax(minor in 0u64..100_000_000) {
                let summary = OrderSummary::new(Money::from_minor(minor));
                prop_assert_eq!(summary.total.minor(), minor + summary.tax.minor());
                // Rounded to the nearest minor unit.
                let exact = minor * u64::from(TAX_PERCENT);
                prop_assert!(summary.tax.minor() * 100 + 50 >= exact);
                prop_assert!(summary.tax.minor() * 100 <= exact + 50);
            }
        }
    }
}
