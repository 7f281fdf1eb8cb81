//! Demo order history for the admin views.

use chrono::{NaiveDate, TimeZone, Utc};

use storefront_core::{DomainError, DomainResult, Money, OrderId, ProductId, TransactionId, UserId};

use crate::order::{Order, OrderItem, OrderStatus};
use crate::transaction::{Transaction, TransactionItem, TransactionStatus};

fn date(y: i32, m: u32, d: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DomainError::validation(format!("invalid date {y}-{m}-{d}")))
}

fn line(product: &str, sku: &str, quantity: u32, cents: u64) -> DomainResult<OrderItem> {
    Ok(OrderItem {
        product_id: ProductId::new(product)?,
        variant_sku: sku.to_string(),
        quantity,
        price: Money::from_minor(cents),
    })
}

fn order(
    id: &str,
    customer: &str,
    day: u32,
    status: OrderStatus,
    cents: u64,
    items: Vec<OrderItem>,
) -> DomainResult<Order> {
    Ok(Order {
        id: OrderId::new(id)?,
        customer_id: UserId::new(customer)?,
        date: Utc.from_utc_datetime(&date(2023, 6, day)?.and_time(chrono::NaiveTime::MIN)),
        status,
        total: Money::from_minor(cents),
        items,
    })
}

pub fn demo_orders() -> DomainResult<Vec<Order>> {
    use OrderStatus::*;

    Ok(vec![
        order("ORD-001", "CUST-001", 1, Completed, 8997, vec![
            line("1", "CT-S-WHT", 2, 1999)?,
            line("2", "SFJ-30-BLU", 1, 4999)?,
        ])?,
        order("ORD-002", "CUST-002", 2, Processing, 19999, vec![line("4", "LJ-S-BLK", 1, 19999)?])?,
        order("ORD-003", "CUST-003", 3, Shipped, 12997, vec![
            line("3", "FSD-S-FLR", 1, 3999)?,
            line("5", "RS-8-GRY", 1, 8998)?,
        ])?,
        order("ORD-004", "CUST-001", 5, Processing, 10998, vec![
            line("8", "WS-L-GRY", 1, 7999)?,
            line("9", "SS-OS-RED", 1, 2999)?,
        ])?,
        order("ORD-005", "CUST-004", 6, Cancelled, 6999, vec![line("10", "DJ-M-BLU", 1, 6999)?])?,
    ])
}

fn item(id: &str, name: &str, quantity: u32, cents: u64) -> TransactionItem {
    TransactionItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity,
        price: Money::from_minor(cents),
    }
}

fn transaction(
    id: &str,
    on: NaiveDate,
    cents: u64,
    items: Vec<TransactionItem>,
    user_id: &str,
    user_name: &str,
) -> DomainResult<Transaction> {
    Ok(Transaction {
        id: TransactionId::new(id)?,
        date: on,
        total: Money::from_minor(cents),
        items,
        user_id: UserId::new(user_id)?,
        user_name: user_name.to_string(),
        status: TransactionStatus::Completed,
    })
}

pub fn demo_transactions() -> DomainResult<Vec<Transaction>> {
    Ok(vec![
        transaction(
            "1",
            date(2024, 2, 15)?,
            14997,
            vec![item("item1", "Classic T-Shirt", 3, 1999), item("item2", "Jeans", 2, 4500)],
            "1",
            "John Smith",
        )?,
        transaction("2", date(2024, 2, 14)?, 15997, vec![item("item3", "Summer Dress", 3, 3999)], "3", "Jane Doe")?,
        transaction("3", date(2024, 2, 13)?, 12999, vec![item("item4", "Leather Jacket", 1, 12999)], "4", "Bob Smith")?,
        transaction("4", date(2024, 2, 12)?, 15998, vec![item("item5", "Running Shoes", 2, 7999)], "5", "Alice Johnson")?,
        transaction("5", date(2024, 2, 11)?, 5997, vec![item("item1", "Classic T-Shirt", 3, 1999)], "2", "John Doe")?,
        transaction("31", date(2024, 1, 15)?, 1999, vec![item("item9", "Silk Scarf", 1, 1999)], "7", "Alice Johnson")?,
        transaction("32", date(2024, 1, 14)?, 6999, vec![item("item10", "Denim Jacket", 1, 6999)], "9", "Bob Smith")?,
        transaction("33", date(2024, 1, 13)?, 8999, vec![item("item5", "Running Shoes", 1, 8999)], "10", "Charlie Brown")?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_history_builds() {
        let orders = demo_orders().unwrap();
        assert_eq!(orders.len(), 5);
        assert!(orders.iter().all(|o| o.items_total() == o.total));
        assert_eq!(demo_transactions().unwrap().len(), 8);
    }
}
