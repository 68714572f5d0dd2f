//! Read-only projections over a state snapshot
//!
//! Selectors are recomputed on every call; no memoization. State fields are
//! public, so consumers read them directly — what lives here are the derived
//! views with actual logic behind them.

use crate::models::{Order, OrderStatus};

/// How many order numbers the feed info panel shows per column.
const FEED_NUMBERS_CAP: usize = 20;

/// Numbers of completed orders, in feed order, capped at 20.
pub fn ready_order_numbers(orders: &[Order]) -> Vec<u32> {
    numbers_by_status(orders, OrderStatus::Done)
}

/// Numbers of orders still in preparation, in feed order, capped at 20.
pub fn pending_order_numbers(orders: &[Order]) -> Vec<u32> {
    numbers_by_status(orders, OrderStatus::Pending)
}

fn numbers_by_status(orders: &[Order], status: OrderStatus) -> Vec<u32> {
    orders
        .iter()
        .filter(|order| order.status == status)
        .map(|order| order.number)
        .take(FEED_NUMBERS_CAP)
        .collect()
}
