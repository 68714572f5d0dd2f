//! Orders as created and tracked by the server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status tracked by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Pending,
    Done,
}

/// A submitted order.
///
/// Immutable once returned; status transitions arrive as fresh snapshots
/// from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    /// Catalog ids of the ingredients this order was placed with.
    pub ingredients: Vec<String>,
    pub status: OrderStatus,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub number: u32,
}

/// Aggregate counters served with the public feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: u32,
    pub today: u32,
}
