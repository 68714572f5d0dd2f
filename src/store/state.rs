//! The aggregate application state snapshot.

use serde::{Deserialize, Serialize};

use crate::models::{BurgerBuilder, Ingredient, Order, OrderStats, User};

/// The single source of truth for the application.
///
/// Created once with [`AppState::initial`] and replaced wholesale on every
/// dispatched action; consumers only ever observe complete snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Purchasable ingredients fetched from the server.
    pub catalog: Vec<Ingredient>,
    /// Shared loading flag for catalog, auth and feed operations.
    pub is_loading: bool,
    /// Result of the most recent submission; drives the confirmation view.
    pub active_order: Option<Order>,
    /// The in-progress order being assembled.
    pub builder: BurgerBuilder,
    /// True while a submission is in flight.
    pub is_order_processing: bool,
    /// Account data; empty strings when signed out.
    pub user: User,
    /// Public feed of recent orders.
    pub order_history: Vec<Order>,
    /// Aggregate feed counters.
    pub order_stats: OrderStats,
    /// Personal order history. `None` until first fetched; `Some(vec![])`
    /// when the account simply has no orders.
    pub personal_orders: Option<Vec<Order>>,
    /// Whether a session is currently authenticated.
    pub is_auth: bool,
    /// One-way gate: the auth question has been answered at startup.
    pub is_app_initialized: bool,
    /// Whether the details overlay is shown.
    pub is_details_visible: bool,
    /// Reason from the last failed catalog/auth operation; empty = no error.
    pub error_message: String,
    /// Single order fetched by number.
    pub current_order: Option<Order>,
}

impl AppState {
    /// The fixed startup snapshot.
    pub fn initial() -> Self {
        Self::default()
    }
}
