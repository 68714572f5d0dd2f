//! Remote burger API boundary
//!
//! The store depends only on the `BurgerApi` trait and the result shapes in
//! `types`; `HttpBurgerApi` is the production implementation over reqwest.

pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Ingredient, Order};

pub use client::HttpBurgerApi;
pub use types::{
    AuthResponse, FeedResponse, LoginRequest, LogoutResponse, OrderResponse, OrdersResponse,
    RegisterRequest, UpdateUserRequest, UpdateUserResponse, UserResponse,
};

/// Remote operations consumed by the store.
///
/// One method per server operation. Implementations own all transport
/// concerns (auth headers, retries); the store consumes result shapes only.
#[async_trait]
pub trait BurgerApi: Send + Sync {
    /// Full ingredient catalog.
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, ApiError>;

    /// Public feed of recent orders plus aggregate counters.
    async fn fetch_feeds(&self) -> Result<FeedResponse, ApiError>;

    /// Look one order up by its public number.
    async fn fetch_order_by_number(&self, number: u32) -> Result<OrdersResponse, ApiError>;

    /// Orders placed by the authenticated user.
    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Profile of the authenticated user.
    async fn fetch_user(&self) -> Result<UserResponse, ApiError>;

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError>;

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// Invalidate the current session server-side.
    async fn logout(&self) -> Result<LogoutResponse, ApiError>;

    /// Partial profile update.
    async fn update_user(&self, request: UpdateUserRequest) -> Result<UpdateUserResponse, ApiError>;

    /// Place an order. `ingredient_ids` is `[bun, fillings.., bun]`.
    async fn submit_order(&self, ingredient_ids: Vec<String>) -> Result<OrderResponse, ApiError>;
}
