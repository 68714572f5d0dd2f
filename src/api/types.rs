//! Request and response shapes for the remote burger API.

use serde::{Deserialize, Serialize};

use crate::models::{Order, User};

/// Credentials for `login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Partial profile update; unset fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Fresh token pair plus account data from `login` and `register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// `fetch_user` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// `update_user` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    pub success: bool,
    pub user: User,
}

/// Public feed page: recent orders plus aggregate counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub orders: Vec<Order>,
    pub total: u32,
    pub total_today: u32,
}

/// `fetch_order_by_number` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// `submit_order` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
}

/// `logout` acknowledgement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}
