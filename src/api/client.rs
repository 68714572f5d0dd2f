//! HTTP client for the remote burger API
//!
//! Wraps reqwest with the base URL, bearer-token injection and a single
//! refresh-and-retry pass when the access token has been rejected.
//!
//! # Important
//!
//! The API returns the access token already prefixed with `Bearer `; it is
//! stored and replayed verbatim in the `Authorization` header.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::error::ApiError;
use crate::models::{Ingredient, Order};
use crate::storage::TokenStore;

use super::types::{
    AuthResponse, FeedResponse, LoginRequest, LogoutResponse, OrderResponse, OrdersResponse,
    RegisterRequest, UpdateUserRequest, UpdateUserResponse, UserResponse,
};
use super::BurgerApi;

/// Default public API endpoint.
const DEFAULT_BASE_URL: &str = "https://norma.nomoreparties.space/api/";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Error body shape the API uses for non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Catalog envelope: the ingredient list arrives under `data`.
#[derive(Deserialize)]
struct IngredientsEnvelope {
    data: Vec<Ingredient>,
}

/// Personal order history envelope.
#[derive(Deserialize)]
struct PersonalOrdersEnvelope {
    orders: Vec<Order>,
}

/// Rotated token pair from `auth/token`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPair {
    access_token: String,
    refresh_token: String,
}

/// Remote burger API client backed by reqwest.
pub struct HttpBurgerApi {
    http: Client,
    base: Url,
    tokens: Arc<dyn TokenStore>,
}

impl HttpBurgerApi {
    /// Create a client against the given base URL.
    pub fn new(base: Url, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let mut base = base;
        // A trailing slash keeps Url::join from eating the last path segment.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http, base, tokens })
    }

    /// Create against `BURGER_API_URL`, falling back to the public endpoint.
    pub fn from_env(tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let raw =
            std::env::var("BURGER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base = Url::parse(&raw).map_err(|e| ApiError::Config(e.to_string()))?;
        Self::new(base, tokens)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Config(e.to_string()))
    }

    /// Send one request and decode the JSON payload.
    async fn send_once<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        authorized: bool,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let mut request = self.http.request(method, url);

        if authorized {
            let token = self.tokens.access_token().ok_or(ApiError::MissingToken)?;
            request = request.header(header::AUTHORIZATION, token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%path, "burger api request");
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_message(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Send a request, retrying once through a token refresh when the access
    /// token is rejected.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        authorized: bool,
    ) -> Result<T, ApiError> {
        let first = self
            .send_once(method.clone(), path, body, authorized)
            .await;

        match first {
            Err(ApiError::Status { status, .. })
                if authorized && token_rejected(status) =>
            {
                self.refresh_session().await?;
                self.send_once(method, path, body, authorized).await
            }
            other => other,
        }
    }

    /// Exchange the stored refresh token for a rotated pair.
    async fn refresh_session(&self) -> Result<(), ApiError> {
        let refresh = self
            .tokens
            .refresh_token()
            .ok_or(ApiError::MissingRefreshToken)?;

        tracing::debug!("access token rejected, exchanging refresh token");
        let body = serde_json::json!({ "token": refresh });
        let pair: TokenPair = self
            .send_once(Method::POST, "auth/token", Some(&body), false)
            .await?;

        self.tokens.set_access_token(&pair.access_token);
        self.tokens.set_refresh_token(&pair.refresh_token);
        Ok(())
    }
}

fn token_rejected(status: u16) -> bool {
    status == StatusCode::UNAUTHORIZED.as_u16() || status == StatusCode::FORBIDDEN.as_u16()
}

/// Pull the `message` field out of an error body, falling back to the raw
/// text when the body is not the expected shape.
fn extract_message(text: &str) -> String {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        _ => text.chars().take(200).collect(),
    }
}

#[async_trait]
impl BurgerApi for HttpBurgerApi {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        let envelope: IngredientsEnvelope = self
            .request(Method::GET, "ingredients", None, false)
            .await?;
        Ok(envelope.data)
    }

    async fn fetch_feeds(&self) -> Result<FeedResponse, ApiError> {
        self.request(Method::GET, "orders/all", None, false).await
    }

    async fn fetch_order_by_number(&self, number: u32) -> Result<OrdersResponse, ApiError> {
        self.request(Method::GET, &format!("orders/{number}"), None, false)
            .await
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        let envelope: PersonalOrdersEnvelope =
            self.request(Method::GET, "orders", None, true).await?;
        Ok(envelope.orders)
    }

    async fn fetch_user(&self) -> Result<UserResponse, ApiError> {
        self.request(Method::GET, "auth/user", None, true).await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(&request)?;
        self.request(Method::POST, "auth/login", Some(&body), false)
            .await
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(&request)?;
        self.request(Method::POST, "auth/register", Some(&body), false)
            .await
    }

    async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        let refresh = self
            .tokens
            .refresh_token()
            .ok_or(ApiError::MissingRefreshToken)?;
        let body = serde_json::json!({ "token": refresh });
        self.request(Method::POST, "auth/logout", Some(&body), false)
            .await
    }

    async fn update_user(&self, request: UpdateUserRequest) -> Result<UpdateUserResponse, ApiError> {
        let body = serde_json::to_value(&request)?;
        self.request(Method::PATCH, "auth/user", Some(&body), true)
            .await
    }

    async fn submit_order(&self, ingredient_ids: Vec<String>) -> Result<OrderResponse, ApiError> {
        let body = serde_json::json!({ "ingredients": ingredient_ids });
        self.request(Method::POST, "orders", Some(&body), true)
            .await
    }
}
