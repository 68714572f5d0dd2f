//! Shared helpers for store integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::watch;
use tokio::time::{sleep, timeout};

use burger_store::api::types::{
    AuthResponse, FeedResponse, LoginRequest, LogoutResponse, OrderResponse, OrdersResponse,
    RegisterRequest, UpdateUserRequest, UpdateUserResponse, UserResponse,
};
use burger_store::{
    ApiError, AppState, BurgerApi, Ingredient, IngredientKind, MemoryTokenStore, Order,
    OrderStatus, Store, User,
};

static TRACING: Once = Once::new();

/// Install the test subscriber once per binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ----------------------------------------------------------------------
// Scripted mock API
// ----------------------------------------------------------------------

/// One scripted reply: an optional settle delay plus the result.
pub struct Scripted<T> {
    pub delay: Duration,
    pub result: Result<T, ApiError>,
}

impl<T> Scripted<T> {
    pub fn ok(value: T) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(value),
        }
    }

    pub fn ok_after(delay_ms: u64, value: T) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            result: Ok(value),
        }
    }

    pub fn err(status: u16, message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(ApiError::Status {
                status,
                message: message.to_string(),
            }),
        }
    }
}

pub type Script<T> = Mutex<VecDeque<Scripted<T>>>;

/// Append a scripted reply to an operation's queue.
pub fn script<T>(queue: &Script<T>, reply: Scripted<T>) {
    queue.lock().unwrap().push_back(reply);
}

/// Mock burger API with per-operation reply queues, consumed in invocation
/// order. Unscripted calls fail with a 500 so a missing script shows up as a
/// rejected operation rather than a hang.
#[derive(Default)]
pub struct ScriptedApi {
    pub ingredients: Script<Vec<Ingredient>>,
    pub feeds: Script<FeedResponse>,
    pub order_by_number: Script<OrdersResponse>,
    pub personal_orders: Script<Vec<Order>>,
    pub user: Script<UserResponse>,
    pub login: Script<AuthResponse>,
    pub register: Script<AuthResponse>,
    pub logout: Script<LogoutResponse>,
    pub update_user: Script<UpdateUserResponse>,
    pub submit: Script<OrderResponse>,
    /// Ingredient id lists received by `submit_order`.
    pub submitted: Mutex<Vec<Vec<String>>>,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

async fn play<T>(queue: &Script<T>, operation: &str) -> Result<T, ApiError> {
    let next = queue.lock().unwrap().pop_front();
    match next {
        Some(Scripted { delay, result }) => {
            if !delay.is_zero() {
                sleep(delay).await;
            }
            result
        }
        None => Err(ApiError::Status {
            status: 500,
            message: format!("no scripted reply for {operation}"),
        }),
    }
}

#[async_trait]
impl BurgerApi for ScriptedApi {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        play(&self.ingredients, "fetch_ingredients").await
    }

    async fn fetch_feeds(&self) -> Result<FeedResponse, ApiError> {
        play(&self.feeds, "fetch_feeds").await
    }

    async fn fetch_order_by_number(&self, _number: u32) -> Result<OrdersResponse, ApiError> {
        play(&self.order_by_number, "fetch_order_by_number").await
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        play(&self.personal_orders, "fetch_orders").await
    }

    async fn fetch_user(&self) -> Result<UserResponse, ApiError> {
        play(&self.user, "fetch_user").await
    }

    async fn login(&self, _request: LoginRequest) -> Result<AuthResponse, ApiError> {
        play(&self.login, "login").await
    }

    async fn register(&self, _request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        play(&self.register, "register").await
    }

    async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        play(&self.logout, "logout").await
    }

    async fn update_user(&self, _request: UpdateUserRequest) -> Result<UpdateUserResponse, ApiError> {
        play(&self.update_user, "update_user").await
    }

    async fn submit_order(&self, ingredient_ids: Vec<String>) -> Result<OrderResponse, ApiError> {
        self.submitted.lock().unwrap().push(ingredient_ids);
        play(&self.submit, "submit_order").await
    }
}

// ----------------------------------------------------------------------
// Fixtures
// ----------------------------------------------------------------------

pub fn ingredient(id: &str, kind: IngredientKind, price: u32) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: format!("Ingredient {id}"),
        kind,
        proteins: 20,
        fat: 15,
        carbohydrates: 30,
        calories: 250,
        price,
        image: String::new(),
        image_mobile: String::new(),
        image_large: String::new(),
    }
}

pub fn bun(id: &str, price: u32) -> Ingredient {
    ingredient(id, IngredientKind::Bun, price)
}

pub fn filling(id: &str, price: u32) -> Ingredient {
    ingredient(id, IngredientKind::Main, price)
}

pub fn order(number: u32, status: OrderStatus) -> Order {
    let now = Utc::now();
    Order {
        id: format!("order-{number}"),
        ingredients: vec!["bun-1".to_string(), "main-1".to_string()],
        status,
        name: "Space burger".to_string(),
        created_at: now,
        updated_at: now,
        number,
    }
}

pub fn auth(access: &str, refresh: &str) -> AuthResponse {
    AuthResponse {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        user: User {
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
        },
    }
}

/// A store wired to a fresh scripted API and in-memory tokens.
pub fn setup() -> (Store, Arc<ScriptedApi>, Arc<MemoryTokenStore>) {
    init_tracing();
    let api = ScriptedApi::new();
    let tokens = Arc::new(MemoryTokenStore::new());
    let store = Store::new(api.clone(), tokens.clone());
    (store, api, tokens)
}

/// Wait (bounded) until a snapshot satisfies the predicate; returns it.
pub async fn wait_until(
    rx: &mut watch::Receiver<AppState>,
    predicate: impl FnMut(&AppState) -> bool,
) -> AppState {
    let snapshot = timeout(Duration::from_secs(5), rx.wait_for(predicate))
        .await
        .expect("timed out waiting for state")
        .expect("store apply loop has shut down");
    snapshot.clone()
}
