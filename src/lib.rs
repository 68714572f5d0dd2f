//! burger-store - Client-side state core for a burger ordering application
//!
//! This crate provides the state management engine behind a burger ordering
//! front end: a single consistent state container that holds normalized
//! application state, exposes pure synchronous transitions for builder
//! manipulation, and coordinates asynchronous server interactions with
//! strictly ordered pending/fulfilled/rejected lifecycles.
//!
//! ## Architecture
//!
//! All mutation flows through one apply loop:
//!
//! ```text
//! consumer ──── dispatch(Action) ────► mpsc queue ──► apply loop ──► reduce()
//!     │                                     ▲                           │
//!     ├── fetch_catalog() / login() / ...   │ pending / fulfilled /     ▼
//!     │         │                           │ rejected            watch channel
//!     │         └──► BurgerApi (reqwest) ───┘                           │
//!     └◄──────────────────── AppState snapshots ────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use burger_store::{HttpBurgerApi, MemoryTokenStore, Store};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let tokens = Arc::new(MemoryTokenStore::new());
//! let api = HttpBurgerApi::from_env(tokens.clone())?;
//! let store = Store::new(Arc::new(api), tokens);
//! store.bootstrap().await?;
//! println!("{} ingredients loaded", store.snapshot().catalog.len());
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Builder instance identifiers
pub mod ident;

// Domain models shared across the store and the API boundary
pub mod models;

// Session token storage seam
pub mod storage;

// Remote burger API boundary
pub mod api;

// State container, reducer, selectors and the async coordinator
pub mod store;

pub use api::{BurgerApi, HttpBurgerApi};
pub use error::{ApiError, StoreError};
pub use ident::InstanceId;
pub use models::{
    BuilderItem, BurgerBuilder, Ingredient, IngredientKind, Order, OrderStats, OrderStatus, User,
};
pub use storage::{MemoryTokenStore, TokenStore};
pub use store::{Action, AppState, OpAction, Phase, Settlement, Store};
