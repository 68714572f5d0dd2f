//! The state container and async operation coordinator
//!
//! All mutation flows through one apply loop: actions are queued on an mpsc
//! channel, folded by the reducer strictly in arrival order, and every
//! resulting snapshot is published on a watch channel. Remote operations
//! enqueue one `Pending` notification before the call starts and exactly one
//! terminal notification after it settles; concurrent invocations of the
//! same operation are independent, so the last-dispatched settlement wins on
//! shared state fields.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use crate::api::types::{
    AuthResponse, FeedResponse, LoginRequest, LogoutResponse, OrderResponse, OrdersResponse,
    RegisterRequest, UpdateUserRequest, UpdateUserResponse, UserResponse,
};
use crate::api::BurgerApi;
use crate::error::{ApiError, StoreError};
use crate::models::{Ingredient, Order};
use crate::storage::TokenStore;

use super::action::{Action, OpAction, Phase};
use super::reducer::reduce;
use super::state::AppState;

/// An action plus an optional applied-acknowledgement.
struct Envelope {
    action: Action,
    applied: Option<oneshot::Sender<()>>,
}

/// Handle on one asynchronous operation invocation.
///
/// Await [`Settlement::settled`] to branch on the outcome directly; dropping
/// the handle is the fire-and-forget mode. Either way the lifecycle
/// notifications reach state.
pub struct Settlement<T> {
    outcome: oneshot::Receiver<Result<T, ApiError>>,
}

impl<T> Settlement<T> {
    /// Wait for the terminal phase to be applied to state and return the
    /// operation payload.
    pub async fn settled(self) -> Result<T, StoreError> {
        let result = self.outcome.await.map_err(|_| StoreError::Closed)?;
        Ok(result?)
    }
}

/// The state container, owned by the composition root.
///
/// Cheap to clone; all clones feed the same apply loop. The loop stops once
/// every clone has been dropped.
#[derive(Clone)]
pub struct Store {
    actions: mpsc::UnboundedSender<Envelope>,
    snapshots: watch::Receiver<AppState>,
    api: Arc<dyn BurgerApi>,
    tokens: Arc<dyn TokenStore>,
}

impl Store {
    /// Create a store with the initial snapshot and start its apply loop.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(api: Arc<dyn BurgerApi>, tokens: Arc<dyn TokenStore>) -> Self {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Envelope>();
        let (snapshot_tx, snapshot_rx) = watch::channel(AppState::initial());

        let loop_tokens = Arc::clone(&tokens);
        tokio::spawn(async move {
            while let Some(Envelope { action, applied }) = action_rx.recv().await {
                match &action {
                    Action::Op(op) => {
                        tracing::debug!(operation = op.name(), phase = op.phase(), "applying")
                    }
                    other => tracing::debug!(action = other.label(), "applying"),
                }

                snapshot_tx.send_modify(|state| {
                    let previous = std::mem::take(state);
                    *state = reduce(previous, action, loop_tokens.as_ref());
                });

                if let Some(ack) = applied {
                    let _ = ack.send(());
                }
            }
        });

        Self {
            actions: action_tx,
            snapshots: snapshot_rx,
            api,
            tokens,
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> AppState {
        self.snapshots.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    ///
    /// The receiver observes every state replacement that happens while it
    /// keeps up; a slow reader only ever sees complete snapshots.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.snapshots.clone()
    }

    /// Queue an action for the apply loop. Fire and forget.
    pub fn dispatch(&self, action: Action) {
        let _ = self.actions.send(Envelope {
            action,
            applied: None,
        });
    }

    /// Queue an action and wait until it has been folded into state.
    pub async fn dispatch_sync(&self, action: Action) -> Result<(), StoreError> {
        let (tx, rx) = oneshot::channel();
        self.actions
            .send(Envelope {
                action,
                applied: Some(tx),
            })
            .map_err(|_| StoreError::Closed)?;
        rx.await.map_err(|_| StoreError::Closed)
    }

    // ------------------------------------------------------------------
    // Async operation coordinator
    // ------------------------------------------------------------------

    /// Run one remote call through its three-phase lifecycle.
    ///
    /// `Pending` is enqueued before the call starts; the terminal phase is
    /// applied to state before the settlement handle resolves, so a caller
    /// that awaits the settlement reads its own effect.
    fn run_operation<T, F>(&self, wrap: fn(Phase<T>) -> OpAction, call: F) -> Settlement<T>
    where
        T: Clone + Send + 'static,
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let (outcome_tx, outcome_rx) = oneshot::channel();

        let pending = wrap(Phase::Pending);
        tracing::debug!(operation = pending.name(), "operation started");
        self.dispatch(Action::Op(pending));

        let store = self.clone();
        tokio::spawn(async move {
            let result = call.await;

            let terminal = match &result {
                Ok(payload) => wrap(Phase::Fulfilled(payload.clone())),
                Err(error) => wrap(Phase::Rejected(error.to_string())),
            };
            if let Err(error) = &result {
                tracing::warn!(operation = terminal.name(), %error, "operation rejected");
            }

            let _ = store.dispatch_sync(Action::Op(terminal)).await;
            let _ = outcome_tx.send(result);
        });

        Settlement {
            outcome: outcome_rx,
        }
    }

    /// Load the ingredient catalog.
    pub fn fetch_catalog(&self) -> Settlement<Vec<Ingredient>> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::FetchCatalog, async move {
            api.fetch_ingredients().await
        })
    }

    /// Place an order from an explicit `[bun, fillings.., bun]` id list.
    pub fn create_order(&self, ingredient_ids: Vec<String>) -> Settlement<OrderResponse> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::CreateOrder, async move {
            api.submit_order(ingredient_ids).await
        })
    }

    pub fn login(&self, credentials: LoginRequest) -> Settlement<AuthResponse> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::Login, async move { api.login(credentials).await })
    }

    pub fn register(&self, registration: RegisterRequest) -> Settlement<AuthResponse> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::Register, async move {
            api.register(registration).await
        })
    }

    pub fn fetch_user_profile(&self) -> Settlement<UserResponse> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::FetchUserProfile, async move {
            api.fetch_user().await
        })
    }

    pub fn fetch_orders_feed(&self) -> Settlement<FeedResponse> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::FetchOrdersFeed, async move {
            api.fetch_feeds().await
        })
    }

    pub fn fetch_personal_orders(&self) -> Settlement<Vec<Order>> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::FetchPersonalOrders, async move {
            api.fetch_orders().await
        })
    }

    pub fn logout(&self) -> Settlement<LogoutResponse> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::Logout, async move { api.logout().await })
    }

    pub fn update_user_profile(&self, update: UpdateUserRequest) -> Settlement<UpdateUserResponse> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::UpdateUserProfile, async move {
            api.update_user(update).await
        })
    }

    pub fn fetch_order_by_number(&self, number: u32) -> Settlement<OrdersResponse> {
        let api = Arc::clone(&self.api);
        self.run_operation(OpAction::GetOrderByNumber, async move {
            api.fetch_order_by_number(number).await
        })
    }

    // ------------------------------------------------------------------
    // Convenience flows
    // ------------------------------------------------------------------

    /// Submit the current builder as an order.
    ///
    /// Assembles the `[bun, fillings.., bun]` id list from the current
    /// snapshot. Nothing is dispatched when the builder has no bun or no
    /// fillings.
    pub fn submit_builder(&self) -> Result<Settlement<OrderResponse>, StoreError> {
        let ids = self
            .snapshot()
            .builder
            .submission_ids()
            .ok_or(StoreError::NotSubmittable)?;
        Ok(self.create_order(ids))
    }

    /// Resolve the session at startup.
    ///
    /// When a stored access token exists for an unauthenticated session, the
    /// profile fetch settles before the app-initialized gate opens, so the
    /// gate always opens with the auth question answered. The catalog is
    /// fetched afterwards if it is still empty.
    pub async fn bootstrap(&self) -> Result<(), StoreError> {
        if !self.snapshot().is_auth && self.tokens.access_token().is_some() {
            // Failure here is session invalidation, handled by the reducer.
            let _ = self.fetch_user_profile().settled().await;
        }

        self.dispatch_sync(Action::InitializeApp).await?;

        if self.snapshot().catalog.is_empty() {
            self.fetch_catalog();
        }
        Ok(())
    }
}
