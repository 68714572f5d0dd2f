//! Actions folded into state by the reducer
//!
//! Synchronous actions manipulate the builder and the view flags. `Op`
//! actions are the three-phase lifecycle notifications the coordinator
//! produces for each remote operation invocation.

use crate::api::types::{
    AuthResponse, FeedResponse, LogoutResponse, OrderResponse, OrdersResponse, UpdateUserResponse,
    UserResponse,
};
use crate::ident::InstanceId;
use crate::models::{Ingredient, Order};

/// One observable phase of an asynchronous operation.
///
/// Per invocation, exactly one `Pending` strictly precedes exactly one of
/// the terminal phases.
#[derive(Debug, Clone)]
pub enum Phase<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

impl<T> Phase<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Pending => "pending",
            Phase::Fulfilled(_) => "fulfilled",
            Phase::Rejected(_) => "rejected",
        }
    }
}

/// Lifecycle notification for one remote operation, identity-tagged by the
/// variant.
#[derive(Debug, Clone)]
pub enum OpAction {
    FetchCatalog(Phase<Vec<Ingredient>>),
    CreateOrder(Phase<OrderResponse>),
    Login(Phase<AuthResponse>),
    Register(Phase<AuthResponse>),
    FetchUserProfile(Phase<UserResponse>),
    FetchOrdersFeed(Phase<FeedResponse>),
    FetchPersonalOrders(Phase<Vec<Order>>),
    Logout(Phase<LogoutResponse>),
    UpdateUserProfile(Phase<UpdateUserResponse>),
    GetOrderByNumber(Phase<OrdersResponse>),
}

impl OpAction {
    /// Operation identity tag.
    pub fn name(&self) -> &'static str {
        match self {
            OpAction::FetchCatalog(_) => "fetch_catalog",
            OpAction::CreateOrder(_) => "create_order",
            OpAction::Login(_) => "login",
            OpAction::Register(_) => "register",
            OpAction::FetchUserProfile(_) => "fetch_user_profile",
            OpAction::FetchOrdersFeed(_) => "fetch_orders_feed",
            OpAction::FetchPersonalOrders(_) => "fetch_personal_orders",
            OpAction::Logout(_) => "logout",
            OpAction::UpdateUserProfile(_) => "update_user_profile",
            OpAction::GetOrderByNumber(_) => "get_order_by_number",
        }
    }

    /// Phase of this notification.
    pub fn phase(&self) -> &'static str {
        match self {
            OpAction::FetchCatalog(p) => p.name(),
            OpAction::CreateOrder(p) => p.name(),
            OpAction::Login(p) => p.name(),
            OpAction::Register(p) => p.name(),
            OpAction::FetchUserProfile(p) => p.name(),
            OpAction::FetchOrdersFeed(p) => p.name(),
            OpAction::FetchPersonalOrders(p) => p.name(),
            OpAction::Logout(p) => p.name(),
            OpAction::UpdateUserProfile(p) => p.name(),
            OpAction::GetOrderByNumber(p) => p.name(),
        }
    }
}

/// Everything the reducer can fold into state.
#[derive(Debug, Clone)]
pub enum Action {
    /// Add a catalog ingredient to the builder. A bun replaces the current
    /// bun; anything else is appended with a fresh instance id.
    AddItem(Ingredient),
    /// Remove the filling with this instance id. Unknown ids are a no-op.
    RemoveItem(InstanceId),
    /// Swap the filling with its predecessor. No-op at the top.
    MoveUp(InstanceId),
    /// Swap the filling with its successor. No-op at the bottom.
    MoveDown(InstanceId),
    /// Dismiss the confirmation and start a new order.
    ClearOrder,
    ClearOrderHistory,
    ClearPersonalOrders,
    InitializeApp,
    ShowDetails,
    HideDetails,
    SetError(String),
    ClearError,
    /// Lifecycle notification from the async coordinator.
    Op(OpAction),
}

impl Action {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Action::AddItem(_) => "add_item",
            Action::RemoveItem(_) => "remove_item",
            Action::MoveUp(_) => "move_up",
            Action::MoveDown(_) => "move_down",
            Action::ClearOrder => "clear_order",
            Action::ClearOrderHistory => "clear_order_history",
            Action::ClearPersonalOrders => "clear_personal_orders",
            Action::InitializeApp => "initialize_app",
            Action::ShowDetails => "show_details",
            Action::HideDetails => "hide_details",
            Action::SetError(_) => "set_error",
            Action::ClearError => "clear_error",
            Action::Op(op) => op.name(),
        }
    }
}
