//! The pure state transition function
//!
//! Every dispatched action flows through [`reduce`], which consumes the
//! current snapshot and returns the next one. The only side effects are the
//! token persistence writes tied to auth transitions, performed synchronously
//! inside the matching phase. Malformed synchronous actions (unknown instance
//! ids, moves at a boundary) are identity transitions, never errors; the
//! reducer itself never fails.

use crate::ident::InstanceId;
use crate::models::{BuilderItem, BurgerBuilder, IngredientKind, OrderStats, User};
use crate::storage::TokenStore;

use super::action::{Action, OpAction, Phase};
use super::state::AppState;

/// Fold one action into the state, producing the next snapshot.
pub fn reduce(mut state: AppState, action: Action, tokens: &dyn TokenStore) -> AppState {
    match action {
        Action::AddItem(ingredient) => {
            if ingredient.kind == IngredientKind::Bun {
                state.builder.bun = Some(ingredient);
            } else {
                state.builder.fillings.push(BuilderItem {
                    instance: InstanceId::generate(),
                    ingredient,
                });
            }
        }
        Action::RemoveItem(instance) => {
            if let Some(index) = state.builder.position(instance) {
                state.builder.fillings.remove(index);
            }
        }
        Action::MoveUp(instance) => {
            if let Some(index) = state.builder.position(instance) {
                if index > 0 {
                    state.builder.fillings.swap(index - 1, index);
                }
            }
        }
        Action::MoveDown(instance) => {
            if let Some(index) = state.builder.position(instance) {
                if index + 1 < state.builder.fillings.len() {
                    state.builder.fillings.swap(index, index + 1);
                }
            }
        }
        Action::ClearOrder => {
            state.active_order = None;
            state.is_order_processing = false;
            state.builder = BurgerBuilder::default();
        }
        Action::ClearOrderHistory => state.order_history.clear(),
        Action::ClearPersonalOrders => state.personal_orders = None,
        Action::InitializeApp => state.is_app_initialized = true,
        Action::ShowDetails => state.is_details_visible = true,
        Action::HideDetails => state.is_details_visible = false,
        Action::SetError(message) => state.error_message = message,
        Action::ClearError => state.error_message.clear(),
        Action::Op(op) => return reduce_operation(state, op, tokens),
    }
    state
}

/// Fold one lifecycle notification into the state.
fn reduce_operation(mut state: AppState, op: OpAction, tokens: &dyn TokenStore) -> AppState {
    match op {
        OpAction::FetchCatalog(phase) => match phase {
            Phase::Pending => state.is_loading = true,
            Phase::Fulfilled(catalog) => {
                state.is_loading = false;
                state.catalog = catalog;
            }
            Phase::Rejected(reason) => {
                state.is_loading = false;
                state.error_message = reason;
            }
        },
        OpAction::CreateOrder(phase) => match phase {
            Phase::Pending => state.is_order_processing = true,
            Phase::Fulfilled(response) => {
                state.is_order_processing = false;
                state.active_order = Some(response.order);
            }
            Phase::Rejected(_) => state.is_order_processing = false,
        },
        OpAction::Login(phase) | OpAction::Register(phase) => match phase {
            Phase::Pending => state.is_loading = true,
            Phase::Fulfilled(auth) => {
                state.is_loading = false;
                tokens.set_access_token(&auth.access_token);
                tokens.set_refresh_token(&auth.refresh_token);
                state.is_auth = true;
            }
            Phase::Rejected(reason) => {
                state.is_loading = false;
                state.error_message = reason;
            }
        },
        OpAction::FetchUserProfile(phase) => match phase {
            Phase::Pending => state.is_loading = true,
            Phase::Fulfilled(profile) => {
                state.is_loading = false;
                state.user = profile.user;
                state.is_auth = true;
            }
            Phase::Rejected(_) => {
                // A failed profile fetch invalidates the whole session.
                state.is_loading = false;
                state.is_auth = false;
                state.user = User::default();
                tokens.purge();
            }
        },
        OpAction::FetchOrdersFeed(phase) => match phase {
            Phase::Pending => state.is_loading = true,
            Phase::Fulfilled(feed) => {
                state.is_loading = false;
                state.order_history = feed.orders;
                state.order_stats = OrderStats {
                    total: feed.total,
                    today: feed.total_today,
                };
            }
            Phase::Rejected(_) => state.is_loading = false,
        },
        OpAction::FetchPersonalOrders(phase) => match phase {
            Phase::Pending => state.is_loading = true,
            Phase::Fulfilled(orders) => {
                state.is_loading = false;
                state.personal_orders = Some(orders);
            }
            Phase::Rejected(_) => state.is_loading = false,
        },
        OpAction::Logout(phase) => match phase {
            Phase::Pending => state.is_loading = true,
            Phase::Fulfilled(ack) => {
                state.is_loading = false;
                if ack.success {
                    tokens.purge();
                    state.user = User::default();
                    state.is_auth = false;
                }
            }
            Phase::Rejected(_) => state.is_loading = false,
        },
        OpAction::UpdateUserProfile(phase) => match phase {
            Phase::Pending => state.is_loading = true,
            Phase::Fulfilled(update) => {
                state.is_loading = false;
                if update.success {
                    state.user = update.user;
                }
            }
            Phase::Rejected(_) => state.is_loading = false,
        },
        OpAction::GetOrderByNumber(phase) => match phase {
            Phase::Pending => state.is_loading = true,
            Phase::Fulfilled(found) => {
                state.is_loading = false;
                state.current_order = found.orders.into_iter().next();
            }
            Phase::Rejected(_) => {
                state.is_loading = false;
                state.current_order = None;
            }
        },
    }
    state
}
