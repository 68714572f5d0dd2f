//! State container, reducer, selectors and the async operation coordinator
//!
//! `AppState` is the single source of truth; every transition flows through
//! the pure `reduce` function, and the `Store` owns the apply loop that
//! serializes those transitions.

pub mod action;
pub mod container;
pub mod reducer;
pub mod selectors;
pub mod state;

// Re-export commonly used types for convenience
pub use action::{Action, OpAction, Phase};
pub use container::{Settlement, Store};
pub use reducer::reduce;
pub use selectors::{pending_order_numbers, ready_order_numbers};
pub use state::AppState;
