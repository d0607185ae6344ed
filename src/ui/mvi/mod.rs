//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer, plus the [`Store`] that owns a piece of state
//! and tells its subscribers when that state changes.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store::dispatch ──→ Reducer ──→ State ──→ View
//!    ↑                                         │
//!    └─────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Holds the current state and notifies subscribers on change

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, SubscriptionId};
