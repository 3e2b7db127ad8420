//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The food list is
//! only ever replaced by applying a server-confirmed [`Commit`].

use food_sync::{Commit, EntityList, FoodItem, FormController, PendingSet};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The catalog, in display order
    pub foods: EntityList<FoodItem>,
    /// Add/edit modal session
    pub form: FormController,
    /// Dishes with a delete or availability toggle on the wire
    pub pending: PendingSet<i64>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a confirmed change to the current list
pub fn store_commit(store: &AppStore, commit: Commit<FoodItem>) {
    let next = commit.apply(&store.foods().read_untracked());
    if next.ptr_eq(&store.foods().read_untracked()) {
        return;
    }
    log::debug!("food list now has {} dishes", next.len());
    *store.foods().write() = next;
}

/// Mark a dish busy; false if a request for it is already running
pub fn store_begin_pending(store: &AppStore, id: i64) -> bool {
    store.pending().write().begin(id)
}

pub fn store_finish_pending(store: &AppStore, id: i64) {
    store.pending().write().finish(id);
}
