//! Header Component
//!
//! Brand bar with the "new dish" button.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    let open_add = move |_| {
        store.form().write().open_add();
    };

    view! {
        <header class="header">
            <div class="header-content">
                <span class="brand">"GoRestaurant"</span>
                <button type="button" class="new-food-btn" on:click=open_add>
                    <span class="text">"Novo Prato"</span>
                    <span class="icon">"+"</span>
                </button>
            </div>
        </header>
    }
}
