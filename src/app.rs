//! GoRestaurant Dashboard App
//!
//! Header, the add/edit modal, and the grid of food cards.

use food_sync::{load_collection, FoodItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{FoodCard, FoodModal, Header};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::store::{store_commit, AppState, AppStateStoreFields};

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load the catalog once on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            match load_collection::<FoodItem, _>(client.as_ref()).await {
                Ok(commit) => store_commit(&store, commit),
                Err(error) => error.report(&ctx.notifier()),
            }
        });
    });

    view! {
        <Header />
        <FoodModal />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().read().to_vec()
                key=|food| food.clone()
                children=move |food| view! { <FoodCard food=food /> }
            />
        </div>
    }
}
