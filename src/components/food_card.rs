//! Food Card Component
//!
//! One dish in the catalog grid, with edit, delete and availability actions.
//! Delete and toggle go straight to the collection; the card only changes
//! once the server has answered.

use food_sync::{delete_entity, toggle_availability, FoodItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AvailabilitySwitch, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::store::{store_begin_pending, store_commit, store_finish_pending, use_app_store, AppStateStoreFields};

#[component]
pub fn FoodCard(food: FoodItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = food.id;
    let busy = Signal::derive(move || store.pending().read().contains(id));

    let edit_food = food.clone();
    let open_edit = move |_| {
        store.form().write().open_edit(edit_food.clone());
    };

    let delete = move |_: ()| {
        if !store_begin_pending(&store, id) {
            return;
        }
        let client = ctx.client();
        spawn_local(async move {
            match delete_entity::<FoodItem, _>(client.as_ref(), id).await {
                Ok(commit) => store_commit(&store, commit),
                Err(error) => error.report(&ctx.notifier()),
            }
            store_finish_pending(&store, id);
        });
    };

    let toggle_food = food.clone();
    let toggle = move |_: ()| {
        if !store_begin_pending(&store, id) {
            return;
        }
        let client = ctx.client();
        let food = toggle_food.clone();
        spawn_local(async move {
            match toggle_availability(client.as_ref(), &food).await {
                Ok(commit) => store_commit(&store, commit),
                Err(error) => error.report(&ctx.notifier()),
            }
            store_finish_pending(&store, id);
        });
    };

    let fallback = food.available;
    let available = Signal::derive(move || {
        store
            .foods()
            .read()
            .get(id)
            .map(|f| f.available)
            .unwrap_or(fallback)
    });

    let card_class = if food.available { "food-card" } else { "food-card unavailable" };

    view! {
        <div class=card_class>
            <header>
                <img src=food.image.clone() alt=food.name.clone() />
            </header>
            <section class="body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="price">"R$ " <b>{food.price.clone()}</b></p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        data-testid=format!("edit-food-{}", id)
                        on:click=open_edit
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        test_id=format!("remove-food-{}", id)
                        disabled=busy
                        on_confirm=delete
                    />
                </div>
                <AvailabilitySwitch
                    food_id=id
                    available=available
                    disabled=busy
                    on_toggle=toggle
                />
            </section>
        </div>
    }
}
