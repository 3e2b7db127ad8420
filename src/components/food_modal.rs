//! Food Modal Component
//!
//! Add/edit form for a dish. The controller in the store decides whether
//! the session is an add or an edit; this component only collects input,
//! shows per-field errors, and commits what the server confirms.

use food_sync::{FoodField, FoodForm, SubmitOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::store::{store_commit, use_app_store, AppStateStoreFields};

#[component]
pub fn FoodModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let values = RwSignal::new(FoodForm::default());

    let is_open = Signal::derive(move || store.form().read().is_open());
    let is_editing = Signal::derive(move || store.form().read().editing().is_some());
    let submitting = Signal::derive(move || store.form().read().is_submitting());

    // Refill the inputs whenever a new session opens, not on every form update
    let session = Memo::new(move |_| store.form().read().session_id());
    Effect::new(move |_| {
        if session.get().is_some() {
            values.set(store.form().read_untracked().initial_form());
        }
    });

    let close = Callback::new(move |_: ()| {
        store.form().write().close();
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = values.get_untracked();
        let prepared = store.form().write().prepare(&input);
        let submission = match prepared {
            Ok(submission) => submission,
            Err(err) => {
                log::debug!("food form not sent: {}", err);
                return;
            }
        };

        let client = ctx.client();
        spawn_local(async move {
            let result = submission.send(client.as_ref()).await;
            let outcome = store
                .form()
                .write()
                .complete(&submission, result, &ctx.notifier());
            if let SubmitOutcome::Committed(commit) = outcome {
                store_commit(&store, commit);
            }
        });
    };

    view! {
        <Modal is_open=is_open on_close=close>
            <form class="food-form" on:submit=on_submit>
                <h1>{move || if is_editing.get() { "Editar Prato" } else { "Novo Prato" }}</h1>

                {FoodField::ALL
                    .iter()
                    .map(|&field| {
                        let error = move || {
                            store.form().read().errors().get(field).map(str::to_string)
                        };
                        view! {
                            <div class=move || {
                                if error().is_some() { "input-group has-error" } else { "input-group" }
                            }>
                                <input
                                    name=field.as_str()
                                    placeholder=field.placeholder()
                                    prop:value=move || values.with(|form| form.get(field).to_string())
                                    on:input=move |ev| {
                                        values.update(|form| form.set(field, event_target_value(&ev)))
                                    }
                                />
                                {move || error().map(|message| view! { <span class="field-error">{message}</span> })}
                            </div>
                        }
                    })
                    .collect_view()}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    data-testid=move || if is_editing.get() { "edit-food-button" } else { "add-food-button" }
                >
                    <p class="text">
                        {move || if is_editing.get() { "Editar Prato" } else { "Adicionar Prato" }}
                    </p>
                    <div class="icon">"✓"</div>
                </button>
            </form>
        </Modal>
    }
}
