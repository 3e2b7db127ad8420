//! Availability Switch Component
//!
//! "Disponível / Indisponível" toggle on a food card. The box only ever
//! shows the confirmed value; clicks are handed to `on_toggle` and the
//! browser's own flip is cancelled.

use leptos::prelude::*;

#[component]
pub fn AvailabilitySwitch(
    food_id: i64,
    #[prop(into)] available: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let input_id = format!("available-switch-{}", food_id);
    let label_for = input_id.clone();

    view! {
        <div class="availability-container">
            <p>{move || if available.get() { "Disponível" } else { "Indisponível" }}</p>
            <label for=label_for class="switch">
                <input
                    id=input_id
                    type="checkbox"
                    prop:checked=move || available.get()
                    disabled=move || disabled.get()
                    data-testid=format!("change-status-food-{}", food_id)
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_toggle.run(());
                    }
                />
                <span class="slider"></span>
            </label>
        </div>
    }
}
