//! Contact form shell shared by both validation strategies.

use forms::{Field, FormController};
use leptos::prelude::*;

use crate::components::form_field::{GenderSelect, TextField};
use crate::components::values_panel::ValuesPanel;
use crate::state::form::{FormKind, FormSignal, Panel, submit};

/// Heading, the four controls, the submit button and both value panels.
///
/// Owns its own controller; two instances never share state.
#[component]
pub fn ContactForm(kind: FormKind) -> impl IntoView {
    let form: FormSignal = RwSignal::new(kind.controller());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(form, kind);
    };

    // `novalidate`: browser-native email checks would block the submit event
    // before the form's own messages can show.
    view! {
        <h1 class="heading">{kind.heading()}</h1>
        <div class="container">
            <form on:submit=on_submit novalidate=true>
                <TextField form=form field=Field::FirstName/>
                <TextField form=form field=Field::LastName/>
                <TextField form=form field=Field::Email/>
                <GenderSelect form=form/>
                <div>
                    <button type="submit" disabled=move || form.with(FormController::submit_disabled)>
                        {move || form.with(FormController::submit_label)}
                    </button>
                </div>
            </form>
            <ValuesPanel form=form panel=Panel::Watched/>
            <ValuesPanel form=form panel=Panel::Submitted/>
        </div>
    }
}
