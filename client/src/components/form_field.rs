//! Labelled form controls with inline error text.

use forms::{Field, GENDER_OPTIONS};
use leptos::prelude::*;

use crate::state::form::{FormSignal, input_type};

/// Text input bound to one field.
#[component]
pub fn TextField(form: FormSignal, field: Field) -> impl IntoView {
    view! {
        <div>
            <label for=field.name()>{format!("{}:", field.label())}</label>
            <input
                type=input_type(field)
                id=field.name()
                name=field.name()
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_value(field, value));
                }
            />
            <InlineError form=form field=field/>
        </div>
    }
}

/// Gender select; starts on the empty "Select" option.
#[component]
pub fn GenderSelect(form: FormSignal) -> impl IntoView {
    let field = Field::Gender;
    view! {
        <div>
            <label for=field.name()>{format!("{}:", field.label())}</label>
            <select
                id=field.name()
                name=field.name()
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_value(field, value));
                }
            >
                {GENDER_OPTIONS
                    .into_iter()
                    .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                    .collect_view()}
            </select>
            <InlineError form=form field=field/>
        </div>
    }
}

#[component]
fn InlineError(form: FormSignal, field: Field) -> impl IntoView {
    view! {
        <Show when=move || form.with(|f| f.error(field).is_some())>
            <p class="error">{move || form.with(|f| f.error(field).unwrap_or_default().to_owned())}</p>
        </Show>
    }
}
