//! Form validated by required-ness rules declared on each field.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::state::form::FormKind;

#[component]
pub fn ManualRulesForm() -> impl IntoView {
    view! { <ContactForm kind=FormKind::ManualRules/> }
}
