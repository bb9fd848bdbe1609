//! Form validated by one declarative schema over the whole record.
//!
//! Note: the gender select offers `Other` while the schema only accepts
//! lowercase `other`, so choosing it is rejected here but not in the
//! manual-rules form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::state::form::FormKind;

#[component]
pub fn SchemaForm() -> impl IntoView {
    view! { <ContactForm kind=FormKind::Schema/> }
}
