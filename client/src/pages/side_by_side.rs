//! Side-by-side container for the two form strategies.

use leptos::prelude::*;

use crate::components::manual_rules_form::ManualRulesForm;
use crate::components::schema_form::SchemaForm;

/// Stateless: each child form owns its own controller.
#[component]
pub fn FormsPage() -> impl IntoView {
    view! {
        <div class="app">
            <ManualRulesForm/>
        </div>
        <div class="app">
            <SchemaForm/>
        </div>
    }
}
