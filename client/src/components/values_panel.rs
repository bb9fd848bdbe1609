//! Read-only "watched" and "submitted" value panels.

use leptos::prelude::*;

use crate::state::form::{FormSignal, Panel, panel_rows};

#[component]
pub fn ValuesPanel(form: FormSignal, panel: Panel) -> impl IntoView {
    view! {
        <div class=panel.class_name()>
            <h3>{panel.title()}</h3>
            {move || {
                form.with(|f| panel_rows(f, panel))
                    .into_iter()
                    .map(|row| {
                        view! {
                            <p>
                                <strong>{row.label}":"</strong>
                                " "
                                {row.value}
                            </p>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
