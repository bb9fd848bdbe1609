//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one form instance. Each reads and writes only the
//! `FormSignal` handed to it by its parent form.

pub mod contact_form;
pub mod form_field;
pub mod manual_rules_form;
pub mod schema_form;
pub mod values_panel;
