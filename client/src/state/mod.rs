//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State here is plain data plus pure helpers over `forms::FormController`,
//! so it can be unit-tested without a browser.

pub mod form;
