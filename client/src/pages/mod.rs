//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page composes the two independent form components and delegates
//! everything else to `components`.

pub mod side_by_side;
