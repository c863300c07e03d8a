//! Components mounted into the existing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns the state of one injected widget and reaches the
//! browser only through `crate::util` adapters. The page wiring decides
//! where each one is mounted.

pub mod copy_button;
pub mod search_panel;
pub mod table_of_contents;
pub mod theme_toggle;
