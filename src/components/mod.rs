//! Reusable UI components shared across pages.

pub mod guard;
pub mod nav_bar;
