//! Page components, one per route.

pub mod create_order;
pub mod edit_order;
pub mod gallery;
pub mod login;
pub mod orders;
pub mod register;
