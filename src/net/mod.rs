//! Network layer: wire types, the authenticated client, and typed
//! endpoint wrappers.

pub mod api;
pub mod client;
pub mod types;
