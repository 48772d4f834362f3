//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The session store is the only process-wide state; every screen owns its
//! own transient copy of the data it renders and re-fetches it on mount.
//! List screens share the `FetchState` lifecycle so loading and failure
//! handling look the same everywhere.

pub mod fetch;
pub mod gallery;
pub mod orders;
pub mod session;
