//! Lifecycle of one screen's remote data.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

/// State machine shared by every list screen:
/// `Idle -> Loading -> {Loaded, Failed}`, re-entering `Loading` (or being
/// patched in place) on mutating actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// User-visible failure message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
