//! Order list screen state.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use super::fetch::FetchState;
use crate::net::types::Order;

/// Transient per-visit order list; discarded on unmount and re-fetched on
/// the next mount.
#[derive(Clone, Debug, Default)]
pub struct OrdersState {
    pub list: FetchState<Vec<Order>>,
}

impl OrdersState {
    /// Replace the list with a freshly fetched sequence, in server order.
    pub fn loaded(&mut self, orders: Vec<Order>) {
        self.list = FetchState::Loaded(orders);
    }

    pub fn failed(&mut self, message: String) {
        self.list = FetchState::Failed(message);
    }
}
