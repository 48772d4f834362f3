use super::*;

fn order(id: &str, details: &str) -> Order {
    Order {
        id: id.to_owned(),
        order_details: details.to_owned(),
    }
}

#[test]
fn orders_state_defaults_to_idle() {
    let state = OrdersState::default();
    assert_eq!(state.list, FetchState::Idle);
}

#[test]
fn loaded_keeps_server_order() {
    let mut state = OrdersState::default();
    state.loaded(vec![order("2", "second"), order("1", "first")]);

    let FetchState::Loaded(orders) = &state.list else {
        panic!("expected loaded list");
    };
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, "2");
    assert_eq!(orders[1].id, "1");
}

#[test]
fn failed_records_message() {
    let mut state = OrdersState::default();
    state.failed("could not reach the server".to_owned());
    assert_eq!(state.list.error(), Some("could not reach the server"));
}
