use super::*;
use crate::net::types::OrderStatus;

fn order() -> Order {
    Order {
        id: "o1".to_owned(),
        site: "Tech Weekly".to_owned(),
        site_url: None,
        amount: 120.0,
        status: OrderStatus::Pending,
        target_url: None,
        anchor_text: None,
        buyer_email: None,
        created_at: None,
    }
}

#[test]
fn missing_or_blank_order_id_goes_home() {
    assert_eq!(from_query(None), Confirmation::GoHome);
    assert_eq!(from_query(Some("   ".to_owned())), Confirmation::GoHome);
}

#[test]
fn order_id_is_trimmed_and_loaded() {
    assert_eq!(from_query(Some(" o1 ".to_owned())), Confirmation::Load("o1".to_owned()));
}

#[test]
fn failed_fetch_goes_home() {
    let result = Err(ApiError::Status { status: 404, message: "Order not found".to_owned() });
    assert_eq!(from_fetch(result), Confirmation::GoHome);
}

#[test]
fn fetched_order_is_shown() {
    assert_eq!(from_fetch(Ok(order())), Confirmation::Show(order()));
}
