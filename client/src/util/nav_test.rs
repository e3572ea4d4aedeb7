use super::*;

#[test]
fn query_value_trims_and_drops_blank() {
    assert_eq!(query_value(Some("  o1 ".to_owned())), Some("o1".to_owned()));
    assert_eq!(query_value(Some("   ".to_owned())), None);
    assert_eq!(query_value(None), None);
}

#[test]
fn checkout_success_path_encodes_id() {
    assert_eq!(checkout_success_path("o 1"), "/checkout/success?orderId=o%201");
}
