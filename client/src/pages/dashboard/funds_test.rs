use super::*;

#[test]
fn method_label_maps_known_methods() {
    assert_eq!(method_label("paypal"), "PayPal");
    assert_eq!(method_label("bank_transfer"), "Bank transfer");
}

#[test]
fn method_label_passes_unknown_values_through() {
    assert_eq!(method_label("wire"), "wire");
}
