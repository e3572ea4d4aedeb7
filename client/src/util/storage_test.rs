#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_json_is_none_in_non_hydrate_tests() {
    assert_eq!(load_json::<String>(CART_KEY), None);
    assert_eq!(load_token(), None);
}

#[test]
fn writes_are_noop_but_callable() {
    save_token("abc");
    save_json(CART_KEY, &vec![1, 2, 3]);
    clear_token();
    remove(CART_KEY);
    assert_eq!(load_token(), None);
}
