use super::*;

fn site(id: &str, price: f64) -> SiteListing {
    SiteListing {
        id: id.to_owned(),
        name: format!("Site {id}"),
        url: format!("https://{id}.test"),
        domain_authority: 40,
        price,
        category: "Tech".to_owned(),
        description: None,
        turnaround_days: Some(5),
    }
}

#[test]
fn add_is_idempotent_per_site() {
    let mut cart = CartState::default();
    assert!(cart.add(site("a", 10.0)));
    assert!(!cart.add(site("a", 10.0)));
    assert_eq!(cart.len(), 1);
}

#[test]
fn total_sums_prices() {
    let mut cart = CartState::default();
    cart.add(site("a", 10.5));
    cart.add(site("b", 20.0));
    assert!((cart.total() - 30.5).abs() < 1e-9);
    cart.remove("a");
    assert!((cart.total() - 20.0).abs() < 1e-9);
}

#[test]
fn checkout_items_requires_non_empty_cart() {
    assert_eq!(CartState::default().checkout_items(), Err("Your cart is empty.".to_owned()));
}

#[test]
fn checkout_items_names_site_with_invalid_url() {
    let mut cart = CartState::default();
    cart.add(site("a", 10.0));
    cart.set_target_url("a", "not a url".to_owned());
    cart.set_anchor_text("a", "widgets".to_owned());
    let err = cart.checkout_items().unwrap_err();
    assert!(err.starts_with("Site a:"));
}

#[test]
fn checkout_items_builds_payload() {
    let mut cart = CartState::default();
    cart.add(site("a", 10.0));
    cart.set_target_url("a", " https://me.test/page ".to_owned());
    cart.set_anchor_text("a", " best widgets ".to_owned());
    let items = cart.checkout_items().unwrap();
    assert_eq!(
        items,
        vec![CheckoutItem {
            site_id: "a".to_owned(),
            target_url: "https://me.test/page".to_owned(),
            anchor_text: "best widgets".to_owned(),
        }]
    );
}
