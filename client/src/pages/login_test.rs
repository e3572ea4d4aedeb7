use super::*;
use crate::net::types::{AccountStatus, Role};

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "buyer@example.com".to_owned(),
        name: "Buyer".to_owned(),
        role,
        status: AccountStatus::Active,
        balance: 0.0,
        email_verified: true,
        created_at: None,
    }
}

#[test]
fn buyers_land_on_dashboard() {
    assert_eq!(landing_route(&user(Role::User)), "/dashboard");
}

#[test]
fn admins_land_on_back_office() {
    assert_eq!(landing_route(&user(Role::Admin)), "/admin");
}
