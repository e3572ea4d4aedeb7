use super::*;

fn order(status: OrderStatus, amount: f64) -> Order {
    Order {
        id: "o".to_owned(),
        site: "S".to_owned(),
        site_url: None,
        amount,
        status,
        target_url: None,
        anchor_text: None,
        buyer_email: None,
        created_at: None,
    }
}

fn payment(status: PaymentStatus, amount: f64) -> Payment {
    Payment { id: "p".to_owned(), order_id: "o".to_owned(), amount, status, user_email: None, created_at: None }
}

fn fund(status: FundRequestStatus, amount: f64) -> FundRequest {
    FundRequest {
        id: "f".to_owned(),
        amount,
        method: "bank_transfer".to_owned(),
        reference: None,
        note: None,
        status,
        user_email: None,
        created_at: None,
    }
}

#[test]
fn order_stats_count_by_status_and_skip_cancelled_spend() {
    let stats = OrderStats::from_orders(&[
        order(OrderStatus::Pending, 10.0),
        order(OrderStatus::Processing, 20.0),
        order(OrderStatus::Completed, 30.0),
        order(OrderStatus::Cancelled, 40.0),
    ]);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.open(), 2);
    assert_eq!(stats.completed, 1);
    assert!((stats.spent - 60.0).abs() < 1e-9);
}

#[test]
fn order_stats_empty() {
    assert_eq!(OrderStats::from_orders(&[]), OrderStats::default());
}

#[test]
fn captured_revenue_counts_only_succeeded() {
    let total = captured_revenue(&[
        payment(PaymentStatus::Succeeded, 100.0),
        payment(PaymentStatus::Failed, 50.0),
        payment(PaymentStatus::Refunded, 25.0),
        payment(PaymentStatus::Succeeded, 5.5),
    ]);
    assert!((total - 105.5).abs() < 1e-9);
}

#[test]
fn pending_funds_sums_pending_only() {
    let (count, sum) = pending_funds(&[
        fund(FundRequestStatus::Pending, 10.0),
        fund(FundRequestStatus::Complete, 99.0),
        fund(FundRequestStatus::Pending, 15.0),
    ]);
    assert_eq!(count, 2);
    assert!((sum - 25.0).abs() < 1e-9);
}
