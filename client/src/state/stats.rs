//! Summary tiles for the buyer dashboard and admin overview.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::{
    AccountStatus, FundRequest, FundRequestStatus, Order, OrderStatus, Payment, PaymentStatus, Role, User,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub cancelled: usize,
    /// Sum of every order that was not cancelled.
    pub spent: f64,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut stats = Self { total: orders.len(), ..Self::default() };
        for order in orders {
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Processing => stats.processing += 1,
                OrderStatus::Completed => stats.completed += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
            }
            if order.status != OrderStatus::Cancelled {
                stats.spent += order.amount;
            }
        }
        stats
    }

    /// Orders still awaiting publication.
    pub fn open(&self) -> usize {
        self.pending + self.processing
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub admins: usize,
    pub suspended: usize,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        Self {
            total: users.len(),
            admins: users.iter().filter(|u| u.role == Role::Admin).count(),
            suspended: users.iter().filter(|u| u.status == AccountStatus::Suspended).count(),
        }
    }
}

/// Revenue captured by succeeded payments.
pub fn captured_revenue(payments: &[Payment]) -> f64 {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Succeeded)
        .map(|p| p.amount)
        .sum()
}

/// Number and total of fund requests still awaiting review.
pub fn pending_funds(requests: &[FundRequest]) -> (usize, f64) {
    requests
        .iter()
        .filter(|r| r.status == FundRequestStatus::Pending)
        .fold((0, 0.0), |(count, sum), r| (count + 1, sum + r.amount))
}
