//! Pure filter/sort projections over the order queues.
//!
//! Projections derive a displayed list from a base collection plus a filter
//! selector; they never mutate the base collection.

use crate::geo;
use crate::models::{Order, OrderStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingFilter {
    #[default]
    All,
    Nearest,
}

impl PendingFilter {
    pub fn label(self) -> &'static str {
        match self {
            PendingFilter::All => "全部 (最新)",
            PendingFilter::Nearest => "距离最近",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchedFilter {
    #[default]
    All,
    Waiting,
    Accepted,
}

impl MatchedFilter {
    pub fn label(self) -> &'static str {
        match self {
            MatchedFilter::All => "全部",
            MatchedFilter::Waiting => "待确认",
            MatchedFilter::Accepted => "已接单",
        }
    }

    pub fn matches(self, order: &Order) -> bool {
        match self {
            MatchedFilter::All => true,
            MatchedFilter::Waiting => order.status == OrderStatus::WaitingConfirmation,
            MatchedFilter::Accepted => order.status == OrderStatus::Matched,
        }
    }
}

/// Derive the displayed pending list. `Nearest` is a stable sort on the
/// normalized distance, so ties keep their arrival order.
pub fn project_pending(orders: &[Order], filter: PendingFilter) -> Vec<Order> {
    let mut projected = orders.to_vec();
    if filter == PendingFilter::Nearest {
        projected.sort_by(|a, b| {
            geo::parse_distance(&a.distance).total_cmp(&geo::parse_distance(&b.distance))
        });
    }
    projected
}

/// Derive the displayed matched list; filtering keeps relative order.
pub fn project_matched(orders: &[Order], filter: MatchedFilter) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| filter.matches(order))
        .cloned()
        .collect()
}
