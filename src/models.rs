//! Domain types shared by the requester and provider views.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo;

/// A request may carry at most this many image references.
pub const MAX_REQUEST_IMAGES: usize = 3;

/// Requester-side lifecycle of a posted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Draft,
    Matching,
    InProgress,
    Completed,
}

/// A requester's posted job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    pub description: String,
    pub categories: Vec<String>,
    pub time_slot: Option<String>,
    pub images: Vec<String>,
    pub status: RequestStatus,
}

impl Request {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            categories: Vec::new(),
            time_slot: None,
            images: Vec::new(),
            status: RequestStatus::Draft,
        }
    }

    // Transitions are one-directional; anything else is a silent no-op.

    pub fn publish(&mut self) {
        if self.status == RequestStatus::Draft {
            self.status = RequestStatus::Matching;
        }
    }

    pub fn start(&mut self) {
        if self.status == RequestStatus::Matching {
            self.status = RequestStatus::InProgress;
        }
    }

    pub fn complete(&mut self) {
        if matches!(
            self.status,
            RequestStatus::Matching | RequestStatus::InProgress
        ) {
            self.status = RequestStatus::Completed;
        }
    }
}

/// A provider who responded to a request, as seen by the requester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub title: String,
    pub tags: Vec<String>,
    /// Rating in [0, 5].
    pub rating: f32,
    /// Hourly price.
    pub price: u32,
    pub distance: String,
    pub age: u8,
    /// Years of experience.
    pub experience: u8,
    pub product_name: Option<String>,
    pub product_tags: Vec<String>,
    /// Display-only; mutated by the chat collaborator, never by this core.
    pub unread_messages: u32,
}

/// Provider-side lifecycle of an offered order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    WaitingConfirmation,
    Matched,
    Completed,
}

/// The provider-side projection of a request offered for claiming.
///
/// An `Order` and a `Request` describe the same engagement from opposite
/// role perspectives; they are separate values in this mock client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client_name: String,
    pub service_type: String,
    pub summary: String,
    pub time: String,
    pub distance: String,
    pub address: String,
    pub status: OrderStatus,
    /// Display-only; mutated by the chat collaborator, never by this core.
    pub unread_messages: u32,
}

impl Order {
    /// The full address is exposed only for a confirmed engagement; until
    /// then the provider sees the masked form.
    pub fn visible_address(&self) -> String {
        if self.status == OrderStatus::Matched {
            self.address.clone()
        } else {
            geo::mask_address(&self.address)
        }
    }
}

/// Session counters for the provider dashboard. Monotonically non-decreasing;
/// reset only on process restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchStats {
    pub pushed: u32,
    pub matched: u32,
    pub taken: u32,
}

impl DispatchStats {
    pub fn record_pushed(&mut self, count: u32) {
        self.pushed += count;
    }

    pub fn record_match(&mut self) {
        self.matched += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_transitions_are_one_directional() {
        let mut request = Request::new("家里大扫除");
        assert_eq!(request.status, RequestStatus::Draft);

        request.publish();
        assert_eq!(request.status, RequestStatus::Matching);

        request.start();
        assert_eq!(request.status, RequestStatus::InProgress);

        // Re-publishing an in-progress request changes nothing.
        request.publish();
        assert_eq!(request.status, RequestStatus::InProgress);

        request.complete();
        assert_eq!(request.status, RequestStatus::Completed);

        request.start();
        assert_eq!(request.status, RequestStatus::Completed);
    }

    #[test]
    fn test_complete_straight_from_matching() {
        let mut request = Request::new("帮忙遛狗");
        request.publish();
        request.complete();
        assert_eq!(request.status, RequestStatus::Completed);
    }

    #[test]
    fn test_visible_address_is_gated_on_status() {
        let mut order = Order {
            id: "o1".to_string(),
            client_name: "陈女士".to_string(),
            service_type: "家政保洁".to_string(),
            summary: String::new(),
            time: "今天下午 14:00".to_string(),
            distance: "500m".to_string(),
            address: "阳光花园 3期 5号楼 802".to_string(),
            status: OrderStatus::WaitingConfirmation,
            unread_messages: 0,
        };
        assert_eq!(order.visible_address(), "阳光花园 3期 ***");

        order.status = OrderStatus::Matched;
        assert_eq!(order.visible_address(), "阳光花园 3期 5号楼 802");
    }

    #[test]
    fn test_stats_only_grow() {
        let mut stats = DispatchStats::default();
        stats.record_pushed(3);
        stats.record_match();
        stats.record_match();
        assert_eq!(
            stats,
            DispatchStats {
                pushed: 3,
                matched: 2,
                taken: 0
            }
        );
    }
}
