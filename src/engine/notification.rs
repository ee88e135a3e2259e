//! Events surfaced to the toast/notification collaborator.

use serde::Serialize;

/// The core decides *that* and *what* to notify; rendering the toast is the
/// collaborator's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// The classification trigger settled on a category suggestion.
    SuggestionReady { categories: Vec<String> },
    /// A broadcast question reached every responding candidate.
    BatchMessageSent { recipients: usize },
    /// The requester asked to book a specific candidate.
    BookingRequested { candidate: String },
    /// The requester confirmed cancelling the request.
    RequestCancelled,
    /// A claimed order was acknowledged by the dispatcher.
    OrderClaimed { order_id: String },
}
