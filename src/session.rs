//! Which side of the marketplace the user is on, and where the requester
//! side currently sits.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Requester,
    Provider,
}

impl Role {
    pub fn toggled(self) -> Self {
        match self {
            Role::Requester => Role::Provider,
            Role::Provider => Role::Requester,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Requester => "需求方",
            Role::Provider => "服务方",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequesterView {
    Publish,
    Details,
}

/// Top-level navigation state. Transitions are pure; the role switch does
/// not disturb the requester's current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub requester_view: RequesterView,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            requester_view: RequesterView::Publish,
        }
    }

    pub fn toggle_role(&mut self) {
        self.role = self.role.toggled();
    }

    pub fn open_details(&mut self) {
        self.requester_view = RequesterView::Details;
    }

    pub fn back_to_publish(&mut self) {
        self.requester_view = RequesterView::Publish;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Role::Requester)
    }
}
