//! Provider-side order hall: the pending and matched dispatch queues.

pub mod projection;

use std::time::Duration;

use crate::engine::{App, Command, Notification};
use crate::models::{DispatchStats, Order, OrderStatus};

use projection::{MatchedFilter, PendingFilter};

/// Artificial latency before a claim acknowledgement comes back.
const CLAIM_ACK_DELAY: Duration = Duration::from_millis(800);

pub struct OrderHallApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Pending,
    Matched,
}

#[derive(Debug, Clone)]
pub enum Msg {
    ToggleActive,
    SelectTab(Tab),
    SetPendingFilter(PendingFilter),
    SetMatchedFilter(MatchedFilter),
    TakeOrder(String),
    ClaimAcknowledged(String),
    IgnoreOrder(String),
    OrdersPushed(Vec<Order>),
}

pub struct State {
    /// On-duty switch; while off, pending work queues up but stays hidden.
    pub active: bool,
    pub tab: Tab,
    pub pending_filter: PendingFilter,
    pub matched_filter: MatchedFilter,
    pending: Vec<Order>,
    matched: Vec<Order>,
    pub stats: DispatchStats,
}

impl State {
    fn from_seed(orders: Vec<Order>, stats: DispatchStats) -> Self {
        let mut pending = Vec::new();
        let mut matched = Vec::new();
        for order in orders {
            match order.status {
                OrderStatus::Pending => pending.push(order),
                OrderStatus::WaitingConfirmation | OrderStatus::Matched => matched.push(order),
                OrderStatus::Completed => {}
            }
        }
        Self {
            active: false,
            tab: Tab::Pending,
            pending_filter: PendingFilter::default(),
            matched_filter: MatchedFilter::default(),
            pending,
            matched,
            stats,
        }
    }

    /// Raw pending queue in arrival order.
    pub fn pending(&self) -> &[Order] {
        &self.pending
    }

    /// Claimed orders, most recent first.
    pub fn matched(&self) -> &[Order] {
        &self.matched
    }

    /// The pending list as exposed to the view layer: hidden entirely while
    /// the provider is off duty.
    pub fn visible_pending(&self) -> Vec<Order> {
        if !self.active {
            return Vec::new();
        }
        projection::project_pending(&self.pending, self.pending_filter)
    }

    pub fn visible_matched(&self) -> Vec<Order> {
        projection::project_matched(&self.matched, self.matched_filter)
    }

    /// Projection for whichever tab is selected.
    pub fn visible_orders(&self) -> Vec<Order> {
        match self.tab {
            Tab::Pending => self.visible_pending(),
            Tab::Matched => self.visible_matched(),
        }
    }
}

impl App for OrderHallApp {
    type State = State;
    type Msg = Msg;
    type InitParams = (Vec<Order>, DispatchStats);

    fn init((orders, stats): Self::InitParams) -> (State, Command<Msg>) {
        (State::from_seed(orders, stats), Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::ToggleActive => {
                state.active = !state.active;
                log::info!(
                    "provider is now {}",
                    if state.active { "on duty" } else { "off duty" }
                );
                Command::None
            }
            Msg::SelectTab(tab) => {
                state.tab = tab;
                Command::None
            }
            Msg::SetPendingFilter(filter) => {
                state.pending_filter = filter;
                Command::None
            }
            Msg::SetMatchedFilter(filter) => {
                state.matched_filter = filter;
                Command::None
            }
            Msg::TakeOrder(id) => {
                // The UI can race ahead of a list rebuild; an id that already
                // left the pending queue is a no-op, not a fault.
                let Some(index) = state.pending.iter().position(|order| order.id == id) else {
                    return Command::None;
                };
                let mut order = state.pending.remove(index);
                order.status = OrderStatus::WaitingConfirmation;
                // Most recent claim first.
                state.matched.insert(0, order);
                state.stats.record_match();
                // The timer is constructed inside the spawned task; update
                // itself never touches the reactor.
                Command::perform(
                    async { tokio::time::sleep(CLAIM_ACK_DELAY).await },
                    move |_| Msg::ClaimAcknowledged(id),
                )
            }
            Msg::ClaimAcknowledged(id) => {
                Command::Notify(Notification::OrderClaimed { order_id: id })
            }
            Msg::IgnoreOrder(id) => {
                state.pending.retain(|order| order.id != id);
                Command::None
            }
            Msg::OrdersPushed(orders) => {
                state.stats.record_pushed(orders.len() as u32);
                state.pending.extend(orders);
                Command::None
            }
        }
    }

    fn title() -> &'static str {
        "接单大厅"
    }
}
