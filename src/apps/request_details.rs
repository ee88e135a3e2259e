//! Requester-side view of an in-flight request: the responding candidates,
//! the system-recommended pool, and the broadcast question flow.

use std::time::Duration;

use crate::engine::{App, Command, Notification};
use crate::models::{Candidate, Request};

/// Artificial latency for the broadcast send.
const BATCH_SEND_DELAY: Duration = Duration::from_millis(1000);

pub struct RequestDetailsApp;

#[derive(Debug, Clone)]
pub enum Msg {
    RemoveCandidate(String),
    RemoveRecommended(String),
    BatchMessageChanged(String),
    SendBatchMessage,
    BatchSendCompleted,
    Book(String),
    RequestCancel,
    DismissCancel,
    ConfirmCancel,
    MarkCompleted,
}

pub struct State {
    pub request: Request,
    candidates: Vec<Candidate>,
    recommended: Vec<Candidate>,
    pub batch_message: String,
    pub sending_batch: bool,
    pub confirm_cancel_open: bool,
    /// Set once the requester confirms cancellation; the shell leaves the view.
    pub cancelled: bool,
}

impl State {
    /// Responding candidates in insertion order, unfiltered.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn recommended(&self) -> &[Candidate] {
        &self.recommended
    }

    pub fn can_send_batch(&self) -> bool {
        !self.batch_message.is_empty() && !self.sending_batch
    }
}

impl App for RequestDetailsApp {
    type State = State;
    type Msg = Msg;
    type InitParams = (Request, Vec<Candidate>, Vec<Candidate>);

    fn init((request, candidates, recommended): Self::InitParams) -> (State, Command<Msg>) {
        (
            State {
                request,
                candidates,
                recommended,
                batch_message: String::new(),
                sending_batch: false,
                confirm_cancel_open: false,
                cancelled: false,
            },
            Command::None,
        )
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::RemoveCandidate(id) => {
                // Absence is a legitimate race (already removed): success
                // either way, and the entry never comes back this session.
                state.candidates.retain(|candidate| candidate.id != id);
                Command::None
            }
            Msg::RemoveRecommended(id) => {
                state.recommended.retain(|candidate| candidate.id != id);
                Command::None
            }
            Msg::BatchMessageChanged(text) => {
                state.batch_message = text;
                Command::None
            }
            Msg::SendBatchMessage => {
                // A blank message never starts a send.
                if !state.can_send_batch() {
                    return Command::None;
                }
                state.sending_batch = true;
                // The timer is constructed inside the spawned task; update
                // itself never touches the reactor.
                Command::perform(async { tokio::time::sleep(BATCH_SEND_DELAY).await }, |_| {
                    Msg::BatchSendCompleted
                })
            }
            Msg::BatchSendCompleted => {
                state.sending_batch = false;
                state.batch_message.clear();
                Command::Notify(Notification::BatchMessageSent {
                    recipients: state.candidates.len(),
                })
            }
            Msg::Book(id) => {
                // Booking stays a requester-side notification; the provider
                // view keeps its own decoupled projection of the engagement.
                let Some(candidate) = state.candidates.iter().find(|c| c.id == id) else {
                    return Command::None;
                };
                let name = candidate.name.clone();
                state.request.start();
                Command::Notify(Notification::BookingRequested { candidate: name })
            }
            Msg::RequestCancel => {
                state.confirm_cancel_open = true;
                Command::None
            }
            Msg::DismissCancel => {
                state.confirm_cancel_open = false;
                Command::None
            }
            Msg::ConfirmCancel => {
                state.confirm_cancel_open = false;
                state.cancelled = true;
                Command::Notify(Notification::RequestCancelled)
            }
            Msg::MarkCompleted => {
                state.request.complete();
                Command::None
            }
        }
    }

    fn title() -> &'static str {
        "需求详情"
    }
}
