//! The state/message/update shape every view in this client follows.

use crate::engine::command::Command;

/// An interactive view: immutable-ish state, a message enum for every user
/// gesture or timer event, and a synchronous update function. All side
/// effects are returned as [`Command`] values; the update itself never
/// blocks, spawns, or sleeps.
pub trait App {
    type State;
    type Msg: Send + 'static;
    type InitParams;

    fn init(params: Self::InitParams) -> (Self::State, Command<Self::Msg>);

    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    fn title() -> &'static str;
}
