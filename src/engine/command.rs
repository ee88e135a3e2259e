//! Side effects an app's update function can request.

use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::engine::notification::Notification;

/// Returned by `App::update`; interpreted by the runtime.
pub enum Command<Msg> {
    None,
    Batch(Vec<Command<Msg>>),
    /// Run a future to completion and feed its output back as a message.
    Perform(BoxFuture<'static, Msg>),
    /// (Re)start the single debounce slot; an already pending timer is
    /// cancelled first, so only the last request in a burst ever fires.
    Debounce { delay: Duration, msg: Msg },
    /// Cancel the debounce slot without starting a new timer.
    CancelDebounce,
    /// Surface an event to the notification collaborator.
    Notify(Notification),
}

impl<Msg: Send + 'static> Command<Msg> {
    pub fn perform<T, Fut, F>(future: Fut, f: F) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
        F: FnOnce(T) -> Msg + Send + 'static,
    {
        Command::Perform(Box::pin(async move { f(future.await) }))
    }

    /// Collapse a command list, dropping the wrapper where possible.
    pub fn batch(mut commands: Vec<Command<Msg>>) -> Self {
        match commands.len() {
            0 => Command::None,
            1 => commands.remove(0),
            _ => Command::Batch(commands),
        }
    }
}
