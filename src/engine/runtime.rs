//! Single-threaded interpreter for app commands.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::engine::{App, Command, Notification};

/// What spawned work sends back through the channel. Timer output carries
/// the generation it was started under so a cancelled or restarted timer
/// whose message already reached the queue can be told apart from a live one.
enum Inbound<Msg> {
    App(Msg),
    DebounceFired { generation: u64, msg: Msg },
}

/// Owns an app's state, its message channel, the single debounce timer slot,
/// and the notifications produced so far.
///
/// All state mutation happens on the caller's task via [`Runtime::dispatch`];
/// spawned work only ever sends messages back through the channel, so the
/// collection invariants hold without locks. Must be driven from within a
/// tokio runtime.
pub struct Runtime<A: App> {
    state: A::State,
    tx: UnboundedSender<Inbound<A::Msg>>,
    rx: UnboundedReceiver<Inbound<A::Msg>>,
    debounce: Option<JoinHandle<()>>,
    /// Bumped on every timer (re)start and cancel; stale deliveries are
    /// dropped on receipt.
    debounce_generation: u64,
    notifications: Vec<Notification>,
}

impl<A: App> Runtime<A> {
    pub fn new(params: A::InitParams) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (state, command) = A::init(params);
        let mut runtime = Self {
            state,
            tx,
            rx,
            debounce: None,
            debounce_generation: 0,
            notifications: Vec::new(),
        };
        runtime.run_command(command);
        runtime
    }

    pub fn state(&self) -> &A::State {
        &self.state
    }

    /// Feed one message through the app's update function and interpret the
    /// resulting command.
    pub fn dispatch(&mut self, msg: A::Msg) {
        let command = A::update(&mut self.state, msg);
        self.run_command(command);
    }

    /// Process queued messages until the channel stays quiet for `window`.
    pub async fn settle(&mut self, window: Duration) {
        loop {
            match tokio::time::timeout(window, self.rx.recv()).await {
                Ok(Some(inbound)) => self.deliver(inbound),
                Ok(None) | Err(_) => break,
            }
        }
    }

    fn deliver(&mut self, inbound: Inbound<A::Msg>) {
        match inbound {
            Inbound::App(msg) => self.dispatch(msg),
            Inbound::DebounceFired { generation, msg } => {
                // A timer that elapsed and queued its message just before
                // being cancelled or restarted delivers under an old
                // generation; only the live timer's output goes through.
                if generation == self.debounce_generation {
                    self.dispatch(msg);
                }
            }
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Whether the debounce slot currently holds a live timer.
    pub fn debounce_pending(&self) -> bool {
        self.debounce
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn run_command(&mut self, command: Command<A::Msg>) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for command in commands {
                    self.run_command(command);
                }
            }
            Command::Perform(future) => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let _ = tx.send(Inbound::App(future.await));
                });
            }
            Command::Debounce { delay, msg } => {
                self.cancel_debounce();
                let generation = self.debounce_generation;
                let tx = self.tx.clone();
                self.debounce = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Inbound::DebounceFired { generation, msg });
                }));
            }
            Command::CancelDebounce => self.cancel_debounce(),
            Command::Notify(notification) => {
                match serde_json::to_string(&notification) {
                    Ok(payload) => log::info!(target: "notify", "{payload}"),
                    Err(err) => log::error!("failed to encode notification: {err}"),
                }
                self.notifications.push(notification);
            }
        }
    }

    fn cancel_debounce(&mut self) {
        self.debounce_generation += 1;
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PingApp;

    #[derive(Debug)]
    enum Msg {
        Ping,
        Fired,
        Quiet,
        Echo(u32),
    }

    #[derive(Default)]
    struct State {
        fired: u32,
        echoed: Vec<u32>,
    }

    impl App for PingApp {
        type State = State;
        type Msg = Msg;
        type InitParams = ();

        fn init(_params: ()) -> (State, Command<Msg>) {
            (State::default(), Command::None)
        }

        fn update(state: &mut State, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Ping => Command::Debounce {
                    delay: Duration::from_millis(100),
                    msg: Msg::Fired,
                },
                Msg::Fired => {
                    state.fired += 1;
                    Command::None
                }
                Msg::Quiet => Command::CancelDebounce,
                Msg::Echo(n) => {
                    state.echoed.push(n);
                    Command::None
                }
            }
        }

        fn title() -> &'static str {
            "ping"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_restart_fires_once() {
        let mut runtime = Runtime::<PingApp>::new(());
        runtime.dispatch(Msg::Ping);
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(50)).await;

        // Restart before the first timer elapses.
        runtime.dispatch(Msg::Ping);
        tokio::task::yield_now().await;

        runtime.settle(Duration::from_millis(500)).await;
        assert_eq!(runtime.state().fired, 1);
        assert!(!runtime.debounce_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_timer() {
        let mut runtime = Runtime::<PingApp>::new(());
        runtime.dispatch(Msg::Ping);
        tokio::task::yield_now().await;
        runtime.dispatch(Msg::Quiet);

        runtime.settle(Duration::from_millis(500)).await;
        assert_eq!(runtime.state().fired, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_already_queued_timer_message() {
        let mut runtime = Runtime::<PingApp>::new(());
        runtime.dispatch(Msg::Ping);
        tokio::task::yield_now().await;

        // Let the timer elapse and queue its message, then cancel before the
        // queue is processed.
        tokio::time::advance(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        runtime.dispatch(Msg::Quiet);

        runtime.settle(Duration::from_millis(500)).await;
        assert_eq!(runtime.state().fired, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_drops_already_queued_timer_message() {
        let mut runtime = Runtime::<PingApp>::new(());
        runtime.dispatch(Msg::Ping);
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        // Restart after the first timer's message is queued: only the new
        // timer's output counts.
        runtime.dispatch(Msg::Ping);
        tokio::task::yield_now().await;

        runtime.settle(Duration::from_millis(500)).await;
        assert_eq!(runtime.state().fired, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_perform_feeds_output_back() {
        let mut runtime = Runtime::<PingApp>::new(());
        runtime.run_command(Command::perform(async { 7 }, Msg::Echo));
        runtime.run_command(Command::batch(vec![
            Command::perform(async { 8 }, Msg::Echo),
            Command::None,
        ]));

        runtime.settle(Duration::from_millis(10)).await;
        let mut echoed = runtime.state().echoed.clone();
        echoed.sort();
        assert_eq!(echoed, vec![7, 8]);
    }
}
