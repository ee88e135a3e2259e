pub mod app;
pub mod command;
pub mod notification;
pub mod runtime;

pub use app::App;
pub use command::Command;
pub use notification::Notification;
pub use runtime::Runtime;
