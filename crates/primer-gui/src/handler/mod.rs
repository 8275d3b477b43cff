//! Message handler architecture for the Iced GUI.
//!
//! Handlers keep message processing out of the `App` struct: each view's
//! messages go to a dedicated handler implementing [`MessageHandler`], and
//! `App::update` dispatches to it.
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Home(msg) => HomeHandler.handle(&mut self.state, msg),
//!         Message::Topic(msg) => TopicHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```
//!
//! Handlers mutate [`AppState`] directly and return a [`Task`] only for
//! work that has to go through the runtime: clipboard writes, scroll
//! commands, and the copy-badge timer.

mod home;
mod navigation;
mod topic;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use home::HomeHandler;
pub use navigation::{go_back, navigate};
pub use topic::TopicHandler;

/// Trait for handling messages in the Iced architecture.
///
/// Each handler is responsible for one message type and gets the full
/// application state, so cross-cutting concerns such as persistence stay in
/// one place per interaction.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task. `Task::none()` when the message is fully absorbed.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
