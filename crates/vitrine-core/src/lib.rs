//! Runtime kernel for **vitrine**, a terminal storefront demo.
//!
//! `vitrine-core` provides the traits, types, and runtime that power the
//! application. The design follows the [Elm Architecture]: the program is a
//! pure **init -> update -> view** cycle, with external events pushed to the
//! edges through [`Subscription`]s and state transitions expressed as
//! messages.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Synchronous side effect returned from `update` |
//! | [`Subscription`] | Long-lived event source (terminal events, channels) |
//! | [`Channel`] | Scoped broadcast channel between distant components |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! # Architecture
//!
//! 1. **init** -- [`Model::init`] creates the initial state.
//! 2. **view** -- the runtime calls [`Model::view`] to render the state.
//! 3. **event** -- interaction events arrive via [`Subscription`]s and are
//!    mapped into the model's `Message` type.
//! 4. **update** -- [`Model::update`] receives a message, mutates state, and
//!    optionally returns a [`Command`].
//! 5. **repeat** -- steps 2-4 repeat until the program exits.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod channel;
pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use channel::{Channel, ChannelReceiver, ChannelSender};
pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{
    log_to_file, OutputTarget, Program, ProgramError, ProgramHandle, ProgramOptions,
};
pub use subscription::{Subscription, SubscriptionId};
pub use subscriptions::terminal_events;

/// Run an application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
