//! Built-in subscription sources.
//!
//! The only built-in source is the terminal event stream
//! ([`terminal_events`]); application-defined fan-in goes through
//! [`Channel`](crate::Channel) subscriptions instead.

mod terminal;

pub use terminal::*;
