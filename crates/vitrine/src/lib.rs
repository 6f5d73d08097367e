//! **vitrine** -- a tutorial-style terminal storefront built in the
//! [Elm Architecture].
//!
//! This is the umbrella crate that re-exports everything from a single
//! dependency:
//!
//! * All public items from [`vitrine_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Program`],
//!   [`run`], …).
//! * The [`widgets`] module re-exports [`vitrine_widgets`] (text field,
//!   choice picker, tab bar).
//! * The [`shop`] module re-exports [`vitrine_shop`] (catalog, cart,
//!   reviews, and the storefront itself).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   code does not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use vitrine::shop::{StoreConfig, Storefront};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = StoreConfig { /* … */ };
//!     vitrine::run::<Storefront>(config).await.unwrap();
//! }
//! ```
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub use vitrine_core::*;

pub mod widgets {
    pub use vitrine_widgets::*;
}

pub mod shop {
    pub use vitrine_shop::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
