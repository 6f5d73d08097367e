//! Reusable components for **vitrine**.
//!
//! Every widget implements [`vitrine_core::Component`], so it can be embedded
//! inside any [`vitrine_core::Model`] and composed freely within [`ratatui`]
//! layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`choice`] | Horizontal single-choice picker |
//! | [`field`] | Single-line text input |
//! | [`tabs`] | Horizontal tab bar |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chrome`] | Bordered-block helpers |
//! | [`focus`] | [`FocusGroup`](focus::FocusGroup) for cycling focus across components |
//! | [`trim`] | Display-width-aware truncation |

pub mod choice;
pub mod chrome;
pub mod field;
pub mod focus;
pub mod tabs;
pub mod trim;
