// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each one
//! takes a borrowed `ViewContext` and emits gallery events.
//!
//! # Views
//!
//! - [`filter_bar`] - Category filter controls and the search input
//! - [`grid`] - Thumbnail grid of the visible entries
//! - [`lightbox`] - Focused image over a dimmed backdrop
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod filter_bar;
pub mod grid;
pub mod lightbox;
pub mod notifications;
pub mod styles;
pub mod theming;
