// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts report download results and startup warnings (unreadable settings,
//! missing images) without blocking the gallery.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and auto-dismiss
//! - [`toast`] - Toast widget rendering
//!
//! Success toasts last 3s, warnings 5s, errors stay until dismissed. At most
//! three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
