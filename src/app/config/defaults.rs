// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Grid**: Column count and thumbnail height bounds
//! - **Notifications**: Toast display limits and durations

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: u16 = 4;

/// Minimum number of grid columns.
pub const MIN_COLUMNS: u16 = 1;

/// Maximum number of grid columns.
pub const MAX_COLUMNS: u16 = 8;

/// Default thumbnail height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 180.0;

/// Minimum thumbnail height in logical pixels.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 80.0;

/// Maximum thumbnail height in logical pixels.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 400.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Auto-dismiss delay for success toasts (milliseconds).
pub const SUCCESS_NOTIFICATION_MS: u64 = 3_000;

/// Auto-dismiss delay for warning toasts (milliseconds).
pub const WARNING_NOTIFICATION_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_COLUMNS > 0);
    assert!(MAX_COLUMNS >= MIN_COLUMNS);
    assert!(DEFAULT_COLUMNS >= MIN_COLUMNS);
    assert!(DEFAULT_COLUMNS <= MAX_COLUMNS);

    assert!(MIN_THUMBNAIL_HEIGHT > 0.0);
    assert!(MAX_THUMBNAIL_HEIGHT > MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);

    assert!(MAX_VISIBLE_NOTIFICATIONS > 0);
    assert!(WARNING_NOTIFICATION_MS >= SUCCESS_NOTIFICATION_MS);
};
