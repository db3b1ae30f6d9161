// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent (`.ftl`) files embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Region fallback (`fr-CA` uses `fr`)
//! - Fallback to `en-US` when nothing matches

pub mod fluent;
