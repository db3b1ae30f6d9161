// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! The gallery state machine itself never fails; these errors come from the
//! shell around it (reading the catalog, loading settings, writing downloads).
//! Errors are `Clone` so they can travel inside Iced messages.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Manifest Error: {0}")]
    Manifest(String),
    #[error("Image Error: {0}")]
    Image(String),
    /// The user dismissed a native dialog without choosing a destination.
    #[error("Dialog cancelled")]
    DialogCancelled,
}

impl Error {
    /// Returns the i18n message key used when this error is shown as a toast.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Manifest(_) => "error-manifest",
            Error::Image(_) => "error-image",
            Error::DialogCancelled => "error-dialog-cancelled",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
