// SPDX-License-Identifier: MPL-2.0
//! Catalog loading: turns a manifest or a directory into gallery entries.
//!
//! A gallery is declared either by a `gallery.toml` manifest or by a plain
//! directory of images. The catalog is read once at startup; the entry list
//! it produces never changes afterwards.
//!
//! # Manifest
//!
//! ```toml
//! title = "Holiday"
//! categories = ["nature", "city"]
//!
//! [[image]]
//! source = "images/lake.jpg"
//! title = "Mountain Lake"
//! alt = "A lake between mountains"
//! category = "nature"
//! ```
//!
//! Relative sources resolve against the manifest's directory. Blank
//! attributes are treated as absent.
//!
//! # Directory scan
//!
//! Image files in the directory and in its direct subdirectories become
//! entries. The subdirectory name is the category and the file stem is the
//! title. Entries are sorted by path.

use crate::domain::gallery::{EntryId, GalleryItem, ImageEntry, ALL_CATEGORIES};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file name looked up inside a gallery directory.
pub const MANIFEST_FILE: &str = "gallery.toml";

/// Image extensions picked up by the directory scan (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif", "ico",
];

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default, rename = "image")]
    images: Vec<ManifestImage>,
}

#[derive(Debug, Deserialize)]
struct ManifestImage {
    source: PathBuf,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// Declared gallery content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    title: Option<String>,
    entries: Vec<ImageEntry>,
    categories: Vec<String>,
}

impl Catalog {
    /// Loads a catalog from a manifest file or a directory.
    ///
    /// A directory containing [`MANIFEST_FILE`] is read through its manifest;
    /// any other directory is scanned.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be read or the manifest is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = if path.is_dir() {
            let manifest = path.join(MANIFEST_FILE);
            if manifest.is_file() {
                Self::from_manifest_file(&manifest)?
            } else {
                Self::scan_directory(path)?
            }
        } else {
            Self::from_manifest_file(path)?
        };

        for entry in &catalog.entries {
            if !entry.source().exists() {
                log::warn!("image source not found: {}", entry.source().display());
            }
        }
        log::info!(
            "catalog loaded from {}: {} images, {} categories",
            path.display(),
            catalog.entries.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Reads a manifest file; relative sources resolve against its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_manifest_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_manifest_str(&content, base_dir)
    }

    /// Parses manifest text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] if the text is not a valid manifest.
    pub fn from_manifest_str(content: &str, base_dir: &Path) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|err| Error::Manifest(err.to_string()))?;

        let entries: Vec<ImageEntry> = manifest
            .images
            .into_iter()
            .enumerate()
            .map(|(position, image)| {
                let source = if image.source.is_absolute() {
                    image.source
                } else {
                    base_dir.join(image.source)
                };
                let mut entry = ImageEntry::new(EntryId::new(position), source);
                if let Some(title) = non_blank(image.title) {
                    entry = entry.with_title(title);
                }
                if let Some(alt) = non_blank(image.alt) {
                    entry = entry.with_alt_text(alt);
                }
                if let Some(category) = non_blank(image.category) {
                    entry = entry.with_category(category);
                }
                entry
            })
            .collect();

        let declared: Vec<String> = manifest
            .categories
            .into_iter()
            .filter_map(|c| non_blank(Some(c)))
            .collect();
        let categories = if declared.is_empty() {
            categories_in_order(&entries)
        } else {
            dedup_categories(declared)
        };

        Ok(Self {
            title: non_blank(manifest.title),
            entries,
            categories,
        })
    }

    /// Builds a catalog from the images in `directory` and its direct
    /// subdirectories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let mut found: Vec<(PathBuf, Option<String>)> = Vec::new();

        for entry in fs::read_dir(directory)? {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) {
                found.push((path, None));
            } else if path.is_dir() {
                let category = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
                for child in fs::read_dir(&path)? {
                    let child = child?.path();
                    if child.is_file() && is_supported_image(&child) {
                        found.push((child, category.clone()));
                    }
                }
            }
        }

        found.sort_by(|a, b| a.0.cmp(&b.0));

        let entries: Vec<ImageEntry> = found
            .into_iter()
            .enumerate()
            .map(|(position, (path, category))| {
                let title = title_from_path(&path);
                let mut entry = ImageEntry::new(EntryId::new(position), path);
                if let Some(title) = title {
                    entry = entry.with_title(title);
                }
                if let Some(category) = category {
                    entry = entry.with_category(category);
                }
                entry
            })
            .collect();

        let categories = categories_in_order(&entries);
        let title = directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Ok(Self {
            title,
            entries,
            categories,
        })
    }

    /// Builds a catalog from already constructed entries.
    #[must_use]
    pub fn from_entries(entries: Vec<ImageEntry>) -> Self {
        let categories = categories_in_order(&entries);
        Self {
            title: None,
            entries,
            categories,
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    /// Consumes the catalog, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ImageEntry> {
        self.entries
    }

    /// Categories offered as filter controls, without `all`.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Filter control values in display order, starting with `all`.
    #[must_use]
    pub fn filter_values(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn title_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    non_blank(Some(stem.replace(['-', '_'], " ")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Distinct entry categories in first-seen order.
fn categories_in_order(entries: &[ImageEntry]) -> Vec<String> {
    dedup_categories(
        entries
            .iter()
            .filter_map(|e| e.category().map(str::to_string))
            .collect(),
    )
}

/// Returns whether `path` holds an image the viewer can decode.
///
/// Reads the header only; entries failing this check are shown with a
/// placeholder instead of a picture.
#[must_use]
pub fn is_decodable(path: &Path) -> bool {
    let dimensions = image_rs::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image_rs::ImageError::from)
        .and_then(|reader| reader.into_dimensions());
    match dimensions {
        Ok(_) => true,
        Err(err) => {
            log::debug!("cannot decode {}: {err}", path.display());
            false
        }
    }
}

fn dedup_categories(categories: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(categories.len());
    for category in categories {
        if category != ALL_CATEGORIES && !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
