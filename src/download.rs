// SPDX-License-Identifier: MPL-2.0
//! Writing the focused image to disk.
//!
//! Downloads are always named after their position in the visible subset
//! (`image-<n>.jpg`). JPEG sources are copied byte for byte; everything else
//! is decoded and re-encoded as JPEG so the file matches its name.

use crate::application::lightbox::suggested_file_name;
use crate::error::Result;
use image_rs::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions that are already JPEG and can be copied as is.
const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| JPEG_EXTENSIONS.contains(&ext.as_str()))
}

/// Both paths name the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Writes `source` to `destination` as a JPEG file.
///
/// Parent directories are created when missing. An existing destination is
/// overwritten; the save dialog already asked about it. Choosing the source
/// file itself leaves it untouched.
///
/// # Errors
///
/// Returns an error if the source cannot be read or decoded, or the
/// destination cannot be written.
pub fn save_image(source: &Path, destination: &Path) -> Result<()> {
    if is_same_file(source, destination) {
        log::info!("{} is the source itself, nothing to write", destination.display());
        return Ok(());
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if is_jpeg(source) {
        fs::copy(source, destination)?;
    } else {
        let image = image_rs::open(source)?;
        image
            .to_rgb8()
            .save_with_format(destination, ImageFormat::Jpeg)?;
    }

    log::info!(
        "saved {} to {}",
        source.display(),
        destination.display()
    );
    Ok(())
}

/// Saves `source` into `directory` under its suggested name.
///
/// Never overwrites: when `image-<n>.jpg` is taken, `image-<n> (1).jpg`,
/// `image-<n> (2).jpg`, ... are tried. Returns the written path.
///
/// # Errors
///
/// See [`save_image`].
pub fn save_to_directory(source: &Path, directory: &Path, position: usize) -> Result<PathBuf> {
    let destination = unique_destination(directory, &suggested_file_name(position));
    save_image(source, &destination)?;
    Ok(destination)
}

/// First non-existing path in `directory` for `file_name`.
#[must_use]
pub fn unique_destination(directory: &Path, file_name: &str) -> PathBuf {
    let candidate = directory.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, extension) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    };
    (1..)
        .map(|n| {
            let name = match extension {
                Some(ext) => format!("{stem} ({n}).{ext}"),
                None => format!("{stem} ({n})"),
            };
            directory.join(name)
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{ImageBuffer, Rgba};
    use tempfile::tempdir;

    fn write_png(path: &Path) {
        let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(4, 3, Rgba([200, 40, 40, 255]));
        image.save(path).expect("failed to write png");
    }

    #[test]
    fn jpeg_source_is_copied_verbatim() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = temp_dir.path().join("lake.JPG");
        fs::write(&source, b"not really a jpeg").expect("write source");
        let destination = temp_dir.path().join("out").join("image-1.jpg");

        save_image(&source, &destination).expect("copy should succeed");

        assert_eq!(
            fs::read(&destination).expect("read back"),
            b"not really a jpeg"
        );
    }

    #[test]
    fn png_source_is_reencoded_as_jpeg() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = temp_dir.path().join("bridge.png");
        write_png(&source);
        let destination = temp_dir.path().join("image-2.jpg");

        save_image(&source, &destination).expect("re-encode should succeed");

        let format = image_rs::ImageReader::open(&destination)
            .expect("open")
            .with_guessed_format()
            .expect("guess")
            .format();
        assert_eq!(format, Some(ImageFormat::Jpeg));
    }

    #[test]
    fn saving_over_the_source_keeps_its_bytes() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = temp_dir.path().join("lake.jpg");
        fs::write(&source, b"original jpeg bytes").expect("write source");
        // Same file reached through a different spelling.
        let destination = temp_dir.path().join(".").join("lake.jpg");

        save_image(&source, &destination).expect("same file should be a no-op");

        assert_eq!(
            fs::read(&source).expect("read back"),
            b"original jpeg bytes"
        );
    }

    #[test]
    fn saving_png_over_itself_is_not_reencoded() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = temp_dir.path().join("bridge.png");
        write_png(&source);

        save_image(&source, &source).expect("same file should be a no-op");

        let format = image_rs::ImageReader::open(&source)
            .expect("open")
            .with_guessed_format()
            .expect("guess")
            .format();
        assert_eq!(format, Some(ImageFormat::Png));
    }

    #[test]
    fn missing_source_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = save_image(
            &temp_dir.path().join("missing.jpg"),
            &temp_dir.path().join("image-1.jpg"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn undecodable_source_is_an_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = temp_dir.path().join("broken.png");
        fs::write(&source, b"garbage").expect("write source");

        let err = save_image(&source, &temp_dir.path().join("image-1.jpg")).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn save_to_directory_uses_position_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = temp_dir.path().join("lake.jpg");
        fs::write(&source, b"jpeg").expect("write source");
        let downloads = temp_dir.path().join("downloads");

        let saved = save_to_directory(&source, &downloads, 3).expect("save");
        assert_eq!(saved, downloads.join("image-3.jpg"));
    }

    #[test]
    fn save_to_directory_never_overwrites() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = temp_dir.path().join("lake.jpg");
        fs::write(&source, b"jpeg").expect("write source");

        let first = save_to_directory(&source, temp_dir.path(), 1).expect("first save");
        let second = save_to_directory(&source, temp_dir.path(), 1).expect("second save");

        assert_eq!(first, temp_dir.path().join("image-1.jpg"));
        assert_eq!(second, temp_dir.path().join("image-1 (1).jpg"));
    }
}
