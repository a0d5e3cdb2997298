// ABOUTME: Utility functions for the slidegen application
// ABOUTME: Image discovery, numeric-aware ordering and directory helpers

use crate::errors::{Result, SlideError};
use image::ImageFormat;
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions accepted as slide images, compared case-insensitively
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// An image file on disk together with the format inferred from its extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub path: PathBuf,
    pub format: ImageFormat,
}

impl ImageAsset {
    /// Build an asset from a path if its extension is a recognized image extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = image_extension(path)?;
        let format = ImageFormat::from_extension(&ext)?;
        Some(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    /// Lowercased extension of the underlying file
    pub fn extension(&self) -> String {
        image_extension(&self.path).unwrap_or_else(|| "png".to_string())
    }

    /// MIME type used in the package content types
    pub fn content_type(&self) -> &'static str {
        match self.format {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
            _ => "image/png",
        }
    }
}

/// Lowercased extension of `path` when it is one of [`IMAGE_EXTENSIONS`]
fn image_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Check whether a file name carries a recognized image extension
pub fn is_image_file(name: &str) -> bool {
    image_extension(Path::new(name)).is_some()
}

/// A recognized image found in a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// File name, lossily decoded, used for ordering and numbering
    pub name: String,
    /// Path as returned by the directory listing, used for reading
    pub path: PathBuf,
}

/// List the recognized image files in `dir`, unsorted. Subdirectories are skipped.
pub fn list_image_files(dir: &Path) -> Result<Vec<ImageEntry>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            continue;
        }
        if image_extension(&path).is_some() {
            images.push(ImageEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
            });
        }
    }
    Ok(images)
}

/// Sort directory entries into deck order using [`natural_cmp`] on their names
pub fn sort_image_files(images: &mut [ImageEntry]) {
    images.sort_by(|a, b| natural_cmp(&a.name, &b.name));
}

/// Punctuation and symbols in collation order; anything unlisted sorts after them
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary collation weight of one element. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Primary<'a> {
    Space,
    Punct(usize, char),
    Number { len: usize, digits: &'a str },
    Letter(char),
}

#[derive(Debug, Clone, Copy)]
struct Element<'a> {
    primary: Primary<'a>,
    upper: bool,
    leading_zeros: usize,
}

/// Compare two strings the way a numeric collator orders file names.
///
/// Whitespace sorts first, then punctuation and symbols, then numbers, then
/// letters. Runs of ASCII digits compare by value. Letters compare without
/// case first; on a case-only difference lowercase wins, then the name with
/// more leading zeros, then plain byte order, so the result is a total order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left: Vec<Element> = elements(a).collect();
    let right: Vec<Element> = elements(b).collect();

    let primary = left
        .iter()
        .map(|e| e.primary)
        .cmp(right.iter().map(|e| e.primary));
    if primary != Ordering::Equal {
        return primary;
    }

    // Primary keys are equal, so both sides have the same element count
    let case = left
        .iter()
        .zip(&right)
        .map(|(l, r)| l.upper.cmp(&r.upper))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or(Ordering::Equal);
    if case != Ordering::Equal {
        return case;
    }

    left.iter()
        .zip(&right)
        .map(|(l, r)| r.leading_zeros.cmp(&l.leading_zeros))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or_else(|| a.cmp(b))
}

/// Sort names in place using [`natural_cmp`]
pub fn natural_sort(names: &mut [String]) {
    names.sort_by(|a, b| natural_cmp(a, b));
}

/// Split a string into collation elements, one per digit run or character
fn elements(s: &str) -> impl Iterator<Item = Element<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let c = rest.chars().next()?;

        if c.is_ascii_digit() {
            let end = rest
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(end);
            rest = tail;
            let digits = run.trim_start_matches('0');
            return Some(Element {
                primary: Primary::Number {
                    len: digits.len(),
                    digits,
                },
                upper: false,
                leading_zeros: run.len() - digits.len(),
            });
        }

        rest = &rest[c.len_utf8()..];
        let primary = if c.is_whitespace() {
            Primary::Space
        } else if c.is_alphanumeric() {
            Primary::Letter(c.to_lowercase().next().unwrap_or(c))
        } else {
            let rank = PUNCTUATION_ORDER
                .chars()
                .position(|p| p == c)
                .unwrap_or(PUNCTUATION_ORDER.len());
            Primary::Punct(rank, c)
        };
        Some(Element {
            primary,
            upper: c.is_uppercase(),
            leading_zeros: 0,
        })
    })
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(SlideError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", path.display()),
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory_exists(parent)?;
        }
    }
    Ok(())
}
