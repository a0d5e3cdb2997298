// ABOUTME: Slide naming module for the slidegen application
// ABOUTME: Allocates the next zero-padded sequence number for a generated slide

use crate::utils::list_image_files;
use log::debug;
use std::path::Path;

/// Name used when a directory has no numbered slide images yet
pub const FIRST_SLIDE_NAME: &str = "01";

/// Compute the next sequential file name (without extension) for `dir`.
///
/// Unreadable or missing directories yield `"01"`. Otherwise the highest
/// leading number among recognized image files is incremented and padded to
/// at least two digits. Numbers of any length are handled as decimal strings.
pub fn next_slide_name(dir: &Path) -> String {
    let images = match list_image_files(dir) {
        Ok(images) => images,
        Err(e) => {
            debug!("Cannot list {:?} ({}), starting at {}", dir, e, FIRST_SLIDE_NAME);
            return FIRST_SLIDE_NAME.to_string();
        }
    };

    let highest = images
        .iter()
        .filter_map(|image| leading_number(&image.name))
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let next = match highest {
        Some(digits) => increment_decimal(digits),
        None => "1".to_string(),
    };

    format!("{:0>2}", next)
}

/// The leading run of ASCII digits of `name` without leading zeros.
///
/// Returns `None` when the name has no leading digits or they are all zero.
pub fn leading_number(name: &str) -> Option<&str> {
    let end = name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(name.len());
    let digits = name[..end].trim_start_matches('0');
    (!digits.is_empty()).then_some(digits)
}

/// Add one to a string of ASCII digits
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}
