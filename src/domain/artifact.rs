//! Naming convention for generated QR artifacts.
//!
//! Artifacts live in the public directory as `qr_<epoch millis>.png`. Two
//! requests landing in the same millisecond overwrite one another; accepted
//! for the expected traffic, see DESIGN.md.

pub const KEEP_ARTIFACTS: usize = 10;
pub const ARTIFACT_PREFIX: &str = "qr_";
pub const ARTIFACT_EXT: &str = ".png";

pub fn artifact_name(epoch_millis: u128) -> String {
    format!("{ARTIFACT_PREFIX}{epoch_millis}{ARTIFACT_EXT}")
}

/// Whether a directory entry belongs to the retention set. Anything else in
/// the public directory (index.html, assets) is never pruned.
pub fn is_artifact_name(name: &str) -> bool {
    name.starts_with(ARTIFACT_PREFIX) && name.ends_with(ARTIFACT_EXT)
}
