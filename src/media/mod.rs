/// Derived asset generation
///
/// This module handles:
/// - Extracting the first frame of a video as a poster JPEG
/// - Shrinking images into tiny blur-up placeholders
/// - Writing finished JPEGs atomically next to their sources

use std::path::{Path, PathBuf};

pub mod output;
pub mod poster;
pub mod thumbnail;

/// What happened to one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    /// A new asset was written at this path
    Created(PathBuf),
    /// The asset already existed and was left untouched
    Skipped(PathBuf),
}

impl AssetOutcome {
    /// Path of the asset, whether new or pre-existing
    pub fn path(&self) -> &Path {
        match self {
            AssetOutcome::Created(path) | AssetOutcome::Skipped(path) => path,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            AssetOutcome::Created(path) | AssetOutcome::Skipped(path) => path,
        }
    }
}

/// Replace everything after the last `.` of the file name with `replacement`.
/// A file name without a dot keeps its full name.
pub(crate) fn replace_extension(file_name: &str, replacement: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    format!("{}{}", stem, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_extension() {
        assert_eq!(replace_extension("clip.mp4", "-poster.jpg"), "clip-poster.jpg");
        assert_eq!(replace_extension("a.b.png", ".jpg"), "a.b.jpg");
        assert_eq!(replace_extension("noext", ".jpg"), "noext.jpg");
    }

    #[test]
    fn test_outcome_path() {
        let created = AssetOutcome::Created(PathBuf::from("media/a-poster.jpg"));
        let skipped = AssetOutcome::Skipped(PathBuf::from("media/a-poster.jpg"));
        assert_eq!(created.path(), skipped.path());
        assert_eq!(skipped.into_path(), PathBuf::from("media/a-poster.jpg"));
    }
}
