/// Media folder traversal
///
/// Finds source files by extension, recursively, in a stable order so that
/// two runs over the same tree print the same lines in the same order.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::AssetConfig;

/// Find every file under `root` whose name ends in `.<ext>` for one of
/// `extensions`.
///
/// Matching is case-sensitive. Hidden entries (leading `.`) are neither
/// matched nor descended into. A missing root yields an empty list.
/// Results are sorted by their full path string.
pub fn find_files<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Vec<PathBuf> {
    let suffixes: Vec<String> = extensions
        .iter()
        .map(|ext| format!(".{}", ext.as_ref()))
        .collect();

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
        })
        .map(DirEntry::into_path)
        .collect();

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files
}

/// All videos under the configured media folder
pub fn find_videos(config: &AssetConfig) -> Vec<PathBuf> {
    find_files(&config.media_dir, &config.video_extensions)
}

/// All source images under the configured media folder, minus the files
/// this tool produced itself (placeholders and posters)
pub fn find_images(config: &AssetConfig) -> Vec<PathBuf> {
    find_files(&config.media_dir, &config.image_extensions)
        .into_iter()
        .filter(|path| !is_generated(path, config))
        .collect()
}

/// True when `path` is a poster or sits inside a thumbnails folder
pub fn is_generated(path: &Path, config: &AssetConfig) -> bool {
    let in_thumbnail_dir = path
        .parent()
        .map(|parent| {
            parent
                .components()
                .any(|c| c.as_os_str() == OsStr::new(&config.thumbnail_dir))
        })
        .unwrap_or(false);

    let is_poster = path
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(config.poster_suffix.as_str()))
        .unwrap_or(false);

    in_thumbnail_dir || is_poster
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
