//! Poster frames and blur-up placeholders for a static site's media folder
//!
//! - `scan` finds source videos and images
//! - `media` turns one source file into one derived JPEG
//! - `driver` runs both passes and prints progress

pub mod config;
pub mod driver;
pub mod error;
pub mod media;
pub mod scan;
