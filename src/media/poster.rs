/// Poster frames for videos
///
/// Decodes the very first frame of a video and stores it as
/// `<name>-poster.jpg` next to the video. An existing poster is never
/// regenerated; delete it to force a new one.

use ffmpeg::codec::context::Context as CodecContext;
use ffmpeg::format::Pixel;
use ffmpeg::media::Type;
use ffmpeg::software::scaling::{Context as ScalingContext, Flags as ScalingFlags};
use ffmpeg::util::frame::video::Video as VideoFrame;
use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};

use super::{output, replace_extension, AssetOutcome};
use crate::config::AssetConfig;
use crate::error::{AssetError, AssetResult};

/// Where the poster for `video` lives (same folder, extension replaced)
pub fn poster_path(video: &Path, config: &AssetConfig) -> PathBuf {
    let file_name = video
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    video.with_file_name(replace_extension(&file_name, &config.poster_suffix))
}

/// Create the poster for `video` unless it already exists
pub fn create_poster(video: &Path, config: &AssetConfig) -> AssetResult<AssetOutcome> {
    let poster = poster_path(video, config);
    if poster.exists() {
        return Ok(AssetOutcome::Skipped(poster));
    }

    let frame = decode_first_frame(video)?;
    output::write_jpeg(&DynamicImage::ImageRgb8(frame), &poster, config.poster_quality)?;

    Ok(AssetOutcome::Created(poster))
}

/// Create the poster and print its status line
pub fn process_video(video: &Path, config: &AssetConfig) -> AssetResult<AssetOutcome> {
    let result = create_poster(video, config);
    announce(video, &result);
    result
}

/// Library entry point: process one video and return the poster path.
/// Returns None if the video could not be decoded
pub fn generate_video_poster(video: &Path, config: &AssetConfig) -> Option<PathBuf> {
    process_video(video, config).ok().map(AssetOutcome::into_path)
}

fn announce(video: &Path, result: &AssetResult<AssetOutcome>) {
    match result {
        Ok(AssetOutcome::Created(path)) => println!("  🎬 Created poster: {}", path.display()),
        Ok(AssetOutcome::Skipped(path)) => println!("  ⏭️  Skipping (exists): {}", path.display()),
        Err(e) => eprintln!("  ❌ ERROR: Could not read video: {} ({})", video.display(), e),
    }
}

/// Decode the first video frame as 8-bit RGB at source resolution.
///
/// The demuxer and decoder live only for the duration of this call and are
/// released on every return path.
pub fn decode_first_frame(video: &Path) -> AssetResult<RgbImage> {
    ffmpeg::init()?;

    let mut input = ffmpeg::format::input(&video)?;

    let stream = input
        .streams()
        .best(Type::Video)
        .ok_or(AssetError::NoVideoStream)?;
    let stream_index = stream.index();
    let mut decoder = CodecContext::from_parameters(stream.parameters())?
        .decoder()
        .video()?;

    let mut decoded = VideoFrame::empty();

    for (stream, packet) in input.packets() {
        if stream.index() != stream_index {
            continue;
        }

        decoder.send_packet(&packet)?;
        if decoder.receive_frame(&mut decoded).is_ok() {
            return frame_to_rgb(&decoded);
        }
    }

    // Flush frames the decoder is still holding back
    decoder.send_eof()?;
    if decoder.receive_frame(&mut decoded).is_ok() {
        return frame_to_rgb(&decoded);
    }

    Err(AssetError::NoFrame)
}

/// Convert a decoded frame of any pixel format to an RgbImage
fn frame_to_rgb(frame: &VideoFrame) -> AssetResult<RgbImage> {
    let width = frame.width();
    let height = frame.height();

    let mut scaler = ScalingContext::get(
        frame.format(),
        width,
        height,
        Pixel::RGB24,
        width,
        height,
        ScalingFlags::BILINEAR,
    )?;

    let mut rgb = VideoFrame::empty();
    scaler.run(frame, &mut rgb)?;

    // Rows are padded to the line size; copy only the pixels
    let stride = rgb.stride(0);
    let row_bytes = width as usize * 3;
    let data = rgb.data(0);

    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    for row in data.chunks(stride).take(height as usize) {
        pixels.extend_from_slice(&row[..row_bytes]);
    }

    RgbImage::from_raw(width, height, pixels).ok_or(AssetError::NoFrame)
}
