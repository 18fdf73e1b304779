use image::{ImageDecoder, ImageReader};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::types::ImageInfo;

/// Read width, height and channel count from an image header.
///
/// Only the header is decoded; the file is closed again before this returns.
pub fn read_image_info(path: &Path) -> Result<ImageInfo> {
    let image_error = |source: image::ImageError| ConvertError::Image {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| ConvertError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| ConvertError::io(path, e))?;
    let decoder = reader.into_decoder().map_err(image_error)?;
    let (width, height) = decoder.dimensions();
    let depth = decoder.color_type().channel_count();

    Ok(ImageInfo {
        width,
        height,
        depth,
    })
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Create the output directory if it is missing. Existing content is left alone.
pub fn create_output_directory(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        log::debug!("Output directory {:?} already exists", path);
    } else {
        log::info!("Creating output directory {:?}", path);
    }
    fs::create_dir_all(path).map_err(|e| ConvertError::io(path, e))?;
    Ok(path.to_path_buf())
}
