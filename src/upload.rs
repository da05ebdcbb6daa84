use crate::error::AppError;
use image::{DynamicImage, ImageFormat};
use std::path::Path;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Reads a single upload from disk. Returns the display name and raw bytes.
pub fn read_upload(path: &Path) -> Result<(String, Vec<u8>), AppError> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    if !has_supported_extension(path) {
        return Err(AppError::UnsupportedFormat(name));
    }

    let bytes = std::fs::read(path)?;
    Ok((name, bytes))
}

/// Decodes uploaded bytes. The format is sniffed from the content, not the
/// name, and must be JPEG or PNG.
pub fn decode_upload(name: &str, bytes: &[u8]) -> Result<DynamicImage, AppError> {
    let format = image::guess_format(bytes)
        .map_err(|e| AppError::DecodeError(format!("{}: {}", name, e)))?;

    match format {
        ImageFormat::Jpeg | ImageFormat::Png => {}
        other => {
            return Err(AppError::UnsupportedFormat(format!(
                "{} ({:?})",
                name, other
            )))
        }
    }

    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| AppError::DecodeError(format!("{}: {}", name, e)))
}
