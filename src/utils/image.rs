//! Image source resolution, fetching, and decoding.

use std::path::PathBuf;
use std::time::Duration;

use image::RgbImage;

use crate::core::errors::{LabelError, LabelResult};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// An image source: either a remote URL or a local file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A remote image fetched over HTTP(S).
    Url(String),
    /// A local image file.
    Path(PathBuf),
}

impl ImageSource {
    /// Classifies a source string as a URL or a local path.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            ImageSource::Url(source.to_string())
        } else {
            ImageSource::Path(PathBuf::from(source))
        }
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Url(url) => write!(f, "{url}"),
            ImageSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolves an image source to raw bytes.
///
/// URLs are fetched with a blocking HTTP GET; paths are read from disk.
pub fn fetch_bytes(source: &ImageSource) -> LabelResult<Vec<u8>> {
    match source {
        ImageSource::Url(url) => {
            let client = reqwest::blocking::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .map_err(|e| LabelError::backend("failed to build HTTP client", e))?;
            let response = client
                .get(url)
                .send()
                .map_err(|e| LabelError::backend(format!("failed to fetch '{url}'"), e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(LabelError::backend_context(format!(
                    "fetching '{url}' returned HTTP {status}"
                )));
            }

            let bytes = response
                .bytes()
                .map_err(|e| LabelError::backend("failed to read response body", e))?;
            Ok(bytes.to_vec())
        }
        ImageSource::Path(path) => Ok(std::fs::read(path)?),
    }
}

/// Decodes raw image bytes into an RGB image.
pub fn decode_image(bytes: &[u8]) -> LabelResult<RgbImage> {
    let img = image::load_from_memory(bytes).map_err(LabelError::Decode)?;
    Ok(img.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_source_parse_urls() {
        assert_eq!(
            ImageSource::parse("https://example.com/a.jpg"),
            ImageSource::Url("https://example.com/a.jpg".to_string())
        );
        assert_eq!(
            ImageSource::parse("http://example.com/a.jpg"),
            ImageSource::Url("http://example.com/a.jpg".to_string())
        );
    }

    #[test]
    fn test_image_source_parse_paths() {
        assert_eq!(
            ImageSource::parse("photos/hot_dog.jpg"),
            ImageSource::Path(PathBuf::from("photos/hot_dog.jpg"))
        );
    }

    #[test]
    fn test_decode_image_rejects_garbage() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, LabelError::Decode(_)));
    }

    #[test]
    fn test_decode_image_roundtrip() {
        let img = RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();

        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgb([10, 20, 30]));
    }
}
