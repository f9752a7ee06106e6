// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Info(String),
    Audio(String),
    Image(ImageError),
    Gallery(GalleryError),
}

/// Reasons a gallery photo could not be turned into a displayable image.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The file does not exist at the expected slot path
    NotFound(String),

    /// The file exists but could not be decoded
    Decode(String),

    /// I/O error other than a missing file (permission denied, etc.)
    Io(String),

    /// The blocking decode task was cancelled or panicked
    TaskFailed(String),
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::NotFound(_) => "error-image-not-found",
            ImageError::Decode(_) => "error-image-decode",
            ImageError::Io(_) => "error-image-io",
            ImageError::TaskFailed(_) => "error-image-general",
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::NotFound(path) => write!(f, "Image not found: {}", path),
            ImageError::Decode(msg) => write!(f, "Failed to decode image: {}", msg),
            ImageError::Io(msg) => write!(f, "I/O error: {}", msg),
            ImageError::TaskFailed(msg) => write!(f, "Image task failed: {}", msg),
        }
    }
}

impl From<image_rs::ImageError> for ImageError {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                ImageError::NotFound(io.to_string())
            }
            image_rs::ImageError::IoError(io) => ImageError::Io(io.to_string()),
            other => ImageError::Decode(other.to_string()),
        }
    }
}

/// Misuse of the gallery controller's operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// `open` was called with an index outside `0..len`
    IndexOutOfRange { index: usize, len: usize },
}

impl GalleryError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::IndexOutOfRange { .. } => "error-gallery-index",
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::IndexOutOfRange { index, len } => {
                write!(f, "Photo index {} is out of range (0..{})", index, len)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Info(e) => write!(f, "Info Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<symphonia::core::errors::Error> for Error {
    fn from(err: symphonia::core::errors::Error) -> Self {
        match err {
            symphonia::core::errors::Error::IoError(io) => Error::Io(io.to_string()),
            other => Error::Audio(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
