use thiserror::Error;

#[derive(Error, Debug)]
pub enum TubulinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageFormat(#[from] image::ImageError),

    #[error("Invalid image kind: expected a color image, got {channels} channel(s)")]
    InvalidImageKind { channels: u8 },

    #[error("Percentage undefined for a zero-area image")]
    DivisionUndefined,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TubulinError>;
