use std::fmt;

/// Error raised by a renderer before any pixel is written.
#[derive(Debug, Clone)]
pub struct RenderError {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Canvas dimensions are zero or odd.
    InvalidDimensions,
    /// A ramp was asked for fewer than one sample.
    InvalidSampleCount,
    /// Corner radius exceeds half the shorter rectangle side.
    RadiusTooLarge,
    /// A flow/pie side has no categories or a zero total.
    EmptySide,
    /// The image codec rejected the buffer.
    EncodeFailed,
}

impl RenderError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn dimensions(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDimensions, message)
    }

    pub fn sample_count(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSampleCount, message)
    }

    pub fn radius(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RadiusTooLarge, message)
    }

    pub fn empty_side(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptySide, message)
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EncodeFailed, message)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for RenderError {}

pub type RenderResult<T> = Result<T, RenderError>;
