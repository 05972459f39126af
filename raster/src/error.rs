use std::fmt;

/// An error that can happen while rasterizing or saving a glyph.
#[derive(Debug)]
pub enum RasterError {
    /// The requested pixel buffer dimensions cannot be allocated.
    InvalidSurfaceSize { width: u32, height: u32 },
    Png(png::EncodingError),
    Io(std::io::Error),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidSurfaceSize { width, height } => {
                write!(f, "Invalid surface size {}x{}", width, height)
            }
            RasterError::Png(e) => {
                write!(f, "PNG encoding error: {}", e)
            }
            RasterError::Io(e) => {
                write!(f, "I/O error: {}", e)
            }
        }
    }
}

impl std::error::Error for RasterError {}

impl From<png::EncodingError> for RasterError {
    fn from(value: png::EncodingError) -> Self {
        RasterError::Png(value)
    }
}

impl From<std::io::Error> for RasterError {
    fn from(value: std::io::Error) -> Self {
        RasterError::Io(value)
    }
}
