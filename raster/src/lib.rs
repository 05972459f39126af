#![deny(bare_trait_objects)]

//! The render collaborator: rasterizes glyph outlines onto a pixel buffer
//! and encodes the result as PNG.
//!
//! This crate is reexported in [sigil](../sigil/index.html).
//!
//! The actual rasterization is delegated to [tiny-skia](https://docs.rs/tiny-skia);
//! this crate owns the outline conversion (circular arcs are lowered to
//! quadratic béziers), the paint setup and the PNG plumbing. Styles are
//! plain value types constructed per draw call; nothing is retained across
//! calls.

pub extern crate sigil_glyphs as glyphs;

pub use crate::glyphs::path;
pub use crate::glyphs::{geom, math};

// Reexport the rasterizer for callers that need colors and pixmaps.
pub use tiny_skia;

pub mod convert;
pub mod draw;
mod error;

pub use crate::draw::{draw_flat_bottom, draw_flat_top, draw_left_bar, draw_quatrefoil};
pub use crate::error::RasterError;

use tiny_skia::{Color, Pixmap};

/// Fill and stroke styling for one glyph, passed through untouched to the
/// rasterizer.
#[derive(Copy, Clone, Debug)]
pub struct DrawStyle {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
}

/// Allocates a transparent pixel buffer.
pub fn new_pixmap(width: u32, height: u32) -> Result<Pixmap, RasterError> {
    Pixmap::new(width, height).ok_or(RasterError::InvalidSurfaceSize { width, height })
}

/// Encodes a pixel buffer to a PNG byte stream.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RasterError> {
    Ok(pixmap.encode_png()?)
}

/// Encodes a pixel buffer and writes it to storage.
pub fn write_png<P: AsRef<std::path::Path>>(pixmap: &Pixmap, path: P) -> Result<(), RasterError> {
    let bytes = encode_png(pixmap)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixmap_allocation() {
        assert!(new_pixmap(16, 16).is_ok());
        assert!(new_pixmap(0, 4).is_err());
    }

    #[test]
    fn png_magic_bytes() {
        let pixmap = new_pixmap(4, 4).unwrap();
        let bytes = encode_png(&pixmap).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }
}
