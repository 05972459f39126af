#![deny(bare_trait_objects)]

//! Stylized map-marker symbol glyph generation and rendering.
//!
//! # Crates
//!
//! This meta-crate (`sigil`) reexports the following sub-crates for
//! convenience:
//!
//! * **sigil_glyphs** - The quatrefoil glyph builder and its edge-plan
//!   variants.
//! * **sigil_raster** - CPU rasterization of glyph outlines to PNG.
//! * **sigil_path** - Tools to build and iterate over glyph outlines.
//! * **sigil_geom** - Circular arc maths on top of euclid, including the
//!   arc-through-three-points fit.
//!
//! Each `sigil_<name>` crate is reexported as a `<name>` module in `sigil`.
//! For example:
//!
//! ```ignore
//! extern crate sigil_glyphs;
//! use sigil_glyphs::EdgePlan;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate sigil;
//! use sigil::glyphs::EdgePlan;
//! ```
//!
//! # Feature flags
//!
//! Serialization using serde can be enabled on the geometry and path crates
//! using the `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Rendering a glyph to a PNG file
//!
//! ```no_run
//! use sigil::math::{point, Box2D};
//! use sigil::raster::tiny_skia::Color;
//! use sigil::raster::{self, DrawStyle};
//!
//! fn main() -> Result<(), raster::RasterError> {
//!     let boundary = Box2D { min: point(0.0, 0.0), max: point(1000.0, 1000.0) };
//!     let style = DrawStyle {
//!         fill_color: Color::from_rgba8(0, 128, 0, 255),
//!         stroke_color: Color::from_rgba8(255, 255, 255, 255),
//!         stroke_width: 20.0,
//!     };
//!
//!     let mut pixmap = raster::new_pixmap(1000, 1000)?;
//!     raster::draw_quatrefoil(
//!         &mut pixmap,
//!         &boundary.inflate(-30.0, -30.0),
//!         &boundary.inflate(-240.0, -240.0),
//!         &style,
//!     );
//!     raster::write_png(&pixmap, "output.png")
//! }
//! ```
//!
//! ## Building outlines without rasterizing
//!
//! ```
//! use sigil::glyphs::{build_glyph, EdgePlan};
//! use sigil::math::{point, Box2D};
//!
//! let outer = Box2D { min: point(0.0, 0.0), max: point(100.0, 100.0) };
//! let inner = Box2D { min: point(10.0, 10.0), max: point(90.0, 90.0) };
//! let glyph = build_glyph(&outer, &inner, &EdgePlan::flat_top());
//!
//! for event in &glyph.stroke {
//!     println!("{:?}", event);
//! }
//! ```

pub extern crate sigil_glyphs;
pub extern crate sigil_raster;

pub use sigil_glyphs as glyphs;
pub use sigil_raster as raster;

pub use glyphs::path;
pub use path::geom;
pub use path::math;
