#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives for symbol glyph outlines, on top of euclid.
//!
//! This crate is reexported in [sigil](../sigil/index.html).
//!
//! # Overview
//!
//! This crate implements the maths to work with:
//!
//! - line segments,
//! - circular arcs, in particular the unique arc passing through three
//!   given points (see [`Arc::through_points`](arc/struct.Arc.html)).
//!
//! Glyph outlines are built from these two segment kinds only. Curves more
//! general than circular arcs (ellipses, béziers) are out of scope; arcs are
//! lowered to quadratic béziers right before rasterization.

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
mod line;

#[doc(inline)]
pub use crate::arc::Arc;
#[doc(inline)]
pub use crate::line::LineSegment;

/// Alias for `euclid::default::Point2D<f32>`.
pub type Point = euclid::default::Point2D<f32>;

/// Alias for `euclid::default::Vector2D<f32>`.
pub type Vector = euclid::default::Vector2D<f32>;

/// Alias for `euclid::default::Size2D<f32>`.
pub type Size = euclid::default::Size2D<f32>;

/// Alias for `euclid::default::Box2D<f32>`.
pub type Box2D = euclid::default::Box2D<f32>;

/// An angle in radians (f32).
pub type Angle = euclid::Angle<f32>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Size::new(w, h)`.
#[inline]
pub fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}
