#![deny(bare_trait_objects)]

//! Quatrefoil symbol glyph outlines.
//!
//! This crate is reexported in [sigil](../sigil/index.html).
//!
//! A glyph is described by an outer bounding box, an inner bounding box and
//! an [`EdgePlan`](quatrefoil/struct.EdgePlan.html) selecting which of the
//! four edges bulge outward as arcs, whether the stroke loop closes, and
//! whether a decorative accent rides along. The builder returns a pair of
//! outlines: a watertight fill outline and a stroke outline whose segment
//! set varies per variant.

pub extern crate sigil_path as path;

pub mod quatrefoil;

pub use crate::path::geom;
pub use crate::path::math;

#[doc(inline)]
pub use crate::quatrefoil::{build_glyph, Accent, Edge, EdgePlan, GlyphOutlines};
