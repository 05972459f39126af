#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Data structures to store, build and iterate over symbol glyph outlines.
//!
//! This crate is reexported in [sigil](../sigil/index.html).
//!
//! An outline is an ordered sequence of line and circular-arc segments,
//! grouped into sub-paths that are either closed or deliberately left open.
//! A path may contain several disjoint sub-paths; renderers stroke each of
//! them independently.
//!
//! # Examples
//!
//! ```
//! use sigil_path::Path;
//! use sigil_path::math::point;
//!
//! let mut builder = Path::builder();
//! builder.begin(point(0.0, 0.0));
//! // Arc from the current position to (10, 0), bulging through (5, -5).
//! builder.arc_through(point(10.0, 0.0), point(5.0, -5.0));
//! builder.line_to(point(10.0, 10.0));
//! builder.close();
//!
//! let path = builder.build();
//! for event in &path {
//!     println!("{:?}", event);
//! }
//! ```

pub use sigil_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod events;
pub mod path;

pub use crate::events::PathEvent;
#[doc(inline)]
pub use crate::path::{Builder, Iter, Path};

pub mod math {
    //! f32 geometry types used everywhere in sigil.

    pub use crate::geom::{point, size, vector, Angle, Box2D, Point, Size, Vector};
}
