//! Caller-facing drawing entry points, one per glyph variant.
//!
//! Each function computes the outlines for one glyph and paints them onto
//! the provided pixmap, fill first, then stroke. The pixmap is exclusively
//! borrowed for the duration of the call; nothing is retained.

use crate::glyphs::{build_glyph, EdgePlan};
use crate::math::Box2D;
use crate::{convert, DrawStyle};
use tiny_skia::Pixmap;

/// The symmetric four-lobed glyph, outlined all around.
pub fn draw_quatrefoil(pixmap: &mut Pixmap, outer: &Box2D, inner: &Box2D, style: &DrawStyle) {
    draw_with_plan(pixmap, outer, inner, style, &EdgePlan::quatrefoil());
}

/// Variant with a flat, unstroked top edge.
pub fn draw_flat_top(pixmap: &mut Pixmap, outer: &Box2D, inner: &Box2D, style: &DrawStyle) {
    draw_with_plan(pixmap, outer, inner, style, &EdgePlan::flat_top());
}

/// Variant with a flat, unstroked bottom edge.
pub fn draw_flat_bottom(pixmap: &mut Pixmap, outer: &Box2D, inner: &Box2D, style: &DrawStyle) {
    draw_with_plan(pixmap, outer, inner, style, &EdgePlan::flat_bottom());
}

/// Full quatrefoil with the decorative bar on the left side.
pub fn draw_left_bar(pixmap: &mut Pixmap, outer: &Box2D, inner: &Box2D, style: &DrawStyle) {
    draw_with_plan(pixmap, outer, inner, style, &EdgePlan::left_bar());
}

/// Draws a glyph described by an arbitrary edge plan.
pub fn draw_with_plan(
    pixmap: &mut Pixmap,
    outer: &Box2D,
    inner: &Box2D,
    style: &DrawStyle,
    plan: &EdgePlan,
) {
    let glyph = build_glyph(outer, inner, plan);
    convert::fill(pixmap, &glyph.fill, style.fill_color);
    convert::stroke(pixmap, &glyph.stroke, style.stroke_color, style.stroke_width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;
    use crate::new_pixmap;
    use tiny_skia::Color;

    fn test_style() -> DrawStyle {
        DrawStyle {
            fill_color: Color::from_rgba8(0, 128, 0, 255),
            stroke_color: Color::from_rgba8(255, 255, 255, 255),
            stroke_width: 4.0,
        }
    }

    fn rgba(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let c = pixmap.pixel(x, y).unwrap().demultiply();
        (c.red(), c.green(), c.blue(), c.alpha())
    }

    #[test]
    fn quatrefoil_fills_the_center() {
        let mut pixmap = new_pixmap(100, 100).unwrap();
        let boundary = Box2D {
            min: point(0.0, 0.0),
            max: point(100.0, 100.0),
        };
        let outer = boundary.inflate(-3.0, -3.0);
        let inner = boundary.inflate(-24.0, -24.0);

        draw_quatrefoil(&mut pixmap, &outer, &inner, &test_style());

        // The glyph interior is the fill color.
        assert_eq!(rgba(&pixmap, 50, 50), (0, 128, 0, 255));
        // The canvas corners stay transparent: the lobes bulge toward the
        // edge midpoints, not the corners.
        assert_eq!(rgba(&pixmap, 1, 1).3, 0);
        assert_eq!(rgba(&pixmap, 98, 98).3, 0);
    }

    #[test]
    fn left_bar_strokes_the_accent() {
        let mut pixmap = new_pixmap(100, 100).unwrap();
        let boundary = Box2D {
            min: point(0.0, 0.0),
            max: point(100.0, 100.0),
        };
        let outer = boundary.inflate(-3.0, -3.0);
        let inner = boundary.inflate(-24.0, -24.0);

        draw_left_bar(&mut pixmap, &outer, &inner, &test_style());

        // The bar runs down the outer left edge, away from the main loop.
        assert_eq!(rgba(&pixmap, 3, 75), (255, 255, 255, 255));
    }

    #[test]
    fn flat_top_leaves_the_top_edge_unstroked() {
        let mut pixmap = new_pixmap(100, 100).unwrap();
        let boundary = Box2D {
            min: point(0.0, 0.0),
            max: point(100.0, 100.0),
        };
        let outer = boundary.inflate(-3.0, -3.0);
        let inner = boundary.inflate(-24.0, -24.0);

        draw_flat_top(&mut pixmap, &outer, &inner, &test_style());

        // On the flat top edge the fill reaches the silhouette boundary
        // without a stroke on top of it.
        let midtop = rgba(&pixmap, 50, 25);
        assert_eq!(midtop, (0, 128, 0, 255));
        // The bottom lobe is stroked white at the outer bottom midpoint.
        assert_eq!(rgba(&pixmap, 50, 97), (255, 255, 255, 255));
    }
}
