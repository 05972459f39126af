//! Glue between sigil outlines and tiny-skia paths.

use crate::path::{Path, PathEvent};
use tiny_skia::{Color, FillRule, LineCap, LineJoin, Paint, Pixmap, Stroke, Transform};

/// Converts an outline to a tiny-skia path, lowering circular arcs to
/// quadratic béziers.
///
/// Closed sub-paths close explicitly; open sub-paths are left open so the
/// rasterizer never strokes an implicit closing segment. Returns `None`
/// for an outline with no segments.
pub fn to_skia_path(outline: &Path) -> Option<tiny_skia::Path> {
    let mut builder = tiny_skia::PathBuilder::new();

    for event in outline {
        match event {
            PathEvent::Begin { at } => {
                builder.move_to(at.x, at.y);
            }
            PathEvent::Line { to, .. } => {
                builder.line_to(to.x, to.y);
            }
            PathEvent::Arc { arc, .. } => {
                arc.for_each_quadratic_bezier(&mut |ctrl, to| {
                    builder.quad_to(ctrl.x, ctrl.y, to.x, to.y);
                });
            }
            PathEvent::End { close: true, .. } => {
                builder.close();
            }
            PathEvent::End { close: false, .. } => {}
        }
    }

    builder.finish()
}

/// Fills a closed outline with a solid color (winding rule, anti-aliased).
pub fn fill(pixmap: &mut Pixmap, outline: &Path, color: Color) {
    let path = match to_skia_path(outline) {
        Some(path) => path,
        None => {
            log::debug!("skipping fill of an empty outline");
            return;
        }
    };

    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;

    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

/// Strokes an outline with a solid color. Every disjoint sub-path is
/// stroked independently; round joins and caps keep wide strokes tidy.
pub fn stroke(pixmap: &mut Pixmap, outline: &Path, color: Color, width: f32) {
    let path = match to_skia_path(outline) {
        Some(path) => path,
        None => {
            log::debug!("skipping stroke of an empty outline");
            return;
        }
    };

    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;

    let stroke = Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn arcs_become_quads() {
        let mut builder = Path::builder();
        builder.begin(point(10.0, 10.0));
        builder.arc_through(point(90.0, 10.0), point(50.0, 30.0));
        builder.line_to(point(50.0, 90.0));
        builder.close();
        let skia_path = to_skia_path(&builder.build()).unwrap();

        let mut quads = 0;
        let mut closes = 0;
        for segment in skia_path.segments() {
            match segment {
                tiny_skia::PathSegment::QuadTo(..) => quads += 1,
                tiny_skia::PathSegment::Close => closes += 1,
                _ => {}
            }
        }
        assert!(quads >= 1);
        assert_eq!(closes, 1);
    }

    #[test]
    fn open_subpaths_stay_open() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(10.0, 0.0));
        builder.end(false);
        let skia_path = to_skia_path(&builder.build()).unwrap();

        assert!(!skia_path
            .segments()
            .any(|segment| matches!(segment, tiny_skia::PathSegment::Close)));
    }

    #[test]
    fn empty_outline_converts_to_none() {
        assert!(to_skia_path(&Path::new()).is_none());
    }
}
