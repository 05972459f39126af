//! The quatrefoil glyph builder.
//!
//! The four-lobed silhouette is assembled from four circular arcs, one per
//! edge of an inner rectangle, each bulging outward through the midpoint of
//! the corresponding outer rectangle edge. Variants substitute a straight
//! line for one edge (flat deck, flat keel) or append a free-standing
//! decorative bar.

use crate::geom::LineSegment;
use crate::math::{point, Box2D, Point};
use crate::path::{Builder, Path};

/// An edge of the inner rectangle, in clockwise traversal order.
///
/// `Top` runs from the top-left corner to the top-right one, `Right` from
/// top-right to bottom-right, and so on around the loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    #[inline]
    fn index(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Right => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
        }
    }
}

/// A free-standing stroked segment added to the stroke outline as its own
/// sub-path, disjoint from the main loop and never filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Accent {
    /// A bar from the outer left-edge midpoint down to the outer
    /// bottom-left corner.
    LeftBar,
}

impl Accent {
    /// The stroked segment this accent contributes, derived from the outer
    /// rectangle.
    pub fn segment(&self, outer: &Box2D) -> LineSegment {
        match self {
            Accent::LeftBar => LineSegment {
                from: point(outer.min.x, outer.center().y),
                to: point(outer.min.x, outer.max.y),
            },
        }
    }
}

/// Selects how a glyph's edges are emitted.
///
/// The fill outline is always watertight: every edge is present and the
/// loop closes, with a straight segment standing in for the omitted arc.
/// The stroke outline is where variants differ, see
/// [`build_glyph`](fn.build_glyph.html).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EdgePlan {
    /// The edge drawn as a straight line instead of an arc, if any.
    pub straight: Option<Edge>,
    /// Whether the stroke outline closes its loop. Only honored when no
    /// edge is omitted: an omitted edge always leaves the stroke open so
    /// the substituted straight segment is never stroked.
    pub close_stroke: bool,
    /// Optional decorative segment appended to the stroke outline.
    pub accent: Option<Accent>,
}

impl EdgePlan {
    /// The symmetric four-lobed silhouette; fill and stroke outlines are
    /// identical closed loops.
    pub fn quatrefoil() -> Self {
        EdgePlan {
            straight: None,
            close_stroke: true,
            accent: None,
        }
    }

    /// Flat top edge: filled under, but not stroked.
    pub fn flat_top() -> Self {
        EdgePlan {
            straight: Some(Edge::Top),
            close_stroke: false,
            accent: None,
        }
    }

    /// Flat bottom edge: filled under, but not stroked.
    pub fn flat_bottom() -> Self {
        EdgePlan {
            straight: Some(Edge::Bottom),
            close_stroke: false,
            accent: None,
        }
    }

    /// Full quatrefoil with a decorative bar on the left side.
    pub fn left_bar() -> Self {
        EdgePlan {
            straight: None,
            close_stroke: true,
            accent: Some(Accent::LeftBar),
        }
    }
}

/// The outlines built for one glyph: a closed fill silhouette and the
/// stroke outline whose openness and segment set vary per variant.
#[derive(Clone, Debug)]
pub struct GlyphOutlines {
    pub fill: Path,
    pub stroke: Path,
}

/// The inner rectangle's corners, in edge traversal order.
fn corners(inner: &Box2D) -> [Point; 4] {
    [
        point(inner.min.x, inner.min.y),
        point(inner.max.x, inner.min.y),
        point(inner.max.x, inner.max.y),
        point(inner.min.x, inner.max.y),
    ]
}

/// The outer rectangle's edge midpoints, one guide per edge.
fn guides(outer: &Box2D) -> [Point; 4] {
    let center = outer.center();
    [
        point(center.x, outer.min.y),
        point(outer.max.x, center.y),
        point(center.x, outer.max.y),
        point(outer.min.x, center.y),
    ]
}

fn emit_edge(
    builder: &mut Builder,
    index: usize,
    corners: &[Point; 4],
    guides: &[Point; 4],
    straight: bool,
) {
    let to = corners[(index + 1) % 4];
    if straight {
        builder.line_to(to);
    } else {
        builder.arc_through(to, guides[index]);
    }
}

/// Builds the fill and stroke outlines of a glyph.
///
/// The fill outline is a single closed sub-path visiting all four edges.
/// The stroke outline depends on the plan:
///
/// - no omitted edge: the same loop, closed per `plan.close_stroke`;
/// - an omitted edge: starts at the endpoint of the omitted edge,
///   traverses the three remaining arcs in order and ends open;
/// - an accent adds a second, disjoint open sub-path.
pub fn build_glyph(outer: &Box2D, inner: &Box2D, plan: &EdgePlan) -> GlyphOutlines {
    let corners = corners(inner);
    let guides = guides(outer);

    let mut fill = Path::builder();
    fill.begin(corners[0]);
    for i in 0..4 {
        let straight = plan.straight.map(Edge::index) == Some(i);
        emit_edge(&mut fill, i, &corners, &guides, straight);
    }
    fill.end(true);

    let mut stroke = Path::builder();
    match plan.straight {
        Some(edge) => {
            let start = (edge.index() + 1) % 4;
            stroke.begin(corners[start]);
            for k in 0..3 {
                emit_edge(&mut stroke, (start + k) % 4, &corners, &guides, false);
            }
            stroke.end(false);
        }
        None => {
            stroke.begin(corners[0]);
            for i in 0..4 {
                emit_edge(&mut stroke, i, &corners, &guides, false);
            }
            stroke.end(plan.close_stroke);
        }
    }

    if let Some(accent) = plan.accent {
        let segment = accent.segment(outer);
        stroke.begin(segment.from);
        stroke.line_to(segment.to);
        stroke.end(false);
    }

    GlyphOutlines {
        fill: fill.build(),
        stroke: stroke.build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Arc;
    use crate::path::PathEvent;

    fn outer() -> Box2D {
        Box2D {
            min: point(0.0, 0.0),
            max: point(1000.0, 1000.0),
        }
    }

    fn inner() -> Box2D {
        Box2D {
            min: point(30.0, 30.0),
            max: point(970.0, 970.0),
        }
    }

    /// One letter per event: b(egin), l(ine), a(rc), e(nd open), z (closed).
    fn event_types(path: &Path) -> String {
        path.iter()
            .map(|evt| match evt {
                PathEvent::Begin { .. } => "b",
                PathEvent::Line { .. } => "l",
                PathEvent::Arc { .. } => "a",
                PathEvent::End { close: false, .. } => "e",
                PathEvent::End { close: true, .. } => "z",
            })
            .collect::<Vec<_>>()
            .concat()
    }

    fn arcs(path: &Path) -> Vec<Arc> {
        path.iter()
            .filter_map(|evt| match evt {
                PathEvent::Arc { arc, .. } => Some(arc),
                _ => None,
            })
            .collect()
    }

    fn first_point(path: &Path) -> Point {
        match path.iter().next() {
            Some(PathEvent::Begin { at }) => at,
            other => panic!("expected a begin event, got {:?}", other),
        }
    }

    fn last_edge_end(path: &Path) -> Point {
        path.iter()
            .filter_map(|evt| match evt {
                PathEvent::End { last, .. } => Some(last),
                _ => None,
            })
            .next()
            .unwrap()
    }

    /// Flattens the fill outline into a polygon and measures its area with
    /// the shoelace formula.
    fn fill_area(path: &Path) -> f32 {
        let mut polygon: Vec<Point> = Vec::new();
        for evt in path {
            match evt {
                PathEvent::Begin { at } => polygon.push(at),
                PathEvent::Line { to, .. } => polygon.push(to),
                PathEvent::Arc { arc, .. } => {
                    arc.for_each_flattened(0.01, &mut |p| polygon.push(p));
                }
                PathEvent::End { .. } => {}
            }
        }
        let mut doubled = 0.0;
        for i in 0..polygon.len() {
            let p = polygon[i];
            let q = polygon[(i + 1) % polygon.len()];
            doubled += p.x * q.y - q.x * p.y;
        }
        (doubled * 0.5).abs()
    }

    #[test]
    fn quatrefoil_outlines() {
        let glyph = build_glyph(&outer(), &inner(), &EdgePlan::quatrefoil());
        assert_eq!(event_types(&glyph.fill), "baaaaz");
        assert_eq!(event_types(&glyph.stroke), "baaaaz");

        // Each arc bulges exactly to the outer edge midpoint.
        let arcs = arcs(&glyph.fill);
        assert!((arcs[0].sample(0.5) - point(500.0, 0.0)).length() < 0.05);
        assert!((arcs[1].sample(0.5) - point(1000.0, 500.0)).length() < 0.05);
        assert!((arcs[2].sample(0.5) - point(500.0, 1000.0)).length() < 0.05);
        assert!((arcs[3].sample(0.5) - point(0.0, 500.0)).length() < 0.05);
    }

    #[test]
    fn flat_top_outlines() {
        let glyph = build_glyph(&outer(), &inner(), &EdgePlan::flat_top());
        // The fill closes through the straight top edge.
        assert_eq!(event_types(&glyph.fill), "blaaaz");
        // The stroke starts after the omitted edge and stays open.
        assert_eq!(event_types(&glyph.stroke), "baaae");
        assert_eq!(first_point(&glyph.stroke), point(970.0, 30.0));
        assert_eq!(last_edge_end(&glyph.stroke), point(30.0, 30.0));
    }

    #[test]
    fn flat_bottom_outlines() {
        let glyph = build_glyph(&outer(), &inner(), &EdgePlan::flat_bottom());
        assert_eq!(event_types(&glyph.fill), "baalaz");
        assert_eq!(event_types(&glyph.stroke), "baaae");
        assert_eq!(first_point(&glyph.stroke), point(30.0, 970.0));
        assert_eq!(last_edge_end(&glyph.stroke), point(970.0, 970.0));
    }

    #[test]
    fn left_bar_outlines() {
        let glyph = build_glyph(&outer(), &inner(), &EdgePlan::left_bar());
        // Fill is untouched by the accent.
        assert_eq!(event_types(&glyph.fill), "baaaaz");
        // A fully stroked closed loop plus a disjoint open bar.
        assert_eq!(event_types(&glyph.stroke), "baaaazble");

        let events: Vec<PathEvent> = glyph.stroke.iter().collect();
        assert_eq!(events[6], PathEvent::Begin { at: point(0.0, 500.0) });
        assert_eq!(
            events[7],
            PathEvent::Line {
                from: point(0.0, 500.0),
                to: point(0.0, 1000.0),
            }
        );
    }

    #[test]
    fn quatrefoil_is_symmetric_under_half_turn() {
        let glyph = build_glyph(&outer(), &inner(), &EdgePlan::quatrefoil());
        let center = outer().center();
        let arcs = arcs(&glyph.fill);

        // Opposite arcs map onto each other under a 180° rotation about the
        // rectangle center.
        for &(i, j) in &[(0usize, 2usize), (1, 3)] {
            assert!((arcs[i].radius - arcs[j].radius).abs() < 0.1);
            let rotated = point(
                2.0 * center.x - arcs[i].center.x,
                2.0 * center.y - arcs[i].center.y,
            );
            assert!((rotated - arcs[j].center).length() < 0.1);
            for step in 0..=4 {
                let t = step as f32 / 4.0;
                let p = arcs[i].sample(t);
                let q = arcs[j].sample(t);
                assert!((point(2.0 * center.x - p.x, 2.0 * center.y - p.y) - q).length() < 1e-1);
            }
        }
    }

    #[test]
    fn quatrefoil_area_sits_between_the_rectangles() {
        let outer = outer();
        let inner = inner();
        let glyph = build_glyph(&outer, &inner, &EdgePlan::quatrefoil());

        let area = fill_area(&glyph.fill);
        let inner_area = inner.width() * inner.height();
        let outer_area = outer.width() * outer.height();
        assert!(area > inner_area);
        assert!(area < outer_area);
    }

    #[test]
    fn collapsed_rectangles_still_build() {
        // Degenerate input produces degenerate geometry, not a panic: with
        // both boxes flat the arcs all collapse to lines.
        let flat = Box2D {
            min: point(0.0, 5.0),
            max: point(100.0, 5.0),
        };
        let glyph = build_glyph(&flat, &flat, &EdgePlan::quatrefoil());
        assert_eq!(event_types(&glyph.fill), "bllllz");
    }
}
