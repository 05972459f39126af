//! The outline data structure.
//!
//! Outlines are stored as two buffers: one of verbs and one of points, the
//! verb sequence determining how many points each edge consumes. Arcs store
//! their destination, their center and a packed start/sweep angle pair; the
//! radius is recovered from the stored endpoints.

use crate::events::PathEvent;
use crate::geom::{Angle, Arc};
use crate::math::{point, Point};

use std::fmt;

/// Enforces the begin/end pairing of sub-paths in debug builds, and
/// compiles down to nothing in release builds.
#[derive(Default, Copy, Clone, Debug)]
struct SubpathGuard {
    #[cfg(debug_assertions)]
    in_subpath: bool,
}

impl SubpathGuard {
    #[inline(always)]
    fn begin(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.in_subpath, "multiple begin() calls without end()");
            self.in_subpath = true;
        }
    }

    #[inline(always)]
    fn end(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(self.in_subpath, "end() called without begin()");
            self.in_subpath = false;
        }
    }

    #[inline(always)]
    fn edge(&self) {
        #[cfg(debug_assertions)]
        assert!(self.in_subpath, "edge added before begin()");
    }

    #[inline(always)]
    fn build(&self) {
        #[cfg(debug_assertions)]
        assert!(!self.in_subpath, "build() called before end()");
    }
}

/// Enumeration corresponding to the [PathEvent](enum.PathEvent.html) enum
/// without the parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub(crate) enum Verb {
    Begin,
    LineTo,
    ArcTo,
    Close,
    End,
}

/// A simple outline data structure.
///
/// Every sub-path is delimited by a `Begin` and an `End` event; the `End`
/// event records whether the sub-path closes back onto its first point.
/// Several disjoint sub-paths may live in the same path, which is how
/// free-standing decorative segments ride along a glyph's main loop.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    points: Box<[Point]>,
    verbs: Box<[Verb]>,
}

impl Path {
    /// Creates a [Builder](struct.Builder.html) to build an outline.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Creates an empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            points: Box::new([]),
            verbs: Box::new([]),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Iterates over the entire `Path`.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.points[..], &self.verbs[..])
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point(formatter: &mut fmt::Formatter, p: Point) -> fmt::Result {
            write!(formatter, " {} {}", p.x, p.y)
        }

        for evt in self {
            match evt {
                PathEvent::Begin { at } => {
                    write!(formatter, "M")?;
                    write_point(formatter, at)?;
                }
                PathEvent::Line { to, .. } => {
                    write!(formatter, " L")?;
                    write_point(formatter, to)?;
                }
                PathEvent::Arc { to, arc, .. } => {
                    write!(formatter, " A[{} {} r {}]", arc.center.x, arc.center.y, arc.radius)?;
                    write_point(formatter, to)?;
                }
                PathEvent::End { close: true, .. } => {
                    write!(formatter, " Z")?;
                }
                PathEvent::End { close: false, .. } => {}
            }
        }

        Ok(())
    }
}

/// Builds outlines with explicit sub-path begin/end pairing.
///
/// All positions are provided in absolute coordinates; curve segments
/// continue from the current position without an implicit move.
pub struct Builder {
    points: Vec<Point>,
    verbs: Vec<Verb>,
    validator: SubpathGuard,
    first: Point,
    current: Point,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            points: Vec::new(),
            verbs: Vec::new(),
            validator: SubpathGuard::default(),
            first: point(0.0, 0.0),
            current: point(0.0, 0.0),
        }
    }

    pub fn with_capacity(points: usize, edges: usize) -> Self {
        let mut builder = Builder::new();
        builder.points.reserve(points);
        builder.verbs.reserve(edges);
        builder
    }

    /// The position the next edge will continue from.
    #[inline]
    pub fn current_position(&self) -> Point {
        self.current
    }

    /// Starts a new sub-path at a given position.
    ///
    /// There must be no sub-path in progress when this method is called.
    pub fn begin(&mut self, at: Point) {
        self.validator.begin();
        self.points.push(at);
        self.verbs.push(Verb::Begin);
        self.first = at;
        self.current = at;
    }

    /// Ends the current sub-path, closing it back onto its first point if
    /// `close` is true.
    pub fn end(&mut self, close: bool) {
        self.validator.end();
        self.verbs.push(if close { Verb::Close } else { Verb::End });
        if close {
            self.current = self.first;
        }
    }

    /// Shorthand for `end(true)`.
    pub fn close(&mut self) {
        self.end(true);
    }

    /// Adds a line segment to the current sub-path.
    pub fn line_to(&mut self, to: Point) {
        self.validator.edge();
        self.points.push(to);
        self.verbs.push(Verb::LineTo);
        self.current = to;
    }

    /// Adds a circular arc to the current sub-path.
    ///
    /// The arc must start at the current position and end at `to`; it is
    /// appended as-is, continuing seamlessly from the path cursor.
    pub fn arc_to(&mut self, to: Point, arc: Arc) {
        self.validator.edge();
        self.points.push(to);
        self.points.push(arc.center);
        self.points
            .push(point(arc.start_angle.radians, arc.sweep_angle.radians));
        self.verbs.push(Verb::ArcTo);
        self.current = to;
    }

    /// Adds the arc going from the current position to `to` along the circle
    /// that also passes through `via`.
    ///
    /// If the three points are collinear within tolerance the arc degenerates
    /// to a straight line to `to` and `via` is ignored.
    pub fn arc_through(&mut self, to: Point, via: Point) {
        match Arc::through_points(self.current, to, via) {
            Some(arc) => self.arc_to(to, arc),
            None => {
                log::debug!(
                    "degenerate arc through {:?}, falling back to a line segment",
                    via
                );
                self.line_to(to);
            }
        }
    }

    pub fn build(self) -> Path {
        self.validator.build();
        Path {
            points: self.points.into_boxed_slice(),
            verbs: self.verbs.into_boxed_slice(),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

/// An iterator of `PathEvent`s over a `Path`.
#[derive(Clone)]
pub struct Iter<'l> {
    points: &'l [Point],
    verbs: std::slice::Iter<'l, Verb>,
    cursor: usize,
    current: Point,
    first: Point,
}

impl<'l> Iter<'l> {
    fn new(points: &'l [Point], verbs: &'l [Verb]) -> Self {
        Iter {
            points,
            verbs: verbs.iter(),
            cursor: 0,
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
        }
    }

    #[inline]
    fn next_point(&mut self) -> Point {
        let p = self.points[self.cursor];
        self.cursor += 1;
        p
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        match self.verbs.next() {
            Some(Verb::Begin) => {
                let at = self.next_point();
                self.current = at;
                self.first = at;
                Some(PathEvent::Begin { at })
            }
            Some(Verb::LineTo) => {
                let from = self.current;
                let to = self.next_point();
                self.current = to;
                Some(PathEvent::Line { from, to })
            }
            Some(Verb::ArcTo) => {
                let from = self.current;
                let to = self.next_point();
                let center = self.next_point();
                let angles = self.next_point();
                self.current = to;
                Some(PathEvent::Arc {
                    from,
                    to,
                    arc: Arc {
                        center,
                        radius: (from - center).length(),
                        start_angle: Angle::radians(angles.x),
                        sweep_angle: Angle::radians(angles.y),
                    },
                })
            }
            Some(Verb::Close) => {
                let last = self.current;
                self.current = self.first;
                Some(PathEvent::End {
                    last,
                    first: self.first,
                    close: true,
                })
            }
            Some(Verb::End) => Some(PathEvent::End {
                last: self.current,
                first: self.first,
                close: false,
            }),
            None => None,
        }
    }
}

#[cfg(test)]
use crate::math::Vector;

#[test]
fn simple_path_round_trip() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.arc_through(point(10.0, 10.0), point(15.0, 5.0));
    builder.close();
    let path = builder.build();

    let events: Vec<PathEvent> = path.iter().collect();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0], PathEvent::Begin { at: point(0.0, 0.0) });
    assert_eq!(
        events[1],
        PathEvent::Line {
            from: point(0.0, 0.0),
            to: point(10.0, 0.0),
        }
    );
    match events[2] {
        PathEvent::Arc { from, to, arc } => {
            assert_eq!(from, point(10.0, 0.0));
            assert_eq!(to, point(10.0, 10.0));
            assert!((arc.center - point(10.0, 5.0)).length() < 1e-3);
            assert!((arc.radius - 5.0).abs() < 1e-3);
        }
        ref evt => panic!("expected an arc event, got {:?}", evt),
    }
    assert_eq!(
        events[3],
        PathEvent::End {
            last: point(10.0, 10.0),
            first: point(0.0, 0.0),
            close: true,
        }
    );
}

#[test]
fn events_chain() {
    let mut builder = Path::builder();
    builder.begin(point(1.0, 1.0));
    builder.arc_through(point(9.0, 1.0), point(5.0, -2.0));
    builder.arc_through(point(9.0, 9.0), point(12.0, 5.0));
    builder.line_to(point(1.0, 9.0));
    builder.end(false);
    let path = builder.build();

    let mut previous = None;
    for evt in &path {
        if let Some(prev) = previous {
            assert_eq!(evt.from(), prev);
        }
        previous = Some(evt.to());
    }
}

#[test]
fn multiple_subpaths() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.line_to(point(1.0, 1.0));
    builder.close();
    builder.begin(point(5.0, 5.0));
    builder.line_to(point(6.0, 6.0));
    builder.end(false);
    let path = builder.build();

    let ends: Vec<(Point, bool)> = path
        .iter()
        .filter_map(|evt| match evt {
            PathEvent::End { first, close, .. } => Some((first, close)),
            _ => None,
        })
        .collect();
    assert_eq!(ends, vec![(point(0.0, 0.0), true), (point(5.0, 5.0), false)]);

    let begins = path
        .iter()
        .filter(|evt| matches!(evt, PathEvent::Begin { .. }))
        .count();
    assert_eq!(begins, 2);
}

#[test]
fn degenerate_arc_becomes_a_line() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.arc_through(point(10.0, 0.0), point(5.0, 0.0));
    builder.end(false);
    let path = builder.build();

    let events: Vec<PathEvent> = path.iter().collect();
    assert_eq!(
        events[1],
        PathEvent::Line {
            from: point(0.0, 0.0),
            to: point(10.0, 0.0),
        }
    );
}

#[test]
fn arc_radius_is_recovered() {
    // The packed representation stores no radius; it must come back from
    // the endpoint/center distance.
    let arc = Arc::through_points(point(0.0, 0.0), point(10.0, 0.0), point(5.0, 5.0)).unwrap();
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.arc_to(point(10.0, 0.0), arc);
    builder.end(false);
    let path = builder.build();

    for evt in &path {
        if let PathEvent::Arc { arc: stored, .. } = evt {
            assert!((stored.radius - arc.radius).abs() < 1e-3);
            assert!((stored.center - arc.center).length() < 1e-3);
            let delta: Vector = stored.sample(0.5) - arc.sample(0.5);
            assert!(delta.length() < 1e-3);
        }
    }
}
