use crate::geom::Arc;
use crate::math::Point;

/// Represents an event or edge of an outline.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    Begin {
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    /// A circular arc edge. `arc` starts at `from` and ends at `to` (up to
    /// the precision of the fit); the endpoints are carried explicitly so
    /// that consecutive edges chain exactly.
    Arc {
        from: Point,
        to: Point,
        arc: Arc,
    },
    End {
        last: Point,
        first: Point,
        close: bool,
    },
}

impl PathEvent {
    pub fn is_edge(&self) -> bool {
        match self {
            PathEvent::Line { .. } | PathEvent::Arc { .. } | PathEvent::End { close: true, .. } => {
                true
            }
            _ => false,
        }
    }

    pub fn from(&self) -> Point {
        match self {
            PathEvent::Line { from, .. }
            | PathEvent::Arc { from, .. }
            | PathEvent::Begin { at: from }
            | PathEvent::End { last: from, .. } => *from,
        }
    }

    pub fn to(&self) -> Point {
        match self {
            PathEvent::Line { to, .. }
            | PathEvent::Arc { to, .. }
            | PathEvent::Begin { at: to }
            | PathEvent::End { first: to, .. } => *to,
        }
    }
}
