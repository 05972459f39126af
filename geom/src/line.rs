use crate::{Point, Vector};

/// A straight line segment between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f32) -> Point {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.to_vector().length()
    }

    /// Swap the direction of the segment.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }
}

#[test]
fn sample_endpoints() {
    use crate::point;

    let segment = LineSegment {
        from: point(1.0, 2.0),
        to: point(5.0, 4.0),
    };
    assert_eq!(segment.sample(0.0), segment.from);
    assert_eq!(segment.sample(1.0), segment.to);
    assert_eq!(segment.sample(0.5), point(3.0, 3.0));
    assert_eq!(segment.flip().to_vector(), -segment.to_vector());
}
