//! Circular arc related maths and tools.

use crate::{point, vector, Angle, Point, Vector};

/// Absolute threshold on the circumcenter determinant below which three
/// points are treated as collinear. The determinant is twice the signed
/// area of the triangle, so this is tuned for pixel-scale coordinates.
pub const COLLINEARITY_EPSILON: f32 = 1e-6;

/// A circular arc: a portion of the circle of a given center and radius,
/// starting at `start_angle` and spanning `sweep_angle`.
///
/// Angles follow the raster convention (y pointing down): zero is the
/// positive x axis and positive sweeps turn clockwise on screen. The sweep
/// is signed and its magnitude never exceeds one full turn.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center: Point,
    pub radius: f32,
    pub start_angle: Angle,
    pub sweep_angle: Angle,
}

impl Arc {
    /// Returns the arc going from `from` to `to` along the unique circle
    /// that also passes through `via`, or `None` if the three points are
    /// collinear within tolerance.
    ///
    /// Three points define two arcs on their circumcircle; the returned
    /// sweep is the one that contains `via` between the endpoints, so a
    /// guide point placed beyond an edge always produces the outward bulge.
    ///
    /// Degeneracy is a designed fallback, not an error: callers substitute
    /// a straight line from `from` to `to` and ignore `via`. Non-finite
    /// inputs produce undefined geometry.
    pub fn through_points(from: Point, to: Point, via: Point) -> Option<Arc> {
        let (x1, y1) = (from.x, from.y);
        let (x2, y2) = (to.x, to.y);
        let (x3, y3) = (via.x, via.y);

        // Twice the signed area of the triangle, which is also the
        // determinant of the circumcenter linear system.
        let d = 2.0 * (x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2));
        if d.abs() < COLLINEARITY_EPSILON {
            return None;
        }

        let m1 = x1 * x1 + y1 * y1;
        let m2 = x2 * x2 + y2 * y2;
        let m3 = x3 * x3 + y3 * y3;
        let center = point(
            (m1 * (y2 - y3) + m2 * (y3 - y1) + m3 * (y1 - y2)) / d,
            (m1 * (x3 - x2) + m2 * (x1 - x3) + m3 * (x2 - x1)) / d,
        );
        let radius = (from - center).length();

        let start_angle = (from - center).angle_from_x_axis().positive();
        let mid_angle = (via - center).angle_from_x_axis().positive();
        let end_angle = (to - center).angle_from_x_axis().positive();

        // Clockwise sweep from the start to the end angle, in [0, 2π).
        let sweep_cw = (end_angle - start_angle).positive();
        // If the clockwise walk encounters `via` before reaching the end
        // point, it is the right arc; otherwise take the complement.
        let diff = (mid_angle - start_angle).positive();
        let sweep_angle = if diff.radians <= sweep_cw.radians {
            sweep_cw
        } else {
            sweep_cw - Angle::two_pi()
        };

        Some(Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
        })
    }

    /// Sample the point of the supporting circle at a given angle.
    #[inline]
    pub fn point_at_angle(&self, angle: Angle) -> Point {
        self.center + vector(angle.radians.cos(), angle.radians.sin()) * self.radius
    }

    /// Sample the arc's angle at t (expecting t between 0 and 1).
    #[inline]
    pub fn angle_at(&self, t: f32) -> Angle {
        self.start_angle + Angle::radians(self.sweep_angle.radians * t)
    }

    /// Sample the arc at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f32) -> Point {
        self.point_at_angle(self.angle_at(t))
    }

    #[inline]
    pub fn end_angle(&self) -> Angle {
        self.start_angle + self.sweep_angle
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.sample(0.0)
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.sample(1.0)
    }

    /// The tangent direction of the arc at a given angle (not normalized).
    #[inline]
    fn tangent_at_angle(&self, angle: Angle) -> Vector {
        vector(-angle.radians.sin(), angle.radians.cos()) * self.sweep_angle.radians.signum()
    }

    /// Sample the arc's tangent at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample_tangent(&self, t: f32) -> Vector {
        self.tangent_at_angle(self.angle_at(t))
    }

    /// Swap the direction of the arc.
    pub fn flip(&self) -> Self {
        Arc {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle + self.sweep_angle,
            sweep_angle: -self.sweep_angle,
        }
    }

    /// Approximates the arc with a sequence of quadratic béziers, invoking
    /// the callback with the control point and the end point of each curve.
    ///
    /// Each step spans at most 45°; the control point is placed at the
    /// intersection of the endpoint tangents, which for a circle lies on
    /// the bisecting radius at distance `radius / cos(step / 2)`.
    pub fn for_each_quadratic_bezier<F: FnMut(Point, Point)>(&self, cb: &mut F) {
        let sweep = self
            .sweep_angle
            .radians
            .abs()
            .min(2.0 * core::f32::consts::PI);
        if sweep == 0.0 {
            return;
        }

        let n_steps = (sweep / core::f32::consts::FRAC_PI_4).ceil();
        let step = self.sweep_angle.radians / n_steps;
        let ctrl_dist = self.radius / (step * 0.5).cos();

        for i in 0..n_steps as i32 {
            let a1 = self.start_angle.radians + step * i as f32;
            let a2 = a1 + step;
            let mid = (a1 + a2) * 0.5;
            let ctrl = self.center + vector(mid.cos(), mid.sin()) * ctrl_dist;
            let to = self.point_at_angle(Angle::radians(a2));
            cb(ctrl, to);
        }
    }

    /// Approximates the arc with a sequence of line segments, invoking the
    /// callback at each point, starting *after* the arc's start point.
    ///
    /// The tolerance is the maximum distance between the arc and the chords
    /// of the approximation.
    pub fn for_each_flattened<F: FnMut(Point)>(&self, tolerance: f32, cb: &mut F) {
        if self.radius <= tolerance {
            cb(self.to());
            return;
        }

        // A chord spanning an angle θ stays within sagitta r·(1 − cos(θ/2))
        // of the circle, so the largest admissible step is 2·acos(1 − tol/r).
        let step = 2.0 * (1.0 - tolerance / self.radius).acos();
        let n = (self.sweep_angle.radians.abs() / step).ceil().max(1.0) as u32;
        for i in 1..=n {
            cb(self.sample(i as f32 / n as f32));
        }
    }
}

#[cfg(test)]
fn assert_close(a: Point, b: Point, tolerance: f32) {
    assert!(
        (a - b).length() <= tolerance,
        "expected {:?} to be within {} of {:?}",
        a,
        tolerance,
        b
    );
}

#[test]
fn through_points_circumcircle() {
    let samples = [
        (point(0.0, 0.0), point(10.0, 0.0), point(5.0, 5.0)),
        (point(0.0, 0.0), point(10.0, 0.0), point(5.0, -5.0)),
        (point(30.0, 30.0), point(970.0, 30.0), point(500.0, 0.0)),
        (point(-4.0, 2.5), point(7.0, -3.0), point(1.0, 8.0)),
    ];

    for &(a, b, c) in &samples {
        let arc = Arc::through_points(a, b, c).unwrap();
        let tolerance = 1e-3 * arc.radius;
        // All three points lie on the fitted circle.
        for &p in &[a, b, c] {
            assert!(((p - arc.center).length() - arc.radius).abs() <= tolerance);
        }
        // The arc connects a to b.
        assert_close(arc.from(), a, tolerance);
        assert_close(arc.to(), b, tolerance);
    }
}

#[test]
fn through_points_passes_through_via() {
    let samples = [
        (point(0.0, 0.0), point(10.0, 0.0), point(5.0, 5.0)),
        (point(0.0, 0.0), point(10.0, 0.0), point(5.0, -5.0)),
        (point(10.0, 0.0), point(0.0, 0.0), point(5.0, 5.0)),
        (point(30.0, 30.0), point(970.0, 30.0), point(500.0, 0.0)),
        (point(970.0, 970.0), point(30.0, 970.0), point(500.0, 1000.0)),
    ];

    for &(a, b, c) in &samples {
        let arc = Arc::through_points(a, b, c).unwrap();
        // Walking the sweep from the start angle must encounter `via`
        // strictly between the endpoints.
        let diff = ((c - arc.center).angle_from_x_axis().positive() - arc.start_angle).positive();
        let t = if arc.sweep_angle.radians >= 0.0 {
            diff.radians / arc.sweep_angle.radians
        } else {
            (diff.radians - 2.0 * core::f32::consts::PI) / arc.sweep_angle.radians
        };
        assert!((0.0..=1.0).contains(&t), "via is not on the arc (t = {})", t);
        assert_close(arc.sample(t), c, 1e-3 * arc.radius);
    }
}

#[test]
fn through_points_sweep_direction() {
    // Bulge below the chord (positive y): counter-clockwise sweep in the
    // y-down convention.
    let arc = Arc::through_points(point(0.0, 0.0), point(10.0, 0.0), point(5.0, 5.0)).unwrap();
    assert!(arc.sweep_angle.radians < 0.0);
    assert_close(arc.sample(0.5), point(5.0, 5.0), 1e-3);

    // Bulge above the chord: clockwise sweep.
    let arc = Arc::through_points(point(0.0, 0.0), point(10.0, 0.0), point(5.0, -5.0)).unwrap();
    assert!(arc.sweep_angle.radians > 0.0);
    assert_close(arc.sample(0.5), point(5.0, -5.0), 1e-3);
}

#[test]
fn through_points_collinear() {
    assert_eq!(
        Arc::through_points(point(0.0, 0.0), point(10.0, 0.0), point(5.0, 0.0)),
        None
    );
    assert_eq!(
        Arc::through_points(point(0.0, 0.0), point(10.0, 10.0), point(5.0, 5.0)),
        None
    );
    // Near-collinear triples fall under the determinant threshold too.
    assert_eq!(
        Arc::through_points(point(0.0, 0.0), point(1.0, 0.0), point(0.5, 1e-8)),
        None
    );
}

#[test]
fn flip_reverses_sampling() {
    let arc = Arc::through_points(point(0.0, 0.0), point(10.0, 0.0), point(5.0, 5.0)).unwrap();
    let flipped = arc.flip();
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert_close(arc.sample(t), flipped.sample(1.0 - t), 1e-3);
    }
}

#[test]
fn quadratic_beziers_stay_on_the_circle() {
    let arc = Arc::through_points(point(30.0, 30.0), point(970.0, 30.0), point(500.0, 0.0)).unwrap();

    let mut from = arc.from();
    let mut last = arc.from();
    let mut count = 0;
    arc.for_each_quadratic_bezier(&mut |ctrl, to| {
        // Evaluate the curve at a few points and compare against the radius.
        for i in 0..=4 {
            let t = i as f32 / 4.0;
            let one_t = 1.0 - t;
            let p = (from.to_vector() * (one_t * one_t)
                + ctrl.to_vector() * (2.0 * one_t * t)
                + to.to_vector() * (t * t))
                .to_point();
            let radial = (p - arc.center).length();
            assert!((radial - arc.radius).abs() <= arc.radius * 0.01);
        }
        from = to;
        last = to;
        count += 1;
    });

    assert!(count >= 1);
    assert_close(last, arc.to(), 1e-2 * arc.radius);
}

#[test]
fn flattened_respects_tolerance() {
    let arc = Arc::through_points(point(0.0, 0.0), point(100.0, 0.0), point(50.0, -50.0)).unwrap();

    let mut prev = arc.from();
    let mut last = arc.from();
    arc.for_each_flattened(0.1, &mut |p| {
        // The chord midpoint must stay close to the circle.
        let mid = prev.lerp(p, 0.5);
        let sagitta = (arc.radius - (mid - arc.center).length()).abs();
        assert!(sagitta <= 0.1 + 1e-3);
        prev = p;
        last = p;
    });
    assert_close(last, arc.to(), 1e-3 * arc.radius);
}
