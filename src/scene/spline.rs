//! Centripetal Catmull-Rom curve with arc-length sampling.
//!
//! The curve passes through every control point. End segments use
//! reflected phantom points so the first and last spans have a tangent.

use glam::Vec3;

/// Arc-length lookup resolution.
const ARC_DIVISIONS: usize = 200;
/// Knot spacing below this is treated as degenerate.
const MIN_KNOT_SPACING: f32 = 1e-4;
/// Parameter step for finite-difference tangents.
const TANGENT_DELTA: f32 = 1e-4;

/// An open centripetal Catmull-Rom curve through a list of points.
pub struct CatmullRomCurve<'a> {
    points: &'a [Vec3],
    /// Cumulative chord length at each of `ARC_DIVISIONS + 1` samples.
    arc_lengths: Vec<f32>,
}

impl<'a> CatmullRomCurve<'a> {
    /// Curve through `points`. Returns `None` for fewer than two points.
    #[must_use]
    pub fn new(points: &'a [Vec3]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let mut curve = Self {
            points,
            arc_lengths: Vec::with_capacity(ARC_DIVISIONS + 1),
        };
        curve.build_arc_lengths();
        Some(curve)
    }

    /// Total (approximate) curve length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Point at curve parameter `t ∈ [0, 1]` (uniform over spans).
    #[must_use]
    pub fn point(&self, t: f32) -> Vec3 {
        let n = self.points.len();
        let p = (n - 1) as f32 * t.clamp(0.0, 1.0);
        let mut span = p.floor() as usize;
        let mut weight = p - span as f32;
        if span >= n - 1 {
            span = n - 2;
            weight = 1.0;
        }

        let p1 = self.points[span];
        let p2 = self.points[span + 1];
        let p0 = if span > 0 {
            self.points[span - 1]
        } else {
            2.0 * p1 - p2
        };
        let p3 = if span + 2 < n {
            self.points[span + 2]
        } else {
            2.0 * p2 - p1
        };

        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);
        if dt1 < MIN_KNOT_SPACING {
            dt1 = 1.0;
        }
        if dt0 < MIN_KNOT_SPACING {
            dt0 = dt1;
        }
        if dt2 < MIN_KNOT_SPACING {
            dt2 = dt1;
        }

        // Hermite tangents of the non-uniform span, scaled to [0, 1].
        let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

        let c2 = -3.0 * p1 + 3.0 * p2 - 2.0 * m1 - m2;
        let c3 = 2.0 * p1 - 2.0 * p2 + m1 + m2;
        let w = weight;
        p1 + m1 * w + c2 * (w * w) + c3 * (w * w * w)
    }

    /// Point at arc-length fraction `u ∈ [0, 1]`.
    #[must_use]
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.u_to_t(u))
    }

    /// Unit tangent at arc-length fraction `u`.
    #[must_use]
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let t = self.u_to_t(u);
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);
        let tangent = (self.point(t2) - self.point(t1)).normalize_or_zero();
        if tangent == Vec3::ZERO {
            (self.points[self.points.len() - 1] - self.points[0])
                .try_normalize()
                .unwrap_or(Vec3::Z)
        } else {
            tangent
        }
    }

    fn build_arc_lengths(&mut self) {
        let mut last = self.point(0.0);
        let mut sum = 0.0;
        self.arc_lengths.push(0.0);
        for i in 1..=ARC_DIVISIONS {
            let p = self.point(i as f32 / ARC_DIVISIONS as f32);
            sum += p.distance(last);
            self.arc_lengths.push(sum);
            last = p;
        }
    }

    /// Map an arc-length fraction to the uniform curve parameter.
    fn u_to_t(&self, u: f32) -> f32 {
        let total = self.length();
        if total <= 0.0 {
            return u.clamp(0.0, 1.0);
        }
        let target = u.clamp(0.0, 1.0) * total;

        // First index whose cumulative length is >= target.
        let i = self
            .arc_lengths
            .partition_point(|&len| len < target)
            .min(ARC_DIVISIONS);
        if i == 0 {
            return 0.0;
        }
        let before = self.arc_lengths[i - 1];
        let after = self.arc_lengths[i];
        let span = after - before;
        let frac = if span > 0.0 { (target - before) / span } else { 0.0 };
        ((i - 1) as f32 + frac) / ARC_DIVISIONS as f32
    }
}
