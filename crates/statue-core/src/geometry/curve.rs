use glam::Vec3;

/// Centripetal Catmull-Rom spline through a list of control points.
///
/// Open curves extrapolate a phantom point past each end so the curve passes
/// through the first and last control points.
#[derive(Clone, Debug, PartialEq)]
pub struct CatmullRom {
    points: Vec<Vec3>,
}

impl CatmullRom {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Point on the curve for `t` in [0, 1].
    pub fn point_at(&self, t: f32) -> Vec3 {
        let n = self.points.len();
        match n {
            0 => return Vec3::ZERO,
            1 => return self.points[0],
            _ => {}
        }
        let t = t.clamp(0.0, 1.0);
        let p = (n - 1) as f32 * t;
        let mut seg = p.floor() as usize;
        let mut weight = p - seg as f32;
        if seg >= n - 1 {
            seg = n - 2;
            weight = 1.0;
        }

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p0 = if seg > 0 {
            self.points[seg - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if seg + 2 < n {
            self.points[seg + 2]
        } else {
            p2 * 2.0 - p1
        };
        centripetal(p0, p1, p2, p3, weight)
    }

    /// Unit tangent at `t`, estimated by a central difference.
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        const DELTA: f32 = 1e-4;
        let t0 = (t - DELTA).max(0.0);
        let t1 = (t + DELTA).min(1.0);
        let d = self.point_at(t1) - self.point_at(t0);
        d.try_normalize().unwrap_or(Vec3::Y)
    }
}

// Barry-Goldman pyramid with alpha = 0.5 knot spacing.
fn centripetal(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, weight: f32) -> Vec3 {
    let knot = |a: Vec3, b: Vec3| a.distance_squared(b).sqrt().sqrt().max(1e-4);
    let t0 = 0.0;
    let t1 = t0 + knot(p0, p1);
    let t2 = t1 + knot(p1, p2);
    let t3 = t2 + knot(p2, p3);
    let t = t1 + (t2 - t1) * weight;

    let a1 = p0 * ((t1 - t) / (t1 - t0)) + p1 * ((t - t0) / (t1 - t0));
    let a2 = p1 * ((t2 - t) / (t2 - t1)) + p2 * ((t - t1) / (t2 - t1));
    let a3 = p2 * ((t3 - t) / (t3 - t2)) + p3 * ((t - t2) / (t3 - t2));
    let b1 = a1 * ((t2 - t) / (t2 - t0)) + a2 * ((t - t0) / (t2 - t0));
    let b2 = a2 * ((t3 - t) / (t3 - t1)) + a3 * ((t - t1) / (t3 - t1));
    b1 * ((t2 - t) / (t2 - t1)) + b2 * ((t - t1) / (t2 - t1))
}
