//! # Ray / ellipsoid intersection solver
//!
//! Given a sensor line-of-sight [`Ray`] in the ellipsoid-centered Cartesian
//! frame, [`ray_ellipsoid_intersection`] computes the first point where the
//! ray's forward path strikes the [`Ellipsoid`](crate::ellipsoid::Ellipsoid)
//! surface.
//!
//! Substituting the ray parametrization `origin + t·direction` into the
//! implicit surface equation `x²/a² + y²/a² + z²/b² = 1` yields a quadratic
//! `At² + Bt + C = 0` in the ray parameter `t`. The solver classifies its
//! real roots, keeps the smallest strictly positive one (the nearest forward
//! crossing), and evaluates the ray there. A ray whose infinite line misses
//! the ellipsoid, or whose crossings all lie at or behind the origin,
//! produces `Ok(None)`: a miss is a result, not an error.

use nalgebra::Vector3;

use crate::constants::Kilometer;
use crate::ellipsoid::Ellipsoid;
use crate::groundpoint_errors::GroundPointError;
use crate::quadratic::solve_quadratic;

/// A ray, beginning at `origin` and extending along `direction`.
///
/// Both vectors are in the ellipsoid-centered frame, in kilometers. The
/// direction needs no normalization; the returned parameter `t` scales with
/// its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Vector3<f64>, direction: Vector3<f64>) -> Ray {
        Ray { origin, direction }
    }

    /// The point along the ray at parameter `t`. Positive values of `t` lie
    /// forward from the origin, negative values behind it.
    pub fn point_at_parameter(&self, t: f64) -> Vector3<f64> {
        self.origin + t * self.direction
    }
}

/// A surface crossing: the selected ray parameter and the point it maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    /// Ray parameter of the crossing; the slant range in kilometers when
    /// `direction` is a unit vector.
    pub t: f64,
    /// The intersection point in the ellipsoid-centered frame.
    pub point: Vector3<f64>,
}

/// Compute the nearest forward intersection of a ray with an ellipsoid.
///
/// Arguments
/// ---------
/// * `ray`: line of sight in the ellipsoid-centered frame.
/// * `ellipsoid`: the reference surface.
///
/// Return
/// ------
/// * `Ok(Some(SurfacePoint))`: the first forward crossing.
/// * `Ok(None)`: the forward ray misses the surface (negative discriminant,
///   or every root at `t ≤ 0`).
/// * `Err(GroundPointError::DegenerateDirection)`: the direction vector is
///   zero or non-finite, leaving the ray undefined.
pub fn ray_ellipsoid_intersection(
    ray: &Ray,
    ellipsoid: &Ellipsoid,
) -> Result<Option<SurfacePoint>, GroundPointError> {
    if ray.direction == Vector3::zeros() {
        return Err(GroundPointError::DegenerateDirection);
    }

    let a2: Kilometer = ellipsoid.semi_major_axis().powi(2);
    let b2: Kilometer = ellipsoid.semi_minor_axis().powi(2);
    let d = &ray.direction;
    let o = &ray.origin;

    // Coefficients of the quadratic in the ray parameter
    let quad_a = d.x.powi(2) / a2 + d.y.powi(2) / a2 + d.z.powi(2) / b2;
    let quad_b = 2.0 * (d.x * o.x / a2 + d.y * o.y / a2 + d.z * o.z / b2);
    let quad_c = o.x.powi(2) / a2 + o.y.powi(2) / a2 + o.z.powi(2) / b2 - 1.0;

    // A nonzero finite direction guarantees quad_a > 0
    if !quad_a.is_finite() || quad_a <= 0.0 {
        return Err(GroundPointError::DegenerateDirection);
    }

    Ok(solve_quadratic(quad_a, quad_b, quad_c)
        .nearest_positive()
        .map(|t| SurfacePoint {
            t,
            point: ray.point_at_parameter(t),
        }))
}
