//! # Reference ellipsoid
//!
//! This module defines [`Ellipsoid`], the oblate spheroid of revolution used
//! as the ground surface model by the intersection solver. An ellipsoid is a
//! plain immutable value passed explicitly to every computation; nothing in
//! the crate reads Earth parameters from global state.
//!
//! The canonical parameterization is the pair of radii `(a, b)`. The
//! `(a, e)` form common in geodetic literature is accepted through
//! [`Ellipsoid::from_eccentricity`], which converts it at construction with
//! `b = a·sqrt(1 − e²)`.

use nalgebra::Vector3;

use crate::constants::{Kilometer, EARTH_MAJOR_AXIS, EARTH_MINOR_AXIS};
use crate::groundpoint_errors::GroundPointError;

/// An axis-aligned ellipsoid of revolution centered on the frame origin.
///
/// The surface is the zero set of `x²/a² + y²/a² + z²/b² − 1`, with the
/// polar axis along `z`. Radii are in kilometers. `a ≥ b` (oblate or
/// spherical) is the supported convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    semi_major_axis: Kilometer,
    semi_minor_axis: Kilometer,
}

impl Ellipsoid {
    /// Build an ellipsoid from its equatorial and polar radii.
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis`: equatorial radius `a` in kilometers.
    /// * `semi_minor_axis`: polar radius `b` in kilometers.
    ///
    /// Return
    /// ------
    /// * The validated ellipsoid, or
    ///   [`GroundPointError::InvalidEllipsoid`] if either radius is not
    ///   strictly positive.
    pub fn new(
        semi_major_axis: Kilometer,
        semi_minor_axis: Kilometer,
    ) -> Result<Ellipsoid, GroundPointError> {
        if !(semi_major_axis > 0.0) || !(semi_minor_axis > 0.0) {
            return Err(GroundPointError::InvalidEllipsoid {
                a: semi_major_axis,
                b: semi_minor_axis,
            });
        }
        Ok(Ellipsoid {
            semi_major_axis,
            semi_minor_axis,
        })
    }

    /// Build an ellipsoid from its equatorial radius and first eccentricity.
    ///
    /// The polar radius is derived as `b = a·sqrt(1 − e²)`; `e = 0` yields a
    /// sphere.
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis`: equatorial radius `a` in kilometers.
    /// * `eccentricity`: first eccentricity `e`, in `[0, 1)`.
    pub fn from_eccentricity(
        semi_major_axis: Kilometer,
        eccentricity: f64,
    ) -> Result<Ellipsoid, GroundPointError> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(GroundPointError::InvalidEccentricity(eccentricity));
        }
        let semi_minor_axis = semi_major_axis * (1.0 - eccentricity.powi(2)).sqrt();
        Ellipsoid::new(semi_major_axis, semi_minor_axis)
    }

    /// The WGS-84 Earth reference ellipsoid.
    pub fn wgs84() -> Ellipsoid {
        Ellipsoid {
            semi_major_axis: EARTH_MAJOR_AXIS,
            semi_minor_axis: EARTH_MINOR_AXIS,
        }
    }

    /// Equatorial radius `a` in kilometers.
    pub fn semi_major_axis(&self) -> Kilometer {
        self.semi_major_axis
    }

    /// Polar radius `b` in kilometers.
    pub fn semi_minor_axis(&self) -> Kilometer {
        self.semi_minor_axis
    }

    /// Evaluate the implicit surface equation at `point`.
    ///
    /// Returns `x²/a² + y²/a² + z²/b² − 1`: zero on the surface, negative
    /// inside, positive outside.
    pub fn surface_equation(&self, point: &Vector3<f64>) -> f64 {
        let a2 = self.semi_major_axis.powi(2);
        let b2 = self.semi_minor_axis.powi(2);
        point.x.powi(2) / a2 + point.y.powi(2) / a2 + point.z.powi(2) / b2 - 1.0
    }
}

#[cfg(test)]
mod ellipsoid_test {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use super::*;
    use crate::constants::EARTH_ECCENTRICITY;

    #[test]
    fn test_ellipsoid_constructor() {
        let ellipsoid = Ellipsoid::new(6378.137, 6356.752314245).unwrap();
        assert_eq!(ellipsoid.semi_major_axis(), 6378.137);
        assert_eq!(ellipsoid.semi_minor_axis(), 6356.752314245);

        assert_eq!(
            Ellipsoid::new(-1.0, 1.0),
            Err(GroundPointError::InvalidEllipsoid { a: -1.0, b: 1.0 })
        );
        assert_eq!(
            Ellipsoid::new(1.0, 0.0),
            Err(GroundPointError::InvalidEllipsoid { a: 1.0, b: 0.0 })
        );
        assert!(matches!(
            Ellipsoid::new(f64::NAN, 1.0),
            Err(GroundPointError::InvalidEllipsoid { .. })
        ));
    }

    #[test]
    fn test_from_eccentricity() {
        let ellipsoid = Ellipsoid::from_eccentricity(6378.137, EARTH_ECCENTRICITY).unwrap();
        assert_relative_eq!(
            ellipsoid.semi_minor_axis(),
            6356.752314245,
            max_relative = 1e-9
        );

        let sphere = Ellipsoid::from_eccentricity(1.0, 0.0).unwrap();
        assert_eq!(sphere.semi_minor_axis(), 1.0);

        assert_eq!(
            Ellipsoid::from_eccentricity(6378.137, 1.0),
            Err(GroundPointError::InvalidEccentricity(1.0))
        );
        assert_eq!(
            Ellipsoid::from_eccentricity(6378.137, -0.5),
            Err(GroundPointError::InvalidEccentricity(-0.5))
        );
    }

    #[test]
    fn test_surface_equation() {
        let ellipsoid = Ellipsoid::wgs84();
        assert_relative_eq!(
            ellipsoid.surface_equation(&Vector3::new(6378.137, 0.0, 0.0)),
            0.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            ellipsoid.surface_equation(&Vector3::new(0.0, 0.0, 6356.752314245)),
            0.0,
            epsilon = 1e-12
        );
        assert!(ellipsoid.surface_equation(&Vector3::zeros()) < 0.0);
        assert!(ellipsoid.surface_equation(&Vector3::new(10000.0, 0.0, 0.0)) > 0.0);
    }
}
