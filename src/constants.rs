//! # Constants and type definitions for groundpoint
//!
//! This module centralizes the **reference ellipsoid constants** and the
//! common type aliases used throughout the `groundpoint` library.
//!
//! All distances are expressed in **kilometers**: the solver takes sensor
//! positions and returns surface points in the same unit as the ellipsoid
//! radii below.

/// Distance in kilometers
pub type Kilometer = f64;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

/// Earth equatorial radius in kilometers (WGS-84 semi-major axis)
pub const EARTH_MAJOR_AXIS: Kilometer = 6378.137;

/// Earth polar radius in kilometers (WGS-84 semi-minor axis)
pub const EARTH_MINOR_AXIS: Kilometer = 6356.752314245;

/// WGS-84 first eccentricity, with `b = a·sqrt(1 − e²)`
pub const EARTH_ECCENTRICITY: f64 = 0.081819221456;
