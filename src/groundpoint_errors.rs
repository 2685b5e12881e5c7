use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GroundPointError {
    #[error("Ellipsoid radii must be strictly positive (a = {a}, b = {b})")]
    InvalidEllipsoid { a: f64, b: f64 },

    #[error("First eccentricity must lie in [0, 1) (e = {0})")]
    InvalidEccentricity(f64),

    #[error("Ray direction is degenerate (zero or non-finite vector)")]
    DegenerateDirection,
}
