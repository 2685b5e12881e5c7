pub mod constants;
pub mod ellipsoid;
pub mod groundpoint_errors;
pub mod intersection;
pub mod quadratic;
