pub mod gravity_errors;
pub mod gravity_field;
pub mod predefined;
pub mod spherical_harmonics;
