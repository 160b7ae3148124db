pub mod constants;
pub mod models;
pub mod physics;

pub use models::{CartesianState, Position};
pub use physics::gravity_errors::GravityFieldErrors;
pub use physics::gravity_field::{CentralGravityField, GravityFieldModel};
pub use physics::predefined::{GravityFieldParameters, PredefinedBody};
pub use physics::spherical_harmonics::SphericalHarmonicsGravityField;
