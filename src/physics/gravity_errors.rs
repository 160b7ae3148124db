use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GravityFieldErrors {
    #[error("Desired predefined gravity field does not exist: {0}")]
    UnknownPredefinedBody(String),
    #[error("Query point is {separation} m from the field origin; the field is singular there")]
    DegenerateGeometry { separation: f64 },
    #[error("Gravitational parameter has not been configured")]
    UnconfiguredGravitationalParameter,
}
