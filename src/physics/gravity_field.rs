//! Point-mass gravity field evaluation shared by every field model.
//!
//! All quantities are SI: positions in m, the gravitational parameter in m³/s²,
//! the potential in m²/s², its gradient in m/s² and the gradient tensor in 1/s².

use super::gravity_errors::GravityFieldErrors;
use crate::models::Position;
use log::warn;
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A gravity field centred on `origin()` with strength `gravitational_parameter()`.
///
/// The relative position is recomputed on every call and never stored, so a shared
/// model can be queried from several threads at once.
pub trait GravityFieldModel {
    fn gravitational_parameter(&self) -> f64;

    fn origin(&self) -> na::Vector3<f64>;

    /// Query point minus origin. Every query below, checked or not, starts from this
    /// vector, so overriding it (for instance to rotate the point into a body-fixed
    /// frame) changes all of them consistently.
    fn relative_position(&self, point: &impl Position) -> na::Vector3<f64> {
        point.position() - self.origin()
    }

    /// `μ / r`. Infinite at the origin.
    fn potential(&self, point: &impl Position) -> f64 {
        let r = self.relative_position(point);
        self.gravitational_parameter() / r.norm()
    }

    /// `-μ r / |r|³`, the point-mass acceleration. Points toward the origin.
    fn gradient_of_potential(&self, point: &impl Position) -> na::Vector3<f64> {
        let r = self.relative_position(point);
        -self.gravitational_parameter() * r / r.norm().powi(3)
    }

    /// `μ / |r|⁵ (3 r rᵀ - |r|² I)`, the Jacobian of the acceleration.
    /// Symmetric and traceless.
    fn gradient_tensor_of_potential(&self, point: &impl Position) -> na::Matrix3<f64> {
        let r = self.relative_position(point);
        self.gravitational_parameter() / r.norm().powi(5)
            * (3.0 * r * r.transpose() - r.norm_squared() * na::Matrix3::identity())
    }

    /// Like [`GravityFieldModel::potential`], but rejects an unconfigured field and
    /// query points where the result is not finite.
    fn checked_potential(&self, point: &impl Position) -> Result<f64, GravityFieldErrors> {
        let separation = checked_separation(self, point)?;
        let potential = self.potential(point);
        if potential.is_finite() {
            Ok(potential)
        } else {
            Err(degenerate(separation))
        }
    }

    fn checked_gradient_of_potential(
        &self,
        point: &impl Position,
    ) -> Result<na::Vector3<f64>, GravityFieldErrors> {
        let separation = checked_separation(self, point)?;
        let gradient = self.gradient_of_potential(point);
        if gradient.iter().all(|g| g.is_finite()) {
            Ok(gradient)
        } else {
            Err(degenerate(separation))
        }
    }

    fn checked_gradient_tensor_of_potential(
        &self,
        point: &impl Position,
    ) -> Result<na::Matrix3<f64>, GravityFieldErrors> {
        let separation = checked_separation(self, point)?;
        let tensor = self.gradient_tensor_of_potential(point);
        if tensor.iter().all(|t| t.is_finite()) {
            Ok(tensor)
        } else {
            Err(degenerate(separation))
        }
    }
}

fn checked_separation<F: GravityFieldModel + ?Sized>(
    field: &F,
    point: &impl Position,
) -> Result<f64, GravityFieldErrors> {
    if field.gravitational_parameter() == 0.0 {
        return Err(GravityFieldErrors::UnconfiguredGravitationalParameter);
    }
    let separation = field.relative_position(point).norm();
    if separation > 0.0 && separation.is_finite() {
        Ok(separation)
    } else {
        Err(degenerate(separation))
    }
}

fn degenerate(separation: f64) -> GravityFieldErrors {
    warn!(
        "Gravity field evaluated {} m from its origin, result is not finite",
        separation
    );
    GravityFieldErrors::DegenerateGeometry { separation }
}

pub(crate) fn format_vector(v: &na::Vector3<f64>) -> String {
    format!("({}, {}, {})", v.x, v.y, v.z)
}

/// Plain point-mass field: a gravitational parameter and an origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentralGravityField {
    gravitational_parameter: f64,
    origin: na::Vector3<f64>,
}

impl CentralGravityField {
    pub fn new(gravitational_parameter: f64, origin: na::Vector3<f64>) -> Self {
        Self {
            gravitational_parameter,
            origin,
        }
    }

    pub fn set_gravitational_parameter(&mut self, gravitational_parameter: f64) {
        self.gravitational_parameter = gravitational_parameter;
    }

    pub fn set_origin(&mut self, origin: na::Vector3<f64>) {
        self.origin = origin;
    }
}

impl GravityFieldModel for CentralGravityField {
    fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }

    fn origin(&self) -> na::Vector3<f64> {
        self.origin
    }
}

impl fmt::Display for CentralGravityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "This is a CentralGravityField object.")?;
        writeln!(
            f,
            "The gravitational parameter is set to: {}",
            self.gravitational_parameter
        )?;
        writeln!(
            f,
            "The origin of the gravity field is set to: {}",
            format_vector(&self.origin)
        )
    }
}
