use hifitime::Epoch;
use nalgebra as na;

/// Anything that can be placed in a gravity field: exposes a Cartesian position [m]
/// in the same frame as the field origin.
pub trait Position {
    fn position(&self) -> na::Vector3<f64>;
}

impl Position for na::Vector3<f64> {
    fn position(&self) -> na::Vector3<f64> {
        *self
    }
}

/// Translational state of a propagated body at a given epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianState {
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
    pub epoch: Epoch,
}

impl CartesianState {
    pub fn new(position: na::Vector3<f64>, velocity: na::Vector3<f64>, epoch: Epoch) -> Self {
        CartesianState {
            position,
            velocity,
            epoch,
        }
    }
}

impl Position for CartesianState {
    fn position(&self) -> na::Vector3<f64> {
        self.position
    }
}

// Arithmetic acts on position and velocity only; the epoch of the left operand is kept
// so derivative states can be combined by a host integrator.
impl std::ops::Add for CartesianState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        CartesianState {
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
            epoch: self.epoch,
        }
    }
}

impl std::ops::Mul<f64> for CartesianState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        CartesianState {
            position: self.position * scalar,
            velocity: self.velocity * scalar,
            epoch: self.epoch,
        }
    }
}
