use super::gravity_errors::GravityFieldErrors;
use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bodies with a tabulated gravity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredefinedBody {
    EarthWgs72,
    EarthWgs84,
}

/// The constants a preset assigns to a field model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityFieldParameters {
    pub gravitational_parameter: f64,
    pub reference_radius: f64,
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
}

impl PredefinedBody {
    pub const ALL: [PredefinedBody; 2] = [PredefinedBody::EarthWgs72, PredefinedBody::EarthWgs84];

    pub fn identifier(&self) -> &'static str {
        match self {
            PredefinedBody::EarthWgs72 => "earth-wgs72",
            PredefinedBody::EarthWgs84 => "earth-wgs84",
        }
    }

    pub fn parameters(&self) -> GravityFieldParameters {
        match self {
            PredefinedBody::EarthWgs72 => GravityFieldParameters {
                gravitational_parameter: WGS72_MU,
                reference_radius: WGS72_RADIUS,
                j2: WGS72_J2,
                j3: WGS72_J3,
                j4: WGS72_J4,
            },
            PredefinedBody::EarthWgs84 => GravityFieldParameters {
                gravitational_parameter: WGS84_MU,
                reference_radius: WGS84_A,
                j2: WGS84_J2,
                j3: WGS84_J3,
                j4: WGS84_J4,
            },
        }
    }
}

impl fmt::Display for PredefinedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for PredefinedBody {
    type Err = GravityFieldErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PredefinedBody::ALL
            .into_iter()
            .find(|body| body.identifier().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GravityFieldErrors::UnknownPredefinedBody(s.to_string()))
    }
}
