//! Spherical harmonics gravity field.
//!
//! The model carries the configuration of a truncated harmonic expansion (reference radius,
//! degree and order, J2..J4), but only the point-mass term is evaluated: potential, gradient
//! and gradient tensor are exactly those of [`GravityFieldModel`]'s default methods.

use super::gravity_errors::GravityFieldErrors;
use super::gravity_field::{format_vector, GravityFieldModel};
use super::predefined::{GravityFieldParameters, PredefinedBody};
use log::{debug, error};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SphericalHarmonicsGravityField {
    gravitational_parameter: f64,
    origin: na::Vector3<f64>,
    reference_radius: f64,
    degree_of_expansion: u32,
    order_of_expansion: u32,
    j2_coefficient: f64,
    j3_coefficient: f64,
    j4_coefficient: f64,
}

impl SphericalHarmonicsGravityField {
    /// Unconfigured field: every parameter is zero and the origin sits at (0, 0, 0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_predefined(body: PredefinedBody) -> Self {
        let mut field = Self::default();
        field.apply_parameters(body.parameters());
        field
    }

    /// Overwrites μ, reference radius and J2..J4 with the tabulated values for `body`.
    /// Origin, degree and order are left as they are.
    pub fn set_predefined_gravity_field(
        &mut self,
        body: PredefinedBody,
    ) -> Result<(), GravityFieldErrors> {
        debug!("Applying predefined gravity field {}", body);
        self.apply_parameters(body.parameters());
        Ok(())
    }

    /// Same as [`Self::set_predefined_gravity_field`] for an identifier such as `earth-wgs84`.
    /// An unknown identifier is logged and leaves the model untouched.
    pub fn set_predefined_gravity_field_by_name(
        &mut self,
        identifier: &str,
    ) -> Result<(), GravityFieldErrors> {
        match identifier.parse::<PredefinedBody>() {
            Ok(body) => self.set_predefined_gravity_field(body),
            Err(e) => {
                error!("{}", e);
                Err(e)
            }
        }
    }

    fn apply_parameters(&mut self, parameters: GravityFieldParameters) {
        self.gravitational_parameter = parameters.gravitational_parameter;
        self.reference_radius = parameters.reference_radius;
        self.j2_coefficient = parameters.j2;
        self.j3_coefficient = parameters.j3;
        self.j4_coefficient = parameters.j4;
    }

    pub fn set_gravitational_parameter(&mut self, gravitational_parameter: f64) {
        self.gravitational_parameter = gravitational_parameter;
    }

    pub fn set_origin(&mut self, origin: na::Vector3<f64>) {
        self.origin = origin;
    }

    pub fn set_reference_radius(&mut self, reference_radius: f64) {
        self.reference_radius = reference_radius;
    }

    pub fn set_degree_of_expansion(&mut self, degree_of_expansion: u32) {
        debug!("Degree of expansion set to {}", degree_of_expansion);
        self.degree_of_expansion = degree_of_expansion;
    }

    pub fn set_order_of_expansion(&mut self, order_of_expansion: u32) {
        debug!("Order of expansion set to {}", order_of_expansion);
        self.order_of_expansion = order_of_expansion;
    }

    pub fn set_zonal_coefficients(&mut self, j2: f64, j3: f64, j4: f64) {
        self.j2_coefficient = j2;
        self.j3_coefficient = j3;
        self.j4_coefficient = j4;
    }

    pub fn reference_radius(&self) -> f64 {
        self.reference_radius
    }

    pub fn degree_of_expansion(&self) -> u32 {
        self.degree_of_expansion
    }

    pub fn order_of_expansion(&self) -> u32 {
        self.order_of_expansion
    }

    pub fn j2_coefficient(&self) -> f64 {
        self.j2_coefficient
    }

    pub fn j3_coefficient(&self) -> f64 {
        self.j3_coefficient
    }

    pub fn j4_coefficient(&self) -> f64 {
        self.j4_coefficient
    }
}

impl GravityFieldModel for SphericalHarmonicsGravityField {
    fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }

    fn origin(&self) -> na::Vector3<f64> {
        self.origin
    }
}

impl fmt::Display for SphericalHarmonicsGravityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "This is a SphericalHarmonicsGravityField object.")?;
        writeln!(
            f,
            "The gravitational parameter is set to: {}",
            self.gravitational_parameter
        )?;
        writeln!(
            f,
            "The origin of the gravity field is set to: {}",
            format_vector(&self.origin)
        )?;
        writeln!(
            f,
            "The degree of expansion of the spherical harmonics series is set to: {}",
            self.degree_of_expansion
        )?;
        writeln!(
            f,
            "The order of expansion of the spherical harmonics series is set to: {}",
            self.order_of_expansion
        )?;
        writeln!(f, "The reference radius is set to: {}", self.reference_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::gravity_field::CentralGravityField;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn manual_field() -> SphericalHarmonicsGravityField {
        let mut field = SphericalHarmonicsGravityField::new();
        field.set_gravitational_parameter(1.0e14);
        field.set_reference_radius(6.0e6);
        field.set_zonal_coefficients(1.0e-3, -2.0e-6, -3.0e-6);
        field.set_degree_of_expansion(4);
        field.set_order_of_expansion(2);
        field
    }

    #[test]
    fn default_is_unconfigured() {
        let field = SphericalHarmonicsGravityField::new();
        assert_eq!(field.gravitational_parameter(), 0.0);
        assert_eq!(field.reference_radius(), 0.0);
        assert_eq!(field.degree_of_expansion(), 0);
        assert_eq!(field.order_of_expansion(), 0);
        assert_eq!(field.j2_coefficient(), 0.0);
        assert_eq!(field.origin(), na::Vector3::zeros());
    }

    #[test_case(PredefinedBody::EarthWgs72; "wgs72")]
    #[test_case(PredefinedBody::EarthWgs84; "wgs84")]
    fn preset_overwrites_manual_values(body: PredefinedBody) {
        let mut field = manual_field();
        field.set_origin(na::Vector3::new(1.0, 2.0, 3.0));

        assert_eq!(field.set_predefined_gravity_field(body), Ok(()));

        let expected = body.parameters();
        assert_eq!(field.gravitational_parameter(), expected.gravitational_parameter);
        assert_eq!(field.reference_radius(), expected.reference_radius);
        assert_eq!(field.j2_coefficient(), expected.j2);
        assert_eq!(field.j3_coefficient(), expected.j3);
        assert_eq!(field.j4_coefficient(), expected.j4);
        // Not part of the preset.
        assert_eq!(field.origin(), na::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(field.degree_of_expansion(), 4);
        assert_eq!(field.order_of_expansion(), 2);
    }

    #[test]
    fn preset_by_name_matches_wgs72_literals() {
        let mut field = SphericalHarmonicsGravityField::new();
        assert_eq!(field.set_predefined_gravity_field_by_name("earth-wgs72"), Ok(()));
        assert_eq!(field.gravitational_parameter(), 398600.8e9);
        assert_eq!(field.reference_radius(), 6378.135e3);
        assert_eq!(field.j2_coefficient(), 0.001082616);
        assert_eq!(field.j3_coefficient(), -0.00000253881);
        assert_eq!(field.j4_coefficient(), -0.00000165597);
    }

    #[test]
    fn unknown_preset_is_a_no_op() {
        let mut field = manual_field();
        let before = field.clone();

        let result = field.set_predefined_gravity_field_by_name("earth-egm2008");

        assert_eq!(
            result,
            Err(GravityFieldErrors::UnknownPredefinedBody(
                "earth-egm2008".to_string()
            ))
        );
        assert_eq!(field, before);
    }

    #[test]
    fn from_predefined_equals_applying_preset() {
        let mut field = SphericalHarmonicsGravityField::new();
        field
            .set_predefined_gravity_field(PredefinedBody::EarthWgs84)
            .unwrap();
        assert_eq!(
            SphericalHarmonicsGravityField::from_predefined(PredefinedBody::EarthWgs84),
            field
        );
    }

    #[test]
    fn degree_and_order_accept_full_range() {
        let mut field = SphericalHarmonicsGravityField::new();
        field.set_degree_of_expansion(u32::MAX);
        field.set_order_of_expansion(u32::MAX);
        assert_eq!(field.degree_of_expansion(), u32::MAX);
        assert_eq!(field.order_of_expansion(), u32::MAX);
    }

    #[test]
    fn zonal_terms_do_not_change_evaluation() {
        let mut field = SphericalHarmonicsGravityField::from_predefined(PredefinedBody::EarthWgs84);
        field.set_origin(na::Vector3::new(10.0, -20.0, 30.0));
        field.set_degree_of_expansion(4);
        field.set_order_of_expansion(4);
        let point_mass = CentralGravityField::new(field.gravitational_parameter(), field.origin());
        let point = na::Vector3::new(-1200e3, 6500e3, 2300e3);

        assert_eq!(field.potential(&point), point_mass.potential(&point));
        assert_eq!(
            field.gradient_of_potential(&point),
            point_mass.gradient_of_potential(&point)
        );
        assert_eq!(
            field.gradient_tensor_of_potential(&point),
            point_mass.gradient_tensor_of_potential(&point)
        );
    }

    #[test]
    fn queries_are_idempotent() {
        let field = SphericalHarmonicsGravityField::from_predefined(PredefinedBody::EarthWgs72);
        let point = na::Vector3::new(7000e3, 1000e3, -500e3);

        let tensor = field.gradient_tensor_of_potential(&point);
        let potential = field.potential(&point);
        let gradient = field.gradient_of_potential(&point);

        assert_eq!(field.potential(&point), potential);
        assert_eq!(field.gradient_of_potential(&point), gradient);
        assert_eq!(field.gradient_tensor_of_potential(&point), tensor);
    }

    #[test]
    fn scenario_at_7000_km() {
        let field = SphericalHarmonicsGravityField::from_predefined(PredefinedBody::EarthWgs72);
        let point = na::Vector3::new(7000e3, 0.0, 0.0);

        assert_relative_eq!(field.potential(&point), 56942971.428571425, max_relative = 1e-14);
        assert_relative_eq!(
            field.gradient_of_potential(&point).x,
            -8.134710204081633,
            max_relative = 1e-14
        );
    }

    #[test]
    fn summary_lists_configuration() {
        let field = manual_field();
        let summary = field.to_string();
        assert!(summary.starts_with("This is a SphericalHarmonicsGravityField object."));
        assert!(summary.contains("The gravitational parameter is set to: 100000000000000"));
        assert!(summary.contains("The origin of the gravity field is set to: (0, 0, 0)"));
        assert!(summary.contains("series is set to: 4"));
        assert!(summary.contains("series is set to: 2"));
        assert!(summary.contains("The reference radius is set to: 6000000"));
    }

    #[test]
    fn configuration_survives_json_round_trip() {
        let mut field = SphericalHarmonicsGravityField::from_predefined(PredefinedBody::EarthWgs84);
        field.set_origin(na::Vector3::new(1.5e8, -2.0e7, 3.0e6));
        field.set_degree_of_expansion(4);
        field.set_order_of_expansion(4);

        let json = serde_json::to_string(&field).unwrap();
        let restored: SphericalHarmonicsGravityField = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, field);
    }
}
