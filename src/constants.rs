// Earth gravity field constants.
// Reference: Vallado, D. A., Crawford, P., Hujsak, R., & Kelso, T. Revisiting
// Spacetrack Report #3: Rev 1, AIAA/AAS Astrodynamics Specialist Conference, 2006.

// WGS-72 (Table 2)
pub const WGS72_MU: f64 = 398600.8e9; // Gravitational parameter (m³/s²)
pub const WGS72_RADIUS: f64 = 6378.135e3; // Reference radius (m)
pub const WGS72_J2: f64 = 0.001082616;
pub const WGS72_J3: f64 = -0.00000253881;
pub const WGS72_J4: f64 = -0.00000165597;

// WGS-84 (Table 3)
pub const WGS84_MU: f64 = 398600.4418e9; // Gravitational parameter (m³/s²)
pub const WGS84_A: f64 = 6378.137e3; // Semi-major axis [m]
pub const WGS84_J2: f64 = 0.00108262998905;
pub const WGS84_J3: f64 = -0.00000253215306;
pub const WGS84_J4: f64 = -0.00000161098761;
