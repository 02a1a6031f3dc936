//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - the gravitational constant `G`, set once at initialization,
//! - the fixed physics tick length `dt` used for trajectory stepping

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // fixed tick length
}
