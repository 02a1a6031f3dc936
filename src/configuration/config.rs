//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the fixed tick length
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 10.0                 # gravitational constant
//!   dt: 0.02                # fixed tick length
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     surface_gravity: 10.0 # mass derived from radius and G
//!     radius: 50.0
//!   - x: [ 200.0, 0.0, 0.0 ]
//!     v: [ 0.0, 8.0, 0.0 ]
//!     m: 1.0
//!     radius: 1.0
//!     surface_contact: true
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! representation; bodies giving `surface_gravity` instead of `m` get their
//! mass derived during that mapping.

use serde::Deserialize;

/// Physical constants and the fixed tick length for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,  // gravitational constant
    pub dt: f64, // fixed tick length in simulation time units
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector in simulation units
    pub v: Vec<f64>, // Initial velocity vector in simulation units per time unit
    pub m: Option<f64>, // Mass; omit to derive it from `surface_gravity`
    pub surface_gravity: Option<f64>, // Desired gravity at the surface; mass becomes g_surf * radius^2 / G
    pub radius: f64, // Collision radius, also used for the surface-gravity mass derivation
    #[serde(default)]
    pub surface_contact: bool, // Enable resting-contact velocity handling for this body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Physical constants and tick length
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}
