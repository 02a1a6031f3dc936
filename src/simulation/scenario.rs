//! Build a fully-initialized simulator from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! [`Simulator`]:
//! - parameters (`G`, tick length) mapped onto [`Parameters`]
//! - each `BodyConfig` mapped onto a runtime [`Body`] with nalgebra vectors
//! - mass either taken directly or derived from the requested surface
//!   gravity, `m = g_surf * radius^2 / G`

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::{PhysicsError, Result};
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, ContactPolicy, NVec3};

fn vec3(raw: &[f64], what: &str, index: usize) -> Result<NVec3> {
    if raw.len() != 3 {
        return Err(PhysicsError::InvalidParameter(format!(
            "body {index}: {what} must have 3 components, got {}",
            raw.len()
        )));
    }
    Ok(NVec3::new(raw[0], raw[1], raw[2]))
}

fn body_mass(bc: &BodyConfig, g: f64, index: usize) -> Result<f64> {
    match (bc.m, bc.surface_gravity) {
        (Some(m), _) => Ok(m),
        // Planet-style setup: choose the gravity felt at the surface and
        // let the mass follow from the radius
        (None, Some(g_surf)) => Ok(g_surf * bc.radius * bc.radius / g),
        (None, None) => Err(PhysicsError::InvalidParameter(format!(
            "body {index}: either m or surface_gravity is required"
        ))),
    }
}

/// Map a scenario configuration onto a runtime simulator.
pub fn build_simulator(cfg: ScenarioConfig) -> Result<Simulator> {
    let parameters = Parameters {
        G: cfg.parameters.G,
        dt: cfg.parameters.dt,
    };

    let bodies = cfg
        .bodies
        .iter()
        .enumerate()
        .map(|(i, bc)| {
            let policy = if bc.surface_contact {
                ContactPolicy::SurfaceContact
            } else {
                ContactPolicy::None
            };
            Ok(Body::new(
                vec3(&bc.x, "x", i)?,
                vec3(&bc.v, "v", i)?,
                body_mass(bc, parameters.G, i)?,
                bc.radius,
            )
            .with_contact_policy(policy))
        })
        .collect::<Result<Vec<_>>>()?;

    Simulator::new(parameters, bodies)
}
