//! Core state types for the gravity simulation.
//!
//! Defines the body/roster structs:
//! - `Body` holding position, velocity, accumulated force and mass
//! - `System` holding the roster of bodies and the current simulation time `t`
//!
//! Bodies are addressed by [`BodyId`], an index into the roster. The roster is
//! assembled once at setup and keeps its size and order for the whole run.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Identity of a body within the roster.
///
/// Stable for the lifetime of the simulation because the roster never grows,
/// shrinks, or reorders after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// How a body reacts to resting contact during a committed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactPolicy {
    /// Velocity is integrated as-is.
    #[default]
    None,
    /// When the host reports contact with the body's strongest gravitational
    /// influence, the velocity component along that pull is removed. Stops
    /// small objects near a massive surface from gaining inward velocity
    /// every tick and bouncing off the host's collision response.
    SurfaceContact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub f: NVec3, // accumulated force, rewritten every force phase
    pub m: f64, // mass
    pub radius: f64, // collision radius
    pub contact_policy: ContactPolicy,
    pub contact: Option<BodyId>, // host-reported touching body
}

impl Body {
    /// A body with no accumulated force and no contact handling.
    pub fn new(x: NVec3, v: NVec3, m: f64, radius: f64) -> Self {
        Self {
            x,
            v,
            f: NVec3::zeros(),
            m,
            radius,
            contact_policy: ContactPolicy::None,
            contact: None,
        }
    }

    pub fn with_contact_policy(mut self, policy: ContactPolicy) -> Self {
        self.contact_policy = policy;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // the roster
    pub t: f64, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }
}
