pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, BodyId, ContactPolicy, NVec3, System};
pub use simulation::params::Parameters;
pub use simulation::error::{PhysicsError, Result};
pub use simulation::forces::{ForceField, Influence};
pub use simulation::integrator::{integrate_committed, integrate_speculative};
pub use simulation::simulator::{Simulator, Trajectory};
pub use simulation::scenario::build_simulator;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
