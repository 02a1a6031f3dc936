pub mod states;
pub mod params;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod simulator;
pub mod scenario;
