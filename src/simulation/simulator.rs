//! Fixed-step simulation driver and trajectory prediction
//!
//! [`Simulator`] owns the roster and drives the two-phase tick: a force
//! phase that computes every body's gravitational force from the pre-step
//! positions, then an integration phase that advances motion. No position
//! may move before all forces for the step are written; mixing the phases
//! would couple the result to roster iteration order.
//!
//! The trajectory query runs the same cycle speculatively inside a
//! snapshot/restore scope, so the live state is bit-identical before and
//! after the call no matter how the query exits.

use log::debug;

use crate::simulation::error::{PhysicsError, Result};
use crate::simulation::forces::{ForceField, Influence};
use crate::simulation::integrator::{integrate_committed, integrate_speculative};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, ContactPolicy, NVec3, System};

/// Result of a trajectory query.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Predicted positions of the target, one per simulated step. Truncated
    /// at the collision step when one is detected.
    pub path: Vec<NVec3>,
    /// Index into `path` of the first step with an overlap, if any.
    pub collision: Option<usize>,
}

/// Saved positions and velocities of the whole roster, indexed in lockstep
/// with it. Captured before speculative stepping and restored after.
struct Snapshot {
    positions: Vec<NVec3>,
    velocities: Vec<NVec3>,
}

impl Snapshot {
    fn capture(sys: &System) -> Self {
        Self {
            positions: sys.bodies.iter().map(|b| b.x).collect(),
            velocities: sys.bodies.iter().map(|b| b.v).collect(),
        }
    }

    fn restore(&self, sys: &mut System) {
        for (i, b) in sys.bodies.iter_mut().enumerate() {
            b.x = self.positions[i];
            b.v = self.velocities[i];
        }
    }
}

#[derive(Debug)]
pub struct Simulator {
    params: Parameters,
    gravity: ForceField,
    system: System,
}

impl Simulator {
    /// Build a simulator over a fixed roster.
    ///
    /// The roster keeps its size and order for the whole run. Non-positive
    /// or non-finite masses, negative radii, and a non-positive tick length
    /// are rejected.
    pub fn new(params: Parameters, bodies: Vec<Body>) -> Result<Self> {
        if !(params.dt > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "tick length must be positive, got {}",
                params.dt
            )));
        }
        for (i, b) in bodies.iter().enumerate() {
            if !(b.m > 0.0) || !b.m.is_finite() {
                return Err(PhysicsError::InvalidParameter(format!(
                    "body {i} has invalid mass {}",
                    b.m
                )));
            }
            if b.radius < 0.0 {
                return Err(PhysicsError::InvalidParameter(format!(
                    "body {i} has negative radius {}",
                    b.radius
                )));
            }
        }

        Ok(Self {
            gravity: ForceField { G: params.G },
            params,
            system: System::new(bodies),
        })
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn body(&self, id: BodyId) -> Result<&Body> {
        self.system.get(id).ok_or(PhysicsError::BodyNotFound(id))
    }

    /// Force phase: recompute every body's force from the current positions.
    ///
    /// Goes through a scratch buffer so that a degenerate pair aborts the
    /// step without leaving half the roster updated.
    fn force_phase(&mut self) -> Result<()> {
        let mut forces = vec![NVec3::zeros(); self.system.len()];
        self.gravity.accumulate_forces(&self.system, &mut forces)?;
        for (b, f) in self.system.bodies.iter_mut().zip(forces) {
            b.f = f;
        }
        Ok(())
    }

    /// Advance the live simulation by one tick of length `dt`.
    ///
    /// Computes all forces from the pre-step positions, then updates every
    /// body's authoritative velocity. Bodies with
    /// [`ContactPolicy::SurfaceContact`] that are touching their strongest
    /// influence get the velocity component along that pull removed, so
    /// resting objects do not burrow into the surface each tick.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        if !(dt > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "step dt must be positive, got {dt}"
            )));
        }

        self.force_phase()?;

        for i in 0..self.system.len() {
            // The strongest influence reads positions only, which do not
            // move during a committed tick.
            let contact_pull = match self.system.bodies[i].contact_policy {
                ContactPolicy::SurfaceContact => {
                    self.resting_pull(BodyId(i))?
                }
                ContactPolicy::None => None,
            };

            let body = &mut self.system.bodies[i];
            integrate_committed(body, dt);

            if let Some(pull) = contact_pull {
                // Drop the velocity component pointing into the surface
                let dir = pull.direction;
                body.v -= dir * body.v.dot(&dir);
            }
        }

        self.system.t += dt;
        Ok(())
    }

    /// The strongest influence on `id`, but only when the host reports the
    /// body as touching that same influence. The heuristic from the original
    /// contact model: the surface you rest on is the body pulling hardest.
    fn resting_pull(&self, id: BodyId) -> Result<Option<Influence>> {
        let contact = match self.body(id)?.contact {
            Some(c) => c,
            None => return Ok(None),
        };
        let influence = self.gravity.strongest_influence(id, &self.system)?;
        Ok(influence.filter(|inf| inf.source == contact))
    }

    /// Record or clear a host-reported contact for `id`.
    pub fn set_contact(&mut self, id: BodyId, other: Option<BodyId>) -> Result<()> {
        if let Some(o) = other {
            if self.system.get(o).is_none() {
                return Err(PhysicsError::BodyNotFound(o));
            }
        }
        let body = self
            .system
            .bodies
            .get_mut(id.0)
            .ok_or(PhysicsError::BodyNotFound(id))?;
        body.contact = other;
        Ok(())
    }

    /// Total gravitational force currently acting on `id`.
    pub fn force_on(&self, id: BodyId) -> Result<NVec3> {
        self.gravity.force_on(id, &self.system)
    }

    /// The body exerting the largest pull on `id`, with direction and
    /// magnitude. Used by callers to answer "what am I orbiting or resting
    /// on" for orientation.
    pub fn strongest_influence(&self, id: BodyId) -> Result<Option<Influence>> {
        self.gravity.strongest_influence(id, &self.system)
    }

    /// Predict the future path of `target` without disturbing the live state.
    ///
    /// Runs up to `steps` speculative ticks of length `dt * step_size`,
    /// recording the target's position after each and stopping at the first
    /// overlap with another body. The whole roster is advanced together;
    /// only the target's positions are reported.
    ///
    /// Cost is `O(steps * n^2)`: budget `steps` accordingly on interactive
    /// threads. The roster is snapshotted before stepping and restored on
    /// every exit path, errors included, so repeated calls never drift.
    pub fn trajectory(
        &mut self,
        target: BodyId,
        steps: usize,
        step_size: u32,
    ) -> Result<Trajectory> {
        if steps == 0 {
            return Err(PhysicsError::InvalidParameter(
                "trajectory needs at least one step".into(),
            ));
        }
        if step_size == 0 {
            return Err(PhysicsError::InvalidParameter(
                "step size multiplier must be at least 1".into(),
            ));
        }
        if self.system.get(target).is_none() {
            return Err(PhysicsError::BodyNotFound(target));
        }

        debug!(
            "trajectory query: target={target:?} steps={steps} step_size={step_size}"
        );

        let snapshot = Snapshot::capture(&self.system);
        let result = self.predict(target, steps, step_size);
        // Scoped rollback: runs on success, collision, and error alike
        snapshot.restore(&mut self.system);

        result
    }

    fn predict(&mut self, target: BodyId, steps: usize, step_size: u32) -> Result<Trajectory> {
        let dt = self.params.dt * f64::from(step_size);
        let mut path = Vec::with_capacity(steps);
        let mut collision = None;

        for step in 0..steps {
            self.force_phase()?;
            for body in &mut self.system.bodies {
                integrate_speculative(body, dt);
            }

            path.push(self.system.bodies[target.0].x);

            if let Some(hit) = self.first_overlap(target) {
                debug!("trajectory query: collision with {hit:?} at step {step}");
                collision = Some(step);
                break;
            }
        }

        Ok(Trajectory { path, collision })
    }

    /// First body overlapping `target`, by roster order.
    fn first_overlap(&self, target: BodyId) -> Option<BodyId> {
        let body = &self.system.bodies[target.0];
        self.system
            .bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != target.0)
            .find(|(_, other)| (body.x - other.x).norm() < body.radius + other.radius)
            .map(|(j, _)| BodyId(j))
    }
}
