//! Pairwise Newtonian gravity over the roster
//!
//! [`ForceField`] owns the gravitational constant and provides the force
//! phase of a tick (`accumulate_forces`), the per-body query used by hosts
//! (`force_on`), and the strongest-influence query used as a proxy for
//! "which surface am I resting on" (`strongest_influence`).
//!
//! Zero separation between two bodies is a reported error, never a silent
//! NaN: the inverse square law has no defined value there.

use crate::simulation::error::{PhysicsError, Result};
use crate::simulation::states::{BodyId, NVec3, System};

/// The single strongest gravitational pull on a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Influence {
    pub direction: NVec3, // unit vector from the body toward the source
    pub magnitude: f64, // force magnitude
    pub source: BodyId, // the body exerting the pull
}

/// Direct N^2 Newtonian gravity.
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct ForceField {
    pub G: f64, // gravitational constant
}

impl ForceField {
    /// Compute total forces for all bodies in `sys` into `out`.
    ///
    /// `out[i]` is set to the sum of gravitational pulls on body `i` from
    /// every other body, evaluated from the positions in `sys` only. Callers
    /// must not advance any position until the whole buffer is filled.
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec3]) -> Result<()> {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec3::zeros();
        }

        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;
                let r2 = r.norm_squared();
                if r2 == 0.0 {
                    return Err(PhysicsError::DegenerateDistance(BodyId(i), BodyId(j)));
                }

                // F = G * mi * mj * r / |r|^3
                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.G * bi.m * bj.m * inv_r3;

                // Equal and opposite
                out[i] += coef * r;
                out[j] -= coef * r;
            }
        }

        Ok(())
    }

    /// Force on one body from every other body in the roster.
    ///
    /// A roster with no other bodies yields the zero vector.
    pub fn force_on(&self, id: BodyId, sys: &System) -> Result<NVec3> {
        let body = sys
            .get(id)
            .ok_or(PhysicsError::BodyNotFound(id))?;

        let mut total = NVec3::zeros();

        for (j, other) in sys.bodies.iter().enumerate() {
            if j == id.0 {
                continue;
            }

            let r = other.x - body.x;
            let r2 = r.norm_squared();
            if r2 == 0.0 {
                return Err(PhysicsError::DegenerateDistance(id, BodyId(j)));
            }

            let inv_r = r2.sqrt().recip();
            let inv_r3 = inv_r * inv_r * inv_r;
            total += self.G * body.m * other.m * inv_r3 * r;
        }

        Ok(total)
    }

    /// The single pair with the greatest force magnitude acting on `id`.
    ///
    /// Ties keep the first maximum in roster order. `None` when the roster
    /// holds no other body.
    pub fn strongest_influence(&self, id: BodyId, sys: &System) -> Result<Option<Influence>> {
        let body = sys
            .get(id)
            .ok_or(PhysicsError::BodyNotFound(id))?;

        let mut strongest: Option<Influence> = None;

        for (j, other) in sys.bodies.iter().enumerate() {
            if j == id.0 {
                continue;
            }

            let r = other.x - body.x;
            let r2 = r.norm_squared();
            if r2 == 0.0 {
                return Err(PhysicsError::DegenerateDistance(id, BodyId(j)));
            }

            let magnitude = self.G * body.m * other.m / r2;

            // Strict comparison: the first maximum in roster order wins
            if strongest.as_ref().map_or(true, |s| magnitude > s.magnitude) {
                strongest = Some(Influence {
                    direction: r * r2.sqrt().recip(),
                    magnitude,
                    source: BodyId(j),
                });
            }
        }

        Ok(strongest)
    }
}
