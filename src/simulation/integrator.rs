//! Fixed-step time integration for a single body
//!
//! Two entry points with the same physics but different write targets:
//! - [`integrate_committed`] updates the authoritative velocity only; the
//!   host's motion layer owns position in live mode
//! - [`integrate_speculative`] updates the body's own velocity and position;
//!   used inside trajectory prediction and never observable outside it
//!
//! Both read the force accumulated by the preceding force phase.

use crate::simulation::states::Body;

/// Advance the live velocity of `body` by one step of length `dt`.
///
/// `v_n+1 = v_n + (f / m) * dt`
///
/// The velocity read here may have been rewritten externally since the last
/// step (collision response, thrust), which is why committed mode re-reads
/// it rather than tracking its own copy.
pub fn integrate_committed(body: &mut Body, dt: f64) {
    let acceleration = body.f / body.m;
    body.v += acceleration * dt;
}

/// Advance velocity and position of `body` by one speculative step.
///
/// `v_n+1 = v_n + (f / m) * dt`
/// `x_n+1 = x_n + v_n+1 * dt`
///
/// `dt` is the fixed tick length times the caller's step multiplier, so a
/// trajectory query can trade accuracy for speed by skipping sub-steps.
pub fn integrate_speculative(body: &mut Body, dt: f64) {
    let acceleration = body.f / body.m;
    body.v += acceleration * dt;
    body.x += body.v * dt;
}
