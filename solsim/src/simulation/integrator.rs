//! Fixed-step two-step position integrator (Stormer recurrence)
//!
//! Step k = 0 records the epoch state, k = 1 bootstraps with a Taylor step
//! and every later step uses
//!
//!   q_{n+1} = 2 q_n - q_{n-1} + a(q_n) dt^2
//!
//! Only positions evolve. The velocity half of each history snapshot is the
//! epoch sample, rewritten unchanged at every step.

use log::{debug, info, trace};

use super::forces::PairForce;
use super::params::Parameters;
use super::states::{snapshot_position, snapshot_velocity, HistorySlot, System, NVec3};
use super::trajectory::Trajectory;
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone)]
pub struct StormerIntegrator {
    dt: f64,
    dt2: f64,           // dt^2, computed once
    step: usize,        // index of the next step to take
    force_evals: usize, // force fields evaluated so far
}

impl StormerIntegrator {
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            dt2: dt * dt,
            step: 0,
            force_evals: 0,
        }
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Index of the next step `advance` will take
    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn force_evaluations(&self) -> usize {
        self.force_evals
    }

    fn accelerations(&mut self, sys: &System, law: &dyn PairForce) -> Vec<NVec3> {
        self.force_evals += 1;
        sys.accelerations(law)
    }

    /// Take one step: compute the next positions from a single snapshot of
    /// `sys`, write them back and append them to `trajectory`.
    /// A full or mismatched trajectory is rejected before `sys` is touched.
    pub fn advance(&mut self, sys: &mut System, law: &dyn PairForce, trajectory: &mut Trajectory) -> SimResult<()> {
        if trajectory.is_full() {
            return Err(SimError::CapacityExceeded {
                capacity: trajectory.capacity(),
            });
        }
        if trajectory.body_count() != sys.len() {
            return Err(SimError::DimensionMismatch {
                table: "trajectory bodies",
                expected: sys.len(),
                found: trajectory.body_count(),
            });
        }

        let k = self.step;

        let next = match k {
            0 => {
                let q0 = sys.positions();
                sys.start_history(&q0)?;
                q0
            }
            1 => {
                let a = self.accelerations(sys, law);
                let q1: Vec<NVec3> = sys
                    .history(HistorySlot::Even)
                    .iter()
                    .zip(&a)
                    .map(|(s, a)| {
                        let q0 = snapshot_position(s);
                        let v0 = snapshot_velocity(s);
                        q0 + v0 * self.dt + 0.5 * self.dt2 * *a
                    })
                    .collect();
                sys.record_history(HistorySlot::Odd, &q1)?;
                debug!("bootstrap step done for {} bodies", sys.len());
                q1
            }
            _ => {
                // Parity picks the slot holding q_{n-1}; it is overwritten with q_{n+1}
                let older = HistorySlot::from_step(k);
                let newer = older.other();

                let a = self.accelerations(sys, law);
                let q_prev = sys.history_positions(older);
                let q_curr = sys.history_positions(newer);

                let q_next: Vec<NVec3> = q_curr
                    .iter()
                    .zip(&q_prev)
                    .zip(&a)
                    .map(|((qn, qn1), a)| 2.0 * *qn - *qn1 + self.dt2 * *a)
                    .collect();
                sys.record_history(older, &q_next)?;
                q_next
            }
        };

        if k > 0 {
            sys.set_positions(&next)?;
        }
        trajectory.record(&next)?;

        trace!("step {k} recorded");
        self.step += 1;
        Ok(())
    }
}

/// Run `params.steps` steps on `sys` and return the filled trajectory.
/// Row 0 is the initial position of every body.
pub fn run(sys: &mut System, law: &dyn PairForce, params: &Parameters) -> SimResult<Trajectory> {
    params.validate()?;

    info!("running {} bodies for {} steps, dt = {} s", sys.len(), params.steps, params.dt);

    let mut trajectory = Trajectory::new(sys.len(), params.steps);
    let mut integrator = StormerIntegrator::new(params.dt);

    for _ in 0..params.steps {
        integrator.advance(sys, law, &mut trajectory)?;
    }

    info!(
        "run finished: {} rows, {} force evaluations",
        trajectory.row_counter(),
        integrator.force_evaluations()
    );
    Ok(trajectory)
}
