//! Pairwise force law and the n x n force field
//!
//! `ForceMatrix` stores `F[i][j]`, the force acting on body j due to body i.
//! Direct O(n^2) summation, no tree approximation.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, NVec3};

/// Gravitational constant in SI units (m^3 kg^-1 s^-2)
pub const G_SI: f64 = 6.67259e-11;

/// A force law between two bodies
pub trait PairForce {
    /// Force vector (N) acting on `on` exerted by `by`
    fn pair_force(&self, by: &Body, on: &Body) -> NVec3;
}

/// Newtonian gravity without softening
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G: G_SI }
    }
}

impl PairForce for NewtonianGravity {
    fn pair_force(&self, by: &Body, on: &Body) -> NVec3 {
        let xi = by.position(); // position of body i (source)
        let xj = on.position(); // position of body j (target)

        // Coincident bodies (and i == j): no force instead of 0/0.
        // Exact comparison, only bit-identical positions are skipped
        if xi == xj {
            return NVec3::zeros();
        }

        // r is the displacement vector from i to j
        let r = xj - xi;

        // Euclidean separation |r|, no softening
        let dist = r.norm();

        // Unit vector from i toward j
        let r_hat = r / dist;

        // Magnitude of the pull:
        //   |F| = G * m_i * m_j / |r|^2
        let magnitude = self.G * by.mass() * on.mass() / (dist * dist);

        // Attraction: the force on j points back toward i, along -r_hat.
        // Swapping i and j flips r_hat and keeps the magnitude, so
        // F[j][i] = -F[i][j]
        -magnitude * r_hat
    }
}

/// Force field of a system at one instant
#[derive(Debug, Clone)]
pub struct ForceMatrix {
    n: usize,
    data: Vec<NVec3>, // row-major, data[i * n + j] = F[i][j]
}

impl ForceMatrix {
    /// Evaluate `law` over every unordered pair and mirror it, so
    /// F[j][i] == -F[i][j] holds exactly and the diagonal stays zero
    pub fn compute(bodies: &[Body], law: &dyn PairForce) -> Self {
        let n = bodies.len();
        let mut data = vec![NVec3::zeros(); n * n];

        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                // Force on j due to i, evaluated once per pair
                let f = law.pair_force(bi, &bodies[j]);
                data[i * n + j] = f;

                // Equal and opposite: force on i due to j
                data[j * n + i] = -f;
            }
        }

        ForceMatrix { n, data }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    fn check_index(&self, index: usize) -> SimResult<()> {
        if index < self.n {
            Ok(())
        } else {
            Err(SimError::BodyIndexOutOfRange { index, len: self.n })
        }
    }

    /// F[i][j]: force on body j due to body i
    pub fn get(&self, i: usize, j: usize) -> SimResult<NVec3> {
        self.check_index(i)?;
        self.check_index(j)?;
        Ok(self.data[i * self.n + j])
    }

    /// Resultant force on body k: sum over the first index, sum_i F[i][k].
    /// Summing the other axis would give the forces k exerts on everyone
    /// else, which is the same vector with the opposite sign.
    pub fn resultant(&self, k: usize) -> SimResult<NVec3> {
        self.check_index(k)?;
        Ok(self.column_sum(k))
    }

    /// Resultant force on every body, in body order
    pub fn resultants(&self) -> Vec<NVec3> {
        (0..self.n).map(|k| self.column_sum(k)).collect()
    }

    // k < n
    fn column_sum(&self, k: usize) -> NVec3 {
        (0..self.n).fold(NVec3::zeros(), |acc, i| acc + self.data[i * self.n + k])
    }
}
