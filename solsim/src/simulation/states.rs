//! Core state types for the simulation.
//!
//! - `Body`   one celestial object: constants, current state, two-slot history
//! - `System` the fixed set of bodies plus batched position/velocity access
//!
//! Velocities are written once at construction. The integrator only ever
//! advances positions, so `velocity()` keeps returning the epoch sample for
//! the whole run.

use std::collections::HashSet;

use nalgebra::{Vector3, Vector6};

use crate::error::{SimError, SimResult};
use crate::simulation::forces::{ForceMatrix, PairForce};

pub type NVec3 = Vector3<f64>;
pub type NVec6 = Vector6<f64>; // position + velocity snapshot

/// Number of integration history slots per body
pub const HISTORY_SLOTS: usize = 2;

/// One of the two history slots. The integrator picks it from the step parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySlot {
    Even,
    Odd,
}

impl HistorySlot {
    pub const ALL: [HistorySlot; HISTORY_SLOTS] = [HistorySlot::Even, HistorySlot::Odd];

    /// Slot written by step `k`
    pub fn from_step(k: usize) -> Self {
        if k % 2 == 0 {
            HistorySlot::Even
        } else {
            HistorySlot::Odd
        }
    }

    pub fn other(self) -> Self {
        match self {
            HistorySlot::Even => HistorySlot::Odd,
            HistorySlot::Odd => HistorySlot::Even,
        }
    }

    fn index(self) -> usize {
        match self {
            HistorySlot::Even => 0,
            HistorySlot::Odd => 1,
        }
    }
}

fn check_finite(v: &NVec3, location: impl FnOnce() -> String) -> SimResult<()> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(SimError::NonFiniteValue { location: location() })
    }
}

/// Join a position and a velocity into one 6-component snapshot
pub fn snapshot(x: &NVec3, v: &NVec3) -> NVec6 {
    NVec6::new(x.x, x.y, x.z, v.x, v.y, v.z)
}

/// Position part of a snapshot
pub fn snapshot_position(s: &NVec6) -> NVec3 {
    NVec3::new(s[0], s[1], s[2])
}

/// Velocity part of a snapshot
pub fn snapshot_velocity(s: &NVec6) -> NVec3 {
    NVec3::new(s[3], s[4], s[5])
}

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    mass: f64,   // kg
    gm: f64,     // m^3/s^2, carried for consumers only
    radius: f64, // m
    x: NVec3,    // position (m)
    v: NVec3,    // velocity (m/s)
    epoch: NVec6, // state at construction
    history: [NVec6; HISTORY_SLOTS],
}

impl Body {
    /// Build a body from its epoch state `[x, y, z, vx, vy, vz]`.
    /// Rejects non-positive mass here so the force loop never has to.
    pub fn new(name: impl Into<String>, state: NVec6, mass: f64, gm: f64, radius: f64) -> SimResult<Self> {
        let name = name.into();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass { name, mass });
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SimError::InvalidRadius { name, radius });
        }

        let x = snapshot_position(&state);
        let v = snapshot_velocity(&state);
        check_finite(&x, || format!("initial position of '{name}'"))?;
        check_finite(&v, || format!("initial velocity of '{name}'"))?;

        Ok(Body {
            name,
            mass,
            gm,
            radius,
            x,
            v,
            epoch: state,
            history: [NVec6::zeros(); HISTORY_SLOTS],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn gm(&self) -> f64 {
        self.gm
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> NVec3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    /// `[x, y, z, vx, vy, vz]` the body was built with
    pub fn epoch(&self) -> NVec6 {
        self.epoch
    }

    /// Current position minus the epoch position
    pub fn displacement(&self) -> NVec3 {
        self.x - snapshot_position(&self.epoch)
    }

    pub fn set_position(&mut self, x: NVec3) -> SimResult<()> {
        check_finite(&x, || format!("position of '{}'", self.name))?;
        self.x = x;
        Ok(())
    }

    pub fn set_velocity(&mut self, v: NVec3) -> SimResult<()> {
        check_finite(&v, || format!("velocity of '{}'", self.name))?;
        self.v = v;
        Ok(())
    }

    /// a = F / m
    pub fn acceleration(&self, force: NVec3) -> NVec3 {
        force / self.mass
    }

    /// Overwrite one history slot
    pub fn record_history(&mut self, slot: HistorySlot, state: NVec6) {
        self.history[slot.index()] = state;
    }

    pub fn read_history(&self, slot: HistorySlot) -> NVec6 {
        self.history[slot.index()]
    }

    /// 0.5 * m * |v|^2, diagnostics only
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.v.norm_squared()
    }
}

/// Fixed collection of bodies. The body count never changes after construction.
#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>,
}

impl System {
    /// Build a system from parallel tables indexed like `names`
    pub fn new(names: &[String], states: &[NVec6], masses: &[f64], gms: &[f64], radii: &[f64]) -> SimResult<Self> {
        let n = names.len();
        check_len("initial states", n, states.len())?;
        check_len("masses", n, masses.len())?;
        check_len("gravitational parameters", n, gms.len())?;
        check_len("radii", n, radii.len())?;

        let bodies = (0..n)
            .map(|i| Body::new(names[i].clone(), states[i], masses[i], gms[i], radii[i]))
            .collect::<SimResult<Vec<_>>>()?;

        Self::from_bodies(bodies)
    }

    pub fn from_bodies(bodies: Vec<Body>) -> SimResult<Self> {
        let mut seen = HashSet::new();
        for b in &bodies {
            if !seen.insert(b.name()) {
                return Err(SimError::DuplicateBody(b.name().to_string()));
            }
        }
        Ok(System { bodies })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> SimResult<&Body> {
        self.bodies.get(index).ok_or(SimError::BodyIndexOutOfRange {
            index,
            len: self.bodies.len(),
        })
    }

    pub fn names(&self) -> Vec<String> {
        self.bodies.iter().map(|b| b.name().to_string()).collect()
    }

    /// n x 3 positions
    pub fn positions(&self) -> Vec<NVec3> {
        self.bodies.iter().map(Body::position).collect()
    }

    /// n x 3 velocities
    pub fn velocities(&self) -> Vec<NVec3> {
        self.bodies.iter().map(Body::velocity).collect()
    }

    pub fn set_positions(&mut self, xs: &[NVec3]) -> SimResult<()> {
        check_len("positions", self.bodies.len(), xs.len())?;
        for (b, x) in self.bodies.iter_mut().zip(xs) {
            b.set_position(*x)?;
        }
        Ok(())
    }

    pub fn set_velocities(&mut self, vs: &[NVec3]) -> SimResult<()> {
        check_len("velocities", self.bodies.len(), vs.len())?;
        for (b, v) in self.bodies.iter_mut().zip(vs) {
            b.set_velocity(*v)?;
        }
        Ok(())
    }

    /// Full n x n force field for the current positions
    pub fn force_matrix(&self, law: &dyn PairForce) -> ForceMatrix {
        ForceMatrix::compute(&self.bodies, law)
    }

    /// Resultant acceleration of every body, a_k = (sum_i F[i][k]) / m_k
    pub fn accelerations(&self, law: &dyn PairForce) -> Vec<NVec3> {
        let forces = self.force_matrix(law);
        self.bodies
            .iter()
            .zip(forces.resultants())
            .map(|(b, f)| b.acceleration(f))
            .collect()
    }

    /// Seed the even slot of every body with `positions` and the current
    /// velocity. This velocity sample is the one every later snapshot carries.
    pub fn start_history(&mut self, positions: &[NVec3]) -> SimResult<()> {
        check_len("positions", self.bodies.len(), positions.len())?;
        for (b, x) in self.bodies.iter_mut().zip(positions) {
            let v = b.velocity();
            b.record_history(HistorySlot::Even, snapshot(x, &v));
        }
        Ok(())
    }

    /// Store `positions` into history `slot` of every body. The velocity half
    /// is copied from the sample taken by `start_history`.
    pub fn record_history(&mut self, slot: HistorySlot, positions: &[NVec3]) -> SimResult<()> {
        check_len("positions", self.bodies.len(), positions.len())?;
        for (b, x) in self.bodies.iter_mut().zip(positions) {
            let v = snapshot_velocity(&b.read_history(HistorySlot::Even));
            b.record_history(slot, snapshot(x, &v));
        }
        Ok(())
    }

    /// n x 6 snapshots stored in history `slot`
    pub fn history(&self, slot: HistorySlot) -> Vec<NVec6> {
        self.bodies.iter().map(|b| b.read_history(slot)).collect()
    }

    /// Position part of history `slot` for every body
    pub fn history_positions(&self, slot: HistorySlot) -> Vec<NVec3> {
        self.bodies
            .iter()
            .map(|b| snapshot_position(&b.read_history(slot)))
            .collect()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Mass-weighted mean position. Zero for an empty system.
    pub fn center_of_mass(&self) -> NVec3 {
        let total: f64 = self.bodies.iter().map(Body::mass).sum();
        if total == 0.0 {
            return NVec3::zeros();
        }
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |acc, b| acc + b.mass() * b.position())
            / total
    }
}

fn check_len(table: &'static str, expected: usize, found: usize) -> SimResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(SimError::DimensionMismatch { table, expected, found })
    }
}
