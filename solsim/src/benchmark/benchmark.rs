use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec6, System};

/// Helper to build a manual System of size `n`
fn make_system(n: usize) -> SimResult<System> {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let state = NVec6::new(
                (i_f * 0.37).sin() * 5.0e9,
                (i_f * 0.13).cos() * 5.0e9,
                (i_f * 0.07).sin() * 5.0e9,
                0.0,
                0.0,
                0.0,
            );
            Body::new(format!("body-{i}"), state, 1.0e24, 0.0, 0.0)
        })
        .collect::<SimResult<Vec<_>>>()?;

    System::from_bodies(bodies)
}

pub fn bench_force_matrix() -> SimResult<()> {
    // Different system sizes to test
    let ns = [10, 50, 100, 200, 400, 800];
    let gravity = NewtonianGravity::default();

    for n in ns {
        let sys = make_system(n)?;

        // Warm up
        let _ = sys.accelerations(&gravity);

        let t0 = Instant::now();
        let acc = sys.accelerations(&gravity);
        let elapsed = t0.elapsed().as_secs_f64();

        println!("N = {:5}, force field = {:8.6} s ({} accelerations)", n, elapsed, acc.len());
    }
    Ok(())
}

/// Time whole runs for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_run() -> SimResult<()> {
    let steps = 100;
    let gravity = NewtonianGravity::default();
    let params = Parameters::new(3600.0, steps);

    println!("N,run_ms,step_ms");

    for n in (10..=200).step_by(10) {
        let mut sys = make_system(n)?;

        let t0 = Instant::now();
        integrator::run(&mut sys, &gravity, &params)?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6}", n, ms, ms / steps as f64);
    }
    Ok(())
}
