//! Walks through the five descent variants on a noisy line `y = x + 1`.
//!
//! Run with `RUST_LOG=info cargo run -p descent-optim --example gradient_descent_tour`
//! (use `debug` to see every epoch).

use descent_core::gradient::least_squares;
use descent_core::loss_surface::LossSurface;
use descent_core::DescentError;
use descent_data::datasets::synthetic::standard_noisy_line;
use descent_optim::{run_all, seeded_rng, RunConfig};

const SEED: u64 = 42;
const POINTS: usize = 100;

fn main() -> Result<(), DescentError> {
    env_logger::init();

    let dataset = standard_noisy_line(POINTS, &mut seeded_rng(SEED))?;
    let fit = least_squares(dataset.xs(), dataset.ys())?;
    println!("Least-squares fit: {:?}", fit);

    let surface = LossSurface::with_default_resolution(dataset.xs(), dataset.ys(), (-1.0, 3.0), (-1.0, 3.0))?;
    if let Some((best, loss)) = surface.argmin() {
        println!(
            "Loss surface {}x{}: best mesh point {} (loss {:.4})",
            surface.resolution(),
            surface.resolution(),
            best,
            loss
        );
    }

    let configs = [
        RunConfig::batch(0.01, 100),
        RunConfig::stochastic(0.01, 10),
        RunConfig::mini_batch(0.01, 10, 10),
        RunConfig::momentum(0.01, 0.9, 10),
        RunConfig::rmsprop(0.001, 0.9, 10),
    ];
    let outputs = run_all(&dataset, &configs, SEED)?;

    println!("\n{:<28} {:>8} {:>24} {:>12}", "variant", "steps", "final w", "loss");
    for output in &outputs {
        println!(
            "{:<28} {:>8} {:>24} {:>12.4}",
            output.label,
            output.trajectory.steps().len(),
            output.final_params.to_string(),
            output.final_loss
        );
    }

    // Epoch-level trajectories are what a contour plot would overlay on `surface`.
    for output in &outputs {
        let losses = output.trajectory.epoch_losses(&dataset)?;
        let first = losses.first().copied().unwrap_or(f64::NAN);
        let last = losses.last().copied().unwrap_or(f64::NAN);
        println!("{:<28} epoch loss {:.4} -> {:.4}", output.label, first, last);
    }
    Ok(())
}
