// Fertilizer Plan Binary Entry Point
//
// Purpose: Compute an annual plan from a JSON request and print it as JSON
// Usage: cargo run --features cli --bin fertilizer_plan -- config/plan_request.example.json

use anyhow::Context;
use turf_fertilizer_rust::{compute_plan, PlanRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "turf_fertilizer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Request path: first argument, then PLAN_REQUEST, else defaults
    let request_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PLAN_REQUEST").ok());

    let request = match request_path {
        Some(path) => {
            tracing::info!("Loading plan request from {}", path);
            PlanRequest::load(&path)?
        }
        None => {
            tracing::info!("No plan request given; using defaults");
            PlanRequest::default()
        }
    };

    let plan = compute_plan(&request).context("Failed to compute fertilizer plan")?;

    for np in plan.ordered() {
        tracing::info!(
            "  {:<2} {:>6.1} g/m²/yr ({})",
            np.nutrient().symbol(),
            np.annual_g_per_m2(),
            np.band.position
        );
    }

    let json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
    println!("{}", json);

    Ok(())
}
