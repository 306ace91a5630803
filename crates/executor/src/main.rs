pub mod config;
pub mod csv_source;
pub mod error;
pub mod runner;
pub mod simulator;
pub mod types;
pub mod writer;

use std::env;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use csv_source::CsvSource;
use error::Error;
use mcb_core::{BasisOptions, CancelToken, HortonSolver, MultiGraph};
use runner::BasisRunner;
use simulator::SimulatorSource;
use types::{DataSource, GraphSource};
use writer::BasisWriter;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    let source = parse_args();

    if let Err(e) = run(source).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Parse command-line arguments to determine data source
fn parse_args() -> DataSource {
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "sim".to_string());

    match (source.as_str(), args.get(2)) {
        ("sim", _) => DataSource::Sim,
        ("csv", Some(path)) => DataSource::Csv(path.clone()),
        _ => {
            eprintln!(
                "Usage: {} <SIM|CSV> [path_to_csv]\n  - SIM: compute the basis of a simulated multigraph\n  - CSV: read the edge list (from,to[,weight]) from a CSV file",
                args.first().map(String::as_str).unwrap_or("mcb")
            );
            std::process::exit(1);
        }
    }
}

async fn run(source: DataSource) -> Result<(), Error> {
    let config = config::load_config()?;
    let graph = load_graph(&source, &config).await?;

    let cancel = CancelToken::new();
    let solver = HortonSolver::new(BasisOptions {
        parallel_threshold: config.solver.parallel_threshold,
        cancel: cancel.clone(),
    });

    let cycles = BasisRunner::new(solver, cancel, config.solver.timeout_ms)
        .run(graph)
        .await?;

    let total_weight: f64 = cycles.iter().map(|c| c.weight).sum();
    info!(
        cycles = cycles.len(),
        total_weight, "Minimum cycle basis computed"
    );

    BasisWriter::new(config.output.path.clone()).write(&cycles)?;
    Ok(())
}

async fn load_graph(source: &DataSource, config: &config::Config) -> Result<MultiGraph<f64>, Error> {
    match source {
        DataSource::Sim => {
            info!("Loading simulated graph...");
            SimulatorSource::new(config.simulator.clone())
                .load_graph()
                .await
        }
        DataSource::Csv(path) => {
            info!("Loading graph from {}...", path);
            CsvSource::new(path.clone()).load_graph().await
        }
    }
}
