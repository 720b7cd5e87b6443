use clap::Parser;
use serde::Serialize;
use trajectory_predictor::core::ProjectileState;
use trajectory_predictor::domain::ports::parse_trajectory_request;
use trajectory_predictor::utils::logger;
use trajectory_predictor::{ErrorResult, TrajectoryPredictor, TrajectoryRequest};

#[derive(Parser)]
#[command(name = "predict")]
#[command(about = "Predict a projectile's position after 25 steps without starting a server")]
struct Args {
    /// Initial horizontal position (default 50)
    #[arg(long, allow_hyphen_values = true)]
    x: Option<f64>,

    /// Initial vertical position (default 0)
    #[arg(long, allow_hyphen_values = true)]
    y: Option<f64>,

    /// Horizontal velocity (default 0)
    #[arg(long, allow_hyphen_values = true)]
    vx: Option<f64>,

    /// Vertical velocity (default 0)
    #[arg(long, allow_hyphen_values = true)]
    vy: Option<f64>,

    /// Gravity added to vy each step (default 0.15)
    #[arg(long, allow_hyphen_values = true)]
    gravity: Option<f64>,

    /// Raw JSON request body, same format the HTTP endpoint accepts
    #[arg(long, conflicts_with_all = ["x", "y", "vx", "vy", "gravity"])]
    json: Option<String>,

    /// Print every intermediate state instead of the final prediction
    #[arg(long)]
    trace: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct TraceStep {
    step: usize,
    #[serde(flatten)]
    state: ProjectileState,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let request = match &args.json {
        Some(body) => parse_trajectory_request(body.as_bytes()),
        None => Ok(TrajectoryRequest {
            x: args.x,
            y: args.y,
            vx: args.vx,
            vy: args.vy,
            gravity: args.gravity,
        }),
    };

    let request = match request {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("❌ Invalid request: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            let error = ErrorResult {
                error: e.to_string(),
            };
            println!("{}", serde_json::to_string(&error)?);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved request: {:?}", request);

    let predictor = TrajectoryPredictor::new();
    if args.trace {
        for (index, state) in predictor.trace(&request).enumerate() {
            let line = TraceStep {
                step: index + 1,
                state,
            };
            println!("{}", serde_json::to_string(&line)?);
        }
    } else {
        println!("{}", serde_json::to_string(&predictor.predict(&request))?);
    }

    Ok(())
}
