#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde_json::Value;
#[cfg(feature = "lambda")]
use trajectory_predictor::adapters::lambda::{handle_raw_event, FunctionUrlResponse};
#[cfg(feature = "lambda")]
use trajectory_predictor::utils::logger;

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Value>) -> Result<FunctionUrlResponse, Error> {
    let request_id = event.context.request_id.clone();
    let response = handle_raw_event(event.payload).await;

    tracing::info!(
        request_id = %request_id,
        status = response.status_code,
        "Trajectory request handled"
    );
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
