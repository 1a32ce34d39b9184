#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
use bush_loadplan::assist::{AssistClient, ExternalOptimizer, LoadPlanner};
use bush_loadplan::config::PlannerConfig;
use bush_loadplan::optimizer::OptimizationRequest;
use bush_loadplan::{fatal, info, warn};
use std::env;

const USAGE: &str = "usage: bush-loadplan <request.json> [config.json]";

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let mut args = env::args().skip(1);
    let Some(request_path) = args.next() else {
        fatal!("{USAGE}");
    };
    let mut config = match args.next() {
        Some(path) => PlannerConfig::from_json_file(&path).unwrap_or_else(|e| fatal!("Config {path} unusable: {e}")),
        None => PlannerConfig::default(),
    };
    if let Ok(url) = env::var("LOADPLAN_ASSIST_URL") {
        config.assist.base_url = Some(url);
    }
    if let Err(e) = config.validate() {
        fatal!("Config rejected: {e}");
    }
    let request = OptimizationRequest::from_json_file(&request_path)
        .unwrap_or_else(|e| fatal!("Request {request_path} unusable: {e}"));
    info!("Planning {} flights from {request_path}", request.flights.len());

    let assist = match AssistClient::from_config(&config.assist) {
        Ok(client) => client,
        Err(e) => {
            warn!("Optimization service disabled: {e}");
            None
        }
    };
    if let Some(client) = &assist {
        info!("Optimization service at {}", client.base_url());
    }
    let result = LoadPlanner::new(&config)
        .run(&request, assist.as_ref().map(|c| c as &dyn ExternalOptimizer))
        .await;

    info!("Finished with status {}: {}", result.status, result.explanation);
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => fatal!("Result could not be serialized: {e}"),
    }
}
