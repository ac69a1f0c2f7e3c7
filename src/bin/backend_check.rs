use garden_tasks::config::GardenConfig;
use garden_tasks::core::connectivity::{CallOutcome, ConnectivityStatus};
use garden_tasks::sync::TaskStore;
use garden_tasks::sync::http::HttpTaskStore;

/// One-shot probe of the configured backend: lists tasks and reports what the
/// task page would show as its connectivity status.
#[tokio::main]
async fn main() {
    let config = GardenConfig::load();
    let api_url = std::env::args().nth(1).unwrap_or(config.api_url);

    println!("=== Backend check ===\n");
    println!("Config: {}", GardenConfig::path().display());
    println!("Backend: {}", api_url);

    let store = match HttpTaskStore::new(&api_url) {
        Ok(s) => s,
        Err(e) => {
            println!("  Client error: {}", e);
            std::process::exit(2);
        }
    };

    let result = store.list().await;
    let status = ConnectivityStatus::default().after(CallOutcome::of(&result));
    println!("Status: {} ({})", status.label(), status.probe_text());

    match result {
        Ok(tasks) => {
            println!("  Remote: {} tasks", tasks.len());
            for task in &tasks {
                println!("    #{} {}", task.id, task.task);
            }
            println!("\n=== Done ===");
        }
        Err(e) => {
            println!("  Error listing tasks: {}", e);
            std::process::exit(1);
        }
    }
}
