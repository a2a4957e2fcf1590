//! Simulates one page session against a running service: local name
//! generation with relayed logging, then a fetch from the API route.
//!
//! Start the server first, then run this with `cargo run --example ui_session`.

use namegen::logging::{context, Logger};
use namegen::{NameGenerator, RemoteLogger};
use serde_json::json;
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = Url::parse("http://localhost:3000/")?;
    let logger = RemoteLogger::new(&base)?;
    let generator = NameGenerator::default();

    // 1. Initial page load: generate locally and report it
    let name = generator.generate()?;
    println!("Initial name: {name}");
    logger.info(
        "Name generated",
        context(json!({
            "source": "ui",
            "event": "initial_load",
            "name": name,
        })),
    );

    // 2. Generate button click: fresh local name
    let name = generator.generate()?;
    println!("Regenerated:  {name}");
    logger.info(
        "Name generated",
        context(json!({
            "source": "ui",
            "event": "button_click",
            "name": name,
        })),
    );

    // 3. Fetch one from the API route as well
    println!("Requesting name from the API...");
    match reqwest::get(base.join("/api/name")?).await {
        Ok(res) => {
            let body: serde_json::Value = res.json().await?;
            println!("API name:     {}", body["name"]);
        }
        Err(e) => {
            logger.error(
                "Failed to fetch name",
                Some(&e),
                context(json!({ "source": "ui" })),
            );
            eprintln!("Error fetching name: {e}");
        }
    }

    // Let the background log deliveries finish before exiting.
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;
    Ok(())
}
