//! `fx-seo health` - backend reachability check

use anyhow::Context;
use flowxtra_api_client::BackendClient;
use owo_colors::OwoColorize;

pub async fn run(detailed: bool) -> anyhow::Result<()> {
    let client = BackendClient::new().context("failed to build backend client")?;

    println!("Backend: {}", client.backend_url().bold());

    let status = client.health().probe().await.context("backend unreachable")?;

    let badge = if status.is_healthy {
        format!("{}", "healthy".green().bold())
    } else {
        format!("{}", "unhealthy".red().bold())
    };
    println!(
        "Status:  {} (HTTP {}, {} ms)",
        badge,
        status.status_code,
        status.response_time.as_millis()
    );

    if detailed {
        let payload = client.health().check().await.context("health payload fetch failed")?;
        println!("Payload: {}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
