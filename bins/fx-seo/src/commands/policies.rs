//! `fx-seo policies` - inspect published legal policies

use anyhow::Context;
use flowxtra_api_client::BackendClient;
use flowxtra_core::locale;
use owo_colors::OwoColorize;

pub async fn run(raw_locale: &str) -> anyhow::Result<()> {
    let l = locale::require_supported(raw_locale)?;

    let client = BackendClient::new().context("failed to build backend client")?;
    let response = client.policies().public(l).await.context("policy fetch failed")?;

    if response.data.is_empty() {
        println!("No public policies published for '{l}'");
        return Ok(());
    }

    println!("{}", format!("Public policies ({l})").bold());
    for policy in &response.data {
        println!(
            "  {:<10} v{:<6} {}  {}",
            policy.policy_type.cyan(),
            policy.version,
            policy.title,
            policy
                .effective_at
                .as_deref()
                .map(|d| format!("effective {d}"))
                .unwrap_or_default()
                .dimmed()
        );
    }

    Ok(())
}
