// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::Event;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_events::config::Config;
use kube_events::events::{ExistingReference, NamespacedEventClient};
use kube_events::kubernetes::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace='{}', involved_object={:?}",
        config.namespace, config.involved_object
    );

    let client = create_client(&config)
        .await
        .context("Failed to create Kubernetes client")?;
    let events = NamespacedEventClient::from_client(client, config.namespace.clone());

    let found = events
        .search(&ExistingReference, &config.involved_object)
        .await
        .context("Event search failed")?;
    info!("Found {} events", found.items.len());

    println!("{:<26} {:<8} {:<24} {:<40} MESSAGE", "LAST SEEN", "TYPE", "REASON", "OBJECT");
    for event in &found.items {
        println!("{}", format_row(event));
    }

    Ok(())
}

fn format_row(event: &Event) -> String {
    let last_seen = event
        .last_timestamp
        .as_ref()
        .or(event.first_timestamp.as_ref())
        .map(|t| t.0.to_rfc3339())
        .unwrap_or_else(|| "-".to_string());
    let object = format!(
        "{}/{}",
        event.involved_object.kind.as_deref().unwrap_or_default().to_lowercase(),
        event.involved_object.name.as_deref().unwrap_or_default()
    );

    format!(
        "{:<26} {:<8} {:<24} {:<40} {}",
        last_seen,
        event.type_.as_deref().unwrap_or("-"),
        event.reason.as_deref().unwrap_or("-"),
        object,
        event.message.as_deref().unwrap_or_default()
    )
}
